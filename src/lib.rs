//! longbox — schema-driven validation and normalization for comic-issue
//! records.
//!
//! A raw, untyped JSON object (e.g. a fetched payload describing a comic
//! issue) is checked against an ordered field schema and turned into an
//! immutable, well-typed [`Record`], or rejected with the first violation
//! found. Rendering records into displayable fragments is out of scope and
//! reached through the [`RenderSurface`] seam.
//!
//! # Architecture
//!
//! ```text
//! Raw JSON ──► Normalizer ──► Record ──► RenderSurface (external)
//!                  ▲
//!               Schema
//! ```
//!
//! Everything is synchronous and single-pass; the only side effects are the
//! warnings transforms log when a date or markup string fails to parse.
//!
//! # Example
//!
//! ```rust
//! use longbox::{normalize, FieldValue, Schema};
//!
//! let raw = serde_json::json!({
//!     "title": "Saga #1",
//!     "coverURL": "https://covers.example/saga-1.jpg",
//!     "description": "<b>A</b> space opera",
//! });
//! let record = normalize(&Schema::defaults(), raw.as_object().unwrap()).unwrap();
//! assert_eq!(record.get("description"), Some(&FieldValue::from("A space opera")));
//! ```

pub mod config;
pub mod error;
pub mod normalizer;
pub mod record;
pub mod schema;
pub mod surface;
pub mod transform;

pub use error::{SchemaError, ValidationError};
pub use normalizer::{normalize, normalize_value};
pub use record::{FieldValue, Record};
pub use schema::{FieldDescriptor, FieldKind, Schema};
pub use surface::RenderSurface;
pub use transform::Transform;
