//! Schema configuration.
//!
//! [`Schema::load`] reads a TOML file of `[[field]]` tables layered over the
//! built-in comic-issue schema. [`Schema::defaults`] returns the built-in
//! schema without touching the filesystem (useful in tests and the common
//! case where callers just want the shipped field set).

use crate::error::SchemaError;
use crate::schema::{FieldDescriptor, FieldKind, Schema};
use crate::transform::Transform;
use serde::Deserialize;
use std::path::Path;

// ---------------------------------------------------------------------------
// Embedded default schema
// ---------------------------------------------------------------------------

/// The comic-issue field set, consolidated from the upstream component
/// variants. Field names match the raw JSON payload keys.
const DEFAULT_SCHEMA: &str = r#"
[[field]]
name     = "title"
kind     = "text"
required = true

[[field]]
name     = "coverURL"
kind     = "text"
required = true

[[field]]
name = "publisher"
kind = "text"

[[field]]
name = "isbn"
kind = "text"

[[field]]
name = "pageCount"
kind = "number"

[[field]]
name      = "description"
kind      = "text"
transform = "strip_markup"

[[field]]
name      = "snippet"
kind      = "text"
transform = "strip_markup"

[[field]]
name      = "publishedDate"
kind      = "text"
transform = "canonical_date"

[[field]]
name = "rating"
kind = "number"
"#;

// ---------------------------------------------------------------------------
// Schema file shape
// ---------------------------------------------------------------------------

/// Top-level shape of a schema TOML file.
#[derive(Debug, Deserialize)]
struct SchemaFile {
    #[serde(default)]
    field: Vec<FieldEntry>,
}

/// One `[[field]]` table.
#[derive(Debug, Deserialize)]
struct FieldEntry {
    name: String,
    kind: String,
    #[serde(default)]
    required: bool,
    transform: Option<String>,
}

impl FieldEntry {
    fn into_descriptor(self) -> Result<FieldDescriptor, SchemaError> {
        let kind = match self.kind.as_str() {
            "text" => FieldKind::Text,
            "number" => FieldKind::Number,
            other => {
                return Err(SchemaError::UnknownKind {
                    field: self.name,
                    kind: other.to_string(),
                })
            }
        };
        let mut desc = FieldDescriptor::new(self.name.clone(), kind);
        if self.required {
            desc = desc.required();
        }
        if let Some(name) = self.transform {
            let transform = Transform::from_name(&name).ok_or(SchemaError::UnknownTransform {
                field: self.name,
                transform: name,
            })?;
            desc = desc.with_transform(transform);
        }
        Ok(desc)
    }
}

fn build(file: SchemaFile) -> Result<Schema, SchemaError> {
    let fields = file
        .field
        .into_iter()
        .map(FieldEntry::into_descriptor)
        .collect::<Result<Vec<_>, _>>()?;
    Schema::new(fields)
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

impl Schema {
    /// Load a schema from a TOML file, layered on top of the built-in
    /// comic-issue schema. A `[[field]]` list in the file replaces the
    /// built-in field list wholesale.
    pub fn load(path: &Path) -> Result<Self, SchemaError> {
        let file: SchemaFile = config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_SCHEMA,
                config::FileFormat::Toml,
            ))
            .add_source(config::File::from(path).required(true))
            .build()?
            .try_deserialize()?;
        build(file)
    }

    /// The built-in comic-issue schema, without touching the filesystem.
    pub fn defaults() -> Self {
        let file: SchemaFile = config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_SCHEMA,
                config::FileFormat::Toml,
            ))
            .build()
            .expect("built-in schema must be valid TOML")
            .try_deserialize()
            .expect("built-in schema must deserialize correctly");
        build(file).expect("built-in schema must be well-formed")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
