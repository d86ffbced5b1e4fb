//! Shared fixtures: JSON payloads and schema TOML snippets used across
//! harnesses.

use serde_json::{Map, Value};

/// A well-formed fetched payload, as it would arrive off the wire.
pub const WELL_FORMED_JSON: &str = r#"{
    "title": "Hellboy: Seed of Destruction #1",
    "coverURL": "https://covers.example/hellboy-sod-1.jpg",
    "publisher": "Dark Horse Comics",
    "isbn": "978-1-59307-094-6",
    "pageCount": 32,
    "description": "<p>Paranormal investigator <b>Hellboy</b> takes his first case.</p>",
    "snippet": "Paranormal investigator takes his first case.",
    "publishedDate": "1994-03-01",
    "rating": 4
}"#;

/// A schema file that replaces the built-in field list with two fields.
pub const TWO_FIELD_SCHEMA_TOML: &str = r#"
[[field]]
name     = "title"
kind     = "text"
required = true

[[field]]
name = "issueNumber"
kind = "number"
"#;

/// A schema file with a kind this crate does not know.
pub const BAD_KIND_SCHEMA_TOML: &str = r#"
[[field]]
name = "inStock"
kind = "boolean"
"#;

/// A schema file naming a transform this crate does not provide.
pub const BAD_TRANSFORM_SCHEMA_TOML: &str = r#"
[[field]]
name      = "title"
kind      = "text"
transform = "shout"
"#;

/// Parse a JSON object literal into a raw input map. Panics on anything that
/// is not an object.
pub fn parse_obj(json: &str) -> Map<String, Value> {
    serde_json::from_str::<Value>(json)
        .expect("fixture must be valid JSON")
        .as_object()
        .expect("fixture must be a JSON object")
        .clone()
}

/// Every field name in the built-in comic-issue schema, in order.
pub const SCHEMA_FIELD_NAMES: [&str; 9] = [
    "title",
    "coverURL",
    "publisher",
    "isbn",
    "pageCount",
    "description",
    "snippet",
    "publishedDate",
    "rating",
];
