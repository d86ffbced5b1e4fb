//! Normalizer — validates a raw untyped mapping against a [`Schema`] and
//! produces an immutable [`Record`].
//!
//! The pass is synchronous, deterministic, and fail-fast: descriptors are
//! walked in declaration order and the first violation aborts construction.
//! The only side effects are the fail-soft warnings logged by transforms.
//!
//! # Falsy coalescing
//!
//! A supplied value is only *used* when it is truthy (non-empty text,
//! non-zero number); falsy values select the kind's zero-value exactly as if
//! the field were absent. A caller who explicitly sends `0` for a number
//! field or `""` for a text field therefore gets the zero-value back, and a
//! falsy value never satisfies a required field. This mirrors the upstream
//! component's behavior and is pinned by tests rather than silently fixed.

use crate::error::ValidationError;
use crate::record::{FieldValue, Record};
use crate::schema::Schema;
use serde_json::{Map, Value};
use std::sync::OnceLock;

/// Validate and normalize `raw` against `schema`.
///
/// Returns a [`Record`] holding exactly the schema's fields in declaration
/// order; unrecognized keys in `raw` are dropped. Fails with
/// [`ValidationError::TypeMismatch`] when a supplied non-null value has the
/// wrong kind, or [`ValidationError::MissingRequired`] when a required field
/// is absent, null, or falsy.
pub fn normalize(schema: &Schema, raw: &Map<String, Value>) -> Result<Record, ValidationError> {
    let mut fields = Vec::with_capacity(schema.len());

    for desc in schema.fields() {
        let supplied = raw.get(desc.name()).filter(|v| !v.is_null());

        // Kind check runs before the required check, so a wrong-typed value
        // on a required field reports TypeMismatch.
        if let Some(value) = supplied {
            if !desc.kind().matches(value) {
                return Err(ValidationError::TypeMismatch {
                    field: desc.name().to_string(),
                    expected: desc.kind(),
                });
            }
        }

        let usable = supplied.and_then(|v| FieldValue::from_truthy(desc.kind(), v));
        if usable.is_none() && desc.is_required() {
            return Err(ValidationError::MissingRequired {
                field: desc.name().to_string(),
            });
        }

        // The transform applies to the zero-value branch too.
        let mut value = usable.unwrap_or_else(|| FieldValue::zero(desc.kind()));
        if let Some(transform) = desc.transform() {
            value = transform.apply(value);
        }
        fields.push((desc.name().to_string(), value));
    }

    Ok(Record::new(fields))
}

/// [`normalize`] over a JSON value, for callers holding a freshly parsed
/// payload. A non-object value is treated as an empty input: every field is
/// absent, so the first required field in schema order reports.
pub fn normalize_value(schema: &Schema, raw: &Value) -> Result<Record, ValidationError> {
    static EMPTY: OnceLock<Map<String, Value>> = OnceLock::new();
    let map = raw
        .as_object()
        .unwrap_or_else(|| EMPTY.get_or_init(Map::new));
    normalize(schema, map)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
