//! Error types for schema construction and record normalization.

use crate::schema::FieldKind;

/// Why a raw input failed to normalize.
///
/// Normalization is fail-fast: the first violation encountered in schema
/// order aborts construction and no partial record is produced. Inputs are
/// deterministic, so retrying the same input yields the same error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A field was supplied with a non-null value of the wrong kind.
    #[error("type mismatch for field `{field}`: expected {expected}")]
    TypeMismatch { field: String, expected: FieldKind },

    /// A required field was absent, null, or falsy (empty text / zero).
    #[error("missing required field `{field}`")]
    MissingRequired { field: String },
}

/// Why a schema could not be built or loaded.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Two descriptors share the same field name.
    #[error("duplicate field `{name}` in schema")]
    DuplicateField { name: String },

    /// A schema file named a kind other than `text` or `number`.
    #[error("field `{field}` has unknown kind `{kind}`")]
    UnknownKind { field: String, kind: String },

    /// A schema file named a transform this crate does not provide.
    #[error("field `{field}` has unknown transform `{transform}`")]
    UnknownTransform { field: String, transform: String },

    /// A schema file declared no fields at all.
    #[error("schema declares no fields")]
    Empty,

    /// The schema file could not be read or parsed.
    #[error(transparent)]
    Config(#[from] config::ConfigError),
}
