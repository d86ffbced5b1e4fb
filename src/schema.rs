//! Field schemas — the ordered, immutable configuration driving normalization.
//!
//! A [`Schema`] is a sequence of [`FieldDescriptor`]s, built once at startup
//! (either in code or from a TOML file via [`Schema::load`](crate::config))
//! and never mutated afterwards. Declaration order matters: the normalizer
//! walks descriptors in order and reports the first violation it finds.

use crate::error::SchemaError;
use crate::transform::Transform;

/// The kind of value a field holds.
///
/// Value-kind checks are written against this enum rather than any runtime
/// reflection: each kind knows which JSON shape it accepts and what its
/// zero-value is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Text,
    Number,
}

impl FieldKind {
    /// Whether a non-null JSON value has this kind.
    pub fn matches(self, value: &serde_json::Value) -> bool {
        match self {
            FieldKind::Text => value.is_string(),
            FieldKind::Number => value.is_number(),
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldKind::Text => write!(f, "text"),
            FieldKind::Number => write!(f, "number"),
        }
    }
}

/// Configuration for one record field: its name, kind, requiredness, and
/// optional stored-value transform.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    name: String,
    kind: FieldKind,
    required: bool,
    transform: Option<Transform>,
}

impl FieldDescriptor {
    /// An optional field with no transform.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: false,
            transform: None,
        }
    }

    /// Mark the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Attach a stored-value transform.
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn transform(&self) -> Option<Transform> {
        self.transform
    }
}

/// An ordered, immutable sequence of field descriptors.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    fields: Vec<FieldDescriptor>,
}

impl Schema {
    /// Build a schema from descriptors, rejecting duplicate names and empty
    /// field lists.
    pub fn new(fields: Vec<FieldDescriptor>) -> Result<Self, SchemaError> {
        if fields.is_empty() {
            return Err(SchemaError::Empty);
        }
        for (i, field) in fields.iter().enumerate() {
            if fields[..i].iter().any(|f| f.name == field.name) {
                return Err(SchemaError::DuplicateField {
                    name: field.name.clone(),
                });
            }
        }
        Ok(Self { fields })
    }

    /// Descriptors in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter()
    }

    /// Look up a descriptor by field name.
    pub fn get(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
