//! Test builders — ergonomic constructors for raw issue inputs.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning
//! `Result`.

use serde_json::{Map, Value};

/// Fluent builder for raw comic-issue input maps.
///
/// Starts from a minimal valid issue (both required fields present) so tests
/// only spell out what they care about.
///
/// # Example
///
/// ```rust
/// let raw = RawIssueBuilder::new()
///     .field("pageCount", 32)
///     .without("coverURL")
///     .build();
/// ```
pub struct RawIssueBuilder {
    map: Map<String, Value>,
}

impl RawIssueBuilder {
    pub fn new() -> Self {
        let mut map = Map::new();
        map.insert("title".to_string(), Value::from("Test Issue #1"));
        map.insert(
            "coverURL".to_string(),
            Value::from("https://covers.example/test-1.jpg"),
        );
        Self { map }
    }

    /// Start from a completely empty input.
    pub fn empty() -> Self {
        Self { map: Map::new() }
    }

    pub fn field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.map.insert(key.to_string(), value.into());
        self
    }

    pub fn without(mut self, key: &str) -> Self {
        self.map.remove(key);
        self
    }

    pub fn build(self) -> Map<String, Value> {
        self.map
    }
}

impl Default for RawIssueBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A minimal valid issue: required fields only.
pub fn minimal_issue() -> Map<String, Value> {
    RawIssueBuilder::new().build()
}

/// A fully populated, well-formed issue covering every schema field.
pub fn full_issue() -> Map<String, Value> {
    RawIssueBuilder::new()
        .field("title", "Saga #1")
        .field("coverURL", "https://covers.example/saga-1.jpg")
        .field("publisher", "Image Comics")
        .field("isbn", "978-1-60706-601-9")
        .field("pageCount", 44)
        .field("description", "<p>Two soldiers from <b>opposite sides</b> of a war.</p>")
        .field("snippet", "Soldiers &amp; lovers")
        .field("publishedDate", "2012-03-14")
        .field("rating", 4.5)
        .build()
}
