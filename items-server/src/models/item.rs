//! Item record and name validation

use serde::Serialize;

use super::ValidationError;

/// A persisted item. `id` is assigned by the store on insert and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: i32,
    pub name: String,
}

/// Validated item name: trimmed, never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemName(String);

impl ItemName {
    /// Create a new item name, trimming surrounding whitespace.
    ///
    /// Interior whitespace is kept as-is. Duplicate names are allowed.
    ///
    /// # Example
    /// ```
    /// use items_server::models::ItemName;
    ///
    /// assert_eq!(ItemName::new("  apple ").unwrap().as_str(), "apple");
    /// assert!(ItemName::new("   ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
