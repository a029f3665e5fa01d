//! Category and pattern-mapping domain entities

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user-defined spending category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Opaque unique identifier, immutable once assigned
    pub id: String,
    /// Display name, unique across the store (case-sensitive)
    pub name: String,
    /// Optional display color (e.g. "#4caf50")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Category {
    /// Create a category with a fresh random id
    pub fn new(name: impl Into<String>, color: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            color,
        }
    }
}

/// Incoming category as callers submit it; the id is optional and is
/// generated on add when absent.
#[derive(Debug, Clone, Deserialize)]
pub struct NewCategory {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

/// Partial update for a category. Only the provided fields are merged;
/// the id is never touched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub color: Option<String>,
}

/// A user rule associating a description substring with a category.
///
/// One category per pattern; re-adding an existing pattern replaces its
/// category in place. The mapping's position in the store is its
/// categorization precedence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mapping {
    pub pattern: String,
    pub category_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category_gets_unique_id() {
        let a = Category::new("Coffee", None);
        let b = Category::new("Coffee", None);
        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_category_color_omitted_when_absent() {
        let cat = Category {
            id: "cat1".to_string(),
            name: "Coffee".to_string(),
            color: None,
        };
        let json = serde_json::to_string(&cat).unwrap();
        assert!(!json.contains("color"));
    }
}
