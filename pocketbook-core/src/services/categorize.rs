//! Categorization engine - pattern rules applied to descriptions

use std::sync::Arc;

use crate::domain::Transaction;
use crate::stores::{CategoryStore, MappingStore};

/// Fallback category name when no rule applies
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Maps a transaction description to a category name using the stored
/// pattern rules.
///
/// Pure function of (description, mapping set, category set): no hidden
/// state, no randomness. The first pattern in insertion order whose
/// lower-cased form is a substring of the lower-cased description wins;
/// pattern specificity is not considered.
#[derive(Clone)]
pub struct Categorizer {
    categories: Arc<CategoryStore>,
    mappings: Arc<MappingStore>,
}

impl Categorizer {
    pub fn new(categories: Arc<CategoryStore>, mappings: Arc<MappingStore>) -> Self {
        Self {
            categories,
            mappings,
        }
    }

    /// Resolve a description to a category name, or "Uncategorized" when
    /// no pattern matches or the winning pattern's category is gone.
    pub fn categorize(&self, description: &str) -> String {
        let description = description.to_lowercase();

        for mapping in self.mappings.list() {
            if description.contains(&mapping.pattern.to_lowercase()) {
                // A dangling category id still consumes the match
                return self
                    .categories
                    .name_of(&mapping.category_id)
                    .unwrap_or_else(|| UNCATEGORIZED.to_string());
            }
        }

        UNCATEGORIZED.to_string()
    }

    /// Fill in the category of a transaction that lacks one
    pub fn fill(&self, tx: &mut Transaction) {
        if tx.category.is_none() {
            tx.category = Some(self.categorize(&tx.description));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewCategory;
    use rust_decimal::Decimal;
    use tempfile::TempDir;

    fn fixture(dir: &TempDir) -> (Arc<CategoryStore>, Arc<MappingStore>, Categorizer) {
        let categories =
            Arc::new(CategoryStore::open(dir.path().join("categories.json")).unwrap());
        let mappings = Arc::new(MappingStore::open(dir.path().join("mappings.json")).unwrap());
        let categorizer = Categorizer::new(Arc::clone(&categories), Arc::clone(&mappings));
        (categories, mappings, categorizer)
    }

    fn add_category(store: &CategoryStore, id: &str, name: &str) {
        store
            .add(NewCategory {
                id: Some(id.to_string()),
                name: name.to_string(),
                color: None,
            })
            .unwrap();
    }

    #[test]
    fn test_substring_match_is_case_insensitive() {
        let dir = TempDir::new().unwrap();
        let (categories, mappings, categorizer) = fixture(&dir);

        add_category(&categories, "cat1", "Coffee");
        mappings.add("starbucks", "cat1").unwrap();

        assert_eq!(categorizer.categorize("STARBUCKS #123"), "Coffee");
    }

    #[test]
    fn test_no_match_is_uncategorized() {
        let dir = TempDir::new().unwrap();
        let (categories, mappings, categorizer) = fixture(&dir);

        add_category(&categories, "cat1", "Coffee");
        mappings.add("starbucks", "cat1").unwrap();

        assert_eq!(categorizer.categorize("SHELL GAS 42"), UNCATEGORIZED);
    }

    #[test]
    fn test_dangling_category_id_is_uncategorized() {
        let dir = TempDir::new().unwrap();
        let (_categories, mappings, categorizer) = fixture(&dir);

        mappings.add("starbucks", "deleted_cat").unwrap();

        assert_eq!(categorizer.categorize("STARBUCKS #123"), UNCATEGORIZED);
    }

    #[test]
    fn test_first_pattern_in_insertion_order_wins() {
        let dir = TempDir::new().unwrap();
        let (categories, mappings, categorizer) = fixture(&dir);

        add_category(&categories, "cat1", "Shopping");
        add_category(&categories, "cat2", "Groceries");

        // A generic pattern registered first shadows the specific one
        mappings.add("amazon", "cat1").unwrap();
        mappings.add("amazon fresh", "cat2").unwrap();

        assert_eq!(categorizer.categorize("AMAZON FRESH ORDER"), "Shopping");
    }

    #[test]
    fn test_categorize_is_deterministic() {
        let dir = TempDir::new().unwrap();
        let (categories, mappings, categorizer) = fixture(&dir);

        add_category(&categories, "cat1", "Coffee");
        mappings.add("starbucks", "cat1").unwrap();

        let first = categorizer.categorize("STARBUCKS #123");
        for _ in 0..10 {
            assert_eq!(categorizer.categorize("STARBUCKS #123"), first);
        }
    }

    #[test]
    fn test_fill_leaves_existing_category_alone() {
        let dir = TempDir::new().unwrap();
        let (_categories, _mappings, categorizer) = fixture(&dir);

        let mut tx = Transaction {
            id: "t1".to_string(),
            account_id: "a1".to_string(),
            date: "2025-01-01".to_string(),
            account_name: "Checking".to_string(),
            description: "STARBUCKS".to_string(),
            amount: Decimal::new(-425, 2),
            category: Some("Manual".to_string()),
            notes: None,
        };
        categorizer.fill(&mut tx);
        assert_eq!(tx.category.as_deref(), Some("Manual"));

        tx.category = None;
        categorizer.fill(&mut tx);
        assert_eq!(tx.category.as_deref(), Some(UNCATEGORIZED));
    }
}
