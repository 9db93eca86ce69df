// 🍽️ Menu Model - items and category groups
// One render pass owns its items; nothing here outlives the pass.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Category used when a row leaves the first cell empty
pub const DEFAULT_CATEGORY: &str = "Altres";

// ============================================================================
// MENU ITEM
// ============================================================================

/// MenuItem - one dish or drink as it appears in the sheet
///
/// Every field except `id` and `category` is an opaque display string.
/// Prices are free text ("3,80 € / 4,80 €") and are never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// 1-based line index in the source text (gaps where rows were skipped)
    pub id: usize,

    pub category: String,
    pub name: String,
    pub price: String,
    pub description: String,
}

impl MenuItem {
    pub fn new(
        id: usize,
        category: impl Into<String>,
        name: impl Into<String>,
        price: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        MenuItem {
            id,
            category: category.into(),
            name: name.into(),
            price: price.into(),
            description: description.into(),
        }
    }

    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }
}

// ============================================================================
// CATEGORY GROUP
// ============================================================================

/// CategoryGroup - a category label and its items, in source order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub category: String,
    pub items: Vec<MenuItem>,
}

impl CategoryGroup {
    fn new(category: String) -> Self {
        CategoryGroup {
            category,
            items: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Partition items by category.
///
/// Categories keep their first-seen order and items keep source order.
/// Keys compare with exact string equality, so "Tapes" and "tapes" are two groups.
pub fn group_by_category(items: &[MenuItem]) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for item in items {
        let slot = match index.get(item.category.as_str()) {
            Some(&slot) => slot,
            None => {
                groups.push(CategoryGroup::new(item.category.clone()));
                index.insert(item.category.as_str(), groups.len() - 1);
                groups.len() - 1
            }
        };
        groups[slot].items.push(item.clone());
    }

    groups
}

/// Category labels in group order
pub fn category_labels(groups: &[CategoryGroup]) -> Vec<&str> {
    groups.iter().map(|g| g.category.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: usize, category: &str, name: &str) -> MenuItem {
        MenuItem::new(id, category, name, "1,00 €", "")
    }

    #[test]
    fn test_first_appearance_order() {
        let items = vec![item(1, "B", "x"), item(2, "A", "y"), item(3, "B", "z")];
        let groups = group_by_category(&items);

        assert_eq!(category_labels(&groups), vec!["B", "A"]);
        assert_eq!(groups[0].len(), 2);
        assert_eq!(groups[1].len(), 1);
    }

    #[test]
    fn test_grouping_is_a_partition() {
        let items = vec![
            item(1, "Tapes", "Braves"),
            item(2, "Vins", "Gran foc"),
            item(4, "Tapes", "Calamars"),
            item(5, "Postres", "Coulant"),
            item(7, "Vins", "Marieta"),
        ];
        let groups = group_by_category(&items);

        let total: usize = groups.iter().map(CategoryGroup::len).sum();
        assert_eq!(total, items.len());

        // Every item lands in exactly one group, in source order within it
        for source in &items {
            let hits: Vec<&CategoryGroup> = groups
                .iter()
                .filter(|g| g.items.contains(source))
                .collect();
            assert_eq!(hits.len(), 1);
            assert_eq!(hits[0].category, source.category);
        }
        let tapes: Vec<usize> = groups[0].items.iter().map(|i| i.id).collect();
        assert_eq!(tapes, vec![1, 4]);
    }

    #[test]
    fn test_category_match_is_case_sensitive() {
        let items = vec![item(1, "Tapes", "a"), item(2, "tapes", "b")];
        let groups = group_by_category(&items);

        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(group_by_category(&[]).is_empty());
    }
}
