mod catalog;
mod domain;

pub use domain::{ItemCategory, ItemStatus, SnapItem};

use serde::Serialize;

/// The full item catalog in insertion order.
pub fn catalog() -> &'static [SnapItem] {
    catalog::CATALOG
}

/// Filters the catalog by case-insensitive name substring, exact status, and
/// exact category. `None` filters match everything. Catalog order is
/// preserved; there is no ranking.
pub fn filter_items(
    query: &str,
    status: Option<ItemStatus>,
    category: Option<ItemCategory>,
) -> Vec<&'static SnapItem> {
    let query = query.to_lowercase();
    catalog::CATALOG
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&query))
        .filter(|item| status.map_or(true, |wanted| item.status == wanted))
        .filter(|item| category.map_or(true, |wanted| item.category == wanted))
        .collect()
}

/// Headline counts displayed above the item list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogCounts {
    pub eligible: usize,
    pub not_eligible: usize,
    pub check_label: usize,
    pub total: usize,
}

pub fn catalog_counts() -> CatalogCounts {
    let items = catalog::CATALOG;
    CatalogCounts {
        eligible: items
            .iter()
            .filter(|item| item.status == ItemStatus::Eligible)
            .count(),
        not_eligible: items
            .iter()
            .filter(|item| item.status == ItemStatus::NotEligible)
            .count(),
        check_label: items
            .iter()
            .filter(|item| item.status == ItemStatus::CheckLabel)
            .count(),
        total: items.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_ids_are_unique() {
        let mut seen = HashSet::new();
        for item in catalog() {
            assert!(seen.insert(item.id), "duplicate catalog id {}", item.id);
        }
    }

    #[test]
    fn query_matches_are_case_insensitive_and_ordered() {
        let matches = filter_items("bar", None, None);
        assert!(!matches.is_empty());
        for item in &matches {
            assert!(item.name.to_lowercase().contains("bar"), "{}", item.name);
        }

        let positions: Vec<usize> = matches
            .iter()
            .map(|found| {
                catalog()
                    .iter()
                    .position(|item| item.id == found.id)
                    .expect("filtered item comes from the catalog")
            })
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn empty_query_returns_whole_catalog() {
        assert_eq!(filter_items("", None, None).len(), catalog().len());
    }

    #[test]
    fn all_three_predicates_are_anded() {
        let matches = filter_items(
            "bar",
            Some(ItemStatus::NotEligible),
            Some(ItemCategory::Candy),
        );
        for item in matches {
            assert!(item.name.to_lowercase().contains("bar"));
            assert_eq!(item.status, ItemStatus::NotEligible);
            assert_eq!(item.category, ItemCategory::Candy);
        }
    }

    #[test]
    fn counts_partition_the_catalog() {
        let counts = catalog_counts();
        assert_eq!(
            counts.eligible + counts.not_eligible + counts.check_label,
            counts.total
        );
        assert_eq!(counts.total, catalog().len());
    }
}
