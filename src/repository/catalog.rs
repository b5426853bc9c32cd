//! Catalog repository: the in-memory equipment catalog and its search pipeline.
//!
//! The catalog is loaded once at startup (built-in seed or a JSON file) and
//! shared immutably behind `Arc`s; request handling is read-only.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;
use unicode_normalization::UnicodeNormalization;
use validator::Validate;

use crate::{
    config::CatalogConfig,
    error::{AppError, AppResult},
    models::{
        enums::{Availability, Category, Condition, SortKey},
        equipment::{EquipmentItem, EquipmentQuery},
        filters::FilterSelection,
    },
};

/// Built-in catalog used when no catalog file is configured
static SEED_CATALOG: Lazy<Vec<EquipmentItem>> = Lazy::new(|| {
    vec![
        EquipmentItem {
            id: "1".to_string(),
            name: "Electric Drill".to_string(),
            category: Category::PowerTools,
            sub_category: "Power Tools".to_string(),
            price_per_day: 25.0,
            availability: Availability::InStock,
            condition: Condition::New,
            image: "/images/electric-drill.jpg".to_string(),
        },
        EquipmentItem {
            id: "2".to_string(),
            name: "Chainsaw".to_string(),
            category: Category::PowerTools,
            sub_category: "Power Tools".to_string(),
            price_per_day: 40.0,
            availability: Availability::InStock,
            condition: Condition::Good,
            image: "/images/chainsaw.jpg".to_string(),
        },
        EquipmentItem {
            id: "3".to_string(),
            name: "Hammer".to_string(),
            category: Category::HandTools,
            sub_category: "Hand Tools".to_string(),
            price_per_day: 5.0,
            availability: Availability::InStock,
            condition: Condition::LikeNew,
            image: "/images/hammer.jpg".to_string(),
        },
        EquipmentItem {
            id: "4".to_string(),
            name: "Lawnmower".to_string(),
            category: Category::Gardening,
            sub_category: "Gardening".to_string(),
            price_per_day: 30.0,
            availability: Availability::OutOfStock,
            condition: Condition::Fair,
            image: "/images/lawnmower.jpg".to_string(),
        },
        EquipmentItem {
            id: "5".to_string(),
            name: "Concrete Mixer".to_string(),
            category: Category::Construction,
            sub_category: "Construction".to_string(),
            price_per_day: 75.0,
            availability: Availability::InStock,
            condition: Condition::Good,
            image: "/images/concrete-mixer.jpg".to_string(),
        },
    ]
});

/// Normalize a string for name search: NFC so composed and decomposed
/// accents compare equal, then lowercased.
fn normalize(s: &str) -> String {
    s.nfc().collect::<String>().to_lowercase()
}

/// Apply the storefront filter contract to a catalog slice.
///
/// An item is kept when its name contains `search` (case-insensitive,
/// empty matches all) and it satisfies `selection`. Catalog order is
/// preserved.
pub fn filter_items<'a>(
    items: &'a [EquipmentItem],
    search: &str,
    selection: &FilterSelection,
) -> Vec<&'a EquipmentItem> {
    let needle = normalize(search);

    items
        .iter()
        .filter(|item| needle.is_empty() || normalize(&item.name).contains(&needle))
        .filter(|item| selection.matches(item))
        .collect()
}

/// Reorder search results in place. All sorts are stable, so items that
/// compare equal keep their catalog order.
fn sort_items(items: &mut [&EquipmentItem], sort: SortKey) {
    match sort {
        // catalog order is the popularity order
        SortKey::MostPopular => {}
        SortKey::Newest => items.reverse(),
        SortKey::PriceAsc => items.sort_by(|a, b| a.price_per_day.total_cmp(&b.price_per_day)),
        SortKey::PriceDesc => items.sort_by(|a, b| b.price_per_day.total_cmp(&a.price_per_day)),
    }
}

/// Immutable catalog with an id lookup index
#[derive(Debug, Clone)]
pub struct CatalogRepository {
    items: Arc<Vec<EquipmentItem>>,
    index: Arc<HashMap<String, usize>>,
}

impl CatalogRepository {
    /// Build a catalog from a list of items, validating each entry and
    /// rejecting duplicate ids.
    pub fn new(items: Vec<EquipmentItem>) -> AppResult<Self> {
        let mut index = HashMap::with_capacity(items.len());

        for (pos, item) in items.iter().enumerate() {
            item.validate().map_err(|e| {
                AppError::Validation(format!("catalog entry {} is invalid: {}", pos, e))
            })?;
            if index.insert(item.id.clone(), pos).is_some() {
                return Err(AppError::Validation(format!(
                    "catalog contains duplicate id '{}'",
                    item.id
                )));
            }
        }

        Ok(Self {
            items: Arc::new(items),
            index: Arc::new(index),
        })
    }

    /// Load the catalog from configuration: a JSON file when a path is
    /// set, the built-in seed otherwise.
    pub fn from_config(config: &CatalogConfig) -> AppResult<Self> {
        match &config.path {
            Some(path) => {
                tracing::info!("Loading catalog from {}", path.display());
                Self::load_file(path)
            }
            None => {
                tracing::info!("No catalog file configured, using built-in seed catalog");
                Self::new(SEED_CATALOG.clone())
            }
        }
    }

    fn load_file(path: &Path) -> AppResult<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            AppError::Catalog(format!("cannot read catalog file {}: {}", path.display(), e))
        })?;
        let items: Vec<EquipmentItem> = serde_json::from_str(&raw).map_err(|e| {
            AppError::Catalog(format!("cannot parse catalog file {}: {}", path.display(), e))
        })?;
        Self::new(items)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // =========================================================================
    // SEARCH
    // =========================================================================

    /// Search the catalog with pagination.
    ///
    /// Returns the requested page and the total number of matches before
    /// paging. Unknown sort codes fall back to catalog order.
    pub fn search(&self, query: &EquipmentQuery) -> (Vec<EquipmentItem>, i64) {
        let per_page = query.page_size();
        // page_number is at least 1, so the offset stays non-negative
        let offset = (query.page_number() - 1).saturating_mul(per_page);

        let search = query.q.as_deref().unwrap_or("");
        let selection = query.selection();

        let mut matched = filter_items(&self.items, search, &selection);
        if !selection.is_empty() {
            tracing::debug!("Active filter selection: {:?}", selection);
        }
        tracing::debug!(
            "Catalog search matched {} of {} items (q: {:?})",
            matched.len(),
            self.items.len(),
            search
        );

        let sort = match query.sort.as_deref() {
            None => SortKey::default(),
            Some(code) => SortKey::from_code(code).unwrap_or_else(|| {
                tracing::debug!("Ignoring unknown sort code: {}", code);
                SortKey::default()
            }),
        };
        sort_items(&mut matched, sort);

        let total = matched.len() as i64;
        let items = matched
            .into_iter()
            .skip(offset as usize)
            .take(per_page as usize)
            .cloned()
            .collect();

        (items, total)
    }

    /// Get a single item by id
    pub fn get(&self, id: &str) -> AppResult<EquipmentItem> {
        self.index
            .get(id)
            .map(|&pos| self.items[pos].clone())
            .ok_or_else(|| AppError::NotFound(format!("Equipment with id {} not found", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> CatalogRepository {
        CatalogRepository::new(SEED_CATALOG.clone()).unwrap()
    }

    fn ids<'a>(items: &[&'a EquipmentItem]) -> Vec<&'a str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    fn page_ids(items: &[EquipmentItem]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    fn selection(pairs: &[(&str, &[&str])]) -> FilterSelection {
        let mut s = FilterSelection::new();
        for (field, values) in pairs {
            s.set(field, values.iter().map(|v| v.to_string()).collect());
        }
        s
    }

    fn query() -> EquipmentQuery {
        EquipmentQuery::default()
    }

    // --- filter pipeline ---

    #[test]
    fn no_constraints_returns_catalog_in_order() {
        let result = filter_items(&SEED_CATALOG, "", &FilterSelection::new());
        assert_eq!(ids(&result), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let result = filter_items(&SEED_CATALOG, "ham", &FilterSelection::new());
        assert_eq!(ids(&result), vec!["3"]);

        let result = filter_items(&SEED_CATALOG, "DRILL", &FilterSelection::new());
        assert_eq!(ids(&result), vec!["1"]);
    }

    #[test]
    fn search_with_no_match_is_empty() {
        let result = filter_items(&SEED_CATALOG, "excavator", &FilterSelection::new());
        assert!(result.is_empty());
    }

    #[test]
    fn every_returned_name_contains_the_needle() {
        let result = filter_items(&SEED_CATALOG, "a", &FilterSelection::new());
        assert_eq!(ids(&result), vec!["2", "3", "4"]);
        for item in result {
            assert!(item.name.to_lowercase().contains('a'));
        }
    }

    #[test]
    fn selecting_an_items_own_value_always_includes_it() {
        for item in SEED_CATALOG.iter() {
            for field in ["category", "availability", "condition"] {
                let value = item.field(field).unwrap();
                let s = selection(&[(field, &[value])]);
                let result = filter_items(&SEED_CATALOG, "", &s);
                assert!(
                    result.iter().any(|i| i.id == item.id),
                    "item {} missing when selecting {}={}",
                    item.id,
                    field,
                    value
                );
            }
        }
    }

    #[test]
    fn category_selection_filters() {
        let s = selection(&[("category", &["power-tools"])]);
        let result = filter_items(&SEED_CATALOG, "", &s);
        assert_eq!(ids(&result), vec!["1", "2"]);
    }

    #[test]
    fn selected_values_union_within_a_field() {
        let s = selection(&[("category", &["power-tools", "hand-tools"])]);
        let result = filter_items(&SEED_CATALOG, "", &s);
        assert_eq!(ids(&result), vec!["1", "2", "3"]);
    }

    #[test]
    fn constrained_fields_intersect() {
        let s = selection(&[
            ("availability", &["out-of-stock"]),
            ("category", &["gardening"]),
        ]);
        let result = filter_items(&SEED_CATALOG, "", &s);
        assert_eq!(ids(&result), vec!["4"]);

        let s = selection(&[("category", &["power-tools"]), ("condition", &["good"])]);
        let result = filter_items(&SEED_CATALOG, "", &s);
        assert_eq!(ids(&result), vec!["2"]);
    }

    #[test]
    fn search_and_selection_combine() {
        let s = selection(&[("category", &["power-tools"])]);
        let result = filter_items(&SEED_CATALOG, "saw", &s);
        assert_eq!(ids(&result), vec!["2"]);

        let s = selection(&[("category", &["hand-tools"])]);
        let result = filter_items(&SEED_CATALOG, "saw", &s);
        assert!(result.is_empty());
    }

    #[test]
    fn unknown_selection_value_matches_nothing() {
        let s = selection(&[("category", &["electronics"])]);
        assert!(filter_items(&SEED_CATALOG, "", &s).is_empty());
    }

    #[test]
    fn unknown_selection_field_matches_nothing() {
        let s = selection(&[("brand", &["bosch"])]);
        assert!(filter_items(&SEED_CATALOG, "", &s).is_empty());
    }

    #[test]
    fn price_selection_matches_nothing() {
        let s = selection(&[("pricePerDay", &["25"])]);
        assert!(filter_items(&SEED_CATALOG, "", &s).is_empty());
    }

    #[test]
    fn results_keep_catalog_order_not_selection_order() {
        let s = selection(&[("category", &["construction", "power-tools"])]);
        let result = filter_items(&SEED_CATALOG, "", &s);
        assert_eq!(ids(&result), vec!["1", "2", "5"]);
    }

    // --- search with sorting and pagination ---

    #[test]
    fn default_search_returns_all_seed_items() {
        let (items, total) = catalog().search(&query());
        assert_eq!(total, 5);
        assert_eq!(page_ids(&items), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn sort_by_price_ascending() {
        let q = EquipmentQuery {
            sort: Some("price-asc".to_string()),
            ..query()
        };
        let (items, _) = catalog().search(&q);
        assert_eq!(page_ids(&items), vec!["3", "1", "4", "2", "5"]);
    }

    #[test]
    fn sort_by_price_descending() {
        let q = EquipmentQuery {
            sort: Some("price-desc".to_string()),
            ..query()
        };
        let (items, _) = catalog().search(&q);
        assert_eq!(page_ids(&items), vec!["5", "2", "4", "1", "3"]);
    }

    #[test]
    fn sort_newest_reverses_catalog_order() {
        let q = EquipmentQuery {
            sort: Some("newest".to_string()),
            ..query()
        };
        let (items, _) = catalog().search(&q);
        assert_eq!(page_ids(&items), vec!["5", "4", "3", "2", "1"]);
    }

    #[test]
    fn most_popular_and_unknown_sort_keep_catalog_order() {
        for code in ["most-popular", "trending"] {
            let q = EquipmentQuery {
                sort: Some(code.to_string()),
                ..query()
            };
            let (items, _) = catalog().search(&q);
            assert_eq!(page_ids(&items), vec!["1", "2", "3", "4", "5"]);
        }
    }

    #[test]
    fn price_sort_is_stable_for_equal_prices() {
        let mut items = SEED_CATALOG.clone();
        // make the drill and the hammer cost the same
        items[0].price_per_day = 5.0;
        let repo = CatalogRepository::new(items).unwrap();

        let q = EquipmentQuery {
            sort: Some("price-asc".to_string()),
            ..query()
        };
        let (sorted, _) = repo.search(&q);
        assert_eq!(page_ids(&sorted), vec!["1", "3", "4", "2", "5"]);
    }

    #[test]
    fn pagination_slices_after_filtering() {
        let q = EquipmentQuery {
            page: Some(1),
            per_page: Some(2),
            ..query()
        };
        let (items, total) = catalog().search(&q);
        assert_eq!(total, 5);
        assert_eq!(page_ids(&items), vec!["1", "2"]);

        let q = EquipmentQuery {
            page: Some(3),
            per_page: Some(2),
            ..query()
        };
        let (items, total) = catalog().search(&q);
        assert_eq!(total, 5);
        assert_eq!(page_ids(&items), vec!["5"]);
    }

    #[test]
    fn page_past_the_end_is_empty_but_total_stands() {
        let q = EquipmentQuery {
            page: Some(4),
            per_page: Some(2),
            ..query()
        };
        let (items, total) = catalog().search(&q);
        assert!(items.is_empty());
        assert_eq!(total, 5);
    }

    #[test]
    fn extreme_pagination_values_yield_an_empty_page() {
        let q = EquipmentQuery {
            page: Some(3),
            per_page: Some(i64::MAX),
            ..query()
        };
        let (items, total) = catalog().search(&q);
        assert!(items.is_empty());
        assert_eq!(total, 5);

        let q = EquipmentQuery {
            page: Some(i64::MAX),
            per_page: Some(20),
            ..query()
        };
        let (items, total) = catalog().search(&q);
        assert!(items.is_empty());
        assert_eq!(total, 5);
    }

    #[test]
    fn filters_apply_before_pagination() {
        let q = EquipmentQuery {
            category: vec!["power-tools".to_string(), "hand-tools".to_string()],
            page: Some(2),
            per_page: Some(2),
            ..query()
        };
        let (items, total) = catalog().search(&q);
        assert_eq!(total, 3);
        assert_eq!(page_ids(&items), vec!["3"]);
    }

    // --- lookup and construction ---

    #[test]
    fn get_returns_item_by_id() {
        let item = catalog().get("3").unwrap();
        assert_eq!(item.name, "Hammer");
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let err = catalog().get("99").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut items = SEED_CATALOG.clone();
        items[4].id = "1".to_string();
        let err = CatalogRepository::new(items).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn invalid_entries_are_rejected() {
        let mut items = SEED_CATALOG.clone();
        items[0].name = String::new();
        assert!(matches!(
            CatalogRepository::new(items).unwrap_err(),
            AppError::Validation(_)
        ));

        let mut items = SEED_CATALOG.clone();
        items[2].price_per_day = -1.0;
        assert!(matches!(
            CatalogRepository::new(items).unwrap_err(),
            AppError::Validation(_)
        ));
    }

    #[test]
    fn from_config_without_path_uses_seed() {
        let repo = CatalogRepository::from_config(&CatalogConfig::default()).unwrap();
        assert_eq!(repo.len(), 5);
    }

    #[test]
    fn from_config_loads_json_file() {
        let path = std::env::temp_dir().join("equiplease_catalog_test.json");
        fs::write(
            &path,
            r#"[{
                "id": "10",
                "name": "Pressure Washer",
                "category": "cleaning",
                "subCategory": "Cleaning",
                "pricePerDay": 18.5,
                "availability": "in-stock",
                "condition": "good",
                "image": "/images/pressure-washer.jpg"
            }]"#,
        )
        .unwrap();

        let config = CatalogConfig {
            path: Some(path.clone()),
        };
        let repo = CatalogRepository::from_config(&config).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(repo.len(), 1);
        assert_eq!(repo.get("10").unwrap().name, "Pressure Washer");
    }

    #[test]
    fn malformed_catalog_file_is_a_catalog_error() {
        let path = std::env::temp_dir().join("equiplease_catalog_bad.json");
        fs::write(&path, "not json").unwrap();

        let config = CatalogConfig {
            path: Some(path.clone()),
        };
        let err = CatalogRepository::from_config(&config).unwrap_err();
        let _ = fs::remove_file(&path);

        assert!(matches!(err, AppError::Catalog(_)));
    }
}
