//! Catalog service: equipment search and storefront metadata

use crate::{
    error::AppResult,
    models::{
        enums::{Availability, Category, Condition, SortKey},
        equipment::{EquipmentItem, EquipmentQuery},
        filters::{CategoryLink, FilterOption, FilterSection, SortOption},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Search equipment with filters, sorting and pagination
    pub fn search_equipment(&self, query: &EquipmentQuery) -> (Vec<EquipmentItem>, i64) {
        self.repository.catalog.search(query)
    }

    /// Get a single equipment item by id
    pub fn get_equipment(&self, id: &str) -> AppResult<EquipmentItem> {
        self.repository.catalog.get(id)
    }

    /// Number of items in the loaded catalog
    pub fn catalog_size(&self) -> usize {
        self.repository.catalog.len()
    }

    /// The filter menus offered by the storefront, one per filterable field
    pub fn filter_sections(&self) -> Vec<FilterSection> {
        vec![
            FilterSection {
                id: "category".to_string(),
                name: "Category".to_string(),
                options: Category::ALL
                    .iter()
                    .map(|c| FilterOption {
                        value: c.as_code().to_string(),
                        label: c.label().to_string(),
                    })
                    .collect(),
            },
            FilterSection {
                id: "availability".to_string(),
                name: "Availability".to_string(),
                options: Availability::ALL
                    .iter()
                    .map(|a| FilterOption {
                        value: a.as_code().to_string(),
                        label: a.label().to_string(),
                    })
                    .collect(),
            },
            FilterSection {
                id: "condition".to_string(),
                name: "Condition".to_string(),
                options: Condition::ALL
                    .iter()
                    .map(|c| FilterOption {
                        value: c.as_code().to_string(),
                        label: c.label().to_string(),
                    })
                    .collect(),
            },
        ]
    }

    /// The sort menu, in display order; the first entry is the default
    pub fn sort_options(&self) -> Vec<SortOption> {
        SortKey::ALL
            .iter()
            .map(|k| SortOption {
                value: k.as_code().to_string(),
                label: k.label().to_string(),
            })
            .collect()
    }

    /// Category shortcuts, each pointing at its canonical category code
    pub fn category_links(&self) -> Vec<CategoryLink> {
        Category::ALL
            .iter()
            .map(|c| CategoryLink {
                name: c.label().to_string(),
                category: *c,
            })
            .collect()
    }
}
