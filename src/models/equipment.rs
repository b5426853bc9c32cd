//! Equipment item model and API query types.
//!
//! Wire field names use camelCase to stay compatible with the storefront
//! catalog format (`pricePerDay`, `subCategory`, ...).

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::enums::{Availability, Category, Condition};
use super::filters::FilterSelection;

/// A rental catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentItem {
    #[validate(length(min = 1, message = "id must not be empty"))]
    pub id: String,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub category: Category,
    /// Display grouping, e.g. "Power Tools"
    pub sub_category: String,
    #[validate(range(min = 0.0, message = "pricePerDay must not be negative"))]
    pub price_per_day: f64,
    pub availability: Availability,
    pub condition: Condition,
    /// Asset path for the product photo
    pub image: String,
}

impl EquipmentItem {
    /// Look up a filterable field by its wire name.
    ///
    /// Returns the item's value as a string code, or `None` when the field
    /// is unknown or not string-valued (`pricePerDay`). Selections
    /// addressing such fields therefore never match.
    pub fn field(&self, key: &str) -> Option<&str> {
        match key {
            "id" => Some(&self.id),
            "name" => Some(&self.name),
            "category" => Some(self.category.as_code()),
            "subCategory" => Some(&self.sub_category),
            "availability" => Some(self.availability.as_code()),
            "condition" => Some(self.condition.as_code()),
            "image" => Some(&self.image),
            _ => None,
        }
    }
}

/// Equipment query parameters (API).
///
/// Filter parameters repeat to select several values, e.g.
/// `?category=power-tools&category=gardening`.
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct EquipmentQuery {
    /// Free-text search against item names
    pub q: Option<String>,
    #[serde(default)]
    pub category: Vec<String>,
    #[serde(default)]
    pub availability: Vec<String>,
    #[serde(default)]
    pub condition: Vec<String>,
    /// Sort code, see `/sort-options`
    pub sort: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl EquipmentQuery {
    /// Collapse the filter parameters into a field -> values selection
    pub fn selection(&self) -> FilterSelection {
        let mut selection = FilterSelection::new();
        selection.set("category", self.category.clone());
        selection.set("availability", self.availability.clone());
        selection.set("condition", self.condition.clone());
        selection
    }

    /// Effective page number, first page by default. Zero and negative
    /// requests are clamped to the first page.
    pub fn page_number(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    /// Effective page size, 20 items by default
    pub fn page_size(&self) -> i64 {
        self.per_page.unwrap_or(20).max(1)
    }
}

/// Paged equipment listing
#[derive(Debug, Serialize, ToSchema)]
pub struct EquipmentPage {
    pub items: Vec<EquipmentItem>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
}
