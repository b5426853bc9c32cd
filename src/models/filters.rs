//! Filter selection contract and storefront filter metadata.
//!
//! A selection maps field names to the values picked in that field's menu.
//! Matching is AND across fields and OR within a field; a field with no
//! selected values does not constrain the result.

use indexmap::IndexMap;
use serde::Serialize;
use utoipa::ToSchema;

use super::enums::Category;
use super::equipment::EquipmentItem;

/// Multi-select filter state, keyed by wire field name.
///
/// Field order is preserved so filter steps log in a stable order.
#[derive(Debug, Clone, Default)]
pub struct FilterSelection {
    fields: IndexMap<String, Vec<String>>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the selected values for a field, replacing any previous ones
    pub fn set(&mut self, field: &str, values: Vec<String>) {
        self.fields.insert(field.to_string(), values);
    }

    /// True when no field has any selected value
    pub fn is_empty(&self) -> bool {
        self.fields.values().all(|v| v.is_empty())
    }

    /// Whether an item satisfies every field constraint.
    ///
    /// A field matches when the item's value equals any selected value
    /// (exact, case-sensitive compare). Selections on fields the item
    /// cannot answer as a string (unknown names, `pricePerDay`) match
    /// nothing.
    pub fn matches(&self, item: &EquipmentItem) -> bool {
        self.fields.iter().all(|(field, values)| {
            if values.is_empty() {
                return true;
            }
            match item.field(field) {
                Some(actual) => values.iter().any(|v| v == actual),
                None => false,
            }
        })
    }
}

/// One checkbox in a filter menu
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

/// A filter menu (one per filterable field)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FilterSection {
    pub id: String,
    pub name: String,
    pub options: Vec<FilterOption>,
}

/// One entry in the sort menu
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SortOption {
    pub value: String,
    pub label: String,
}

/// Category shortcut shown above the filter menus
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryLink {
    pub name: String,
    pub category: Category,
}
