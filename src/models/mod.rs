//! Data models for Equiplease

pub mod enums;
pub mod equipment;
pub mod filters;

// Re-export commonly used types
pub use enums::{Availability, Category, Condition, SortKey};
pub use equipment::{EquipmentItem, EquipmentPage, EquipmentQuery};
pub use filters::{CategoryLink, FilterOption, FilterSection, FilterSelection, SortOption};
