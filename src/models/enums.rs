//! Shared domain enums (wire codes match the storefront catalog data)

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Equipment category codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    PowerTools,
    HandTools,
    Gardening,
    Construction,
    Cleaning,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::PowerTools,
        Category::HandTools,
        Category::Gardening,
        Category::Construction,
        Category::Cleaning,
    ];

    /// Return the wire code for this category
    pub fn as_code(&self) -> &'static str {
        match self {
            Category::PowerTools => "power-tools",
            Category::HandTools => "hand-tools",
            Category::Gardening => "gardening",
            Category::Construction => "construction",
            Category::Cleaning => "cleaning",
        }
    }

    /// Human-readable label shown in filter menus
    pub fn label(&self) -> &'static str {
        match self {
            Category::PowerTools => "Power Tools",
            Category::HandTools => "Hand Tools",
            Category::Gardening => "Gardening",
            Category::Construction => "Construction",
            Category::Cleaning => "Cleaning",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_code())
    }
}

// ---------------------------------------------------------------------------
// Availability
// ---------------------------------------------------------------------------

/// Stock availability codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Availability {
    InStock,
    OutOfStock,
}

impl Availability {
    pub const ALL: [Availability; 2] = [Availability::InStock, Availability::OutOfStock];

    pub fn as_code(&self) -> &'static str {
        match self {
            Availability::InStock => "in-stock",
            Availability::OutOfStock => "out-of-stock",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Availability::InStock => "In Stock",
            Availability::OutOfStock => "Out of Stock",
        }
    }
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_code())
    }
}

// ---------------------------------------------------------------------------
// Condition
// ---------------------------------------------------------------------------

/// Equipment wear condition codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Condition {
    New,
    LikeNew,
    Good,
    Fair,
}

impl Condition {
    pub const ALL: [Condition; 4] = [
        Condition::New,
        Condition::LikeNew,
        Condition::Good,
        Condition::Fair,
    ];

    pub fn as_code(&self) -> &'static str {
        match self {
            Condition::New => "new",
            Condition::LikeNew => "like-new",
            Condition::Good => "good",
            Condition::Fair => "fair",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::LikeNew => "Like New",
            Condition::Good => "Good",
            Condition::Fair => "Fair",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_code())
    }
}

// ---------------------------------------------------------------------------
// SortKey
// ---------------------------------------------------------------------------

/// Result ordering codes.
///
/// `MostPopular` is the default and preserves catalog order; an unknown
/// code degrades to the same behavior rather than erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    MostPopular,
    Newest,
    PriceAsc,
    PriceDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::MostPopular,
        SortKey::Newest,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
    ];

    pub fn as_code(&self) -> &'static str {
        match self {
            SortKey::MostPopular => "most-popular",
            SortKey::Newest => "newest",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::MostPopular => "Most Popular",
            SortKey::Newest => "Newest",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
        }
    }

    /// Parse a wire code; unknown codes yield `None`
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "most-popular" => Some(SortKey::MostPopular),
            "newest" => Some(SortKey::Newest),
            "price-asc" => Some(SortKey::PriceAsc),
            "price-desc" => Some(SortKey::PriceDesc),
            _ => None,
        }
    }
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::MostPopular
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_code())
    }
}
