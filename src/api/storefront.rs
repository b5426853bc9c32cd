//! Storefront metadata endpoints: filter menus, sort menu, category links

use axum::{extract::State, Json};

use crate::models::filters::{CategoryLink, FilterSection, SortOption};

/// List the filter menus with their options
#[utoipa::path(
    get,
    path = "/filters",
    tag = "storefront",
    responses(
        (status = 200, description = "Filter sections", body = Vec<FilterSection>)
    )
)]
pub async fn list_filters(State(state): State<crate::AppState>) -> Json<Vec<FilterSection>> {
    Json(state.services.catalog.filter_sections())
}

/// List the sort menu entries
#[utoipa::path(
    get,
    path = "/sort-options",
    tag = "storefront",
    responses(
        (status = 200, description = "Sort options", body = Vec<SortOption>)
    )
)]
pub async fn list_sort_options(State(state): State<crate::AppState>) -> Json<Vec<SortOption>> {
    Json(state.services.catalog.sort_options())
}

/// List the category shortcuts
#[utoipa::path(
    get,
    path = "/categories",
    tag = "storefront",
    responses(
        (status = 200, description = "Category links", body = Vec<CategoryLink>)
    )
)]
pub async fn list_categories(State(state): State<crate::AppState>) -> Json<Vec<CategoryLink>> {
    Json(state.services.catalog.category_links())
}
