//! Equipment catalog endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::Query;

use crate::{
    error::AppResult,
    models::equipment::{EquipmentItem, EquipmentPage, EquipmentQuery},
};

/// List equipment with search, filters, sorting and pagination
#[utoipa::path(
    get,
    path = "/equipment",
    tag = "equipment",
    params(EquipmentQuery),
    responses(
        (status = 200, description = "Page of matching equipment", body = EquipmentPage)
    )
)]
pub async fn list_equipment(
    State(state): State<crate::AppState>,
    Query(query): Query<EquipmentQuery>,
) -> AppResult<Json<EquipmentPage>> {
    let (items, total) = state.services.catalog.search_equipment(&query);

    Ok(Json(EquipmentPage {
        items,
        total,
        page: query.page_number(),
        per_page: query.page_size(),
    }))
}

/// Get equipment details by id
#[utoipa::path(
    get,
    path = "/equipment/{id}",
    tag = "equipment",
    params(
        ("id" = String, Path, description = "Equipment id")
    ),
    responses(
        (status = 200, description = "Equipment details", body = EquipmentItem),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn get_equipment(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<EquipmentItem>> {
    let item = state.services.catalog.get_equipment(&id)?;
    Ok(Json(item))
}
