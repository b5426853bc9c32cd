//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{equipment, health, storefront};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Equiplease API",
        version = "1.0.0",
        description = "Equipment Rental Storefront REST API",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT"),
        contact(name = "Equiplease Team", email = "contact@equiplease.io")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Equipment
        equipment::list_equipment,
        equipment::get_equipment,
        // Storefront
        storefront::list_filters,
        storefront::list_sort_options,
        storefront::list_categories,
    ),
    components(
        schemas(
            // Equipment
            crate::models::equipment::EquipmentItem,
            crate::models::equipment::EquipmentQuery,
            crate::models::equipment::EquipmentPage,
            crate::models::enums::Category,
            crate::models::enums::Availability,
            crate::models::enums::Condition,
            crate::models::enums::SortKey,
            // Storefront
            crate::models::filters::FilterOption,
            crate::models::filters::FilterSection,
            crate::models::filters::SortOption,
            crate::models::filters::CategoryLink,
            // Health
            health::HealthResponse,
            health::ReadyResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "equipment", description = "Equipment catalog search"),
        (name = "storefront", description = "Storefront filter and sort metadata")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
