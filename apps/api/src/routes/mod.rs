pub mod health;

use axum::{routing::get, Router};

use crate::catalog::handlers as catalog;
use crate::render::handlers as render;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog API
        .route("/api/v1/industries", get(catalog::handle_list_industries))
        .route(
            "/api/v1/sub-industries",
            get(catalog::handle_list_sub_industries),
        )
        .route("/api/v1/roles", get(catalog::handle_list_roles))
        .route("/api/v1/role", get(catalog::handle_get_role))
        .route("/api/v1/selection", get(catalog::handle_selection))
        // Render API
        .route("/api/v1/role/text", get(render::handle_role_text))
        .route("/api/v1/role/document", get(render::handle_role_document))
        .with_state(state)
}
