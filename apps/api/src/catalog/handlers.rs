//! Axum route handlers for the Catalog API.

use axum::{
    extract::State,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::{RoleDetails, Selection, SelectionView};
use crate::errors::{ApiQuery, AppError};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct IndustryQuery {
    pub industry: String,
}

#[derive(Debug, Deserialize)]
pub struct SubIndustryQuery {
    pub industry: String,
    pub sub_industry: String,
}

/// A fully specified role. Shared with the render handlers.
#[derive(Debug, Deserialize)]
pub struct RoleQuery {
    pub industry: String,
    pub sub_industry: String,
    pub role: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct SelectionQuery {
    pub industry: Option<String>,
    pub sub_industry: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct IndustryListResponse {
    pub industries: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SubIndustryListResponse {
    pub industry: String,
    pub sub_industries: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RoleListResponse {
    pub industry: String,
    pub sub_industry: String,
    pub roles: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RoleDetailResponse {
    pub industry: String,
    pub sub_industry: String,
    pub role: String,
    pub details: RoleDetails,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/industries
pub async fn handle_list_industries(State(state): State<AppState>) -> Json<IndustryListResponse> {
    Json(IndustryListResponse {
        industries: owned(state.catalog.list_industries()),
    })
}

/// GET /api/v1/sub-industries?industry=
pub async fn handle_list_sub_industries(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<IndustryQuery>,
) -> Result<Json<SubIndustryListResponse>, AppError> {
    let sub_industries = owned(state.catalog.list_sub_industries(&params.industry)?);
    Ok(Json(SubIndustryListResponse {
        industry: params.industry,
        sub_industries,
    }))
}

/// GET /api/v1/roles?industry=&sub_industry=
pub async fn handle_list_roles(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<SubIndustryQuery>,
) -> Result<Json<RoleListResponse>, AppError> {
    let roles = owned(
        state
            .catalog
            .list_roles(&params.industry, &params.sub_industry)?,
    );
    Ok(Json(RoleListResponse {
        industry: params.industry,
        sub_industry: params.sub_industry,
        roles,
    }))
}

/// GET /api/v1/role?industry=&sub_industry=&role=
pub async fn handle_get_role(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<RoleQuery>,
) -> Result<Json<RoleDetailResponse>, AppError> {
    let details = state
        .catalog
        .get_role_details(&params.industry, &params.sub_industry, &params.role)?
        .clone();
    Ok(Json(RoleDetailResponse {
        industry: params.industry,
        sub_industry: params.sub_industry,
        role: params.role,
        details,
    }))
}

/// GET /api/v1/selection?industry=&sub_industry=&role=
///
/// Never fails on unknown names: invalid choices are dropped and the
/// downstream option lists come back empty.
pub async fn handle_selection(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<SelectionQuery>,
) -> Json<SelectionView> {
    let selection = Selection::from_choices(
        params.industry.as_deref(),
        params.sub_industry.as_deref(),
        params.role.as_deref(),
    );
    Json(selection.view(&state.catalog))
}

fn owned(names: Vec<&str>) -> Vec<String> {
    names.into_iter().map(str::to_string).collect()
}
