//! Axum route handlers for role rendering (on-screen text and PDF download).

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
};
use bytes::Bytes;
use tracing::info;

use crate::catalog::handlers::RoleQuery;
use crate::errors::{ApiQuery, AppError};
use crate::render::text::{render_role_text, MARKDOWN_MEDIA_TYPE};
use crate::render::document_filename;
use crate::state::AppState;

/// GET /api/v1/role/text?industry=&sub_industry=&role=
pub async fn handle_role_text(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<RoleQuery>,
) -> Result<impl IntoResponse, AppError> {
    let details = state
        .catalog
        .get_role_details(&params.industry, &params.sub_industry, &params.role)?;
    let text = render_role_text(&params.role, details)?;
    Ok(([(header::CONTENT_TYPE, MARKDOWN_MEDIA_TYPE)], text))
}

/// GET /api/v1/role/document?industry=&sub_industry=&role=
///
/// Resolves the role, renders it off the async executor, and returns it as an
/// attachment named after the role.
pub async fn handle_role_document(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<RoleQuery>,
) -> Result<impl IntoResponse, AppError> {
    let details = state
        .catalog
        .get_role_details(&params.industry, &params.sub_industry, &params.role)?
        .clone();

    let renderer = state.renderer.clone();
    let role = params.role.clone();
    let bytes = tokio::task::spawn_blocking(move || renderer.render(&role, &details))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in render: {e}")))??;

    let filename = document_filename(&params.role, state.renderer.file_extension());
    info!(role = %params.role, %filename, bytes = bytes.len(), "Serving role document");

    Ok((
        [
            (header::CONTENT_TYPE, state.renderer.media_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        Bytes::from(bytes),
    ))
}
