//! Guide reference-data endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::reference::{CreateReference, ReferenceData, UpdateReference},
    AppState,
};

use super::{SuccessResponse, ValidatedJson};

/// List all guides
#[utoipa::path(
    get,
    path = "/api/guides",
    tag = "guides",
    responses(
        (status = 200, description = "Guide list", body = Vec<ReferenceData>)
    )
)]
pub async fn list_guides(State(state): State<AppState>) -> AppResult<Json<Vec<ReferenceData>>> {
    let guides = state.services.sales.list_guides().await?;
    Ok(Json(guides))
}

/// Get a guide by id
#[utoipa::path(
    get,
    path = "/api/guides/{id}",
    tag = "guides",
    params(("id" = String, Path, description = "Guide id")),
    responses(
        (status = 200, description = "Guide details", body = ReferenceData),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Guide not found")
    )
)]
pub async fn get_guide(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ReferenceData>> {
    let guide = state.services.sales.get_guide(&id).await?;
    Ok(Json(guide))
}

/// Create a guide
#[utoipa::path(
    post,
    path = "/api/guides",
    tag = "guides",
    request_body = CreateReference,
    responses(
        (status = 201, description = "Guide created", body = ReferenceData),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_guide(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<CreateReference>,
) -> AppResult<(StatusCode, Json<ReferenceData>)> {
    let guide = state.services.sales.create_guide(data).await?;
    Ok((StatusCode::CREATED, Json(guide)))
}

/// Update a guide
#[utoipa::path(
    put,
    path = "/api/guides/{id}",
    tag = "guides",
    params(("id" = String, Path, description = "Guide id")),
    request_body = UpdateReference,
    responses(
        (status = 200, description = "Guide updated", body = SuccessResponse),
        (status = 404, description = "Guide not found")
    )
)]
pub async fn update_guide(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(data): Json<UpdateReference>,
) -> AppResult<Json<SuccessResponse>> {
    state.services.sales.update_guide(&id, data).await?;
    Ok(SuccessResponse::ok())
}

/// Delete a guide
#[utoipa::path(
    delete,
    path = "/api/guides/{id}",
    tag = "guides",
    params(("id" = String, Path, description = "Guide id")),
    responses(
        (status = 200, description = "Guide deleted", body = SuccessResponse),
        (status = 404, description = "Guide not found")
    )
)]
pub async fn delete_guide(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<SuccessResponse>> {
    state.services.sales.delete_guide(&id).await?;
    Ok(SuccessResponse::ok())
}
