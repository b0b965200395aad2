//! Tag endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::taxonomy::{CreateTag, Tag, UpdateTag},
    AppState,
};

use super::{SuccessResponse, ValidatedJson};

/// List all tags, sorted ascending
#[utoipa::path(
    get,
    path = "/api/tags",
    tag = "tags",
    responses(
        (status = 200, description = "Tag list", body = Vec<Tag>)
    )
)]
pub async fn list_tags(State(state): State<AppState>) -> AppResult<Json<Vec<Tag>>> {
    let tags = state.services.taxonomy.list_tags().await?;
    Ok(Json(tags))
}

/// Get a tag by id
#[utoipa::path(
    get,
    path = "/api/tags/{id}",
    tag = "tags",
    params(("id" = String, Path, description = "Tag id")),
    responses(
        (status = 200, description = "Tag details", body = Tag),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Tag not found")
    )
)]
pub async fn get_tag(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Tag>> {
    let tag = state.services.taxonomy.get_tag(&id).await?;
    Ok(Json(tag))
}

/// Create a tag; the slug is derived from the name when absent
#[utoipa::path(
    post,
    path = "/api/tags",
    tag = "tags",
    request_body = CreateTag,
    responses(
        (status = 201, description = "Tag created", body = Tag),
        (status = 400, description = "Invalid input or duplicate slug")
    )
)]
pub async fn create_tag(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<CreateTag>,
) -> AppResult<(StatusCode, Json<Tag>)> {
    let tag = state.services.taxonomy.create_tag(data).await?;
    Ok((StatusCode::CREATED, Json(tag)))
}

/// Update a tag
#[utoipa::path(
    put,
    path = "/api/tags/{id}",
    tag = "tags",
    params(("id" = String, Path, description = "Tag id")),
    request_body = UpdateTag,
    responses(
        (status = 200, description = "Tag updated", body = SuccessResponse),
        (status = 404, description = "Tag not found")
    )
)]
pub async fn update_tag(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(data): Json<UpdateTag>,
) -> AppResult<Json<SuccessResponse>> {
    state.services.taxonomy.update_tag(&id, data).await?;
    Ok(SuccessResponse::ok())
}

/// Delete a tag
#[utoipa::path(
    delete,
    path = "/api/tags/{id}",
    tag = "tags",
    params(("id" = String, Path, description = "Tag id")),
    responses(
        (status = 200, description = "Tag deleted", body = SuccessResponse),
        (status = 404, description = "Tag not found")
    )
)]
pub async fn delete_tag(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<SuccessResponse>> {
    state.services.taxonomy.delete_tag(&id).await?;
    Ok(SuccessResponse::ok())
}
