//! Departure group and tourist endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::{
    error::AppResult,
    models::{
        group::{CreateGroup, Group, UpdateGroup},
        tourist::{CreateTourist, Tourist},
    },
    AppState,
};

use super::{SuccessResponse, ValidatedJson};

#[derive(Deserialize)]
pub struct GroupsQuery {
    /// Restrict to one excursion
    pub excursion: Option<String>,
}

/// List groups, ordered by date then time
#[utoipa::path(
    get,
    path = "/api/groups",
    tag = "groups",
    params(("excursion" = Option<String>, Query, description = "Excursion id")),
    responses(
        (status = 200, description = "Group list", body = Vec<Group>)
    )
)]
pub async fn list_groups(
    State(state): State<AppState>,
    Query(query): Query<GroupsQuery>,
) -> AppResult<Json<Vec<Group>>> {
    let groups = state.services.sales.list_groups(query.excursion).await?;
    Ok(Json(groups))
}

/// Get a group by id
#[utoipa::path(
    get,
    path = "/api/groups/{id}",
    tag = "groups",
    params(("id" = String, Path, description = "Group id")),
    responses(
        (status = 200, description = "Group details", body = Group),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Group not found")
    )
)]
pub async fn get_group(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Group>> {
    let group = state.services.sales.get_group(&id).await?;
    Ok(Json(group))
}

/// Create a group
#[utoipa::path(
    post,
    path = "/api/groups",
    tag = "groups",
    request_body = CreateGroup,
    responses(
        (status = 201, description = "Group created", body = Group),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_group(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<CreateGroup>,
) -> AppResult<(StatusCode, Json<Group>)> {
    let group = state.services.sales.create_group(data).await?;
    Ok((StatusCode::CREATED, Json(group)))
}

/// Update a group
#[utoipa::path(
    put,
    path = "/api/groups/{id}",
    tag = "groups",
    params(("id" = String, Path, description = "Group id")),
    request_body = UpdateGroup,
    responses(
        (status = 200, description = "Group updated", body = SuccessResponse),
        (status = 404, description = "Group not found")
    )
)]
pub async fn update_group(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(data): Json<UpdateGroup>,
) -> AppResult<Json<SuccessResponse>> {
    state.services.sales.update_group(&id, data).await?;
    Ok(SuccessResponse::ok())
}

/// Delete a group together with its tourists
#[utoipa::path(
    delete,
    path = "/api/groups/{id}",
    tag = "groups",
    params(("id" = String, Path, description = "Group id")),
    responses(
        (status = 200, description = "Group and its tourists deleted", body = SuccessResponse),
        (status = 404, description = "Group not found")
    )
)]
pub async fn delete_group(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<SuccessResponse>> {
    state.services.sales.delete_group(&id).await?;
    Ok(SuccessResponse::ok())
}

/// Tourists of a group
#[utoipa::path(
    get,
    path = "/api/groups/{id}/tourists",
    tag = "groups",
    params(("id" = String, Path, description = "Group id")),
    responses(
        (status = 200, description = "Tourist list", body = Vec<Tourist>),
        (status = 404, description = "Group not found")
    )
)]
pub async fn list_tourists(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Tourist>>> {
    let tourists = state.services.sales.list_tourists(&id).await?;
    Ok(Json(tourists))
}

/// Add a tourist to a group, taking one seat
#[utoipa::path(
    post,
    path = "/api/groups/{id}/tourists",
    tag = "groups",
    params(("id" = String, Path, description = "Group id")),
    request_body = CreateTourist,
    responses(
        (status = 201, description = "Tourist added", body = Tourist),
        (status = 400, description = "Invalid input or group full"),
        (status = 404, description = "Group not found")
    )
)]
pub async fn create_tourist(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(data): ValidatedJson<CreateTourist>,
) -> AppResult<(StatusCode, Json<Tourist>)> {
    let tourist = state.services.sales.create_tourist(&id, data).await?;
    Ok((StatusCode::CREATED, Json(tourist)))
}

/// Remove a tourist, giving the seat back to the group
#[utoipa::path(
    delete,
    path = "/api/tourists/{id}",
    tag = "groups",
    params(("id" = String, Path, description = "Tourist id")),
    responses(
        (status = 200, description = "Tourist removed", body = SuccessResponse),
        (status = 404, description = "Tourist not found")
    )
)]
pub async fn delete_tourist(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<SuccessResponse>> {
    state.services.sales.delete_tourist(&id).await?;
    Ok(SuccessResponse::ok())
}
