//! Filter facet endpoints: groups, items, and the assembled sidebar

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::{
    error::AppResult,
    models::taxonomy::{
        CreateFilterGroup, CreateFilterItem, FilterBlock, FilterGroup, FilterItem,
        UpdateFilterGroup, UpdateFilterItem,
    },
    AppState,
};

use super::{SuccessResponse, ValidatedJson};

/// Assembled catalog sidebar: filter groups with their options, tags
/// folded into the "Теги" block
#[utoipa::path(
    get,
    path = "/api/filters",
    tag = "filters",
    responses(
        (status = 200, description = "Ordered filter blocks", body = Vec<FilterBlock>)
    )
)]
pub async fn get_filters(State(state): State<AppState>) -> AppResult<Json<Vec<FilterBlock>>> {
    let blocks = state.services.taxonomy.build_filters().await?;
    Ok(Json(blocks))
}

/// List all filter groups, sorted ascending
#[utoipa::path(
    get,
    path = "/api/filter-groups",
    tag = "filters",
    responses(
        (status = 200, description = "Filter group list", body = Vec<FilterGroup>)
    )
)]
pub async fn list_filter_groups(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<FilterGroup>>> {
    let groups = state.services.taxonomy.list_filter_groups().await?;
    Ok(Json(groups))
}

/// Get a filter group by id
#[utoipa::path(
    get,
    path = "/api/filter-groups/{id}",
    tag = "filters",
    params(("id" = String, Path, description = "Filter group id")),
    responses(
        (status = 200, description = "Filter group details", body = FilterGroup),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Filter group not found")
    )
)]
pub async fn get_filter_group(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<FilterGroup>> {
    let group = state.services.taxonomy.get_filter_group(&id).await?;
    Ok(Json(group))
}

/// Create a filter group
#[utoipa::path(
    post,
    path = "/api/filter-groups",
    tag = "filters",
    request_body = CreateFilterGroup,
    responses(
        (status = 201, description = "Filter group created", body = FilterGroup),
        (status = 400, description = "Invalid input or duplicate slug")
    )
)]
pub async fn create_filter_group(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<CreateFilterGroup>,
) -> AppResult<(StatusCode, Json<FilterGroup>)> {
    let group = state.services.taxonomy.create_filter_group(data).await?;
    Ok((StatusCode::CREATED, Json(group)))
}

/// Update a filter group
#[utoipa::path(
    put,
    path = "/api/filter-groups/{id}",
    tag = "filters",
    params(("id" = String, Path, description = "Filter group id")),
    request_body = UpdateFilterGroup,
    responses(
        (status = 200, description = "Filter group updated", body = SuccessResponse),
        (status = 404, description = "Filter group not found")
    )
)]
pub async fn update_filter_group(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(data): Json<UpdateFilterGroup>,
) -> AppResult<Json<SuccessResponse>> {
    state.services.taxonomy.update_filter_group(&id, data).await?;
    Ok(SuccessResponse::ok())
}

/// Delete a filter group
#[utoipa::path(
    delete,
    path = "/api/filter-groups/{id}",
    tag = "filters",
    params(("id" = String, Path, description = "Filter group id")),
    responses(
        (status = 200, description = "Filter group deleted", body = SuccessResponse),
        (status = 404, description = "Filter group not found")
    )
)]
pub async fn delete_filter_group(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<SuccessResponse>> {
    state.services.taxonomy.delete_filter_group(&id).await?;
    Ok(SuccessResponse::ok())
}

#[derive(Deserialize)]
pub struct FilterItemsQuery {
    /// Restrict to one filter group
    pub group: Option<String>,
}

/// List filter items, optionally scoped to one group
#[utoipa::path(
    get,
    path = "/api/filter-items",
    tag = "filters",
    params(("group" = Option<String>, Query, description = "Filter group id")),
    responses(
        (status = 200, description = "Filter item list", body = Vec<FilterItem>)
    )
)]
pub async fn list_filter_items(
    State(state): State<AppState>,
    Query(query): Query<FilterItemsQuery>,
) -> AppResult<Json<Vec<FilterItem>>> {
    let items = state.services.taxonomy.list_filter_items(query.group).await?;
    Ok(Json(items))
}

/// Get a filter item by id
#[utoipa::path(
    get,
    path = "/api/filter-items/{id}",
    tag = "filters",
    params(("id" = String, Path, description = "Filter item id")),
    responses(
        (status = 200, description = "Filter item details", body = FilterItem),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Filter item not found")
    )
)]
pub async fn get_filter_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<FilterItem>> {
    let item = state.services.taxonomy.get_filter_item(&id).await?;
    Ok(Json(item))
}

/// Create a filter item under an existing group
#[utoipa::path(
    post,
    path = "/api/filter-items",
    tag = "filters",
    request_body = CreateFilterItem,
    responses(
        (status = 201, description = "Filter item created", body = FilterItem),
        (status = 400, description = "Invalid input or duplicate slug"),
        (status = 404, description = "Owning group not found")
    )
)]
pub async fn create_filter_item(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<CreateFilterItem>,
) -> AppResult<(StatusCode, Json<FilterItem>)> {
    let item = state.services.taxonomy.create_filter_item(data).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Update a filter item
#[utoipa::path(
    put,
    path = "/api/filter-items/{id}",
    tag = "filters",
    params(("id" = String, Path, description = "Filter item id")),
    request_body = UpdateFilterItem,
    responses(
        (status = 200, description = "Filter item updated", body = SuccessResponse),
        (status = 404, description = "Filter item not found")
    )
)]
pub async fn update_filter_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(data): Json<UpdateFilterItem>,
) -> AppResult<Json<SuccessResponse>> {
    state.services.taxonomy.update_filter_item(&id, data).await?;
    Ok(SuccessResponse::ok())
}

/// Delete a filter item
#[utoipa::path(
    delete,
    path = "/api/filter-items/{id}",
    tag = "filters",
    params(("id" = String, Path, description = "Filter item id")),
    responses(
        (status = 200, description = "Filter item deleted", body = SuccessResponse),
        (status = 404, description = "Filter item not found")
    )
)]
pub async fn delete_filter_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<SuccessResponse>> {
    state.services.taxonomy.delete_filter_item(&id).await?;
    Ok(SuccessResponse::ok())
}
