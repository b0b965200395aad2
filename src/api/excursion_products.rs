//! Commercial excursion product endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::{
    error::AppResult,
    models::excursion_product::{
        CreateExcursionProduct, ExcursionProduct, UpdateExcursionProduct,
    },
    AppState,
};

use super::{SuccessResponse, ValidatedJson};

#[derive(Deserialize)]
pub struct ProductsQuery {
    /// Restrict to products linked to one excursion card
    pub excursion: Option<String>,
}

/// List products, optionally scoped to one excursion
#[utoipa::path(
    get,
    path = "/api/excursion-products",
    tag = "products",
    params(("excursion" = Option<String>, Query, description = "Excursion card id")),
    responses(
        (status = 200, description = "Product list", body = Vec<ExcursionProduct>)
    )
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductsQuery>,
) -> AppResult<Json<Vec<ExcursionProduct>>> {
    let products = state.services.catalog.list_products(query.excursion).await?;
    Ok(Json(products))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/api/excursion-products/{id}",
    tag = "products",
    params(("id" = String, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product details", body = ExcursionProduct),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ExcursionProduct>> {
    let product = state.services.catalog.get_product(&id).await?;
    Ok(Json(product))
}

/// Create a product; a linked card is denormalized into the document
#[utoipa::path(
    post,
    path = "/api/excursion-products",
    tag = "products",
    request_body = CreateExcursionProduct,
    responses(
        (status = 201, description = "Product created", body = ExcursionProduct),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Linked excursion not found")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<CreateExcursionProduct>,
) -> AppResult<(StatusCode, Json<ExcursionProduct>)> {
    let product = state.services.catalog.create_product(data).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Update a product
#[utoipa::path(
    put,
    path = "/api/excursion-products/{id}",
    tag = "products",
    params(("id" = String, Path, description = "Product id")),
    request_body = UpdateExcursionProduct,
    responses(
        (status = 200, description = "Product updated", body = SuccessResponse),
        (status = 404, description = "Product not found")
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(data): Json<UpdateExcursionProduct>,
) -> AppResult<Json<SuccessResponse>> {
    state.services.catalog.update_product(&id, data).await?;
    Ok(SuccessResponse::ok())
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/api/excursion-products/{id}",
    tag = "products",
    params(("id" = String, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product deleted", body = SuccessResponse),
        (status = 404, description = "Product not found")
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<SuccessResponse>> {
    state.services.catalog.delete_product(&id).await?;
    Ok(SuccessResponse::ok())
}
