//! Excursion endpoints: cards, composite create, gallery images

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::excursion_card::{CreateExcursion, ExcursionCard, UpdateExcursionCard},
    models::excursion_product::ExcursionProduct,
    AppState,
};

use super::{SuccessResponse, ValidatedJson};

/// List all excursion cards, newest first
#[utoipa::path(
    get,
    path = "/api/excursions",
    tag = "excursions",
    responses(
        (status = 200, description = "Excursion list", body = Vec<ExcursionCard>)
    )
)]
pub async fn list_excursions(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ExcursionCard>>> {
    let cards = state.services.catalog.list_excursions().await?;
    Ok(Json(cards))
}

/// Get an excursion card by id
#[utoipa::path(
    get,
    path = "/api/excursions/{id}",
    tag = "excursions",
    params(("id" = String, Path, description = "Excursion id")),
    responses(
        (status = 200, description = "Excursion details", body = ExcursionCard),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Excursion not found")
    )
)]
pub async fn get_excursion(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ExcursionCard>> {
    let card = state.services.catalog.get_excursion(&id).await?;
    Ok(Json(card))
}

/// Create an excursion card, optionally with its commercial block
#[utoipa::path(
    post,
    path = "/api/excursions",
    tag = "excursions",
    request_body = CreateExcursion,
    responses(
        (status = 200, description = "Excursion created", body = ExcursionCard),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_excursion(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<CreateExcursion>,
) -> AppResult<Json<ExcursionCard>> {
    let card = state.services.catalog.create_excursion(data).await?;
    Ok(Json(card))
}

/// Update an excursion card
#[utoipa::path(
    put,
    path = "/api/excursions/{id}",
    tag = "excursions",
    params(("id" = String, Path, description = "Excursion id")),
    request_body = UpdateExcursionCard,
    responses(
        (status = 200, description = "Excursion updated", body = SuccessResponse),
        (status = 404, description = "Excursion not found")
    )
)]
pub async fn update_excursion(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(data): Json<UpdateExcursionCard>,
) -> AppResult<Json<SuccessResponse>> {
    state.services.catalog.update_excursion(&id, data).await?;
    Ok(SuccessResponse::ok())
}

/// Delete an excursion card
#[utoipa::path(
    delete,
    path = "/api/excursions/{id}",
    tag = "excursions",
    params(("id" = String, Path, description = "Excursion id")),
    responses(
        (status = 200, description = "Excursion deleted", body = SuccessResponse),
        (status = 404, description = "Excursion not found")
    )
)]
pub async fn delete_excursion(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<SuccessResponse>> {
    state.services.catalog.delete_excursion(&id).await?;
    Ok(SuccessResponse::ok())
}

/// Products linked to an excursion
#[utoipa::path(
    get,
    path = "/api/excursions/{id}/products",
    tag = "excursions",
    params(("id" = String, Path, description = "Excursion id")),
    responses(
        (status = 200, description = "Linked products", body = Vec<ExcursionProduct>),
        (status = 404, description = "Excursion not found")
    )
)]
pub async fn excursion_products(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<ExcursionProduct>>> {
    let products = state.services.catalog.excursion_products(&id).await?;
    Ok(Json(products))
}

/// Start times for an excursion
#[utoipa::path(
    get,
    path = "/api/excursions/{id}/times",
    tag = "excursions",
    params(("id" = String, Path, description = "Excursion id")),
    responses(
        (status = 200, description = "Available start times", body = Vec<String>),
        (status = 404, description = "Excursion not found")
    )
)]
pub async fn excursion_times(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<String>>> {
    let times = state.services.catalog.excursion_times(&id).await?;
    Ok(Json(times))
}

#[derive(serde::Serialize, ToSchema)]
pub struct UploadedImages {
    pub urls: Vec<String>,
}

/// Upload gallery images for an excursion. Accepts several files in one
/// multipart request; each URL is appended to the card's image list.
#[utoipa::path(
    post,
    path = "/api/excursions/{id}/images",
    tag = "excursions",
    params(("id" = String, Path, description = "Excursion id")),
    request_body(content = Vec<u8>, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Images stored and attached", body = UploadedImages),
        (status = 400, description = "Not an image, or too large"),
        (status = 404, description = "Excursion not found")
    )
)]
pub async fn upload_excursion_images(
    State(state): State<AppState>,
    Path(id): Path<String>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadedImages>> {
    // Fail fast on a bad id before any byte hits the object store
    state.services.catalog.get_excursion(&id).await?;

    let mut urls = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(e.to_string()))?
    {
        let name = field.file_name().unwrap_or("image").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let url = state
            .services
            .uploads
            .store_image(&name, &content_type, bytes.to_vec())
            .await?;
        urls.push(url);
    }

    if urls.is_empty() {
        return Err(AppError::Validation("No file provided".to_string()));
    }

    state
        .services
        .catalog
        .add_excursion_images(&id, urls.clone())
        .await?;
    Ok(Json(UploadedImages { urls }))
}

#[derive(Deserialize, ToSchema)]
pub struct RemoveImageRequest {
    /// Public URL of the image to detach
    pub url: String,
}

/// Detach a gallery image from an excursion
#[utoipa::path(
    delete,
    path = "/api/excursions/{id}/images",
    tag = "excursions",
    params(("id" = String, Path, description = "Excursion id")),
    request_body = RemoveImageRequest,
    responses(
        (status = 200, description = "Image detached", body = SuccessResponse),
        (status = 404, description = "Excursion not found")
    )
)]
pub async fn remove_excursion_image(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<RemoveImageRequest>,
) -> AppResult<Json<SuccessResponse>> {
    state
        .services
        .catalog
        .remove_excursion_image(&id, &request.url)
        .await?;
    Ok(SuccessResponse::ok())
}
