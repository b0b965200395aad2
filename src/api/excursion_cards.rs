//! Populated card reads for the public site

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult, models::excursion_card::ExcursionCardDetail, AppState,
};

/// Excursion card with its linked product, categories and tags resolved
#[utoipa::path(
    get,
    path = "/api/excursion-cards/{id}",
    tag = "excursions",
    params(("id" = String, Path, description = "Excursion card id")),
    responses(
        (status = 200, description = "Populated card", body = ExcursionCardDetail),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Card not found")
    )
)]
pub async fn card_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ExcursionCardDetail>> {
    let detail = state.services.catalog.card_detail(&id).await?;
    Ok(Json(detail))
}
