//! Contact form intake

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::booking::{Booking, ContactRequest},
    AppState,
};

use super::ValidatedJson;

/// Contact form submission, stored in the booking inbox
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactRequest,
    responses(
        (status = 201, description = "Request recorded", body = Booking),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_contact(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<ContactRequest>,
) -> AppResult<(StatusCode, Json<Booking>)> {
    let booking = state.services.sales.create_contact(data).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}
