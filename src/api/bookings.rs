//! Booking intake and back-office booking management

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::{
    error::AppResult,
    models::booking::{Booking, BookingStatus, CreateBooking, UpdateBooking},
    AppState,
};

use super::{SuccessResponse, ValidatedJson};

#[derive(Deserialize)]
pub struct BookingsQuery {
    /// Restrict to one status
    pub status: Option<BookingStatus>,
}

/// List bookings, newest first
#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = "bookings",
    params(("status" = Option<String>, Query, description = "Booking status filter")),
    responses(
        (status = 200, description = "Booking list", body = Vec<Booking>)
    )
)]
pub async fn list_bookings(
    State(state): State<AppState>,
    Query(query): Query<BookingsQuery>,
) -> AppResult<Json<Vec<Booking>>> {
    let bookings = state.services.sales.list_bookings(query.status).await?;
    Ok(Json(bookings))
}

/// Get a booking by id
#[utoipa::path(
    get,
    path = "/api/bookings/{id}",
    tag = "bookings",
    params(("id" = String, Path, description = "Booking id")),
    responses(
        (status = 200, description = "Booking details", body = Booking),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Booking>> {
    let booking = state.services.sales.get_booking(&id).await?;
    Ok(Json(booking))
}

/// Public booking intake; every new booking starts with status `new`
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = "bookings",
    request_body = CreateBooking,
    responses(
        (status = 201, description = "Booking recorded", body = Booking),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_booking(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<CreateBooking>,
) -> AppResult<(StatusCode, Json<Booking>)> {
    let booking = state.services.sales.create_booking(data).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

/// Update a booking, typically its status
#[utoipa::path(
    put,
    path = "/api/bookings/{id}",
    tag = "bookings",
    params(("id" = String, Path, description = "Booking id")),
    request_body = UpdateBooking,
    responses(
        (status = 200, description = "Booking updated", body = SuccessResponse),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn update_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(data): Json<UpdateBooking>,
) -> AppResult<Json<SuccessResponse>> {
    state.services.sales.update_booking(&id, data).await?;
    Ok(SuccessResponse::ok())
}

/// Delete a booking
#[utoipa::path(
    delete,
    path = "/api/bookings/{id}",
    tag = "bookings",
    params(("id" = String, Path, description = "Booking id")),
    responses(
        (status = 200, description = "Booking deleted", body = SuccessResponse),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn delete_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<SuccessResponse>> {
    state.services.sales.delete_booking(&id).await?;
    Ok(SuccessResponse::ok())
}
