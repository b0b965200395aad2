//! API handlers for the Kupola REST endpoints

pub mod auth;
pub mod bookings;
pub mod categories;
pub mod contact;
pub mod excursion_cards;
pub mod excursion_products;
pub mod excursions;
pub mod filters;
pub mod groups;
pub mod guides;
pub mod health;
pub mod openapi;
pub mod tags;
pub mod uploads;

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Request},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use jsonwebtoken::{DecodingKey, Validation};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{error::AppError, AppState};

/// Name of the admin session cookie
pub const SESSION_COOKIE: &str = "kupola_session";

/// Claims carried by the admin session token
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Admin login
    pub sub: String,
    /// Expiry, seconds since epoch
    pub exp: usize,
}

fn decode_session(jar: &CookieJar, secret: &str) -> Result<SessionClaims, AppError> {
    let cookie = jar
        .get(SESSION_COOKIE)
        .ok_or_else(|| AppError::Authentication("Missing session cookie".to_string()))?;

    jsonwebtoken::decode::<SessionClaims>(
        cookie.value(),
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| AppError::Authentication(e.to_string()))
}

/// Extractor for an authenticated admin session
pub struct AdminSession(pub SessionClaims);

#[async_trait]
impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let claims = decode_session(&jar, &state.config.auth.session_secret)?;
        Ok(AdminSession(claims))
    }
}

/// Request boundary for the admin area: anything under /admin except the
/// login path needs a valid session cookie, else the browser is sent to
/// the login page.
pub async fn admin_boundary(
    axum::extract::State(state): axum::extract::State<AppState>,
    jar: CookieJar,
    req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path();
    if path.starts_with("/admin") && path != "/admin/login" {
        if decode_session(&jar, &state.config.auth.session_secret).is_err() {
            return Redirect::to("/admin/login").into_response();
        }
    }
    next.run(req).await
}

/// JSON extractor that runs the payload's `validator` rules, so every
/// resource shares one validation path instead of ad hoc per-route checks.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

/// Uniform body for mutating operations
#[derive(Serialize, utoipa::ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Json<Self> {
        Json(Self { success: true })
    }
}
