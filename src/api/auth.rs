//! Admin session endpoints

use axum::{extract::State, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use jsonwebtoken::{EncodingKey, Header};
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    AppState,
};

use super::{AdminSession, SessionClaims, SuccessResponse, SESSION_COOKIE};

#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    pub login: String,
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct SessionInfo {
    pub login: String,
    /// Expiry, seconds since epoch
    pub expires_at: usize,
}

fn constant_time_eq(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Log into the admin area; sets the session cookie
#[utoipa::path(
    post,
    path = "/admin/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session established", body = SuccessResponse),
        (status = 401, description = "Bad credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> AppResult<(CookieJar, Json<SuccessResponse>)> {
    let auth = &state.config.auth;

    let login_ok = constant_time_eq(&request.login, &auth.admin_login);
    let password_ok = constant_time_eq(&request.password, &auth.admin_password);
    if !(login_ok && password_ok) {
        return Err(AppError::Authentication("Bad credentials".to_string()));
    }

    let exp = chrono::Utc::now().timestamp() as usize + auth.session_ttl_hours as usize * 3600;
    let claims = SessionClaims {
        sub: request.login,
        exp,
    };
    let token = jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(auth.session_secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(e.to_string()))?;

    let cookie = Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .build();

    Ok((jar.add(cookie), Json(SuccessResponse { success: true })))
}

/// Log out of the admin area; clears the session cookie
#[utoipa::path(
    post,
    path = "/admin/logout",
    tag = "auth",
    responses(
        (status = 200, description = "Session cleared", body = SuccessResponse)
    )
)]
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<SuccessResponse>) {
    (
        jar.remove(Cookie::from(SESSION_COOKIE)),
        Json(SuccessResponse { success: true }),
    )
}

/// Current admin session
#[utoipa::path(
    get,
    path = "/admin/session",
    tag = "auth",
    responses(
        (status = 200, description = "Session details", body = SessionInfo),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn session(AdminSession(claims): AdminSession) -> Json<SessionInfo> {
    Json(SessionInfo {
        login: claims.sub,
        expires_at: claims.exp,
    })
}
