use std::sync::Arc;

use axum::{
    debug_handler,
    extract::{self, State},
    Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::model::{service, session::SessionData};

use super::error::ApiError;

#[derive(Serialize, Clone, Deserialize)]
pub struct Request {
    user_id: Option<i64>,
}

#[derive(Serialize)]
pub struct Response {
    user_id: i64,
    valid_till: i64,
}

#[debug_handler]
pub async fn handler(
    State(data): State<Arc<service::Data>>,
    jar: CookieJar,
    Json(payload): Json<Request>,
) -> Result<(CookieJar, extract::Json<Response>), ApiError> {
    let user_id = payload.user_id.ok_or_else(|| {
        ApiError::BadRequest("no user_id".to_string(), "user_id is required".to_string())
    })?;
    tracing::debug!(user_id = user_id, "issuing session");

    let cfg = &data.config;
    let now = Utc::now().timestamp_millis();
    let session = SessionData {
        user_id,
        issued_at: now,
        valid_till: now + cfg.session_timeout,
    };
    let serialized = serde_json::to_string(&session)
        .map_err(|e| ApiError::Server(format!("serialize session: {}", e)))?;
    let sealed = data.signer.sign(&serialized);

    tracing::trace!(user_id = user_id, "setting cookie");
    // browser-session cookie, expiry travels inside the signed payload
    let cookie = Cookie::build((cfg.cookie_key.clone(), sealed))
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .build();
    let response = Response {
        user_id,
        valid_till: session.valid_till,
    };
    Ok((jar.add(cookie), Json(response)))
}
