use std::sync::Arc;

use axum::{extract::State, Json};
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;
use serde::Serialize;

use crate::model::{service, session::SessionData};

use super::error::ApiError;

#[derive(Serialize)]
pub struct Response {
    user_id: i64,
    issued_at: i64,
    valid_till: i64,
}

pub async fn handler(
    State(data): State<Arc<service::Data>>,
    jar: CookieJar,
) -> Result<Json<Response>, ApiError> {
    tracing::debug!("start validate");
    let cookie = jar
        .get(&data.config.cookie_key)
        .ok_or(ApiError::NoSession())?;
    let serialized = data.signer.verify(cookie.value())?;
    let session: SessionData = serde_json::from_str(&serialized)
        .map_err(|e| ApiError::Server(format!("deserialize session: {}", e)))?;
    tracing::debug!(user_id = session.user_id, "validate");
    let now = Utc::now().timestamp_millis();
    session.check_expired(now)?;
    Ok(Json(Response {
        user_id: session.user_id,
        issued_at: session.issued_at,
        valid_till: session.valid_till,
    }))
}
