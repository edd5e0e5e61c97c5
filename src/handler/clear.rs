use std::sync::Arc;

use axum::extract::State;
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::model::service;

use super::error::ApiError;

pub async fn handler(
    State(data): State<Arc<service::Data>>,
    jar: CookieJar,
) -> Result<CookieJar, ApiError> {
    tracing::debug!("clear session");
    let cookie = Cookie::build((data.config.cookie_key.clone(), ""))
        .path("/")
        .build();
    Ok(jar.remove(cookie))
}
