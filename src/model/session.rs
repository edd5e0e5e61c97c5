use serde::{Deserialize, Serialize};

use crate::handler::error::ApiError;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SessionData {
    pub user_id: i64,
    pub issued_at: i64,  // Unix timestamp
    pub valid_till: i64, // Unix timestamp
}

impl SessionData {
    pub fn check_expired(&self, now: i64) -> Result<(), ApiError> {
        if self.valid_till < now {
            return Err(ApiError::ExpiredSession());
        }
        Ok(())
    }
}
