use crate::Description;

use http::StatusCode;
use serde::Serialize;

const WRONG_CREDENTIALS: &str = "Wrong login or password";

/// `{"error": {...}}` reply for a rejected login
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResult {
    pub error: Description,
}

impl ErrorResult {
    pub fn wrong_credentials() -> Self {
        Self {
            error: Description::new(StatusCode::UNAUTHORIZED, WRONG_CREDENTIALS),
        }
    }
}
