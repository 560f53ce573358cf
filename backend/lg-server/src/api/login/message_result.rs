use crate::Description;

use http::StatusCode;
use serde::Serialize;

const LOGGED_IN: &str = "You are successfully logged in!";

/// `{"message": {...}}` reply for an accepted login
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResult {
    pub message: Description,
}

impl MessageResult {
    pub fn logged_in() -> Self {
        Self {
            message: Description::new(StatusCode::OK, LOGGED_IN),
        }
    }
}
