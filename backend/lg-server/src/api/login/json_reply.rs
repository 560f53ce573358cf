use crate::LoginError;

use axum::response::{IntoResponse, Response};
use http::{HeaderValue, StatusCode, header};
use log::warn;
use serde::Serialize;

const APPLICATION_JSON: &str = "application/json";

/// Best-effort JSON response.
///
/// Unlike `axum::Json`, an encode failure keeps the chosen status and sends
/// an empty body; the failure only goes to the log.
#[derive(Debug)]
pub struct JsonReply<T> {
    status: StatusCode,
    body: T,
}

impl<T: Serialize> JsonReply<T> {
    pub fn new(body: T) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }
}

impl<T: Serialize> IntoResponse for JsonReply<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.body) {
            Ok(bytes) => (
                self.status,
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static(APPLICATION_JSON),
                )],
                bytes,
            )
                .into_response(),
            Err(source) => {
                warn!("{}", LoginError::encode(source));
                self.status.into_response()
            }
        }
    }
}
