use http::StatusCode;
use serde::Serialize;

/// Status code and human-readable message shared by every login reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Description {
    pub code: u16,
    pub description: String,
}

impl Description {
    pub fn new(status: StatusCode, description: impl Into<String>) -> Self {
        Self {
            code: status.as_u16(),
            description: description.into(),
        }
    }

    /// Status the embedded code stands for; 500 if the code is out of range.
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}
