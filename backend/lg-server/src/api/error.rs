//! Login endpoint errors
//!
//! Neither variant reaches the client. Both are logged at warn level and the
//! request is answered anyway: a parse failure turns into a rejected login,
//! an encode failure into an empty body.

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoginError {
    /// Form body or query string could not be decoded
    #[error("Form parse error: {message} {location}")]
    FormParse {
        message: String,
        location: ErrorLocation,
    },

    /// JSON serialization of the reply failed
    #[error("Reply encode error: {source} {location}")]
    Encode {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl LoginError {
    #[track_caller]
    pub fn form_parse<S: Into<String>>(message: S) -> Self {
        LoginError::FormParse {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn encode(source: serde_json::Error) -> Self {
        LoginError::Encode {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, LoginError>;
