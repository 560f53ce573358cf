//! Login REST handler

use crate::{
    AppState, Description, ErrorResult, JsonReply, LoginForm, MessageResult, set_cors_allow_all,
};

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use http::StatusCode;
use log::{debug, info};

/// ANY /login
///
/// Checks the submitted `login`/`password` form fields. The outcome is only
/// reported in the JSON body; the transport status stays 200 unless
/// `mirror_status_code` is enabled.
pub async fn login(State(state): State<AppState>, LoginForm(credentials): LoginForm) -> Response {
    let mirror = state.mirror_status_code;

    let mut response = match state.verifier.verify(&credentials) {
        Ok(()) => {
            info!("Login accepted for '{}'", credentials.login);
            let result = MessageResult::logged_in();
            let status = transport_status(&result.message, mirror);
            JsonReply::new(result).with_status(status).into_response()
        }
        Err(e) => {
            debug!("{}", e);
            let result = ErrorResult::wrong_credentials();
            let status = transport_status(&result.error, mirror);
            JsonReply::new(result).with_status(status).into_response()
        }
    };

    set_cors_allow_all(response.headers_mut());
    response
}

fn transport_status(description: &Description, mirror_status_code: bool) -> StatusCode {
    if mirror_status_code {
        description.status()
    } else {
        StatusCode::OK
    }
}
