use lg_auth::{CredentialVerifier, StaticCredentials};
use lg_config::LoginConfig;

use std::sync::Arc;

/// Shared, read-only state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub verifier: Arc<dyn CredentialVerifier>,
    /// Answer with the embedded code as transport status instead of 200
    pub mirror_status_code: bool,
}

impl AppState {
    pub fn new(verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self {
            verifier,
            mirror_status_code: false,
        }
    }

    pub fn from_config(login: &LoginConfig) -> Self {
        Self {
            verifier: Arc::new(StaticCredentials::new(
                login.username.clone(),
                login.password.clone(),
            )),
            mirror_status_code: login.mirror_status_code,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(StaticCredentials::default()))
    }
}
