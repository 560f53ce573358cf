use crate::{AuthError, CredentialVerifier, Credentials, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

const DEFAULT_LOGIN: &str = "human";
const DEFAULT_PASSWORD: &str = "iamnotbot";

/// Accepts exactly one login/password pair
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    accepted: Credentials,
}

impl StaticCredentials {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            accepted: Credentials::new(login, password),
        }
    }
}

impl Default for StaticCredentials {
    fn default() -> Self {
        Self::new(DEFAULT_LOGIN, DEFAULT_PASSWORD)
    }
}

impl CredentialVerifier for StaticCredentials {
    /// Exact, case-sensitive match on both fields
    #[track_caller]
    fn verify(&self, credentials: &Credentials) -> AuthErrorResult<()> {
        if credentials.login != self.accepted.login
            || credentials.password != self.accepted.password
        {
            return Err(AuthError::InvalidCredentials {
                login: credentials.login.clone(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
