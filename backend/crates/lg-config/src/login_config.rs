use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_LOGIN_PASSWORD, DEFAULT_LOGIN_USERNAME,
    DEFAULT_MIRROR_STATUS_CODE,
};

use serde::Deserialize;

/// The single credential pair accepted by `/login`.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct LoginConfig {
    pub username: String,
    pub password: String,
    /// Set the transport status to the code embedded in the JSON body
    /// instead of always answering 200.
    pub mirror_status_code: bool,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            username: String::from(DEFAULT_LOGIN_USERNAME),
            password: String::from(DEFAULT_LOGIN_PASSWORD),
            mirror_status_code: DEFAULT_MIRROR_STATUS_CODE,
        }
    }
}

// Password stays out of Debug output
impl std::fmt::Debug for LoginConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("mirror_status_code", &self.mirror_status_code)
            .finish()
    }
}

impl LoginConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.username.is_empty() {
            return Err(ConfigError::login("login.username cannot be empty"));
        }

        if self.password.is_empty() {
            return Err(ConfigError::login("login.password cannot be empty"));
        }

        Ok(())
    }
}
