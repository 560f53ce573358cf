pub mod credential_verifier;
pub mod credentials;
pub mod error;
pub mod static_credentials;

pub use credential_verifier::CredentialVerifier;
pub use credentials::Credentials;
pub use error::{AuthError, Result};
pub use static_credentials::StaticCredentials;
