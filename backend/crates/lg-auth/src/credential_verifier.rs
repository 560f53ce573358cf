use crate::{Credentials, Result as AuthErrorResult};

/// Decides whether submitted credentials are accepted.
///
/// Handlers hold this behind an `Arc<dyn CredentialVerifier>` so the accepted
/// credential set can be swapped without touching request handling.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, credentials: &Credentials) -> AuthErrorResult<()>;
}
