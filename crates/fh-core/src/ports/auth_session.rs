use async_trait::async_trait;

use crate::auth::{AuthSession, AuthUser, OAuthProvider, SecretString};
use crate::ports::errors::AuthError;
use crate::registration::RegistrationForm;

/// The external identity provider together with the locally held session.
#[async_trait]
pub trait AuthSessionPort: Send + Sync {
    /// Creates an account. The display name travels as account metadata.
    async fn sign_up(&self, registration: &RegistrationForm) -> Result<AuthUser, AuthError>;

    /// Signs in with email and password and keeps the resulting session.
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<AuthSession, AuthError>;

    /// URL to redirect the browser to for federated sign-in. The session is
    /// established by the provider's callback, never inline.
    fn federated_sign_in_url(&self, provider: OAuthProvider) -> Result<String, AuthError>;

    /// Revokes the current session on the provider side.
    async fn sign_out(&self) -> Result<(), AuthError>;

    /// The locally held session, if any.
    async fn current_session(&self) -> Result<Option<AuthSession>, AuthError>;

    /// The user of the current session, as confirmed by the provider.
    async fn current_user(&self) -> Result<Option<AuthUser>, AuthError>;

    /// Forgets the locally held session without contacting the provider.
    fn clear_local_session(&self);
}
