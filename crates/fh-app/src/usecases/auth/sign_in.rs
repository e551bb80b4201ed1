use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};

use fh_core::ports::{AuthError, AuthSessionPort};
use fh_core::{AuthSession, OAuthProvider, SecretString};

pub struct SignIn {
    auth: Arc<dyn AuthSessionPort>,
}

impl SignIn {
    pub fn new(auth: Arc<dyn AuthSessionPort>) -> Self {
        Self { auth }
    }

    /// Signs in with email and password.
    pub async fn with_password(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<AuthSession, AuthError> {
        let email = email.trim();
        let span = info_span!("usecase.sign_in.with_password");
        async {
            let session = self
                .auth
                .sign_in_with_password(email, password)
                .await
                .inspect_err(|e| warn!(error = %e, "password sign-in failed"))?;
            info!(user_id = %session.user.id, "signed in");
            Ok(session)
        }
        .instrument(span)
        .await
    }

    /// Where to send the browser for federated sign-in. There is no inline
    /// result; the provider's callback establishes the session.
    pub fn with_provider(&self, provider: OAuthProvider) -> Result<String, AuthError> {
        let url = self.auth.federated_sign_in_url(provider)?;
        info!(provider = provider.as_str(), "redirecting to identity provider");
        Ok(url)
    }
}
