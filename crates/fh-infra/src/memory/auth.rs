use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use fh_core::ports::{AuthError, AuthSessionPort};
use fh_core::{AuthSession, AuthUser, OAuthProvider, RegistrationForm, SecretString, UserId};

use crate::supabase::SessionStore;

struct Account {
    user: AuthUser,
    password: SecretString,
}

/// Accounts and sessions held in process. Email addresses are matched
/// case-insensitively; federated sign-in is not available.
pub struct InMemoryAuth {
    accounts: Mutex<HashMap<String, Account>>,
    store: Arc<SessionStore>,
}

impl InMemoryAuth {
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self {
            accounts: Mutex::new(HashMap::new()),
            store,
        }
    }

    fn open_session(&self, user: &AuthUser) -> AuthSession {
        let token = Uuid::new_v4().to_string();
        let session = |token: &str| AuthSession {
            access_token: SecretString::from(token),
            refresh_token: None,
            expires_at: None,
            user: user.clone(),
        };
        self.store.replace(session(&token));
        session(&token)
    }
}

#[async_trait]
impl AuthSessionPort for InMemoryAuth {
    async fn sign_up(&self, registration: &RegistrationForm) -> Result<AuthUser, AuthError> {
        let key = registration.email.to_lowercase();
        let mut accounts = self.accounts.lock().await;
        if accounts.contains_key(&key) {
            return Err(AuthError::Rejected {
                status: 422,
                message: "User already registered".to_string(),
            });
        }

        let user = AuthUser {
            id: UserId::generate(),
            email: Some(registration.email.clone()),
            display_name: Some(registration.name.clone()),
        };
        accounts.insert(
            key,
            Account {
                user: user.clone(),
                password: SecretString::from(registration.password.expose()),
            },
        );
        drop(accounts);

        self.open_session(&user);
        debug!(user_id = %user.id, "in-memory account created");
        Ok(user)
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<AuthSession, AuthError> {
        let accounts = self.accounts.lock().await;
        let user = accounts
            .get(&email.to_lowercase())
            .filter(|account| account.password.expose() == password.expose())
            .map(|account| account.user.clone())
            .ok_or(AuthError::InvalidCredentials)?;
        drop(accounts);

        Ok(self.open_session(&user))
    }

    fn federated_sign_in_url(&self, provider: OAuthProvider) -> Result<String, AuthError> {
        Err(AuthError::Rejected {
            status: 400,
            message: format!("{} sign-in is not available offline", provider.as_str()),
        })
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        if self.store.access_token().is_none() {
            return Err(AuthError::SessionMissing);
        }
        Ok(())
    }

    async fn current_session(&self) -> Result<Option<AuthSession>, AuthError> {
        Ok(self.store.snapshot())
    }

    async fn current_user(&self) -> Result<Option<AuthUser>, AuthError> {
        Ok(self.store.user())
    }

    fn clear_local_session(&self) {
        self.store.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(email: &str, password: &str) -> RegistrationForm {
        RegistrationForm {
            name: "Ada".to_string(),
            email: email.to_string(),
            password: SecretString::from(password),
        }
    }

    #[tokio::test]
    async fn sign_up_opens_a_session() {
        let auth = InMemoryAuth::new(Arc::new(SessionStore::new()));

        let user = auth.sign_up(&form("ada@example.com", "secret1")).await.unwrap();

        assert_eq!(user.display_name.as_deref(), Some("Ada"));
        assert_eq!(auth.current_user().await.unwrap(), Some(user));
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let auth = InMemoryAuth::new(Arc::new(SessionStore::new()));
        auth.sign_up(&form("ada@example.com", "secret1")).await.unwrap();

        let err = auth
            .sign_up(&form("ADA@example.com", "other12"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::Rejected { status: 422, .. }));
    }

    #[tokio::test]
    async fn password_sign_in_checks_credentials() {
        let auth = InMemoryAuth::new(Arc::new(SessionStore::new()));
        auth.sign_up(&form("ada@example.com", "secret1")).await.unwrap();
        auth.clear_local_session();

        let err = auth
            .sign_in_with_password("ada@example.com", &SecretString::from("wrong!"))
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
        assert_eq!(auth.current_user().await.unwrap(), None);

        let session = auth
            .sign_in_with_password("Ada@Example.com", &SecretString::from("secret1"))
            .await
            .unwrap();
        assert_eq!(session.user.email.as_deref(), Some("ada@example.com"));
        assert!(auth.current_session().await.unwrap().is_some());
    }

    #[tokio::test]
    async fn sign_out_without_session_reports_missing() {
        let auth = InMemoryAuth::new(Arc::new(SessionStore::new()));

        assert_eq!(auth.sign_out().await, Err(AuthError::SessionMissing));
        assert!(auth.federated_sign_in_url(OAuthProvider::Google).is_err());
    }
}
