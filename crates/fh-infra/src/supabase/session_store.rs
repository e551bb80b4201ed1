use std::sync::{PoisonError, RwLock};

use fh_core::{AuthSession, AuthUser, SecretString};

/// The locally held session, shared by the auth and data adapters.
#[derive(Default)]
pub struct SessionStore {
    current: RwLock<Option<AuthSession>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&self, session: AuthSession) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Some(session);
    }

    /// Forgets the session. Returns whether one was held.
    pub fn clear(&self) -> bool {
        self.current
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .is_some()
    }

    /// A copy of the current session.
    pub fn snapshot(&self) -> Option<AuthSession> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(copy_session)
    }

    pub fn access_token(&self) -> Option<SecretString> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|session| SecretString::from(session.access_token.expose()))
    }

    pub fn user(&self) -> Option<AuthUser> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|session| session.user.clone())
    }
}

pub(crate) fn copy_session(session: &AuthSession) -> AuthSession {
    AuthSession {
        access_token: SecretString::from(session.access_token.expose()),
        refresh_token: session
            .refresh_token
            .as_ref()
            .map(|token| SecretString::from(token.expose())),
        expires_at: session.expires_at,
        user: session.user.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fh_core::UserId;

    fn session() -> AuthSession {
        AuthSession {
            access_token: SecretString::from("token-1"),
            refresh_token: Some(SecretString::from("refresh-1")),
            expires_at: None,
            user: AuthUser {
                id: UserId::from("user-1"),
                email: None,
                display_name: None,
            },
        }
    }

    #[test]
    fn holds_and_clears_one_session() {
        let store = SessionStore::new();
        assert!(store.snapshot().is_none());
        assert!(!store.clear());

        store.replace(session());
        assert_eq!(store.access_token().unwrap().expose(), "token-1");
        assert_eq!(store.user().unwrap().id.as_str(), "user-1");
        let copy = store.snapshot().unwrap();
        assert_eq!(copy.refresh_token.unwrap().expose(), "refresh-1");

        assert!(store.clear());
        assert!(store.access_token().is_none());
    }
}
