use std::sync::Arc;

use tracing::{error, info, info_span, warn, Instrument};

use fh_core::ports::{AuthError, AuthSessionPort};

/// Ends the current session.
///
/// Signing out always leaves the client signed out: the local session is
/// cleared on every path, and a provider reporting that there is no session
/// counts as success.
pub struct SignOut {
    auth: Arc<dyn AuthSessionPort>,
}

impl SignOut {
    pub fn new(auth: Arc<dyn AuthSessionPort>) -> Self {
        Self { auth }
    }

    pub async fn execute(&self) -> Result<(), AuthError> {
        let span = info_span!("usecase.sign_out.execute");
        async {
            let session = match self.auth.current_session().await {
                Ok(session) => session,
                Err(e) => {
                    warn!(error = %e, "could not read local session, treating as absent");
                    None
                }
            };

            if session.is_none() {
                info!("no active session, clearing local state");
                self.auth.clear_local_session();
                return Ok(());
            }

            let result = self.auth.sign_out().await;
            self.auth.clear_local_session();

            match result {
                Ok(()) => {
                    info!("signed out");
                    Ok(())
                }
                Err(AuthError::SessionMissing) => {
                    info!("session already expired, user logged out");
                    Ok(())
                }
                Err(e) => {
                    error!(error = %e, "sign out failed");
                    Err(e)
                }
            }
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::auth::test_support::{session, MockAuth};

    #[tokio::test]
    async fn absent_session_succeeds_without_calling_the_provider() {
        let mut auth = MockAuth::new();
        auth.expect_current_session().returning(|| Ok(None));
        auth.expect_sign_out().times(0);
        auth.expect_clear_local_session().times(1).return_const(());

        assert!(SignOut::new(Arc::new(auth)).execute().await.is_ok());
    }

    #[tokio::test]
    async fn missing_remote_session_is_success() {
        let mut auth = MockAuth::new();
        auth.expect_current_session()
            .returning(|| Ok(Some(session())));
        auth.expect_sign_out()
            .times(1)
            .returning(|| Err(AuthError::SessionMissing));
        auth.expect_clear_local_session().times(1).return_const(());

        assert!(SignOut::new(Arc::new(auth)).execute().await.is_ok());
    }

    #[tokio::test]
    async fn other_errors_are_reported_but_local_state_is_cleared() {
        let mut auth = MockAuth::new();
        auth.expect_current_session()
            .returning(|| Ok(Some(session())));
        auth.expect_sign_out()
            .returning(|| Err(AuthError::Transport("timeout".into())));
        auth.expect_clear_local_session().times(1).return_const(());

        let result = SignOut::new(Arc::new(auth)).execute().await;

        assert_eq!(result, Err(AuthError::Transport("timeout".into())));
    }

    #[tokio::test]
    async fn unreadable_session_counts_as_absent() {
        let mut auth = MockAuth::new();
        auth.expect_current_session()
            .returning(|| Err(AuthError::Decode("corrupt".into())));
        auth.expect_sign_out().times(0);
        auth.expect_clear_local_session().times(1).return_const(());

        assert!(SignOut::new(Arc::new(auth)).execute().await.is_ok());
    }
}
