use std::sync::Arc;

use tracing::warn;

use fh_core::ports::AuthSessionPort;
use fh_core::AuthUser;

/// The signed-in user, if any.
pub struct CurrentUser {
    auth: Arc<dyn AuthSessionPort>,
}

impl CurrentUser {
    pub fn new(auth: Arc<dyn AuthSessionPort>) -> Self {
        Self { auth }
    }

    /// Returns `None` when nobody is signed in or the provider cannot
    /// confirm the session; callers then treat the visitor as signed out.
    pub async fn execute(&self) -> Option<AuthUser> {
        match self.auth.current_user().await {
            Ok(user) => user,
            Err(e) => {
                warn!(error = %e, "could not resolve current user");
                None
            }
        }
    }
}
