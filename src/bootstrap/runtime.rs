//! # Use Case Runtime
//!
//! [`AppRuntime`] owns the wired [`AppDeps`]; [`UseCases`] hands out use
//! cases and form sessions with their ports already connected, so callers
//! never touch the ports directly.
//!
//! ```rust,no_run
//! # async fn example(runtime: &feedhope::bootstrap::AppRuntime) {
//! let user = runtime.usecases().current_user().execute().await;
//! let state = runtime.usecases().track_session().enter(user.as_ref()).await;
//! # let _ = state;
//! # }
//! ```

use fh_app::usecases::{
    CurrentUser, DonationFormSession, ListMyDonations, RegisterAccount, RegistrationFormSession,
    SignIn, SignOut, SubmitDonation, TrackSession,
};
use fh_app::AppDeps;
use fh_core::AppConfig;

use super::wiring::{wire_dependencies, Backend, WiringError};

pub struct AppRuntime {
    pub deps: AppDeps,
    backend: Backend,
}

impl AppRuntime {
    pub fn new(deps: AppDeps, backend: Backend) -> Self {
        Self { deps, backend }
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    pub fn usecases(&self) -> UseCases<'_> {
        UseCases::new(self)
    }
}

/// Wires dependencies for `config` and wraps them in a runtime.
pub fn create_runtime(config: &AppConfig) -> Result<AppRuntime, WiringError> {
    let (deps, backend) = wire_dependencies(config)?;
    Ok(AppRuntime::new(deps, backend))
}

/// Use case accessor for [`AppRuntime`].
pub struct UseCases<'a> {
    runtime: &'a AppRuntime,
}

impl<'a> UseCases<'a> {
    pub fn new(runtime: &'a AppRuntime) -> Self {
        Self { runtime }
    }

    pub fn submit_donation(&self) -> SubmitDonation {
        SubmitDonation::new(
            self.runtime.deps.donations.clone(),
            self.runtime.deps.clock.clone(),
        )
    }

    /// A fresh donation form with one blank item.
    pub fn donation_form(&self) -> DonationFormSession {
        DonationFormSession::new(self.submit_donation(), self.runtime.deps.notifier.clone())
    }

    pub fn list_my_donations(&self) -> ListMyDonations {
        ListMyDonations::new(self.runtime.deps.donations.clone())
    }

    pub fn track_session(&self) -> TrackSession {
        TrackSession::new(
            self.list_my_donations(),
            self.runtime.deps.notifier.clone(),
        )
    }

    pub fn register_account(&self) -> RegisterAccount {
        RegisterAccount::new(self.runtime.deps.auth.clone())
    }

    pub fn registration_form(&self) -> RegistrationFormSession {
        RegistrationFormSession::new(
            self.register_account(),
            self.runtime.deps.notifier.clone(),
        )
    }

    pub fn sign_in(&self) -> SignIn {
        SignIn::new(self.runtime.deps.auth.clone())
    }

    pub fn sign_out(&self) -> SignOut {
        SignOut::new(self.runtime.deps.auth.clone())
    }

    pub fn current_user(&self) -> CurrentUser {
        CurrentUser::new(self.runtime.deps.auth.clone())
    }
}
