use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};

use fh_core::ports::{AuthSessionPort, Notice, NotificationPort};
use fh_core::validation::{sanitize_registration_draft, validate_registration};
use fh_core::{AuthUser, FieldErrors, RegistrationDraft, RegistrationDraftController};

#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("registration form has invalid fields")]
    Validation(FieldErrors),

    /// Any identity provider failure, including an already registered email.
    #[error("Unable to create account. Please try again.")]
    Failed,
}

/// Creates an account with email and password.
pub struct RegisterAccount {
    auth: Arc<dyn AuthSessionPort>,
}

impl RegisterAccount {
    pub fn new(auth: Arc<dyn AuthSessionPort>) -> Self {
        Self { auth }
    }

    pub async fn execute(&self, draft: &RegistrationDraft) -> Result<AuthUser, RegisterError> {
        let sanitized = sanitize_registration_draft(draft);
        let form = validate_registration(&sanitized).map_err(RegisterError::Validation)?;

        let span = info_span!("usecase.register_account.execute");
        async {
            let user = self.auth.sign_up(&form).await.map_err(|e| {
                warn!(error = %e, "sign-up rejected");
                RegisterError::Failed
            })?;
            info!(user_id = %user.id, "account created");
            Ok(user)
        }
        .instrument(span)
        .await
    }
}

/// The registration page: draft, field errors and notices.
pub struct RegistrationFormSession {
    controller: RegistrationDraftController,
    register: RegisterAccount,
    notifier: Arc<dyn NotificationPort>,
}

impl RegistrationFormSession {
    pub fn new(register: RegisterAccount, notifier: Arc<dyn NotificationPort>) -> Self {
        Self {
            controller: RegistrationDraftController::new(),
            register,
            notifier,
        }
    }

    pub fn controller(&self) -> &RegistrationDraftController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut RegistrationDraftController {
        &mut self.controller
    }

    /// Registers the drafted account. On success the caller navigates to
    /// the donation page.
    pub async fn submit(&mut self) -> Option<AuthUser> {
        self.controller.clear_errors();
        let result = self.register.execute(self.controller.draft()).await;
        match result {
            Ok(user) => {
                self.notifier.notify(Notice::success(
                    "Welcome to FeedHope!",
                    "Your account has been created successfully.",
                ));
                Some(user)
            }
            Err(RegisterError::Validation(errors)) => {
                if let Some(first) = errors.first() {
                    self.notifier
                        .notify(Notice::error("Validation Error", first.message));
                }
                self.controller.record_errors(errors);
                None
            }
            Err(e @ RegisterError::Failed) => {
                self.notifier
                    .notify(Notice::error("Registration failed", e.to_string()));
                None
            }
        }
    }
}
