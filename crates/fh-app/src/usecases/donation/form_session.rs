use std::sync::Arc;

use tracing::debug;

use fh_core::ports::{Notice, NotificationPort};
use fh_core::{
    AuthUser, DonationDraftController, DraftError, ItemField, ItemKey, PersistedDonation,
};

use super::{SubmitDonation, SubmitOutcome};

/// Whether the donation page shows the form or the thank-you screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Confirmed(PersistedDonation),
}

/// One donation form from open to close: the draft, its submit guard and
/// the notices raised along the way.
pub struct DonationFormSession {
    controller: DonationDraftController,
    submit: SubmitDonation,
    notifier: Arc<dyn NotificationPort>,
    phase: FormPhase,
}

impl DonationFormSession {
    pub fn new(submit: SubmitDonation, notifier: Arc<dyn NotificationPort>) -> Self {
        Self {
            controller: DonationDraftController::new(),
            submit,
            notifier,
            phase: FormPhase::Editing,
        }
    }

    pub fn controller(&self) -> &DonationDraftController {
        &self.controller
    }

    /// Direct access for field edits that cannot fail.
    pub fn controller_mut(&mut self) -> &mut DonationDraftController {
        &mut self.controller
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.submit.is_in_flight()
    }

    /// Adds a line item, warning the user when the item cap is reached.
    pub fn add_item(&mut self) -> Option<ItemKey> {
        match self.controller.add_item() {
            Ok(key) => Some(key),
            Err(e) => {
                self.notifier
                    .notify(Notice::error("Maximum items reached", e.to_string()));
                None
            }
        }
    }

    pub fn remove_item(&mut self, key: ItemKey) -> Result<(), DraftError> {
        self.controller.remove_item(key)
    }

    pub fn update_item(
        &mut self,
        key: ItemKey,
        field: ItemField,
        value: &str,
    ) -> Result<(), DraftError> {
        self.controller.update_item(key, field, value)
    }

    /// Submits the current draft and reacts to the outcome.
    ///
    /// The outcome is returned so the caller can navigate to sign-in on
    /// [`SubmitOutcome::AuthRequired`]; no notice is raised for it. Once
    /// confirmed, the form stays inert until [`Self::start_new_donation`].
    pub async fn submit(&mut self, user: Option<&AuthUser>) -> SubmitOutcome {
        if let FormPhase::Confirmed(row) = &self.phase {
            debug!(donation_id = %row.id, "submit ignored on confirmed form");
            return SubmitOutcome::AlreadySubmitted;
        }

        self.controller.clear_errors();
        let outcome = self.submit.execute(self.controller.draft(), user).await;

        match &outcome {
            SubmitOutcome::Submitted(row) => {
                self.notifier.notify(Notice::success(
                    "Donation Submitted!",
                    "Thank you for your generosity. We'll contact you soon for pickup.",
                ));
                self.phase = FormPhase::Confirmed(row.clone());
            }
            SubmitOutcome::ValidationFailed(errors) => {
                if let Some(first) = errors.first() {
                    self.notifier
                        .notify(Notice::error("Validation Error", first.message));
                }
                self.controller.record_errors(errors.clone());
            }
            SubmitOutcome::AuthRequired => {
                debug!("submit without a signed-in user");
            }
            SubmitOutcome::PersistenceFailed(_) => {
                self.notifier.notify(Notice::error(
                    "Submission failed",
                    "Unable to submit donation. Please try again.",
                ));
            }
            SubmitOutcome::AlreadyInFlight => {
                debug!("submit pressed while a submit is running");
            }
            SubmitOutcome::AlreadySubmitted => {}
        }

        outcome
    }

    /// Leaves the thank-you screen with a blank form.
    pub fn start_new_donation(&mut self) {
        self.controller.reset();
        self.phase = FormPhase::Editing;
    }
}
