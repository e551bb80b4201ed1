use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, error, info, info_span, warn, Instrument};

use fh_core::ports::{ClockPort, DonationRepositoryPort};
use fh_core::validation::{sanitize_donation_draft, validate_donation};
use fh_core::{AuthUser, DonationDraft, FieldErrors, NewDonation, PersistedDonation};

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The donation was stored; carries the row as returned by the datastore.
    Submitted(PersistedDonation),
    /// The draft failed validation; nothing was sent.
    ValidationFailed(FieldErrors),
    /// No signed-in user; nothing was validated or sent.
    AuthRequired,
    /// The insert failed. The draft is untouched so the user can retry.
    PersistenceFailed(String),
    /// Another submit of the same form has not finished yet.
    AlreadyInFlight,
    /// The form is showing its confirmation; nothing was sent. Returned by
    /// [`DonationFormSession`](super::DonationFormSession) only.
    AlreadySubmitted,
}

/// Validates a donation draft and, if it passes, writes it on behalf of the
/// signed-in user.
///
/// One instance belongs to one form. While a submit is awaiting the
/// datastore, further calls return [`SubmitOutcome::AlreadyInFlight`].
pub struct SubmitDonation {
    repository: Arc<dyn DonationRepositoryPort>,
    clock: Arc<dyn ClockPort>,
    in_flight: AtomicBool,
}

impl SubmitDonation {
    pub fn new(repository: Arc<dyn DonationRepositoryPort>, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            repository,
            clock,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Submits `draft` for `user`. The draft itself is never modified.
    pub async fn execute(&self, draft: &DonationDraft, user: Option<&AuthUser>) -> SubmitOutcome {
        let Some(user) = user else {
            info!("donation submit without a signed-in user");
            return SubmitOutcome::AuthRequired;
        };

        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            warn!(user_id = %user.id, "donation submit ignored: previous submit still running");
            return SubmitOutcome::AlreadyInFlight;
        };

        let span = info_span!(
            "usecase.submit_donation.execute",
            user_id = %user.id,
            item_count = draft.items.len(),
        );
        async {
            let sanitized = sanitize_donation_draft(draft);
            let form = match validate_donation(&sanitized, self.clock.today()) {
                Ok(form) => form,
                Err(errors) => {
                    debug!(error_count = errors.len(), "donation rejected by validation");
                    return SubmitOutcome::ValidationFailed(errors);
                }
            };

            let donation = NewDonation::from_form(form, user.id.clone());
            match self.repository.insert(donation).await {
                Ok(row) => {
                    info!(donation_id = %row.id, "donation submitted");
                    SubmitOutcome::Submitted(row)
                }
                Err(e) => {
                    error!(error = %e, "failed to persist donation");
                    SubmitOutcome::PersistenceFailed(e.to_string())
                }
            }
        }
        .instrument(span)
        .await
    }
}

/// Holds the in-flight flag for the duration of one submit, including when
/// the submitting future is dropped half-way.
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
