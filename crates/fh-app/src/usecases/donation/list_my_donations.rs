use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, error, info_span, Instrument};

use fh_core::ports::{DonationRepositoryError, DonationRepositoryPort, Notice, NotificationPort};
use fh_core::{AuthUser, DonationSummary, PersistedDonation};

/// What the track page shows once loading has finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackView {
    /// Nobody is signed in; no query was issued.
    SignedOut,
    /// Signed in without any donations yet.
    Empty,
    /// Donations newest first, with their aggregate counters.
    Donations {
        donations: Vec<PersistedDonation>,
        summary: DonationSummary,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum TrackError {
    #[error("failed to load donations: {0}")]
    Repository(#[from] DonationRepositoryError),
}

/// Lists the signed-in user's donations.
pub struct ListMyDonations {
    repository: Arc<dyn DonationRepositoryPort>,
}

impl ListMyDonations {
    pub fn new(repository: Arc<dyn DonationRepositoryPort>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, user: Option<&AuthUser>) -> Result<TrackView, TrackError> {
        let Some(user) = user else {
            return Ok(TrackView::SignedOut);
        };

        let span = info_span!("usecase.list_my_donations.execute", user_id = %user.id);
        async {
            let mut donations = self.repository.list_by_user(&user.id).await?;
            if donations.is_empty() {
                return Ok(TrackView::Empty);
            }

            // Stable, so rows with equal timestamps keep the datastore's order.
            donations.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            let summary = DonationSummary::from_donations(&donations);
            debug!(count = donations.len(), "donations loaded");
            Ok(TrackView::Donations { donations, summary })
        }
        .instrument(span)
        .await
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackState {
    Loading,
    Ready(TrackView),
    Failed(String),
}

/// The track page's state across visits.
///
/// Every visit bumps a generation counter; a load that completes after the
/// page was left or re-entered is discarded, including its failure notice.
pub struct TrackSession {
    usecase: ListMyDonations,
    notifier: Arc<dyn NotificationPort>,
    generation: AtomicU64,
    state: Mutex<TrackState>,
}

impl TrackSession {
    pub fn new(usecase: ListMyDonations, notifier: Arc<dyn NotificationPort>) -> Self {
        Self {
            usecase,
            notifier,
            generation: AtomicU64::new(0),
            state: Mutex::new(TrackState::Loading),
        }
    }

    /// Enters the page and loads the donations of `user`.
    ///
    /// Returns the state after this load, which is the current state if the
    /// load went stale.
    pub async fn enter(&self, user: Option<&AuthUser>) -> TrackState {
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        *self.state.lock().await = TrackState::Loading;

        let next = match self.usecase.execute(user).await {
            Ok(view) => TrackState::Ready(view),
            Err(e) => {
                error!(error = %e, "track page load failed");
                TrackState::Failed(e.to_string())
            }
        };

        let mut state = self.state.lock().await;
        if self.generation.load(Ordering::Acquire) != generation {
            debug!(generation, "discarding stale donation list");
            return state.clone();
        }
        if matches!(next, TrackState::Failed(_)) {
            self.notifier.notify(Notice::error(
                "Failed to load donations",
                "Unable to load your donations. Please try again.",
            ));
        }
        *state = next.clone();
        next
    }

    /// Leaves the page; an in-flight load will not update the state.
    pub fn leave(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
    }

    pub async fn state(&self) -> TrackState {
        self.state.lock().await.clone()
    }
}
