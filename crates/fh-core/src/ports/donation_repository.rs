use async_trait::async_trait;

use crate::donation::{NewDonation, PersistedDonation};
use crate::ids::UserId;
use crate::ports::errors::DonationRepositoryError;

/// The `donations` collection of the remote datastore.
///
/// Writes and reads are authorized by the adapter with the current session;
/// row-level access control is the datastore's business.
#[async_trait]
pub trait DonationRepositoryPort: Send + Sync {
    /// Inserts one donation and returns the stored row with its assigned
    /// `id` and `created_at`.
    async fn insert(
        &self,
        donation: NewDonation,
    ) -> Result<PersistedDonation, DonationRepositoryError>;

    /// All donations of `user_id`, newest first.
    async fn list_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<PersistedDonation>, DonationRepositoryError>;
}
