use std::sync::Arc;

use async_trait::async_trait;
use chrono::DateTime;
use tokio::sync::RwLock;

use fh_core::ports::{ClockPort, DonationRepositoryError, DonationRepositoryPort};
use fh_core::{DonationId, NewDonation, PersistedDonation, UserId};

pub struct InMemoryDonationRepository {
    rows: RwLock<Vec<PersistedDonation>>,
    clock: Arc<dyn ClockPort>,
}

impl InMemoryDonationRepository {
    pub fn new(clock: Arc<dyn ClockPort>) -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            clock,
        }
    }

    pub async fn count(&self) -> usize {
        self.rows.read().await.len()
    }
}

#[async_trait]
impl DonationRepositoryPort for InMemoryDonationRepository {
    async fn insert(
        &self,
        donation: NewDonation,
    ) -> Result<PersistedDonation, DonationRepositoryError> {
        let now_ms = self.clock.now_ms();
        let created_at = DateTime::from_timestamp_millis(now_ms).ok_or_else(|| {
            DonationRepositoryError::Storage(format!("clock out of range: {}", now_ms))
        })?;
        let row = PersistedDonation::from_new(donation, DonationId::generate(), created_at);
        self.rows.write().await.push(row.clone());
        Ok(row)
    }

    async fn list_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<PersistedDonation>, DonationRepositoryError> {
        let mut rows: Vec<_> = self
            .rows
            .read()
            .await
            .iter()
            .filter(|row| &row.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }
}
