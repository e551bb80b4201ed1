use serde::Serialize;

use super::{PersistedDonation, StatusBadge};

/// Aggregate counters shown above a user's donation list.
///
/// Counts follow the displayed badge, so statuses the client does not know
/// are counted as pending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DonationSummary {
    pub total_donations: usize,
    pub total_items: usize,
    pub delivered: usize,
    pub in_transit: usize,
    pub pending: usize,
}

impl DonationSummary {
    pub fn from_donations(donations: &[PersistedDonation]) -> Self {
        donations
            .iter()
            .fold(Self::default(), |mut summary, donation| {
                summary.total_donations += 1;
                summary.total_items += donation.items.len();
                match donation.status.badge() {
                    StatusBadge::Delivered => summary.delivered += 1,
                    StatusBadge::InTransit => summary.in_transit += 1,
                    StatusBadge::Pending | StatusBadge::Confirmed => summary.pending += 1,
                }
                summary
            })
    }
}
