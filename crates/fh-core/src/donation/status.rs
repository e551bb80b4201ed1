use serde::{Deserialize, Serialize};

/// Lifecycle of a persisted donation.
///
/// Advanced by operators, never by the client. Values the client does not
/// recognise are kept verbatim in `Unknown` so a read never fails on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DonationStatus {
    Pending,
    Confirmed,
    PickedUp,
    Delivered,
    Unknown(String),
}

impl DonationStatus {
    pub fn as_str(&self) -> &str {
        match self {
            DonationStatus::Pending => "pending",
            DonationStatus::Confirmed => "confirmed",
            DonationStatus::PickedUp => "picked_up",
            DonationStatus::Delivered => "delivered",
            DonationStatus::Unknown(raw) => raw,
        }
    }

    pub fn badge(&self) -> StatusBadge {
        match self {
            DonationStatus::Confirmed => StatusBadge::Confirmed,
            DonationStatus::PickedUp => StatusBadge::InTransit,
            DonationStatus::Delivered => StatusBadge::Delivered,
            DonationStatus::Pending | DonationStatus::Unknown(_) => StatusBadge::Pending,
        }
    }
}

impl From<String> for DonationStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "pending" => DonationStatus::Pending,
            "confirmed" => DonationStatus::Confirmed,
            "picked_up" => DonationStatus::PickedUp,
            "delivered" => DonationStatus::Delivered,
            _ => DonationStatus::Unknown(raw),
        }
    }
}

impl From<DonationStatus> for String {
    fn from(status: DonationStatus) -> Self {
        match status {
            DonationStatus::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// Display badge for a donation status on the track view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusBadge {
    Pending,
    Confirmed,
    InTransit,
    Delivered,
}

impl StatusBadge {
    pub fn label(&self) -> &'static str {
        match self {
            StatusBadge::Pending => "Pending Pickup",
            StatusBadge::Confirmed => "Confirmed",
            StatusBadge::InTransit => "In Transit",
            StatusBadge::Delivered => "Delivered",
        }
    }
}
