use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::{DonationForm, DonationStatus, FoodCategory, StoredCategory};
use crate::ids::{DonationId, UserId};

/// A line item as stored: the client-local key is gone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonatedItem {
    pub name: String,
    pub quantity: String,
    pub category: FoodCategory,
}

/// A line item as read back. Lenient: missing text reads as empty and the
/// category may be one the client no longer offers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub quantity: String,
    pub category: StoredCategory,
}

impl From<DonatedItem> for StoredItem {
    fn from(item: DonatedItem) -> Self {
        Self {
            name: item.name,
            quantity: item.quantity,
            category: item.category.into(),
        }
    }
}

/// Insert payload for the `donations` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewDonation {
    pub user_id: UserId,
    pub items: Vec<DonatedItem>,
    pub pickup_address: String,
    pub pickup_date: NaiveDate,
    pub notes: Option<String>,
    pub status: DonationStatus,
}

impl NewDonation {
    /// Builds the insert payload for `user_id` from a validated form.
    ///
    /// Every new donation starts out `pending`.
    pub fn from_form(form: DonationForm, user_id: UserId) -> Self {
        Self {
            user_id,
            items: form
                .items
                .into_iter()
                .map(|item| DonatedItem {
                    name: item.name,
                    quantity: item.quantity,
                    category: item.category,
                })
                .collect(),
            pickup_address: form.pickup_address,
            pickup_date: form.pickup_date,
            notes: form.notes.filter(|notes| !notes.is_empty()),
            status: DonationStatus::Pending,
        }
    }
}

/// A donation row as read back from the datastore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedDonation {
    pub id: DonationId,
    pub user_id: UserId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<StoredItem>,
    pub pickup_address: String,
    pub pickup_date: NaiveDate,
    pub notes: Option<String>,
    pub status: DonationStatus,
    pub created_at: DateTime<Utc>,
}

impl PersistedDonation {
    /// Materializes an insert payload with datastore-assigned fields.
    pub fn from_new(new: NewDonation, id: DonationId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id: new.user_id,
            items: new.items.into_iter().map(StoredItem::from).collect(),
            pickup_address: new.pickup_address,
            pickup_date: new.pickup_date,
            notes: new.notes,
            status: new.status,
            created_at,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<StoredItem>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<StoredItem>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
