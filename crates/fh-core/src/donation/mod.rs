//! Donation domain models.
//!
//! Drafts are owned by the form while the user edits them; validated forms
//! are turned into [`NewDonation`] insert payloads; [`PersistedDonation`]
//! rows are read-only copies owned by the datastore.

mod category;
mod form;
mod record;
mod status;
mod summary;

pub use category::{FoodCategory, StoredCategory, UnknownCategory};
pub use form::{DonationDraft, DonationForm, DonationItem, DraftItem, ItemField, ItemKey};
pub use record::{DonatedItem, NewDonation, PersistedDonation, StoredItem};
pub use status::{DonationStatus, StatusBadge};
pub use summary::DonationSummary;

/// Minimum number of line items per donation.
pub const MIN_ITEMS: usize = 1;
/// Maximum number of line items per donation.
pub const MAX_ITEMS: usize = 20;
