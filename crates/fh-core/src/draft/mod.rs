//! Draft controllers backing the donation and registration forms.
//!
//! A controller exclusively owns one draft for the lifetime of a form. All
//! transitions are synchronous and triggered directly by input events;
//! editing a field always clears that field's recorded error.

mod donation;
mod registration;

pub use donation::DonationDraftController;
pub use registration::{RegistrationDraftController, RegistrationField};

pub use crate::donation::ItemField;

/// Rejected draft edits. The draft is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("You can only add up to {max} items per donation.")]
    TooManyItems { max: usize },

    #[error("a donation needs at least one item")]
    LastItem,

    #[error("no item with key {0}")]
    UnknownItem(u64),
}
