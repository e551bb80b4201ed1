//! # fh-core
//!
//! Core domain models and business logic for FeedHope.
//!
//! This crate contains pure business logic without any infrastructure dependencies:
//! the donation and registration models, the sanitizer and schema validator,
//! the draft controllers that back the forms, and the port traits implemented
//! by the infrastructure layer.

pub mod auth;
pub mod config;
pub mod donation;
pub mod draft;
pub mod ids;
pub mod ports;
pub mod registration;
pub mod validation;

// Re-export commonly used types at the crate root
pub use auth::{AuthSession, AuthUser, OAuthProvider, SecretString};
pub use config::AppConfig;
pub use donation::{
    DonationDraft, DonationForm, DonationItem, DonationStatus, DonationSummary, DraftItem,
    FoodCategory, ItemKey, NewDonation, PersistedDonation, StatusBadge, StoredCategory, StoredItem,
};
pub use draft::{DonationDraftController, DraftError, ItemField, RegistrationDraftController};
pub use ids::{DonationId, UserId};
pub use registration::{RegistrationDraft, RegistrationForm};
pub use validation::{sanitize, FieldError, FieldErrors};
