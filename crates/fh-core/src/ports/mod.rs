//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases in `fh-app` and the
//! adapters in `fh-infra`. The core never talks to the identity provider or
//! the datastore directly; it only sees these traits.

mod auth_session;
mod clock;
mod donation_repository;
pub mod errors;
mod notification;

pub use auth_session::AuthSessionPort;
pub use clock::ClockPort;
pub use donation_repository::DonationRepositoryPort;
pub use errors::{AuthError, DonationRepositoryError};
pub use notification::{Notice, NoticeSeverity, NotificationPort};
