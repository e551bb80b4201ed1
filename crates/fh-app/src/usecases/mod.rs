//! Business logic use cases
//!
//! Donation form -> SubmitDonation -> DonationRepositoryPort::insert
//! Track page    -> ListMyDonations -> DonationRepositoryPort::list_by_user
//! Account pages -> RegisterAccount / SignIn / SignOut / CurrentUser -> AuthSessionPort

pub mod auth;
pub mod donation;

pub use auth::{
    CurrentUser, RegisterAccount, RegisterError, RegistrationFormSession, SignIn, SignOut,
};
pub use donation::{
    DonationFormSession, FormPhase, ListMyDonations, SubmitDonation, SubmitOutcome, TrackError,
    TrackSession, TrackState, TrackView,
};
