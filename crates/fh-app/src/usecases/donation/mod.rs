mod form_session;
mod list_my_donations;
mod submit_donation;

pub use form_session::{DonationFormSession, FormPhase};
pub use list_my_donations::{ListMyDonations, TrackError, TrackSession, TrackState, TrackView};
pub use submit_donation::{SubmitDonation, SubmitOutcome};
