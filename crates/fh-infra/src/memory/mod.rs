//! In-process adapters used when no Supabase project is configured, and by
//! integration tests.

mod auth;
mod donations;

pub use auth::InMemoryAuth;
pub use donations::InMemoryDonationRepository;
