//! Supabase adapters: GoTrue for identity and PostgREST for the
//! `donations` table.

mod auth;
mod client;
mod donations;
mod session_store;

pub use auth::SupabaseAuth;
pub use client::{SupabaseClient, SupabaseConfig, SupabaseError, SupabaseResult};
pub use donations::SupabaseDonationRepository;
pub use session_store::SessionStore;
