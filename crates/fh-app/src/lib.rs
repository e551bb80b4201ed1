//! FeedHope Application Orchestration Layer
//!
//! This crate contains the use cases behind the donation, track and account
//! pages. Use cases depend only on the ports defined in `fh-core`.

pub mod deps;
pub mod usecases;

pub use deps::AppDeps;
