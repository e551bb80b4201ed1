//! # Application Dependencies
//!
//! This module defines the dependency grouping for use case construction.
//!
//! **Note**: This is NOT a Builder pattern.
//! - No build steps
//! - No default values
//! - No hidden logic
//! - Just parameter grouping

use std::sync::Arc;

use fh_core::ports::*;

/// Application dependency grouping (non-Builder, just parameter grouping)
///
/// All dependencies are required - no defaults, no optional fields.
pub struct AppDeps {
    // Identity provider and local session
    pub auth: Arc<dyn AuthSessionPort>,

    // Remote datastore
    pub donations: Arc<dyn DonationRepositoryPort>,

    // User-facing notices
    pub notifier: Arc<dyn NotificationPort>,

    // System
    pub clock: Arc<dyn ClockPort>,
}
