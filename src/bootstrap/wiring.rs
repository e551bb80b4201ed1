//! # Dependency Injection
//!
//! Turns an [`AppConfig`] into the port implementations held by
//! [`AppDeps`]. This is the only place that names concrete adapters.

use std::sync::Arc;
use std::time::Duration;

use fh_app::AppDeps;
use fh_core::ports::{AuthSessionPort, ClockPort, DonationRepositoryPort, NotificationPort};
use fh_core::AppConfig;
use fh_infra::memory::{InMemoryAuth, InMemoryDonationRepository};
use fh_infra::supabase::{
    SessionStore, SupabaseAuth, SupabaseClient, SupabaseConfig, SupabaseDonationRepository,
};
use fh_infra::{SystemClock, TracingNotifier};
use tracing::{info, warn};

/// Errors raised while assembling dependencies.
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("HTTP client initialization failed: {0}")]
    HttpClientInit(String),
}

/// Which adapters back the auth and donation ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Supabase,
    InMemory,
}

impl Backend {
    /// Supabase when both the project URL and the anon key are configured.
    pub fn for_config(config: &AppConfig) -> Self {
        if config.supabase_url.trim().is_empty() || config.supabase_anon_key.trim().is_empty() {
            Backend::InMemory
        } else {
            Backend::Supabase
        }
    }
}

fn supabase_config(config: &AppConfig) -> SupabaseConfig {
    SupabaseConfig {
        url: config.supabase_url.trim().to_string(),
        anon_key: config.supabase_anon_key.trim().to_string(),
        timeout: (config.request_timeout_secs > 0)
            .then(|| Duration::from_secs(config.request_timeout_secs)),
        redirect_url: config.auth_redirect_url.clone(),
    }
}

/// Builds the application dependencies for `config`.
pub fn wire_dependencies(config: &AppConfig) -> Result<(AppDeps, Backend), WiringError> {
    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock);
    let notifier: Arc<dyn NotificationPort> = Arc::new(TracingNotifier);
    let store = Arc::new(SessionStore::new());

    let backend = Backend::for_config(config);
    let (auth, donations) = match backend {
        Backend::Supabase => {
            let client = SupabaseClient::new(&supabase_config(config))
                .map_err(|e| WiringError::HttpClientInit(e.to_string()))?;
            let client = Arc::new(client);
            info!(url = %client.base_url(), "using Supabase backend");
            let auth: Arc<dyn AuthSessionPort> = Arc::new(SupabaseAuth::new(
                client.clone(),
                store.clone(),
                config.auth_redirect_url.clone(),
            ));
            let donations: Arc<dyn DonationRepositoryPort> =
                Arc::new(SupabaseDonationRepository::new(client, store));
            (auth, donations)
        }
        Backend::InMemory => {
            warn!("Supabase is not configured; accounts and donations are kept in memory");
            let auth: Arc<dyn AuthSessionPort> = Arc::new(InMemoryAuth::new(store));
            let donations: Arc<dyn DonationRepositoryPort> =
                Arc::new(InMemoryDonationRepository::new(clock.clone()));
            (auth, donations)
        }
    };

    Ok((
        AppDeps {
            auth,
            donations,
            notifier,
            clock,
        },
        backend,
    ))
}
