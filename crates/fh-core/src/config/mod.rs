//! # Pure Data Module - Data Transfer Objects Only
//!
//! ## Responsibilities
//!
//! - Define configuration data structures
//! - Provide TOML -> DTO mapping
//!
//! ## Prohibited
//!
//! - No business logic or policies
//! - No validation logic
//! - No default value calculation
//!
//! Whether a missing Supabase URL means "run offline" is decided by the
//! wiring in the root crate, not here.

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Supabase project URL (may be empty - this is a fact, not an error)
    pub supabase_url: String,

    /// Public anon key sent as the `apikey` header
    pub supabase_anon_key: String,

    /// HTTP request timeout in seconds; 0 means "not configured"
    pub request_timeout_secs: u64,

    /// Where the identity provider sends the browser after sign-up or
    /// federated sign-in
    pub auth_redirect_url: String,

    /// Directory for rolling log files (empty = console only)
    pub log_dir: PathBuf,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// **Prohibited**: This method must NOT contain any validation
    /// or default value logic. Empty strings are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let string_at = |section: &str, key: &str| {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };

        Ok(Self {
            supabase_url: string_at("supabase", "url"),
            supabase_anon_key: string_at("supabase", "anon_key"),
            request_timeout_secs: toml_value
                .get("supabase")
                .and_then(|s| s.get("request_timeout_secs"))
                .and_then(|v| v.as_integer())
                .unwrap_or(0) as u64,
            auth_redirect_url: string_at("auth", "redirect_url"),
            log_dir: PathBuf::from(string_at("logging", "log_dir")),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            supabase_url: String::new(),
            supabase_anon_key: String::new(),
            request_timeout_secs: 0,
            auth_redirect_url: String::new(),
            log_dir: PathBuf::new(),
        }
    }
}
