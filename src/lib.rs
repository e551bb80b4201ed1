//! FeedHope
//!
//! Bootstrap for the donation pipeline: configuration loading, tracing
//! setup and wiring of the `fh-infra` adapters into the `fh-app` use cases.

pub mod bootstrap;

pub use bootstrap::{create_runtime, load_config, load_config_with_env, AppRuntime, Backend};
