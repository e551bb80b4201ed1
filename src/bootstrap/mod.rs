pub mod config;
pub mod runtime;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, load_config_with_env};
pub use runtime::{create_runtime, AppRuntime, UseCases};
pub use wiring::{wire_dependencies, Backend, WiringError};
