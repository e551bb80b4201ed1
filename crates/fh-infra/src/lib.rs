//! Adapters implementing the `fh-core` ports.
//!
//! - [`supabase`]: GoTrue auth and PostgREST donations over HTTP
//! - [`memory`]: in-process stand-ins used when no backend is configured
//! - [`time`]: system clock

pub mod memory;
pub mod notify;
pub mod supabase;
pub mod time;

pub use notify::TracingNotifier;
pub use time::SystemClock;
