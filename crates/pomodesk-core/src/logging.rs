//! Logging initialization
//!
//! Provides a single initialization point for the tracing subscriber.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogProfile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// No-op registry for deterministic testing
    Test,
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility.
///
/// Call once at application startup; later calls are no-ops. The filter is
/// taken from `RUST_LOG` when set, otherwise `pomodesk=debug`
/// (Development) or `pomodesk=info` (Production).
pub fn init(profile: LogProfile) {
    INIT_ONCE.call_once(|| match profile {
        LogProfile::Development => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("pomodesk=debug")),
                )
                .init();
        }
        LogProfile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("pomodesk=info")),
                )
                .init();
        }
        LogProfile::Test => {
            tracing_subscriber::registry().init();
        }
    });
}
