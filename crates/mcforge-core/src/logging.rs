//! Logging facility
//!
//! Single initialization point for the tracing subscriber, selected by
//! profile. Callers (the CLI, tests) call `init` once at startup.

use std::sync::Once;

use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// No-op subscriber for tests
    Test,
}

static INIT_ONCE: Once = Once::new();

/// Default filter directives covering every mcforge crate
fn default_filter(level: &str) -> EnvFilter {
    EnvFilter::new(format!(
        "mcforge={level},mcforge_core={level},mcforge_source={level},mcforge_delivery={level}"
    ))
}

/// Initialize the logging facility
///
/// Safe to call more than once; only the first call installs a subscriber.
/// `RUST_LOG` overrides the per-profile default filter. Logs go to stderr
/// so stdout stays free for command output.
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter("debug")),
                )
                .init();
        }
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_writer(std::io::stderr)
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter("info")),
                )
                .init();
        }
        Profile::Test => {
            tracing_subscriber::registry().init();
        }
    });
}
