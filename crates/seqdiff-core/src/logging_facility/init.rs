//! Global subscriber installation

use std::sync::Once;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Output flavour chosen by the embedding application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable lines, engine internals at `debug`
    Development,
    /// One JSON object per event, operation boundaries only
    Production,
    /// Nothing is printed; pair with `init_test_capture()`
    Test,
}

impl Profile {
    /// Filter directive used when `RUST_LOG` is not set
    pub fn default_filter(&self) -> &'static str {
        match self {
            Profile::Development => "seqdiff_core=debug",
            Profile::Production => "seqdiff_core=info",
            Profile::Test => "off",
        }
    }

    /// `RUST_LOG` if present and valid, otherwise [`Profile::default_filter`]
    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.default_filter()))
    }
}

static INIT: Once = Once::new();

/// Install the global subscriber for `profile`.
///
/// Only the first call in a process has any effect.
///
/// ```
/// use seqdiff_core::logging_facility::{init, Profile};
///
/// init(Profile::Production);
/// init(Profile::Development); // no-op
/// ```
pub fn init(profile: Profile) {
    INIT.call_once(|| match profile {
        Profile::Development => tracing_subscriber::fmt()
            .with_env_filter(profile.env_filter())
            .init(),
        Profile::Production => tracing_subscriber::fmt()
            .json()
            .with_env_filter(profile.env_filter())
            .init(),
        Profile::Test => tracing_subscriber::registry().init(),
    });
}
