//! Logging setup
//!
//! The library only emits `tracing` events; binaries call [`init`] once to
//! install a subscriber.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Map a `-v` count to a default filter directive
#[must_use]
pub const fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info,larascaff=info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize logging
///
/// `RUST_LOG` wins when set; otherwise the filter comes from the verbosity
/// level. Output goes to stderr so it never mixes with generated content
/// printed on stdout.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(verbosity: u8) -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(level_for_verbosity(0), "warn");
        assert_eq!(level_for_verbosity(2), "debug");
        assert_eq!(level_for_verbosity(9), "trace");
    }
}
