//! Observability (logging and request tracing)
//!
//! Structured logging through `tracing`, pretty in development builds and
//! JSON in release builds. HTTP request spans come from tower-http's
//! `TraceLayer`, installed by [`crate::server::router`].

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset in development builds
pub const DEV_FILTER: &str = "debug,fb_dialog=trace";

/// Filter used when `RUST_LOG` is unset in release builds
pub const RELEASE_FILTER: &str = "info";

/// Initialize logging
///
/// Sets up:
/// - Structured logging with JSON formatting (production) or pretty formatting (dev)
/// - Environment-based log level filtering via `RUST_LOG`
///
/// Credentials never appear in log output; events only record whether a
/// credential was present.
///
/// # Example
///
/// ```rust,no_run
/// use fb_dialog::observability;
///
/// # fn main() -> anyhow::Result<()> {
/// observability::init()?;
/// tracing::info!("Application started");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter());

    #[cfg(debug_assertions)]
    {
        // Pretty formatting for development
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init()?;
    }

    #[cfg(not(debug_assertions))]
    {
        // JSON formatting for production
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()?;
    }

    Ok(())
}

fn default_filter() -> EnvFilter {
    if cfg!(debug_assertions) {
        EnvFilter::new(DEV_FILTER)
    } else {
        EnvFilter::new(RELEASE_FILTER)
    }
}
