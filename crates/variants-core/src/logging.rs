//! Tracing setup for hosts and demos.
//!
//! The engines only emit `tracing` events; nothing is printed unless the host
//! installs a subscriber, for instance with [`init`]. Engine construction and
//! `extend` log at `debug`, each resolution at `trace`.

use tracing_subscriber::{EnvFilter, filter::ParseError, fmt, prelude::*};

/// Directives used when `RUST_LOG` is unset: other crates stay at `warn`,
/// the engine crates log at `info`.
pub const DEFAULT_FILTER: &str = "warn,variants_core=info,variants_class=info";

/// Install a subscriber filtered by `RUST_LOG`, or by [`DEFAULT_FILTER`].
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_with_filter(DEFAULT_FILTER)
}

/// Install a subscriber filtered by `RUST_LOG`, or by `fallback` when the
/// variable is unset or invalid.
///
/// Events go to stderr in the compact format so that resolved class strings
/// printed on stdout stay clean. Fails if a global subscriber is already set
/// or `fallback` is not a valid filter.
pub fn init_with_filter(fallback: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| parse_filter(fallback))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

fn parse_filter(directives: &str) -> Result<EnvFilter, ParseError> {
    EnvFilter::try_new(directives)
}
