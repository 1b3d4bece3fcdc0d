//! Tracing subscriber bootstrap.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_FILTER: &str = "folio=info,warn";
const VERBOSE_FILTER: &str = "folio=debug,info";

/// Filter directive used when `RUST_LOG` is not set.
pub fn default_filter(verbose: bool, configured: Option<&str>) -> String {
    match (configured, verbose) {
        (Some(filter), _) => filter.to_string(),
        (None, true) => VERBOSE_FILTER.to_string(),
        (None, false) => DEFAULT_FILTER.to_string(),
    }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over the
/// computed default. Calling this twice is harmless; the second call fails
/// quietly and keeps the first subscriber.
pub fn init_logging(verbose: bool, configured: Option<&str>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter(verbose, configured)))?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(verbose)
        .with_writer(std::io::stderr);

    if tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("tracing subscriber already installed");
    }
    Ok(())
}
