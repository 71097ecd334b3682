//! Tracing subscriber setup shared by every binary.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence. Otherwise events from `bin_name` and the
/// `daily_memo_*` crates are emitted at `default_level`, everything else at `info`.
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let crate_name = bin_name.replace('-', "_");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "info,{crate_name}={default_level},daily_memo_server={default_level},daily_memo_client={default_level},tower_http={default_level}"
        ))
    });

    // try_init so tests that set up the logger repeatedly don't panic
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init();
}
