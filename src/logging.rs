//! Diagnostic logging. Silent unless `-v` or `RUST_LOG` asks for it.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset.
fn default_filter(verbose: bool) -> &'static str {
    // Failures already get a console line of their own.
    if verbose { "weekday_wallpaper=debug" } else { "off" }
}

/// Install the stderr subscriber; `RUST_LOG` overrides the default filter.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
                .compact(),
        )
        .init();
}
