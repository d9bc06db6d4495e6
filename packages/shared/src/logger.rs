//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, fmt};

/// Initialise the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `default_level` is applied to the
/// whole process. Output goes to stderr so an interactive prompt on stdout
/// stays readable.
///
/// # Arguments
///
/// * `bin_name` - Name of the binary, logged once at startup
/// * `default_level` - Directive used when `RUST_LOG` is not set (e.g. `"info"`)
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second call (tests, embedding) keeps the first subscriber.
    let installed = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("{} logger initialised (default level: {})", bin_name, default_level);
    }
}
