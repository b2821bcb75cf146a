//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber, writing to stderr so stdout stays clean
/// for JSON/CSV/YAML output.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` selects debug logs for the
/// iptrack crates and everything else stays at warnings.
pub fn init(verbose: bool, no_color: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "warn,iptrack=debug,iptrack_client=debug,iptrack_cli=debug"
        } else {
            "warn"
        })
    });

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(verbose)
        .with_ansi(!no_color)
        .try_init();
}
