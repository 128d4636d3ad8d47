//! tracing subscriber setup for the command line tool
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber filtered by `RUST_LOG`
///
/// `verbose` raises the fallback filter to debug. Returns false if a global
/// subscriber was already set.
pub fn init(verbose: bool) -> bool {
    let fallback = if verbose {
        "tiny_wrap=debug,tiny_font=debug"
    } else {
        "tiny_wrap=info,tiny_font=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_target(true),
    );

    if subscriber.try_init().is_err() {
        return false;
    }

    tracing::debug!("tracing initialized");
    true
}
