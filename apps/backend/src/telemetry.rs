use tracing::Subscriber;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// JSON subscriber filtered by `RUST_LOG`, falling back to `default_filter`.
pub fn build_subscriber(default_filter: &str) -> impl Subscriber + Send + Sync {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(false)
        .json();

    tracing_subscriber::registry().with(env_filter).with(fmt_layer)
}

/// Install the JSON subscriber globally. Does nothing if one is already set.
pub fn init_tracing() {
    let _ = tracing::subscriber::set_global_default(build_subscriber("info"));
}
