use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

/// Installs the global tracing subscriber with bunyan-formatted JSON output.
///
/// The filter defaults to `info` and can be overridden via `RUST_LOG`.
pub fn init_tracing_subscriber() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let formatting_layer = BunyanFormattingLayer::new("study-notes".into(), std::io::stderr);

    let subscriber = Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer);

    ::tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
