use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Diagnostics go to stderr so stdout only carries the conversation.
pub fn init_subscriber(log_level: &str) {
    let filter = EnvFilter::try_new(format!("assistant_bot={log_level}"))
        .unwrap_or_else(|_| EnvFilter::new("assistant_bot=warn"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_level(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
