use tracing::subscriber::set_global_default;
use tracing::Subscriber;
use tracing_bunyan_formatter::BunyanFormattingLayer;
use tracing_bunyan_formatter::JsonStorageLayer;
use tracing_log::LogTracer;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Registry;

/// Compose a bunyan-formatted JSON subscriber. `RUST_LOG` overrides
/// `filter_level` when set. Note: `sink` must be a closure (e.g.
/// `std::io::stdout`), not a return value.
pub fn get_subscriber<Sink>(
    name: &str,
    filter_level: &str,
    sink: Sink,
) -> impl Subscriber
where
    // higher-ranked trait bound; the sink must implement `MakeWriter` for all
    // choices of the lifetime parameter 'a
    Sink: for<'a> MakeWriter<'a> + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_level));
    let fmt_layer = BunyanFormattingLayer::new(name.to_string(), sink);
    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(fmt_layer)
}

/// Install the subscriber process-wide. Must be called once, before the
/// server starts.
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) {
    // required for actix-web's `log` events to be captured by the subscriber
    LogTracer::init().unwrap();
    set_global_default(subscriber).unwrap();
}
