use folio::configuration::get_configuration;
use folio::startup::Application;
use folio::telemetry::get_subscriber;
use folio::telemetry::init_subscriber;

/// Initialise telemetry, load config, and start the server
#[tokio::main] // requires tokio features: macros, rt-multi-thread
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("folio", "info", std::io::stdout);
    init_subscriber(subscriber);

    let cfg = get_configuration()?;
    let app = Application::build(cfg)?;
    tracing::info!("listening on port {}", app.get_port());
    app.run_until_stopped().await?;

    Ok(())
}
