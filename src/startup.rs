use std::net::TcpListener;

use actix_web::cookie::Key;
use actix_web::dev::Server;
use actix_web::web;
use actix_web::App;
use actix_web::HttpServer;
use actix_web_flash_messages::storage::CookieMessageStore;
use actix_web_flash_messages::FlashMessagesFramework;
use secrecy::ExposeSecret;
use secrecy::Secret;
use tracing_actix_web::TracingLogger;

use crate::configuration::Settings;
use crate::email_relay::RelayClient;
use crate::routes::health_check;
use crate::routes::home;
use crate::routes::send_message;

/// Wrapper for actix's `Server` with access to the bound port. Not to be
/// confused with actix's `App`!
pub struct Application {
    /// Left private; use `get_port` to access
    port: u16,
    server: Server,
}

impl Application {
    /// Bind the listener, build the relay client from configuration, and
    /// assemble the server.
    pub fn build(cfg: Settings) -> Result<Self, anyhow::Error> {
        let addr = format!("{}:{}", cfg.application.host, cfg.application.port);
        let listener = TcpListener::bind(addr)?;

        // get the randomised port assigned by the OS (port 0 in tests)
        let port = listener.local_addr()?.port();

        let relay_client = RelayClient::new(
            cfg.relay.base_url.clone(),
            cfg.relay.service_id.clone(),
            cfg.relay.template_id.clone(),
            cfg.relay.public_key.clone(),
            cfg.relay.timeout(),
        );

        let server = run(listener, relay_client, cfg.application.hmac_secret)?;

        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 { self.port }

    /// Because this consumes `self`, this should be the final function call
    /// (or passed to `tokio::spawn`)
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> { self.server.await }
}

/// Declares all endpoints and middleware. The server is not responsible for
/// binding to an address, it only listens to an already bound one.
pub fn run(
    listener: TcpListener,
    relay_client: RelayClient,
    hmac_secret: Secret<String>,
) -> Result<Server, anyhow::Error> {
    // flash messages ride in a signed, client-side cookie; this is the
    // page-lifetime notification host, mounted once
    let secret_key = Key::from(hmac_secret.expose_secret().as_bytes());
    let cookie_store = CookieMessageStore::builder(secret_key).build();
    let msg_framework = FlashMessagesFramework::builder(cookie_store).build();

    // `Data` is externally an `Arc`; one copy of the relay client is shared
    // by every worker
    let relay_client = web::Data::new(relay_client);

    // note the closure: actix spins up a worker per core, each running its
    // own copy of the `App`
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(msg_framework.clone())
            .route("/", web::get().to(home))
            .route("/health_check", web::get().to(health_check))
            .route("/contact", web::post().to(send_message))
            .app_data(relay_client.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
