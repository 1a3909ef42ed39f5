use folio::configuration::get_configuration;
use folio::startup::Application;
use folio::telemetry::get_subscriber;
use folio::telemetry::init_subscriber;
use once_cell::sync::Lazy;
use wiremock::MockServer;

/// Init the tracing subscriber once per test binary. To opt in to verbose
/// logging, use the env var `TEST_LOG`:
///
/// ```sh
///      TEST_LOG=true cargo test [test_name] | bunyan
/// ```
static TRACING: Lazy<()> = Lazy::new(|| {
    match std::env::var("TEST_LOG") {
        Ok(_) => {
            let subscriber = get_subscriber("test", "debug", std::io::stdout);
            init_subscriber(subscriber);
        }
        Err(_) => {
            let subscriber = get_subscriber("test", "debug", std::io::sink);
            init_subscriber(subscriber);
        }
    };
});

pub struct TestApp {
    pub addr: String,
    /// Simulated email relay
    pub relay_server: MockServer,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Convenience method for posting the contact form the way the page does
    /// (url-encoded body)
    pub async fn post_contact<Body: serde::Serialize>(
        &self,
        body: &Body,
    ) -> reqwest::Response {
        self.api_client
            .post(format!("{}/contact", self.addr))
            .form(body)
            .send()
            .await
            .expect("execute request")
    }

    /// Fetch the rendered page, consuming any pending flash messages
    pub async fn get_page(&self) -> String {
        self.api_client
            .get(format!("{}/", self.addr))
            .send()
            .await
            .expect("execute request")
            .text()
            .await
            .expect("read response body")
    }
}

pub fn assert_is_redirect_to(
    resp: &reqwest::Response,
    location: &str,
) {
    assert_eq!(resp.status().as_u16(), 303);
    assert_eq!(resp.headers().get("Location").unwrap(), location);
}

/// Spawn the full application on a random port, pointed at a mock relay.
pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let relay_server = MockServer::start().await;

    let cfg = {
        let mut rand_cfg = get_configuration().unwrap();
        // port 0: the OS assigns a free port, retrieved via get_port below
        rand_cfg.application.port = 0;
        rand_cfg.relay.base_url = relay_server.uri();
        // keep the timeout test fast
        rand_cfg.relay.timeout_milliseconds = 500;
        rand_cfg
    };

    let app = Application::build(cfg).unwrap();
    let addr = format!("http://127.0.0.1:{}", app.get_port());
    tokio::spawn(app.run_until_stopped());

    // redirects are followed manually so tests can assert on them; the cookie
    // store carries flash messages across the post/redirect/get cycle
    let api_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .cookie_store(true)
        .build()
        .unwrap();

    TestApp {
        addr,
        relay_server,
        api_client,
    }
}
