//! tests/api/helpers.rs

use once_cell::sync::Lazy;
use talk_booking::configuration::get_configuration;
use talk_booking::startup::Application;
use talk_booking::telemetry::{get_subscriber, init_subscriber};

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    // Set TEST_LOG=true to see logs during tests
    // Use bunyan to format the logs nicely:
    // $ TEST_LOG=true cargo test | bunyan
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber).expect("Failed to initialise telemetry");
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber).expect("Failed to initialise telemetry");
    };
});

pub struct Test {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl Test {
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.api_client
            .get(&format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn head(&self, path: &str) -> reqwest::Response {
        self.api_client
            .head(&format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn options(&self, path: &str) -> reqwest::Response {
        self.api_client
            .request(reqwest::Method::OPTIONS, &format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post(&self, path: &str, body: String) -> reqwest::Response {
        self.api_client
            .post(&format!("{}{}", self.address, path))
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub async fn setup() -> Test {
    Lazy::force(&TRACING);

    let mut config = get_configuration().expect("Failed to read configuration.");
    // Let the OS pick a free port so tests can run in parallel.
    config.application.port = 0;
    config.application.workers = Some(1);

    let app = Application::build(config.clone()).expect("Failed to build server.");
    let address = format!("http://127.0.0.1:{}", app.port());
    config.application.port = app.port();

    tracing::info!("Test running with the following Settings:\n{:#?}", config);

    // Launch the server as a background task
    let _ = tokio::spawn(app.run());

    // Redirects are asserted on, not followed.
    let api_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to build HTTP client.");

    Test {
        address,
        api_client,
    }
}
