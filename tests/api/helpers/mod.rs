
pub use provider::{provider_reply, sample_content};

use newsletter_architect::configuration::{Configuration, get_config};
use newsletter_architect::generation_client::{ApiKeySource, GenerationClient};
use newsletter_architect::startup::Application;
use newsletter_architect::telemetry;
use reqwest::Url;
use secrecy::Secret;
use std::sync::OnceLock;
use uuid::Uuid;
use wiremock::MockServer;

pub struct TestApp {
    pub address: String,
    pub provider_server: MockServer,
    pub model: String,
    pub api_client: reqwest::Client,
}

static TRACING: OnceLock<()> = OnceLock::new();

pub fn init_tracing() {
    TRACING.get_or_init(|| {
        let default_filter_level = "info".to_string();
        let subscriber_name = "test".to_string();

        if std::env::var("TEST_LOG").is_ok() {
            let subscriber = telemetry::get_subscriber(
                subscriber_name,
                default_filter_level,
                std::io::stdout,
            );
            telemetry::init_subscriber(subscriber);
        } else {
            let subscriber =
                telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::sink);
            telemetry::init_subscriber(subscriber);
        };
    });
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(fixed_key(), |_| {}).await
}

pub async fn spawn_app_with_idle_timeout(secs: u64) -> TestApp {
    spawn_app_with(fixed_key(), |c| c.application.wizard_idle_timeout_secs = secs).await
}

fn fixed_key() -> ApiKeySource {
    ApiKeySource::Fixed(Secret::new(Uuid::new_v4().to_string()))
}

/// The provider credential points at an environment variable nobody sets.
pub async fn spawn_app_without_credential() -> TestApp {
    let unset_var = format!("NEWSLETTER_ARCHITECT_UNSET_{}", Uuid::new_v4().simple());
    spawn_app_with(ApiKeySource::Environment(unset_var), |_| {}).await
}

async fn spawn_app_with(api_key: ApiKeySource, customise: impl FnOnce(&mut Configuration)) -> TestApp {
    init_tracing();

    let provider_server = MockServer::start().await;

    let configuration = {
        let mut c = get_config().expect("Failed to read configuration.");
        c.application.port = 0;
        c.application.secure_cookie = false;
        c.generation.base_url = provider_server.uri();
        customise(&mut c);
        c
    };

    let generation_client = GenerationClient::new(
        Url::parse(&configuration.generation.base_url).expect("Invalid mock server URL"),
        configuration.generation.model.clone(),
        api_key,
    );

    let application =
        Application::build_with_client(configuration.application.clone(), generation_client)
            .await
            .expect("Failed to build application.");
    let application_port = application.port();
    let _ = tokio::spawn(application.run_until_stopped());

    TestApp {
        address: format!("http://127.0.0.1:{}", application_port),
        provider_server,
        model: configuration.generation.model,
        api_client: new_api_client(),
    }
}

/// A client with its own cookie jar, i.e. a separate visitor.
pub fn new_api_client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .unwrap()
}
