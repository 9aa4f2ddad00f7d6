use newsletter_architect::configuration::get_config;
use newsletter_architect::startup::Application;
use newsletter_architect::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber(
        "newsletter_architect".into(),
        "info".into(),
        std::io::stdout,
    );
    init_subscriber(subscriber);

    let config = get_config()?;
    let application = Application::build(config).await?;

    tracing::info!(port = application.port(), "Newsletter Architect is listening");

    application.run_until_stopped().await
}
