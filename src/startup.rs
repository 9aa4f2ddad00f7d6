use crate::configuration::{ApplicationConfigs, Configuration};
use crate::generation_client::GenerationClient;
use crate::routes::{health_check, request_access, wizard_routes};
use crate::wizard::{WizardStore, evict_idle_until_stopped};
use actix_session::SessionMiddleware;
use actix_session::storage::CookieSessionStore;
use actix_web::cookie::Key;
use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use secrecy::ExposeSecret;
use std::net::TcpListener;
use tokio::task::JoinHandle;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
    idle_sweep: JoinHandle<()>,
}

impl Application {
    pub async fn build(config: Configuration) -> Result<Self, anyhow::Error> {
        let generation_client = config
            .generation
            .client()
            .context("Invalid generation provider base URL")?;

        Self::build_with_client(config.application, generation_client).await
    }

    /// Same as `build`, with the generation client supplied by the caller.
    pub async fn build_with_client(
        config: ApplicationConfigs,
        generation_client: GenerationClient,
    ) -> Result<Self, anyhow::Error> {
        let address = format!("{}:{}", config.host, config.port);
        let listener = TcpListener::bind(address)
            .with_context(|| "Failed to bind TCP listener for application")?;
        let port = listener
            .local_addr()
            .with_context(|| "Failed to read local address of TCP listener")?
            .port();
        let wizard_store = web::Data::new(WizardStore::new());
        let idle_timeout = config.wizard_idle_timeout();

        let server = run(listener, generation_client, wizard_store.clone(), config)
            .context("Failed to run Actix web server")?;
        let idle_sweep = tokio::spawn(evict_idle_until_stopped(
            wizard_store.into_inner(),
            idle_timeout,
        ));

        Ok(Self {
            port,
            server,
            idle_sweep,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), anyhow::Error> {
        let outcome = self.server.await.context("Server stopped with an error");
        self.idle_sweep.abort();
        outcome
    }
}

fn run(
    tcp_listener: TcpListener,
    generation_client: GenerationClient,
    wizard_store: web::Data<WizardStore>,
    config: ApplicationConfigs,
) -> Result<Server, anyhow::Error> {
    let generation_client = web::Data::new(generation_client);

    let hmac_secret = config.hmac_secret.expose_secret().as_bytes();
    // `Key::from` panics on anything shorter
    if hmac_secret.len() < 64 {
        anyhow::bail!("The HMAC secret must be at least 64 bytes long");
    }
    let secret_key = Key::from(hmac_secret);
    let secure_cookie = config.secure_cookie;

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(secure_cookie)
                    .build(),
            )
            .configure(configure_routes)
            .app_data(generation_client.clone())
            .app_data(wizard_store.clone())
    })
    .listen(tcp_listener)
    .with_context(|| "Failed to bind Actix server to TCP listener")?
    .run();

    Ok(server)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health_check", web::get().to(health_check))
        .service(
            web::scope("/v1")
                .route("/access", web::post().to(request_access))
                .configure(wizard_routes),
        );
}
