use crate::generation_client::{ApiKeySource, GenerationClient};
use secrecy::Secret;
use serde::Deserialize;
use std::time::Duration;

#[derive(Deserialize, Clone)]
pub struct Configuration {
    pub application: ApplicationConfigs,
    pub generation: GenerationConfigs,
}

#[derive(Deserialize, Clone)]
pub struct ApplicationConfigs {
    pub host: String,
    pub port: u16,
    pub hmac_secret: Secret<String>,
    // Browsers refuse to send `Secure` cookies over plain http, so local runs turn it off
    pub secure_cookie: bool,
    pub wizard_idle_timeout_secs: u64,
}

impl ApplicationConfigs {
    pub fn wizard_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.wizard_idle_timeout_secs)
    }
}

#[derive(Deserialize, Clone)]
pub struct GenerationConfigs {
    pub base_url: String,
    pub model: String,
    /// Name of the environment variable holding the provider credential.
    /// The variable is read on every generation call, not at startup.
    pub api_key_env: String,
}

impl GenerationConfigs {
    pub fn client(&self) -> Result<GenerationClient, url::ParseError> {
        let base_url = url::Url::parse(&self.base_url)?;

        Ok(GenerationClient::new(
            base_url,
            self.model.clone(),
            ApiKeySource::Environment(self.api_key_env.clone()),
        ))
    }
}

pub fn get_config() -> Result<Configuration, config::ConfigError> {
    // config.yaml first, then `APP_SECTION__KEY` environment overrides, e.g. APP_APPLICATION__PORT=5001
    let configs = config::Config::builder()
        .add_source(config::File::new("config.yaml", config::FileFormat::Yaml))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    configs.try_deserialize::<Configuration>()
}
