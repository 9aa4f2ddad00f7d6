use crate::domain::{ALLOWED_TAGS, GeneratedContent, NewsletterConfig};
use crate::utils::error_chain_fmt;
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::future::Future;

/// The only failure text a visitor ever sees, whatever went wrong.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Failed to generate content. Please check your API key and try again.";

const EXAMPLE_TOPIC_FALLBACK: &str = "A trending topic in their industry";

/// Anything that can turn a wizard configuration into a sample issue.
pub trait NewsletterGenerator {
    fn generate(
        &self,
        config: &NewsletterConfig,
    ) -> impl Future<Output = Result<GeneratedContent, GenerationError>> + Send;
}

pub enum ApiKeySource {
    /// Name of an environment variable, read on every call
    Environment(String),
    Fixed(Secret<String>),
}

impl ApiKeySource {
    fn resolve(&self) -> Result<Secret<String>, GenerationError> {
        match self {
            ApiKeySource::Environment(var) => std::env::var(var)
                .ok()
                .filter(|key| !key.trim().is_empty())
                .map(Secret::new)
                .ok_or_else(|| GenerationError::MissingCredential(var.clone())),
            ApiKeySource::Fixed(key) => Ok(key.clone()),
        }
    }
}

#[derive(thiserror::Error)]
pub enum GenerationError {
    #[error("API key not found in environment variable `{0}`")]
    MissingCredential(String),

    #[error("Failed to build the provider URL")]
    Url(#[from] url::ParseError),

    #[error("Failed to reach the generation provider")]
    Transport(#[source] reqwest::Error),

    #[error("The generation provider rejected the request")]
    Provider(#[source] reqwest::Error),

    #[error("The generation provider returned no text")]
    EmptyResponse,

    #[error("The generation provider returned malformed JSON")]
    MalformedResponse(#[from] serde_json::Error),
}

impl GenerationError {
    pub fn kind(&self) -> &'static str {
        match self {
            GenerationError::MissingCredential(_) => "missing_credential",
            GenerationError::Url(_) => "url",
            GenerationError::Transport(_) => "transport",
            GenerationError::Provider(_) => "provider",
            GenerationError::EmptyResponse => "empty_response",
            GenerationError::MalformedResponse(_) => "malformed_response",
        }
    }
}

impl std::fmt::Debug for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Client for the Gemini `generateContent` endpoint.
pub struct GenerationClient {
    http_client: Client,
    base_url: Url,
    model: String,
    api_key: ApiKeySource,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: [RequestContent<'a>; 1],
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    role: &'static str,
    parts: [RequestPart<'a>; 1],
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: serde_json::Value,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    // Text parts of the first candidate, joined
    fn text(self) -> Option<String> {
        let text: String = self
            .candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect();

        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

fn response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "subject": {
                "type": "STRING",
                "description": "Catchy email subject line"
            },
            "preheader": {
                "type": "STRING",
                "description": "Preview text shown in email client"
            },
            "body": {
                "type": "STRING",
                "description": "The full email body content with HTML formatting"
            }
        },
        "required": ["subject", "preheader", "body"]
    })
}

/// Renders the configuration into the instruction sent to the model. Values
/// are embedded as typed; only an empty sample topic is replaced.
pub fn build_prompt(config: &NewsletterConfig) -> String {
    let example_topic = if config.example_topic.is_empty() {
        EXAMPLE_TOPIC_FALLBACK
    } else {
        &config.example_topic
    };

    let tags = ALLOWED_TAGS
        .iter()
        .map(|tag| format!("<{tag}>"))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "You are an expert content strategist configuring an automated newsletter pipeline.

Generate a sample newsletter based on the following client configuration:
- Company Name: {company}
- Target Audience: {audience}
- Primary Topic/Niche: {topic}
- Brand Tone: {tone}
- Desired Length: {length}
- Sending Frequency: {frequency}
- Key Brand Values: {values}
- Specific Topic for this Sample: {example_topic}

The output must be a JSON object with exactly three string fields: \"subject\", \"preheader\" and \"body\".
The \"body\" must be formatted with simple HTML tags ({tags}) for display inside an email client. \
Do not use markdown in the body, use HTML.",
        company = config.company_name,
        audience = config.target_audience,
        topic = config.primary_topic,
        tone = config.tone,
        length = config.length,
        frequency = config.frequency,
        values = config.key_values,
    )
}

impl GenerationClient {
    /// `base_url` may carry a path prefix (e.g. a proxy mount); the API path
    /// is appended below it.
    pub fn new(mut base_url: Url, model: String, api_key: ApiKeySource) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        // No timeout: the call runs until the transport reports success or failure
        let http_client = Client::new();

        Self {
            http_client,
            base_url,
            model,
            api_key,
        }
    }

    #[tracing::instrument(
        name = "Generating a sample newsletter",
        skip_all,
        fields(model = %self.model)
    )]
    pub async fn generate_newsletter(
        &self,
        config: &NewsletterConfig,
    ) -> Result<GeneratedContent, GenerationError> {
        // Fail before touching the network when there is no credential
        let api_key = self.api_key.resolve()?;

        let url = self
            .base_url
            .join(&format!("v1beta/models/{}:generateContent", self.model))?;

        let prompt = build_prompt(config);
        let request_body = GenerateContentRequest {
            contents: [RequestContent {
                role: "user",
                parts: [RequestPart { text: &prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: response_schema(),
            },
        };

        let response = self
            .http_client
            .post(url)
            .header("x-goog-api-key", api_key.expose_secret())
            .json(&request_body)
            .send()
            .await
            .map_err(GenerationError::Transport)?
            .error_for_status()
            .map_err(GenerationError::Provider)?;

        let raw = response.text().await.map_err(GenerationError::Transport)?;
        let envelope: GenerateContentResponse = serde_json::from_str(&raw)?;
        let text = envelope.text().ok_or(GenerationError::EmptyResponse)?;

        Ok(GeneratedContent::from_json(&text)?)
    }
}

impl NewsletterGenerator for GenerationClient {
    async fn generate(
        &self,
        config: &NewsletterConfig,
    ) -> Result<GeneratedContent, GenerationError> {
        let outcome = self.generate_newsletter(config).await;

        if let Err(e) = &outcome {
            tracing::error!(
                error.kind = e.kind(),
                error.cause_chain = ?e,
                error.message = %e,
                "Newsletter generation failed"
            );
        }

        outcome
    }
}
