use crate::domain::{ConfigField, GeneratedContent, NewsletterConfig};
use crate::generation_client::{GENERIC_FAILURE_MESSAGE, GenerationError};
use crate::wizard::{WizardStep, can_proceed};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationStatus {
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// What a call to `trigger_generation` amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// Another generation was still in flight; nothing changed
    Ignored,
    Succeeded,
    Failed,
}

/// Generation side of the wizard. Content from an earlier success is kept
/// while a new call is loading and after it fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationState {
    loading: bool,
    error: Option<String>,
    content: Option<GeneratedContent>,
}

impl GenerationState {
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn content(&self) -> Option<&GeneratedContent> {
        self.content.as_ref()
    }

    pub fn status(&self) -> GenerationStatus {
        if self.loading {
            GenerationStatus::Loading
        } else if self.error.is_some() {
            GenerationStatus::Failed
        } else if self.content.is_some() {
            GenerationStatus::Succeeded
        } else {
            GenerationStatus::Idle
        }
    }
}

/// State of one visitor's wizard: the current step, the configuration being
/// built and the latest generation result. Every method is a plain state
/// transition; the provider call itself happens in `WizardSession`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardController {
    step: WizardStep,
    config: NewsletterConfig,
    generation: GenerationState,
}

impl WizardController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn config(&self) -> &NewsletterConfig {
        &self.config
    }

    pub fn generation(&self) -> &GenerationState {
        &self.generation
    }

    pub fn can_proceed(&self) -> bool {
        can_proceed(self.step, &self.config)
    }

    /// Moves one step forward, staying on the last step. Gating is the
    /// caller's job, see `can_proceed`.
    pub fn advance(&mut self) {
        self.step = self.step.next();
    }

    pub fn retreat(&mut self) {
        self.step = self.step.previous();
    }

    pub fn set_field(&mut self, field: ConfigField, value: String) -> Result<(), String> {
        self.config.set_field(field, value)
    }

    /// Enters the loading state and hands back the configuration to generate
    /// from, or `None` when a generation is already in flight.
    pub fn begin_generation(&mut self) -> Option<NewsletterConfig> {
        if self.generation.loading {
            return None;
        }

        self.generation.loading = true;
        self.generation.error = None;

        Some(self.config.clone())
    }

    pub fn finish_generation(
        &mut self,
        outcome: Result<GeneratedContent, GenerationError>,
    ) -> GenerationOutcome {
        self.generation.loading = false;

        match outcome {
            Ok(content) => {
                self.generation.content = Some(content);
                GenerationOutcome::Succeeded
            }
            Err(_) => {
                self.generation.error = Some(GENERIC_FAILURE_MESSAGE.to_string());
                GenerationOutcome::Failed
            }
        }
    }
}
