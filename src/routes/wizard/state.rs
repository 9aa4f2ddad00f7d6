use crate::access::WizardId;
use crate::domain::{GeneratedContent, NewsletterConfig};
use crate::routes::WizardError;
use crate::wizard::{GenerationStatus, STEPS, StepInfo, WizardController, WizardStep, WizardStore};
use actix_web::{HttpResponse, web};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationView {
    pub status: GenerationStatus,
    pub content: Option<GeneratedContent>,
    pub error: Option<String>,
}

/// Everything the wizard page needs to draw itself.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardState {
    pub step: WizardStep,
    pub total_steps: usize,
    pub steps: &'static [StepInfo],
    pub can_proceed: bool,
    pub config: NewsletterConfig,
    pub generation: GenerationView,
}

impl From<&WizardController> for WizardState {
    fn from(wizard: &WizardController) -> Self {
        let generation = wizard.generation();

        Self {
            step: wizard.step(),
            total_steps: STEPS.len(),
            steps: &STEPS,
            can_proceed: wizard.can_proceed(),
            config: wizard.config().clone(),
            generation: GenerationView {
                status: generation.status(),
                content: generation.content().cloned(),
                error: generation.error().map(str::to_string),
            },
        }
    }
}

impl WizardState {
    pub fn respond(wizard: &WizardController) -> HttpResponse {
        HttpResponse::Ok().json(WizardState::from(wizard))
    }
}

#[tracing::instrument(skip_all, fields(wizard_id = %&*wizard_id))]
pub async fn get_wizard(
    wizard_id: web::ReqData<WizardId>,
    store: web::Data<WizardStore>,
) -> Result<HttpResponse, WizardError> {
    let wizard = store.session(**wizard_id).snapshot();
    Ok(WizardState::respond(&wizard))
}
