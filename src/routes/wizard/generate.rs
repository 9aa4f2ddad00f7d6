use crate::access::WizardId;
use crate::generation_client::{GENERIC_FAILURE_MESSAGE, GenerationClient};
use crate::routes::{WizardError, WizardState};
use crate::wizard::{GenerationOutcome, WizardStore};
use actix_web::{HttpResponse, web};

#[tracing::instrument(skip_all, fields(wizard_id = %&*wizard_id))]
pub async fn generate_newsletter(
    wizard_id: web::ReqData<WizardId>,
    store: web::Data<WizardStore>,
    generation_client: web::Data<GenerationClient>,
) -> Result<HttpResponse, WizardError> {
    let session = store.session(**wizard_id);

    match session.trigger_generation(generation_client.get_ref()).await {
        GenerationOutcome::Ignored => Err(WizardError::GenerationInProgress),
        GenerationOutcome::Failed => Err(WizardError::GenerationFailed(
            GENERIC_FAILURE_MESSAGE.to_string(),
        )),
        GenerationOutcome::Succeeded => Ok(WizardState::respond(&session.snapshot())),
    }
}
