use crate::access::WizardId;
use crate::routes::{WizardError, WizardState};
use crate::wizard::WizardStore;
use actix_web::{HttpResponse, web};

/// "Continue" button. This is where the step gate is enforced; the
/// controller itself would advance regardless.
#[tracing::instrument(skip_all, fields(wizard_id = %&*wizard_id))]
pub async fn next_step(
    wizard_id: web::ReqData<WizardId>,
    store: web::Data<WizardStore>,
) -> Result<HttpResponse, WizardError> {
    store.session(**wizard_id).update(|wizard| {
        if !wizard.can_proceed() {
            let step = wizard.step();
            return Err(WizardError::StepIncomplete(format!(
                "Step {} ({}) is missing required fields.",
                step.number(),
                step.info().title
            )));
        }

        wizard.advance();
        Ok(WizardState::respond(wizard))
    })
}

#[tracing::instrument(skip_all, fields(wizard_id = %&*wizard_id))]
pub async fn previous_step(
    wizard_id: web::ReqData<WizardId>,
    store: web::Data<WizardStore>,
) -> Result<HttpResponse, WizardError> {
    store.session(**wizard_id).update(|wizard| {
        wizard.retreat();
        Ok(WizardState::respond(wizard))
    })
}
