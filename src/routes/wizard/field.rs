use crate::access::WizardId;
use crate::domain::ConfigField;
use crate::routes::{WizardError, WizardState};
use crate::wizard::WizardStore;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct FieldUpdate {
    field: String,
    value: String,
}

#[tracing::instrument(
    skip_all,
    fields(wizard_id = %&*wizard_id, field = %payload.field)
)]
pub async fn set_field(
    payload: web::Json<FieldUpdate>,
    wizard_id: web::ReqData<WizardId>,
    store: web::Data<WizardStore>,
) -> Result<HttpResponse, WizardError> {
    let FieldUpdate { field, value } = payload.into_inner();
    let field = ConfigField::parse(&field).map_err(WizardError::ValidationError)?;

    store.session(**wizard_id).update(|wizard| {
        wizard
            .set_field(field, value)
            .map_err(WizardError::ValidationError)?;
        Ok(WizardState::respond(wizard))
    })
}
