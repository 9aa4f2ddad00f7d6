use actix_web::{HttpResponse, ResponseError, http::StatusCode, web};
use std::fmt::{self, Debug, Formatter};
use tracing::{Span, field};

use crate::{
    domain::{Lead, LeadData},
    session_state::TypedSession,
    utils,
    wizard::WizardStore,
};

#[derive(thiserror::Error)]
pub enum AccessError {
    #[error("{0}")]
    ValidationError(String),

    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl Debug for AccessError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        utils::error_chain_fmt(self, f)
    }
}

impl ResponseError for AccessError {
    fn error_response(&self) -> HttpResponse {
        let status_code = match self {
            AccessError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AccessError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        utils::build_error_response(status_code, self.to_string())
    }
}

/// Landing-page form. A valid lead unlocks the wizard for this session; the
/// lead itself is not kept.
#[tracing::instrument(
    skip_all,
    fields(lead_email = field::Empty, wizard_id = field::Empty)
)]
pub async fn request_access(
    payload: web::Json<LeadData>,
    session: TypedSession,
    store: web::Data<WizardStore>,
) -> Result<HttpResponse, AccessError> {
    let lead: Lead = payload
        .0
        .try_into()
        .map_err(AccessError::ValidationError)?;

    Span::current().record("lead_email", field::display(&lead.email));

    // Coming back through the form must not throw away a wizard in progress
    let wizard_id = match session.get_wizard_id()? {
        Some(wizard_id) if store.contains(wizard_id) => wizard_id,
        _ => {
            let wizard_id = store.create();
            session.renew();
            session.insert_wizard_id(wizard_id)?;
            wizard_id
        }
    };

    Span::current().record("wizard_id", field::display(&wizard_id));

    session.grant_access()?;

    Ok(HttpResponse::Ok().finish())
}
