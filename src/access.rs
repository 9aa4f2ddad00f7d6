use crate::session_state::TypedSession;
use crate::utils::{build_error_response, e500};
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::middleware::Next;
use actix_web::{FromRequest, HttpMessage};
use std::ops::Deref;
use uuid::Uuid;

/// Id of the visitor's wizard, resolved from the session by
/// `reject_visitors_without_access`.
#[derive(Copy, Clone, Debug)]
pub struct WizardId(Uuid);

impl std::fmt::Display for WizardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl Deref for WizardId {
    type Target = Uuid;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

fn reject(msg: &'static str) -> actix_web::Error {
    let response = build_error_response(StatusCode::UNAUTHORIZED, msg.to_string());
    InternalError::from_response(anyhow::anyhow!(msg), response).into()
}

pub async fn reject_visitors_without_access(
    mut req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, actix_web::Error> {
    let session = {
        let (http_request, payload) = req.parts_mut();
        TypedSession::from_request(http_request, payload).await
    }?;

    if !session.has_access().map_err(e500)? {
        return Err(reject("Access form has not been submitted"));
    }

    // Only reachable with a tampered or outdated cookie
    let wizard_id = session
        .get_wizard_id()
        .map_err(e500)?
        .ok_or_else(|| reject("Session has no wizard attached"))?;

    req.extensions_mut().insert(WizardId(wizard_id));
    next.call(req).await
}
