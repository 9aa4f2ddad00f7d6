use crate::access::WizardId;
use crate::routes::WizardError;
use crate::telemetry::spawn_blocking_with_tracing;
use crate::wizard::{WizardStore, render_preview};
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, web};
use anyhow::Context;

#[tracing::instrument(skip_all, fields(wizard_id = %&*wizard_id))]
pub async fn preview_newsletter(
    wizard_id: web::ReqData<WizardId>,
    store: web::Data<WizardStore>,
) -> Result<HttpResponse, WizardError> {
    let wizard = store.session(**wizard_id).snapshot();

    // Sanitising parses model HTML; keep it off the worker thread
    let page = spawn_blocking_with_tracing(move || render_preview(&wizard))
        .await
        .context("Failed to render the newsletter preview")?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page))
}
