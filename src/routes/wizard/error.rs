use crate::utils;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use std::fmt::{self, Debug, Formatter};

#[derive(thiserror::Error)]
pub enum WizardError {
    #[error("{0}")]
    ValidationError(String),

    #[error("{0}")]
    StepIncomplete(String),

    #[error("A newsletter is already being generated")]
    GenerationInProgress,

    // Always the generic message; the cause has already been logged
    #[error("{0}")]
    GenerationFailed(String),

    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl Debug for WizardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        utils::error_chain_fmt(self, f)
    }
}

impl ResponseError for WizardError {
    fn error_response(&self) -> HttpResponse {
        let status_code = match self {
            WizardError::ValidationError(_) => StatusCode::BAD_REQUEST,
            WizardError::StepIncomplete(_) => StatusCode::UNPROCESSABLE_ENTITY,
            WizardError::GenerationInProgress => StatusCode::CONFLICT,
            WizardError::GenerationFailed(_) => StatusCode::BAD_GATEWAY,
            WizardError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        utils::build_error_response(status_code, self.to_string())
    }
}
