use actix_http::StatusCode;
use actix_web::{http::header::ContentType, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Serialize, Deserialize, Debug, Error, PartialEq)]
pub enum AccountsError {
    #[error("request malformed or invalid: {0}")]
    BadRequest(String),
    #[error("account not found")]
    AccountNotFound,
    #[error("beneficiary not found")]
    BeneficiaryNotFound,
    #[error("failed to parse config")]
    ConfigError(String),
    #[error("internal error")]
    DataReadError(String),
}

impl ResponseError for AccountsError {
    fn status_code(&self) -> StatusCode {
        match self {
            AccountsError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AccountsError::AccountNotFound | AccountsError::BeneficiaryNotFound => {
                StatusCode::NOT_FOUND
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        #[derive(Serialize)]
        struct ErrorResponse {
            error: String,
        }

        let response = serde_json::to_string(&ErrorResponse {
            error: format!("{}", self),
        })
        .unwrap_or(self.to_string());

        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .body(response)
    }
}

impl From<config::ConfigError> for AccountsError {
    fn from(e: config::ConfigError) -> Self {
        Self::ConfigError(e.to_string())
    }
}
