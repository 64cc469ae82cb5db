use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use adyen_tools::AdyenApiError;
use log::error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Could not initialize server. {0}")]
    InitializeError(String),
    #[error("Invalid request: {0}")]
    InvalidInput(String),
    #[error("The PSP rejected the request. Status {status}. {body}")]
    PspError { status: u16, body: String },
    #[error("Could not reach the PSP. {0}")]
    Transport(String),
    #[error("An I/O error happened in the server. {0}")]
    IOError(#[from] std::io::Error),
    #[error("UnspecifiedError. {0}")]
    Unspecified(String),
}

impl From<AdyenApiError> for ServerError {
    fn from(e: AdyenApiError) -> Self {
        match e {
            AdyenApiError::QueryError { status, message } => Self::PspError { status, body: message },
            AdyenApiError::RequestError(m) | AdyenApiError::ResponseError(m) => Self::Transport(m),
            AdyenApiError::Initialization(m) => Self::InitializeError(m),
            AdyenApiError::JsonError(m) => Self::Unspecified(m),
        }
    }
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InitializeError(_) | Self::IOError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            // Every client-facing failure, PSP errors and transport faults included, collapses
            // into a bare 400. The detail only goes to the log.
            Self::InvalidInput(_) | Self::PspError { .. } | Self::Transport(_) | Self::Unspecified(_) => {
                StatusCode::BAD_REQUEST
            },
        }
    }

    fn error_response(&self) -> HttpResponse {
        // The PSP error payload only survives in the log; the body stays empty.
        error!("💳️ Request failed: {self}");
        HttpResponse::build(self.status_code()).finish()
    }
}
