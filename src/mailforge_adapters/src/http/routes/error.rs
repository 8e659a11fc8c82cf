use std::error::Error as _;

use axum::{
    Json,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use mailforge_application::{AcquireEmailError, CreateEmailError, ListMessagesError};
use mailforge_core::{AccessTokenError, MailProviderError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication token is required")]
    MissingToken,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    MailProvider(#[from] MailProviderError),

    #[error(transparent)]
    CreateEmail(#[from] CreateEmailError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingToken | ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,

            ApiError::MailProvider(MailProviderError::Unauthorized) => StatusCode::UNAUTHORIZED,
            ApiError::MailProvider(MailProviderError::NotFound) => StatusCode::NOT_FOUND,
            ApiError::MailProvider(_) => StatusCode::INTERNAL_SERVER_ERROR,

            ApiError::CreateEmail(CreateEmailError::DomainsUnavailable(_))
            | ApiError::CreateEmail(CreateEmailError::Acquire(
                AcquireEmailError::NoDomainsAvailable,
            )) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::CreateEmail(CreateEmailError::Acquire(AcquireEmailError::Exhausted {
                ..
            })) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The error followed by each of its sources, one per line.
    fn stack(&self) -> String {
        let mut stack = self.to_string();
        let mut source = self.source();
        while let Some(error) = source {
            stack.push_str("\n  caused by: ");
            stack.push_str(&error.to_string());
            source = error.source();
        }
        stack
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            tracing::error!(error = %self, status = status_code.as_u16(), "Request failed");
        } else {
            tracing::warn!(error = %self, status = status_code.as_u16(), "Request rejected");
        }

        let body = ErrorBody {
            message: self.to_string(),
            stack: None,
        };

        let mut response = (
            status_code,
            Json(ErrorResponse {
                success: false,
                error: body.clone(),
            }),
        )
            .into_response();

        response.extensions_mut().insert(ErrorDetails(ErrorBody {
            stack: Some(self.stack()),
            ..body
        }));

        response
    }
}

/// Full error body, attached to every error response so [`expose_error_details`]
/// can swap it in.
#[derive(Debug, Clone)]
pub struct ErrorDetails(pub ErrorBody);

/// Middleware that rewrites error bodies to include the `stack` field when
/// `expose` is set.
pub async fn expose_error_details(
    State(expose): State<bool>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;

    if !expose {
        return response;
    }

    match response.extensions_mut().remove::<ErrorDetails>() {
        Some(ErrorDetails(error)) => (
            response.status(),
            Json(ErrorResponse {
                success: false,
                error,
            }),
        )
            .into_response(),
        None => response,
    }
}

impl From<AccessTokenError> for ApiError {
    fn from(error: AccessTokenError) -> Self {
        match error {
            AccessTokenError::Missing => ApiError::MissingToken,
        }
    }
}

impl From<ListMessagesError> for ApiError {
    fn from(error: ListMessagesError) -> Self {
        match error {
            ListMessagesError::InvalidPage => ApiError::InvalidInput(error.to_string()),
            ListMessagesError::MailProviderError(e) => e.into(),
        }
    }
}
