use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

use crate::models::ErrorBody;
use crate::provider::ProviderError;

/// Per-request error taxonomy. Every variant is terminal for its request;
/// nothing here is retried.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("Weather data for '{city}' not found")]
    CityNotFound { city: String, known: Vec<String> },
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl From<ProviderError> for ApiError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::NotFound { city } => ApiError::CityNotFound {
                city,
                known: Vec::new(),
            },
            ProviderError::Transient(msg) => ApiError::Internal(anyhow::anyhow!(msg)),
        }
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::CityNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let (error, detail) = match &self {
            ApiError::Validation(msg) => (msg.clone(), format!("HTTP {}", status.as_u16())),
            ApiError::CityNotFound { city, known } => (
                format!(
                    "Weather data for '{}' not found. Try: {}",
                    city,
                    known.join(", ")
                ),
                format!("HTTP {}", status.as_u16()),
            ),
            // Exposing the source error text is acceptable for a demo;
            // a production deployment would redact it.
            ApiError::Internal(source) => ("Internal server error".to_string(), source.to_string()),
        };

        let body = ErrorBody {
            error,
            detail: Some(detail),
            timestamp: chrono::Utc::now(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Validation("bad".into()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::CityNotFound {
                city: "atlantis".into(),
                known: vec![]
            }
            .status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal(anyhow::anyhow!("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_transient_provider_error_maps_to_internal() {
        let err: ApiError = ProviderError::Transient("upstream down".into()).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
