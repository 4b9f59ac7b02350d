use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every workflow failure ends up here and is rendered as one user-visible message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Content service rate limited after {attempts} attempts")]
    RateLimited { attempts: u32 },

    #[error("Content service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Publish failed: {0}")]
    Publish(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CONFIGURATION_ERROR",
                    "The site builder is not configured. Contact the operator.".to_string(),
                )
            }
            AppError::RateLimited { attempts } => {
                tracing::warn!("Content service still rate limited after {attempts} attempts");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "SERVICE_BUSY",
                    "The AI service is busy right now. Please try again in a minute.".to_string(),
                )
            }
            AppError::ServiceUnavailable(msg) => {
                tracing::error!("Content service error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "SERVICE_UNAVAILABLE",
                    "The AI service could not generate your site.".to_string(),
                )
            }
            AppError::Publish(msg) => {
                tracing::error!("Publish error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "PUBLISH_ERROR",
                    "Your site was generated but could not be confirmed as published."
                        .to_string(),
                )
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limited_maps_to_service_busy() {
        let response = AppError::RateLimited { attempts: 3 }.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_publish_error_maps_to_bad_gateway() {
        let response = AppError::Publish("store down".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_publish_error_message_does_not_claim_nothing_was_written() {
        let response = AppError::Publish("response body unreadable".to_string()).into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["error"]["code"], "PUBLISH_ERROR");
        let message = body["error"]["message"].as_str().unwrap();
        assert!(message.contains("could not be confirmed as published"));
        assert!(!message.contains("Nothing was saved"));
    }

    #[test]
    fn test_validation_maps_to_bad_request() {
        let response = AppError::Validation("bad theme".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
