//! API error type: every failure leaves the gateway as `{error, success: false}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

#[derive(Debug, thiserror::Error)]
pub(crate) enum ApiError {
    /// Validation failure; the message is shown to the client as-is.
    #[error("{0}")]
    BadRequest(String),
    /// Upload exceeded the configured limit (`limit` is already human-readable).
    #[error("File size too large. Maximum size is {limit}.")]
    FileTooLarge { limit: String },
    #[error("Route not found")]
    NotFound,
    /// Logged server-side; the client only sees a generic message.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub(crate) fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::FileTooLarge { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<std::io::Error> for ApiError {
    fn from(e: std::io::Error) -> Self {
        Self::Internal(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match &self {
            Self::BadRequest(_) | Self::FileTooLarge { .. } => serde_json::json!({
                "error": self.to_string(),
                "success": false,
            }),
            Self::NotFound => serde_json::json!({
                "error": "Route not found",
                "message": "The requested endpoint does not exist",
                "success": false,
            }),
            Self::Internal(detail) => {
                tracing::error!(target: "farmbot::gateway", error = %detail, "Server error");
                serde_json::json!({
                    "error": "Internal server error",
                    "success": false,
                })
            }
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(err: ApiError) -> (StatusCode, serde_json::Value) {
        let res = err.into_response();
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn internal_error_hides_detail() {
        let (status, json) =
            body_json(ApiError::Internal("disk full at /var/uploads".to_string())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Internal server error");
        assert_eq!(json["success"], false);
        assert!(!json.to_string().contains("disk full"));
    }

    #[tokio::test]
    async fn oversize_is_distinct_from_validation() {
        let (status, json) = body_json(ApiError::FileTooLarge {
            limit: "16MB".to_string(),
        })
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "File size too large. Maximum size is 16MB.");
    }
}
