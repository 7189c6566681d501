use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use database::error::RuleError;
use serde_json::json;

/// Handler failures as HTTP responses
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Rule(#[from] RuleError),
    /// The token carried no subject to identify the current person
    #[error("missing subject in claims")]
    MissingSubject,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Rule(RuleError::InvalidArgument(_)) => StatusCode::BAD_REQUEST,
            Self::Rule(RuleError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Rule(RuleError::Database(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::MissingSubject => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Database details stay in the log
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            log::error!("request failed: {self}");
            "internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
