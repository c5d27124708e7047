use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use hc_common::db::{
    CandidateStorageError, ExperienceStorageError, JobStorageError, MatchStorageError,
};
use hc_common::store::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Database(String),
    #[error("internal server error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    code: &'static str,
    message: String,
}

impl ApiError {
    fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "bad_request",
            ApiError::NotFound(_) => "not_found",
            ApiError::Database(_) => "database_error",
            ApiError::Internal(_) => "internal_error",
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Internal detail stays in the logs; clients get a generic message for
    /// 5xx responses.
    fn public_message(&self) -> String {
        match self {
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) => msg.clone(),
            ApiError::Database(_) | ApiError::Internal(_) => "internal server error".into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let code = self.code();

        error!(code, status = %status, error = %self, "api_error");

        let body = Json(ErrorResponse {
            code,
            message: self.public_message(),
        });

        (status, body).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(value: StoreError) -> Self {
        ApiError::Database(value.to_string())
    }
}

impl From<JobStorageError> for ApiError {
    fn from(value: JobStorageError) -> Self {
        ApiError::Database(value.to_string())
    }
}

impl From<CandidateStorageError> for ApiError {
    fn from(value: CandidateStorageError) -> Self {
        ApiError::Database(value.to_string())
    }
}

impl From<ExperienceStorageError> for ApiError {
    fn from(value: ExperienceStorageError) -> Self {
        ApiError::Database(value.to_string())
    }
}

impl From<MatchStorageError> for ApiError {
    fn from(value: MatchStorageError) -> Self {
        ApiError::Database(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde_json::Value;

    #[tokio::test]
    async fn database_errors_hide_internal_detail() {
        let err = ApiError::Database("connection refused to 10.0.0.1".into());
        let response = err.into_response();

        let (parts, body) = response.into_parts();
        assert_eq!(parts.status, StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = body.collect().await.unwrap().to_bytes();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["code"], "database_error");
        assert_eq!(json["message"], "internal server error");
    }

    #[tokio::test]
    async fn not_found_keeps_its_message() {
        let err = ApiError::NotFound("job not found: job-1".into());
        let response = err.into_response();

        let (parts, body) = response.into_parts();
        assert_eq!(parts.status, StatusCode::NOT_FOUND);

        let bytes = body.collect().await.unwrap().to_bytes();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["message"], "job not found: job-1");
    }
}
