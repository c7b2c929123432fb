use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use domain::DomainError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    BadRequest(String),
}

/// Error payload returned to clients.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub message: String,
    pub status_code: u16,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Domain(DomainError::InvalidArgument(_)) => StatusCode::BAD_REQUEST,
            ApiError::Domain(DomainError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Domain(DomainError::StorageFailure(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn client_message(&self) -> String {
        match self {
            // Storage details stay in the logs.
            ApiError::Domain(DomainError::StorageFailure(_)) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            warn!(status = status.as_u16(), error = %self, "request rejected");
        }

        let body = ErrorBody {
            message: self.client_message(),
            status_code: status.as_u16(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ApiError::from(DomainError::invalid("empty")), StatusCode::BAD_REQUEST)]
    #[case(ApiError::from(DomainError::not_found("gone")), StatusCode::NOT_FOUND)]
    #[case(ApiError::from(DomainError::storage("locked")), StatusCode::INTERNAL_SERVER_ERROR)]
    #[case(ApiError::Unauthorized("who".to_string()), StatusCode::UNAUTHORIZED)]
    #[case(ApiError::BadRequest("json".to_string()), StatusCode::BAD_REQUEST)]
    fn each_error_kind_has_one_status(#[case] error: ApiError, #[case] expected: StatusCode) {
        assert_eq!(error.status(), expected);
        assert_eq!(error.into_response().status(), expected);
    }

    #[test]
    fn storage_details_are_hidden_from_clients() {
        let error = ApiError::from(DomainError::storage("database is locked"));
        assert_eq!(error.client_message(), "Internal server error");
    }

    #[test]
    fn invalid_argument_message_is_passed_through() {
        let error = ApiError::from(DomainError::invalid("At least one folder name is required"));
        assert_eq!(error.client_message(), "At least one folder name is required");
    }
}
