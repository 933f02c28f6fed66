use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pairlist_core::errors::Error as CoreError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

const INTERNAL_MESSAGE: &str = "Internal Server Error";

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            ApiError::Core(e) => match e {
                CoreError::InvalidRange { .. } | CoreError::Validation(_) => {
                    (StatusCode::BAD_REQUEST, e.to_string())
                }
                CoreError::NoData => (StatusCode::NOT_FOUND, e.to_string()),
                _ => (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string()),
            },
            ApiError::BadRequest(reason) => (StatusCode::BAD_REQUEST, reason.clone()),
            ApiError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_MESSAGE.to_string(),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message,
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pairlist_core::errors::{DatabaseError, ValidationError};

    #[test]
    fn test_status_mapping() {
        let bad: ApiError = CoreError::from(ValidationError::MissingParameters).into();
        assert_eq!(bad.status_and_message().0, StatusCode::BAD_REQUEST);

        let inverted: ApiError = CoreError::InvalidRange {
            start: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
        .into();
        assert_eq!(inverted.status_and_message().0, StatusCode::BAD_REQUEST);

        let missing: ApiError = CoreError::NoData.into();
        assert_eq!(missing.status_and_message().0, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_errors_hide_detail() {
        let err: ApiError =
            CoreError::from(DatabaseError::QueryFailed("disk I/O error".to_string())).into();
        let (status, message) = err.status_and_message();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "Internal Server Error");
    }
}
