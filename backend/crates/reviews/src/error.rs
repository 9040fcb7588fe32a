//! Review API Error Types
//!
//! This module provides review-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Review-specific result type alias
pub type ReviewsResult<T> = Result<T, ReviewsError>;

/// Review-specific error variants
///
/// The data layer reports zero-row outcomes as `Option::None`; these
/// variants are the handler-side classification of everything that maps
/// to a non-200 response.
#[derive(Debug, Error)]
pub enum ReviewsError {
    /// Path segment where an integer review id was expected did not parse
    #[error("Review id is not an integer")]
    InvalidReviewId,

    /// Required body field missing or of the wrong type
    #[error("Missing or invalid request body field")]
    InvalidBody,

    /// Well-formed review id with no matching row
    #[error("Review not found")]
    ReviewNotFound,

    /// Referenced username does not exist
    #[error("User not found")]
    UserNotFound,

    /// No route matched the request path
    #[error("Route not found")]
    RouteNotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ReviewsError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReviewsError::InvalidReviewId | ReviewsError::InvalidBody => ErrorKind::BadRequest,
            ReviewsError::ReviewNotFound
            | ReviewsError::UserNotFound
            | ReviewsError::RouteNotFound => ErrorKind::NotFound,
            ReviewsError::Database(_) => ErrorKind::InternalServerError,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Canonical message for the `{"msg": ...}` body
    ///
    /// One message per error class. Malformed requests and absent
    /// resources deliberately do not leak which variant was hit; the
    /// variant detail goes to the log instead.
    pub fn msg(&self) -> &'static str {
        match self.kind() {
            ErrorKind::BadRequest => "Bad request",
            ErrorKind::NotFound => "Path not found",
            _ => "Internal server error",
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ReviewsError::Database(e) => {
                tracing::error!(error = %e, "Review store error");
            }
            _ => {
                tracing::debug!(error = %self, "Request rejected");
            }
        }
    }
}

impl From<ReviewsError> for AppError {
    fn from(err: ReviewsError) -> Self {
        let kind = err.kind();
        let msg = err.msg();
        match err {
            ReviewsError::Database(e) => AppError::new(kind, msg).with_source(e),
            _ => AppError::new(kind, msg),
        }
    }
}

impl IntoResponse for ReviewsError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
