/// Error handling for the directory server
///
/// Handlers return `Result<T, ApiError>`; each variant maps to a status
/// code and a plain-text body. Invalid form input is deliberately absent
/// from this type: the form handlers ignore it and redirect instead of
/// failing.
///
/// # Example
///
/// ```
/// use roster_api::error::{ApiError, ApiResult};
///
/// fn lookup(found: bool) -> ApiResult<&'static str> {
///     if !found {
///         return Err(ApiError::UserNotFound(7));
///     }
///     Ok("page")
/// }
///
/// assert!(lookup(false).is_err());
/// ```

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use roster_shared::models::user::UserId;

/// Body returned when a user id does not exist
pub const USER_NOT_FOUND_BODY: &str = "Пользователь не найден";

/// Body returned when no route matches the request
pub const ROUTE_NOT_FOUND_BODY: &str = "Страница не найдена";

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No user has the requested id (404)
    #[error("User {0} not found")]
    UserNotFound(UserId),

    /// Path did not match any route, including malformed ids (404)
    #[error("No route for {0}")]
    RouteNotFound(String),
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::UserNotFound(_) | ApiError::RouteNotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn body(&self) -> &'static str {
        match self {
            ApiError::UserNotFound(_) => USER_NOT_FOUND_BODY,
            ApiError::RouteNotFound(_) => ROUTE_NOT_FOUND_BODY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::info!("{}", self);

        (
            self.status(),
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.body(),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::UserNotFound(42);
        assert_eq!(err.to_string(), "User 42 not found");

        let err = ApiError::RouteNotFound("/users/abc".to_string());
        assert_eq!(err.to_string(), "No route for /users/abc");
    }

    #[tokio::test]
    async fn test_user_not_found_response() {
        let response = ApiError::UserNotFound(9).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/plain; charset=utf-8"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], USER_NOT_FOUND_BODY.as_bytes());
    }
}
