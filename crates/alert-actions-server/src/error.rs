use alert_actions_core::error::ActionsError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Body shared by every not-found response. A disabled feature, an unknown
/// organization and a malformed slug must be indistinguishable.
pub const NOT_FOUND_MESSAGE: &str = "The requested resource does not exist";

// ---------------------------------------------------------------------------
// Internal sentinel for explicit 401 Unauthorized errors
// ---------------------------------------------------------------------------

/// Private sentinel used to carry an explicit HTTP 401 through the
/// `anyhow::Error` chain without touching the `ActionsError` enum.
#[derive(Debug)]
struct UnauthorizedError(String);

impl std::fmt::Display for UnauthorizedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for UnauthorizedError {}

// ---------------------------------------------------------------------------
// AppError: unified error type for HTTP responses
// ---------------------------------------------------------------------------

/// Unified error type for HTTP responses.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    /// Construct a 401 Unauthorized error.
    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self(UnauthorizedError(msg.into()).into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(u) = self.0.downcast_ref::<UnauthorizedError>() {
            let body = serde_json::json!({ "error": u.0.clone() });
            return (StatusCode::UNAUTHORIZED, axum::Json(body)).into_response();
        }

        if let Some(e) = self.0.downcast_ref::<ActionsError>() {
            if e.is_not_found() {
                tracing::debug!(error = %e, "reporting as not found");
                let body = serde_json::json!({ "error": NOT_FOUND_MESSAGE });
                return (StatusCode::NOT_FOUND, axum::Json(body)).into_response();
            }
        }

        let status = match self.0.downcast_ref::<ActionsError>() {
            Some(ActionsError::NotInitialized) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::error!(error = %self.0, "request failed");

        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn feature_disabled_maps_to_404() {
        let err = AppError(
            ActionsError::FeatureDisabled {
                flag: "organizations:incidents".into(),
                organization: "acme".into(),
            }
            .into(),
        );
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn organization_not_found_maps_to_404() {
        let err = AppError(ActionsError::OrganizationNotFound("acme".into()).into());
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn invalid_slug_maps_to_404() {
        let err = AppError(ActionsError::InvalidSlug("BAD SLUG".into()).into());
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn not_initialized_maps_to_503() {
        let err = AppError(ActionsError::NotInitialized.into());
        assert_eq!(err.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn unauthorized_constructor_maps_to_401() {
        let err = AppError::unauthorized("missing actor");
        assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn io_error_maps_to_500() {
        let io_err = std::io::Error::other("disk full");
        let err = AppError(ActionsError::Io(io_err).into());
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn non_actions_error_maps_to_500() {
        let err = AppError(anyhow::anyhow!("something unexpected"));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn response_is_json() {
        let err = AppError(ActionsError::OrganizationNotFound("acme".into()).into());
        let response = err.into_response();
        let ct = response
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .expect("should have content-type");
        assert!(ct.to_str().unwrap().contains("application/json"));
    }
}
