//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use blinkhub_domain::error::{AssetError, HubError, RenderError, RouteError, StateError};

/// JSON error body returned for failed requests.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`HubError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(HubError);

impl ApiError {
    /// Status code this error is reported with.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            HubError::Asset(AssetError::NotFound { .. })
            | HubError::Route(RouteError::NotFound { .. }) => StatusCode::NOT_FOUND,
            HubError::Asset(AssetError::Io { .. })
            | HubError::Render(_)
            | HubError::Route(_)
            | HubError::State(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<HubError> for ApiError {
    fn from(err: HubError) -> Self {
        Self(err)
    }
}

impl From<AssetError> for ApiError {
    fn from(err: AssetError) -> Self {
        Self(HubError::Asset(err))
    }
}

impl From<RenderError> for ApiError {
    fn from(err: RenderError) -> Self {
        Self(HubError::Render(err))
    }
}

impl From<RouteError> for ApiError {
    fn from(err: RouteError) -> Self {
        Self(HubError::Route(err))
    }
}

impl From<StateError> for ApiError {
    fn from(err: StateError) -> Self {
        Self(HubError::State(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self.0 {
            HubError::Asset(err @ AssetError::NotFound { .. }) => err.to_string(),
            HubError::Route(err @ RouteError::NotFound { .. }) => err.to_string(),
            HubError::Asset(err) => {
                tracing::error!(error = %err, source = ?std::error::Error::source(err), "asset error");
                "internal server error".to_string()
            }
            HubError::Render(err) => {
                tracing::error!(error = %err, "render error");
                "internal server error".to_string()
            }
            HubError::Route(err) => {
                tracing::error!(error = %err, "route error");
                "internal server error".to_string()
            }
            HubError::State(err) => {
                tracing::error!(error = %err, source = ?std::error::Error::source(err), "device state error");
                "internal server error".to_string()
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
