//! Bridge between axum and the route dispatcher.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method as HttpMethod, Uri, header};
use axum::response::{IntoResponse, Response};

use blinkhub_domain::error::RouteError;
use blinkhub_domain::route::{Method, Request};

use crate::error::ApiError;
use crate::state::AppState;

/// Successful dispatcher result, sent as `200 OK`.
pub struct DispatchResponse(blinkhub_domain::route::Response);

impl IntoResponse for DispatchResponse {
    fn into_response(self) -> Response {
        let blinkhub_domain::route::Response { content_type, body } = self.0;
        ([(header::CONTENT_TYPE, content_type.as_str())], body).into_response()
    }
}

/// Fallback handler: every request not matched by an axum route lands here.
///
/// Methods the domain does not model are reported as a missing route. `HEAD`
/// is answered by the `GET` handler of the same path with the body dropped.
pub async fn handle(
    State(state): State<AppState>,
    method: HttpMethod,
    uri: Uri,
    body: Bytes,
) -> Result<DispatchResponse, ApiError> {
    let path = uri.path().to_string();
    let method: Method = method.as_str().parse().map_err(|_| RouteError::NotFound {
        method: method.to_string(),
        path: path.clone(),
    })?;
    let head = method == Method::Head;
    let method = if head { Method::Get } else { method };
    let request = Request::new(method, path).with_body(body.to_vec());
    let mut response = state.dispatcher.dispatch(request).await?;
    if head {
        response.body.clear();
    }
    Ok(DispatchResponse(response))
}
