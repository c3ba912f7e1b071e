//! Request pipeline — the ordered stages every request passes through.
//!
//! Outermost first:
//! 1. panic guard (`CatchPanicLayer`) — a panic becomes a bare 500
//! 2. HTTP trace (`TraceLayer`) — request/response spans
//! 3. [`log_request`] — logs method and path, then continues
//! 4. [`parse_json_body`] — parses JSON bodies into [`ParsedBody`], or
//!    short-circuits with 400 on malformed JSON
//! 5. routing, with the router's 404 fallback
//!
//! A stage either answers the request itself or hands it to `next`.

use std::any::Any;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::extract::Request;
use axum::http::{HeaderMap, StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use petstore_domain::error::ValidationError;

use crate::error::ApiError;
use crate::extract::ParsedBody;

/// Largest request body the parsing stage buffers (100 KiB).
pub const BODY_LIMIT: usize = 100 * 1024;

/// Wrap `router` (routes and fallback already registered) in the pipeline.
pub fn apply<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(middleware::from_fn(parse_json_body))
        .layer(middleware::from_fn(log_request))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
}

/// Log the request line and pass it on.
pub async fn log_request(request: Request, next: Next) -> Response {
    tracing::info!(
        method = %request.method(),
        path = %request.uri().path(),
        "request received"
    );
    next.run(request).await
}

/// Parse a JSON body into a [`ParsedBody`] extension.
///
/// Only requests whose `Content-Type` is JSON are touched; an empty JSON body
/// counts as an empty object.
pub async fn parse_json_body(request: Request, next: Next) -> Response {
    if !is_json(request.headers()) {
        return next.run(request).await;
    }

    let (mut parts, body) = request.into_parts();
    let bytes = match to_bytes(body, BODY_LIMIT).await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::warn!(error = %err, "failed to read request body");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    let value = if bytes.is_empty() {
        serde_json::Value::Object(serde_json::Map::new())
    } else {
        match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(err) => return ApiError::from(ValidationError::InvalidBody(err)).into_response(),
        }
    };

    parts.extensions.insert(ParsedBody(value));
    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

/// `application/json`, or any `+json` media type, ignoring parameters.
fn is_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

#[allow(clippy::needless_pass_by_value)]
fn handle_panic(_payload: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!("handler panicked");
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}
