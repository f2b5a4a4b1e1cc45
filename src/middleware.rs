//! Outer HTTP layers: the terminal error handler, panic recovery and the
//! response headers every reply carries.

use crate::config::Environment;
use crate::error::{AppError, ServerFault};
use crate::response::error_body;
use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use std::any::Any;
use tower_http::set_header::SetResponseHeaderLayer;

/// Largest accepted request body.
pub const BODY_LIMIT_BYTES: usize = 100 * 1024;

/// Rewrites every response that carries a [`ServerFault`] into the final 500.
/// Production gets a generic message; other environments get the full error.
/// Client errors produced outside the handlers (405 and the like) are given
/// the JSON error body.
pub async fn handle_server_errors(
    State(environment): State<Environment>,
    req: Request,
    next: Next,
) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let res = next.run(req).await;
    let Some(fault) = res.extensions().get::<ServerFault>().cloned() else {
        if res.status().is_client_error() && !is_json(res.headers()) {
            return json_client_error(res);
        }
        return res;
    };
    tracing::error!(
        %method,
        %uri,
        kind = fault.kind,
        error = %fault.message,
        "request failed"
    );
    let body = if environment.is_production() {
        ServerFault::public_body()
    } else {
        fault.diagnostic_body()
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("application/json"))
        .unwrap_or(false)
}

/// Same status and headers, body replaced by `{"error":{"message":<reason>}}`.
fn json_client_error(res: Response) -> Response {
    let (mut parts, _) = res.into_parts();
    let message = parts.status.canonical_reason().unwrap_or("Request error");
    parts.headers.remove(header::CONTENT_LENGTH);
    parts.headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    Response::from_parts(parts, Body::from(error_body(message).to_string()))
}

/// Turns a handler panic into the same 500 as any other unexpected failure.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };
    AppError::Internal(message).into_response()
}

/// Conservative security headers, set only when a handler did not set its own.
pub fn security_headers() -> Vec<SetResponseHeaderLayer<HeaderValue>> {
    [
        ("x-content-type-options", "nosniff"),
        ("x-frame-options", "SAMEORIGIN"),
        ("x-dns-prefetch-control", "off"),
        ("x-download-options", "noopen"),
        ("referrer-policy", "no-referrer"),
    ]
    .into_iter()
    .map(|(name, value)| {
        SetResponseHeaderLayer::if_not_present(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        )
    })
    .collect()
}
