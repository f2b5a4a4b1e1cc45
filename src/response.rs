//! Response helpers shared by handlers and the error path.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// `{ "error": { "message": ... } }`, the body of every 4xx and of a production 500.
pub fn error_body(message: &str) -> serde_json::Value {
    serde_json::json!({
        "error": {
            "message": message
        }
    })
}

/// 201 with a `Location` header pointing at the new resource.
pub fn created<T: Serialize>(location: String, data: T) -> Response {
    let mut res = (StatusCode::CREATED, Json(data)).into_response();
    if let Ok(value) = HeaderValue::from_str(&location) {
        res.headers_mut().insert(header::LOCATION, value);
    }
    res
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}
