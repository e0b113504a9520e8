use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::engine::EngineError;
use crate::store::StoreError;

pub fn engine_error_to_response(err: EngineError) -> Response {
    match err {
        EngineError::EmptyBatch => json_error(StatusCode::BAD_REQUEST, err.to_string()),
        EngineError::NotFound(_) => json_error(StatusCode::NOT_FOUND, err.to_string()),
        EngineError::Store(StoreError::Duplicate(_)) => json_error(StatusCode::CONFLICT, err.to_string()),
        EngineError::Store(e) => json_error(StatusCode::BAD_REQUEST, e.to_string()),
    }
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, axum::Json(json!({ "error": message.into() }))).into_response()
}

pub fn parse_product_id(s: &str) -> Result<i64, Response> {
    s.parse::<i64>().map_err(|_| {
        json_error(
            StatusCode::BAD_REQUEST,
            format!("product id must be an integer, got {s:?}"),
        )
    })
}
