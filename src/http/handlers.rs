use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use super::errors::{engine_error_to_response, json_error, parse_product_id};
use crate::engine::AdjustmentEngine;
use crate::model::{AdjustmentRequestItem, Direction, ProductId};
use crate::store::StockStore;

/// Body of `POST /api/inventory`.
#[derive(Debug, Deserialize)]
pub struct CreateStockRequest {
    #[serde(alias = "productId")]
    pub product_id: i64,
    #[serde(default, alias = "stockLevel")]
    pub stock_level: i64,
}

pub(crate) async fn root() -> impl IntoResponse {
    Json(json!({ "message": "Ok" }))
}

pub(crate) async fn not_found() -> impl IntoResponse {
    StatusCode::NOT_FOUND
}

// GET /api/inventory/:id
pub(crate) async fn get_stock<S: StockStore>(
    State(engine): State<AdjustmentEngine<S>>,
    Path(raw_id): Path<String>,
) -> Response {
    let id = match parse_product_id(&raw_id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    match engine.get_stock(ProductId(id)).await {
        Ok(row) => Json(json!({ "message": "success", "data": row })).into_response(),
        Err(e) => engine_error_to_response(e),
    }
}

// POST /api/inventory/decrement
pub(crate) async fn decrement<S: StockStore>(
    State(engine): State<AdjustmentEngine<S>>,
    body: Result<Json<Vec<AdjustmentRequestItem>>, JsonRejection>,
) -> Response {
    adjust(engine, body, Direction::Decrement).await
}

// POST /api/inventory/increment
pub(crate) async fn increment<S: StockStore>(
    State(engine): State<AdjustmentEngine<S>>,
    body: Result<Json<Vec<AdjustmentRequestItem>>, JsonRejection>,
) -> Response {
    adjust(engine, body, Direction::Increment).await
}

async fn adjust<S: StockStore>(
    engine: AdjustmentEngine<S>,
    body: Result<Json<Vec<AdjustmentRequestItem>>, JsonRejection>,
    direction: Direction,
) -> Response {
    let Json(batch) = match body {
        Ok(body) => body,
        Err(rejection) => return json_error(StatusCode::BAD_REQUEST, rejection.body_text()),
    };

    match engine.process(batch, direction).await {
        Ok(result) if result.all_succeeded => Json(json!({
            "message": "success",
            "data": result.summary(),
            "changes": result.total_changes,
        }))
        .into_response(),
        Ok(result) => json_error(StatusCode::BAD_REQUEST, result.error_message()),
        Err(e) => engine_error_to_response(e),
    }
}

// POST /api/inventory
pub(crate) async fn create_stock<S: StockStore>(
    State(engine): State<AdjustmentEngine<S>>,
    body: Result<Json<CreateStockRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(rejection) => return json_error(StatusCode::BAD_REQUEST, rejection.body_text()),
    };
    let Ok(stock_level) = u64::try_from(req.stock_level) else {
        return json_error(
            StatusCode::BAD_REQUEST,
            format!("stock_level must not be negative, got {}", req.stock_level),
        );
    };

    match engine.add_product(ProductId(req.product_id), stock_level).await {
        Ok(row) => {
            info!(product_id = %row.product_id, stock_level, "Created stock row");
            (
                StatusCode::CREATED,
                Json(json!({ "message": "success", "data": row })),
            )
                .into_response()
        }
        Err(e) => engine_error_to_response(e),
    }
}

// GET /api/all_items
pub(crate) async fn all_items<S: StockStore>(State(engine): State<AdjustmentEngine<S>>) -> Response {
    match engine.list_stock().await {
        Ok(rows) => Json(json!({ "message": "success", "data": rows })).into_response(),
        Err(e) => engine_error_to_response(e),
    }
}
