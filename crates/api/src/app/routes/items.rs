use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use stockroom_core::ItemId;
use stockroom_inventory::{ItemInput, StockThreshold, low_stock, paginate, search};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/low-stock", get(list_low_stock))
        .route(
            "/items/:id",
            get(get_item).put(update_item).delete(delete_item),
        )
}

/// Raw query pairs, in order. A malformed query string reads as empty.
type QueryPairs = Result<Query<Vec<(String, String)>>, QueryRejection>;

fn query_pairs(query: QueryPairs) -> Vec<(String, String)> {
    query.map(|Query(pairs)| pairs).unwrap_or_default()
}

/// `{id}` must name a positive integer; anything else cannot exist.
fn parse_id(raw: &str) -> Result<ItemId, axum::response::Response> {
    raw.parse::<ItemId>().map_err(errors::domain_error_to_response)
}

pub async fn list_items(
    Extension(services): Extension<Arc<AppServices>>,
    query: QueryPairs,
) -> axum::response::Response {
    let query = dto::ListItemsQuery::from_pairs(&query_pairs(query));

    let items = match services.store().list().await {
        Ok(items) => items,
        Err(e) => return errors::store_error_to_response(e),
    };

    let matched = search(items, query.q.as_deref());
    (StatusCode::OK, Json(paginate(matched, query.page_request()))).into_response()
}

pub async fn list_low_stock(
    Extension(services): Extension<Arc<AppServices>>,
    query: QueryPairs,
) -> axum::response::Response {
    let query = dto::LowStockQuery::from_pairs(&query_pairs(query));

    let threshold = match StockThreshold::parse(query.threshold.as_deref()) {
        Ok(t) => t,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let items = match services.store().list().await {
        Ok(items) => items,
        Err(e) => return errors::store_error_to_response(e),
    };

    let low = low_stock(items, threshold);
    (StatusCode::OK, Json(paginate(low, query.page_request()))).into_response()
}

pub async fn create_item(
    Extension(services): Extension<Arc<AppServices>>,
    body: Bytes,
) -> axum::response::Response {
    let draft = match ItemInput::from_json(&body).and_then(ItemInput::validate) {
        Ok(d) => d,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.store().create(draft).await {
        Ok(item) => (StatusCode::CREATED, Json(item)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.store().get(id).await {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn update_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Bytes,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    // Validate before touching the store so a bad body never half-applies.
    let draft = match ItemInput::from_json(&body).and_then(ItemInput::validate) {
        Ok(d) => d,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.store().update(id, draft).await {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn delete_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.store().delete(id).await {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
