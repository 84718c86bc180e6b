use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockroom_core::DomainError;
use stockroom_infra::StoreError;

/// Validation failures share one generic body; the field-level reason is only logged.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(reason) => {
            tracing::debug!(%reason, "rejected request");
            bad_request()
        }
        DomainError::InvalidId(_) => not_found(),
    }
}

pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    match err {
        StoreError::NotFound(_) => not_found(),
        other => {
            tracing::error!(error = %other, "item store failure");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "store_error",
                "internal store failure",
            )
        }
    }
}

pub fn bad_request() -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, "bad_request", "invalid request")
}

pub fn not_found() -> axum::response::Response {
    json_error(StatusCode::NOT_FOUND, "not_found", "item not found")
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
