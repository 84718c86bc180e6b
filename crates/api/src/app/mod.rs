//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the item store handle shared by every handler
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: query-string DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use stockroom_infra::AppConfig;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

pub use services::AppServices;

/// Build the full HTTP router from process configuration (used by `main.rs`).
pub async fn build_app(config: &AppConfig) -> anyhow::Result<Router> {
    let services = services::build_services(&config.store).await?;
    Ok(app_with_services(Arc::new(services)))
}

/// Build the router around an already-constructed set of services.
pub fn app_with_services(services: Arc<AppServices>) -> Router {
    routes::router()
        .layer(Extension(services))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
