//! HTTP interface.

mod books;
mod error;
mod extract;

use std::sync::Arc;

use axum::{http::HeaderValue, routing::get, Json, Router};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use books::MessageResponse;
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use extract::{BookIdPath, ValidatedJson};

use crate::db::Database;
use crate::service::BookService;
use crate::store::BookStore;

/// Router backed by the SQLite database, permissive CORS.
pub fn create_router(db: Database) -> Router {
    router(BookService::new(db), &[])
}

/// Builds the full application router over any store.
///
/// An empty `cors_origins` list allows any origin.
pub fn router<S: BookStore + 'static>(service: BookService<S>, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(books::book_routes(Arc::new(service)))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(cors_origins)),
        )
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
