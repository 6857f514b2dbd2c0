use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;
use utoipa::OpenApi;

use crate::modules::book::routes::BookApi;
use crate::modules::book::{self, BookService};
use crate::shared::errors::AppResult;
use crate::shared::Database;
use crate::{log_info, log_warn};

/// Shared request state. Cloned per request; everything inside is `Arc`'d.
#[derive(Clone)]
pub struct AppState {
    pub book_service: Arc<BookService>,
    pub database: Option<Arc<Database>>,
}

impl AppState {
    pub fn new(book_service: Arc<BookService>, database: Option<Arc<Database>>) -> Self {
        Self {
            book_service,
            database,
        }
    }
}

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Build the application router: Book resource, `/health` and the OpenAPI document.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(OPENAPI_PATH, get(openapi_handler))
        .merge(book::routes::router())
        .with_state(state)
}

/// Serve on an already-bound listener until Ctrl-C.
pub async fn serve(listener: TcpListener, state: AppState) -> AppResult<()> {
    let addr: SocketAddr = listener.local_addr()?;
    log_info!("Listening on http://{}", addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log_info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log_warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log_info!("Shutdown signal received");
}

/// `GET /health`: returns `{ "ok": true, "database": {...} }`.
async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let database = state.database.as_ref().map(|db| db.pool_status());
    Json(json!({ "ok": true, "database": database }))
}

/// `GET /api-docs/openapi.json`: the generated OpenAPI document.
async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(BookApi::openapi())
}
