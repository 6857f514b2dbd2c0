pub mod app;
pub mod modules;
mod schema;
pub mod shared;

use modules::book::{BookRepository, BookRepositoryImpl, BookService};
use shared::errors::AppResult;
use shared::{AppConfig, Database};
use std::sync::Arc;

pub use app::{router, serve, AppState};

/// Wire the repository and service over an existing database handle.
pub fn build_state(database: Arc<Database>) -> AppState {
    let book_repo: Arc<dyn BookRepository> =
        Arc::new(BookRepositoryImpl::new(Arc::clone(&database)));
    let book_service = Arc::new(BookService::new(book_repo));

    AppState::new(book_service, Some(database))
}

/// Application entry point: config (including `.env`), logging, pool, migrations, then serve.
pub async fn run() -> AppResult<()> {
    // Config loads `.env`, so RUST_LOG from it is visible to the logger
    let config = AppConfig::from_env()?;
    shared::utils::init_logger();

    log_info!(
        "Initializing database connection to: {}",
        config.database_host()
    );
    let database_url = config.database_url.clone();
    let database =
        tokio::task::spawn_blocking(move || Database::connect(&database_url)).await??;
    let database = Arc::new(database);

    if config.run_migrations {
        let db = Arc::clone(&database);
        tokio::task::spawn_blocking(move || db.run_migrations()).await??;
    } else {
        log_info!("Skipping database migrations");
    }

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    serve(listener, build_state(database)).await
}
