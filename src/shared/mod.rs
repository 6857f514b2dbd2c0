// Shared Kernel - Domain Driven Design
// Following Clean Architecture + Hexagonal Architecture patterns

pub mod config; // Environment-driven settings
pub mod errors; // Shared error types
pub mod infrastructure; // Shared infrastructure (database pool, migrations)
pub mod utils; // Logging and serde helpers

// Re-exports for convenience
pub use config::AppConfig;
pub use infrastructure::database::Database;
