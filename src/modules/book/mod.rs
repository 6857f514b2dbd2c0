pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod routes;

// Re-exports for easy external access
pub use application::service::BookService;
pub use domain::{Author, Book, BookRepository, Cover};
pub use infrastructure::BookRepositoryImpl;
