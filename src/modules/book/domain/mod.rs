pub mod entities;
pub mod repositories;

// Re-exports for easy access
pub use entities::author::Author;
pub use entities::book::{Book, BookDraft, BookRevision};
pub use entities::cover::Cover;
pub use repositories::book_repository::BookRepository;
