/// Repository trait for book persistence
///
/// Each method maps to exactly one statement against the store.
/// Implementation uses Diesel ORM with PostgreSQL.
use crate::modules::book::domain::entities::book::{Book, BookDraft, BookRevision};
use crate::shared::errors::AppResult;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// All books with author and cover joined, ordered by id
    async fn find_all(&self) -> AppResult<Vec<Book>>;

    /// A single book with author and cover joined
    async fn find_by_id(&self, book_id: i32) -> AppResult<Option<Book>>;

    /// Insert a new row and return it with the store-assigned id
    async fn insert(&self, draft: BookDraft) -> AppResult<Book>;

    /// Overwrite the mutable fields of one row, returning the affected-row count
    async fn update(&self, book_id: i32, revision: BookRevision) -> AppResult<usize>;

    /// Delete one row, returning the affected-row count
    async fn delete(&self, book_id: i32) -> AppResult<usize>;
}
