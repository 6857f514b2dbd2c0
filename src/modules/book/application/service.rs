use super::super::domain::{Book, BookRepository};
use super::dto::BookPayload;
use crate::shared::errors::{AppError, AppResult};
use crate::{log_debug, log_info};
use std::sync::Arc;

pub struct BookService {
    book_repo: Arc<dyn BookRepository>,
}

impl BookService {
    pub fn new(book_repo: Arc<dyn BookRepository>) -> Self {
        Self { book_repo }
    }

    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        let books = self.book_repo.find_all().await?;
        log_debug!("Listed {} books", books.len());
        Ok(books)
    }

    pub async fn get_book(&self, book_id: i32) -> AppResult<Book> {
        self.book_repo
            .find_by_id(book_id)
            .await?
            .ok_or_else(|| not_found(book_id))
    }

    pub async fn create_book(&self, payload: BookPayload) -> AppResult<Book> {
        let book = self.book_repo.insert(payload.into_draft()).await?;
        log_info!("Created book {} '{}'", book.book_id, book.title);
        Ok(book)
    }

    /// Overwrite title, publish date, base price and author of an existing book.
    ///
    /// The path id is authoritative; any id in the payload is ignored.
    pub async fn update_book(&self, book_id: i32, payload: BookPayload) -> AppResult<()> {
        let affected = self
            .book_repo
            .update(book_id, payload.into_revision())
            .await?;

        if affected != 1 {
            return Err(not_found(book_id));
        }

        log_info!("Updated book {}", book_id);
        Ok(())
    }

    pub async fn delete_book(&self, book_id: i32) -> AppResult<()> {
        let affected = self.book_repo.delete(book_id).await?;

        if affected != 1 {
            return Err(not_found(book_id));
        }

        log_info!("Deleted book {}", book_id);
        Ok(())
    }
}

fn not_found(book_id: i32) -> AppError {
    AppError::NotFound(format!("Book with ID {} not found", book_id))
}
