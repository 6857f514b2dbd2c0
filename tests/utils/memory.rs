/// In-memory BookRepository used to exercise the HTTP layer without PostgreSQL
///
/// Mirrors the store's join semantics: author is always resolved, cover only
/// when the book carries a cover reference.
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use pubapi::modules::book::domain::{Author, Book, BookDraft, BookRepository, BookRevision, Cover};
use pubapi::shared::errors::{AppError, AppResult};
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: Arc<RwLock<BTreeMap<i32, Book>>>,
    authors: HashMap<i32, Author>,
    covers: HashMap<i32, Cover>,
    next_id: Arc<RwLock<i32>>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_author(mut self, author_id: i32, first_name: &str, last_name: &str) -> Self {
        self.authors.insert(
            author_id,
            Author {
                author_id,
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
            },
        );
        self
    }

    pub fn with_cover(mut self, cover_id: i32, design_ideas: &str) -> Self {
        self.covers.insert(
            cover_id,
            Cover {
                cover_id,
                design_ideas: design_ideas.to_string(),
                digital_only: false,
            },
        );
        self
    }

    pub async fn len(&self) -> usize {
        self.books.read().await.len()
    }

    pub async fn snapshot(&self, book_id: i32) -> Option<Book> {
        self.books.read().await.get(&book_id).cloned()
    }

    fn join(&self, book: &Book) -> Book {
        let mut joined = book.clone();
        joined.author = self.authors.get(&book.author_id).cloned();
        joined.cover = book.cover_id.and_then(|id| self.covers.get(&id).cloned());
        joined
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn find_all(&self) -> AppResult<Vec<Book>> {
        let books = self.books.read().await;
        Ok(books.values().map(|book| self.join(book)).collect())
    }

    async fn find_by_id(&self, book_id: i32) -> AppResult<Option<Book>> {
        let books = self.books.read().await;
        Ok(books.get(&book_id).map(|book| self.join(book)))
    }

    async fn insert(&self, draft: BookDraft) -> AppResult<Book> {
        if !self.authors.contains_key(&draft.author_id) {
            return Err(AppError::DatabaseError(format!(
                "insert or update on table \"books\" violates foreign key constraint (author_id={})",
                draft.author_id
            )));
        }

        let mut next_id = self.next_id.write().await;
        *next_id += 1;
        let book = Book {
            book_id: *next_id,
            title: draft.title,
            publish_date: draft.publish_date,
            base_price: draft.base_price,
            author_id: draft.author_id,
            author: None,
            cover_id: draft.cover_id,
            cover: None,
        };

        self.books.write().await.insert(book.book_id, book.clone());
        Ok(book)
    }

    async fn update(&self, book_id: i32, revision: BookRevision) -> AppResult<usize> {
        let mut books = self.books.write().await;
        match books.get_mut(&book_id) {
            Some(book) => {
                // Same columns as the Diesel changeset; cover stays as stored
                book.title = revision.title;
                book.publish_date = revision.publish_date;
                book.base_price = revision.base_price;
                book.author_id = revision.author_id;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, book_id: i32) -> AppResult<usize> {
        let mut books = self.books.write().await;
        Ok(usize::from(books.remove(&book_id).is_some()))
    }
}
