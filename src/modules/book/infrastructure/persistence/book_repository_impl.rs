/// Diesel-based implementation of BookRepository
///
/// Reads join authors (inner) and covers (left outer) in a single statement.
/// Diesel is synchronous, so every statement runs on the blocking pool.
use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use crate::modules::book::domain::{Book, BookDraft, BookRepository, BookRevision};
use crate::modules::book::infrastructure::models::{
    BookChangeset, BookModel, BookRow, NewBookModel,
};
use crate::schema::{authors, books, covers};
use crate::shared::errors::AppResult;
use crate::shared::utils::TimedOperation;
use crate::shared::Database;

pub struct BookRepositoryImpl {
    db: Arc<Database>,
}

impl BookRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookRepository for BookRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Book>> {
        let db = Arc::clone(&self.db);

        let rows = task::spawn_blocking(move || -> AppResult<Vec<BookRow>> {
            let mut conn = db.get_connection()?;
            let timer = TimedOperation::new("SELECT all", "books");

            let rows = books::table
                .inner_join(authors::table)
                .left_join(covers::table)
                .select((
                    books::all_columns,
                    authors::all_columns,
                    covers::all_columns.nullable(),
                ))
                .order(books::book_id.asc())
                .load::<BookRow>(&mut conn)?;

            timer.finish(rows.len());
            Ok(rows)
        })
        .await??;

        Ok(rows.into_iter().map(BookModel::joined).collect())
    }

    async fn find_by_id(&self, book_id: i32) -> AppResult<Option<Book>> {
        let db = Arc::clone(&self.db);

        let row = task::spawn_blocking(move || -> AppResult<Option<BookRow>> {
            let mut conn = db.get_connection()?;
            let timer = TimedOperation::new("SELECT by id", "books");

            let row = books::table
                .inner_join(authors::table)
                .left_join(covers::table)
                .filter(books::book_id.eq(book_id))
                .select((
                    books::all_columns,
                    authors::all_columns,
                    covers::all_columns.nullable(),
                ))
                .first::<BookRow>(&mut conn)
                .optional()?;

            timer.finish(usize::from(row.is_some()));
            Ok(row)
        })
        .await??;

        Ok(row.map(BookModel::joined))
    }

    async fn insert(&self, draft: BookDraft) -> AppResult<Book> {
        let db = Arc::clone(&self.db);
        let new_book = NewBookModel::from(draft);

        let inserted = task::spawn_blocking(move || -> AppResult<BookModel> {
            let mut conn = db.get_connection()?;
            let timer = TimedOperation::new("INSERT", "books");

            let inserted = diesel::insert_into(books::table)
                .values(&new_book)
                .returning(BookModel::as_returning())
                .get_result(&mut conn)?;

            timer.finish(1);
            Ok(inserted)
        })
        .await??;

        Ok(inserted.to_book())
    }

    async fn update(&self, book_id: i32, revision: BookRevision) -> AppResult<usize> {
        let db = Arc::clone(&self.db);
        let changeset = BookChangeset::from(revision);

        task::spawn_blocking(move || -> AppResult<usize> {
            let mut conn = db.get_connection()?;
            let timer = TimedOperation::new("UPDATE", "books");

            let affected = diesel::update(books::table.filter(books::book_id.eq(book_id)))
                .set(&changeset)
                .execute(&mut conn)?;

            timer.finish(affected);
            Ok(affected)
        })
        .await?
    }

    async fn delete(&self, book_id: i32) -> AppResult<usize> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<usize> {
            let mut conn = db.get_connection()?;
            let timer = TimedOperation::new("DELETE", "books");

            let affected = diesel::delete(books::table.filter(books::book_id.eq(book_id)))
                .execute(&mut conn)?;

            timer.finish(affected);
            Ok(affected)
        })
        .await?
    }
}
