use crate::modules::book::domain::{Author, Book, BookDraft, BookRevision, Cover};
use crate::schema::{authors, books, covers};
use chrono::NaiveDateTime;
use diesel::prelude::*;

// ============= BOOK MODELS =============

// For reading from database
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = books)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BookModel {
    pub book_id: i32,
    pub title: String,
    pub publish_date: NaiveDateTime,
    pub base_price: f64,
    pub author_id: i32,
    pub cover_id: Option<i32>,
}

// For inserting new books (id assigned by the SERIAL column)
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = books)]
pub struct NewBookModel {
    pub title: String,
    pub publish_date: NaiveDateTime,
    pub base_price: f64,
    pub author_id: i32,
    pub cover_id: Option<i32>,
}

// For updating existing books (excludes book_id and cover_id)
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = books)]
pub struct BookChangeset {
    pub title: String,
    pub publish_date: NaiveDateTime,
    pub base_price: f64,
    pub author_id: i32,
}

// ============= RELATIONS =============

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = authors)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AuthorModel {
    pub author_id: i32,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = covers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CoverModel {
    pub cover_id: i32,
    pub design_ideas: String,
    pub digital_only: bool,
}

/// One row of `books JOIN authors LEFT JOIN covers`.
pub type BookRow = (BookModel, AuthorModel, Option<CoverModel>);

impl BookModel {
    pub fn to_book(self) -> Book {
        Book {
            book_id: self.book_id,
            title: self.title,
            publish_date: self.publish_date,
            base_price: self.base_price,
            author_id: self.author_id,
            author: None,
            cover_id: self.cover_id,
            cover: None,
        }
    }

    /// Convert a joined row to the domain Book with relations populated
    pub fn joined((book, author, cover): BookRow) -> Book {
        book.to_book()
            .with_author(author.to_author())
            .with_cover(cover.map(CoverModel::to_cover))
    }
}

impl AuthorModel {
    pub fn to_author(self) -> Author {
        Author {
            author_id: self.author_id,
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }
}

impl CoverModel {
    pub fn to_cover(self) -> Cover {
        Cover {
            cover_id: self.cover_id,
            design_ideas: self.design_ideas,
            digital_only: self.digital_only,
        }
    }
}

impl From<BookDraft> for NewBookModel {
    fn from(draft: BookDraft) -> Self {
        Self {
            title: draft.title,
            publish_date: draft.publish_date,
            base_price: draft.base_price,
            author_id: draft.author_id,
            cover_id: draft.cover_id,
        }
    }
}

impl From<BookRevision> for BookChangeset {
    fn from(revision: BookRevision) -> Self {
        Self {
            title: revision.title,
            publish_date: revision.publish_date,
            base_price: revision.base_price,
            author_id: revision.author_id,
        }
    }
}
