use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::author::Author;
use super::cover::Cover;
use crate::shared::utils::date_format;

/// A catalogued book together with its joined author and cover.
///
/// `author` and `cover` are populated on reads that join them; rows returned
/// straight from an insert carry only the foreign keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub book_id: i32,
    pub title: String,
    #[serde(with = "date_format")]
    #[schema(value_type = String, example = "2020-01-01T00:00:00")]
    pub publish_date: NaiveDateTime,
    pub base_price: f64,
    pub author_id: i32,
    pub author: Option<Author>,
    pub cover_id: Option<i32>,
    pub cover: Option<Cover>,
}

/// Everything needed to insert a book; the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct BookDraft {
    pub title: String,
    pub publish_date: NaiveDateTime,
    pub base_price: f64,
    pub author_id: i32,
    pub cover_id: Option<i32>,
}

/// The fields an update overwrites. Updates never touch the cover reference.
#[derive(Debug, Clone, PartialEq)]
pub struct BookRevision {
    pub title: String,
    pub publish_date: NaiveDateTime,
    pub base_price: f64,
    pub author_id: i32,
}

impl Book {
    pub fn with_author(mut self, author: Author) -> Self {
        self.author = Some(author);
        self
    }

    pub fn with_cover(mut self, cover: Option<Cover>) -> Self {
        self.cover = cover;
        self
    }
}
