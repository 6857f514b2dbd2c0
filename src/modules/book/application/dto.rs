use chrono::NaiveDateTime;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::log_debug;
use crate::modules::book::domain::{BookDraft, BookRevision};
use crate::shared::utils::date_format;

/// Book body accepted by create and update.
///
/// `bookId` is tolerated but ignored: the store assigns ids on create and the
/// path id is authoritative on update.
///
/// Graph insert is not supported. Nested `author`/`cover` objects are accepted
/// so that a Book read from the API can be sent back as is, but only
/// `authorId`/`coverId` reach the store; the nested objects are dropped and
/// logged at debug level.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    #[serde(default)]
    pub book_id: Option<i32>,
    pub title: String,
    #[serde(with = "date_format")]
    #[schema(value_type = String, example = "2020-01-01T00:00:00")]
    pub publish_date: NaiveDateTime,
    pub base_price: f64,
    pub author_id: i32,
    #[serde(default)]
    pub cover_id: Option<i32>,
    /// Ignored; see the type docs.
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub author: Option<serde_json::Value>,
    /// Ignored; see the type docs.
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub cover: Option<serde_json::Value>,
}

impl BookPayload {
    /// Names of the nested objects this payload carries and the store will not write.
    pub fn dropped_relations(&self) -> Vec<&'static str> {
        let mut dropped = Vec::new();
        if self.author.is_some() {
            dropped.push("author");
        }
        if self.cover.is_some() {
            dropped.push("cover");
        }
        dropped
    }

    fn log_dropped_relations(&self) {
        let dropped = self.dropped_relations();
        if !dropped.is_empty() {
            log_debug!(
                "Ignoring nested {} in Book payload; only authorId/coverId are stored",
                dropped.join(" and ")
            );
        }
    }

    pub fn into_draft(self) -> BookDraft {
        self.log_dropped_relations();
        BookDraft {
            title: self.title,
            publish_date: self.publish_date,
            base_price: self.base_price,
            author_id: self.author_id,
            cover_id: self.cover_id,
        }
    }

    pub fn into_revision(self) -> BookRevision {
        self.log_dropped_relations();
        BookRevision {
            title: self.title,
            publish_date: self.publish_date,
            base_price: self.base_price,
            author_id: self.author_id,
        }
    }
}
