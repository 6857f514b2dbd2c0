/// Test data factories using builder pattern
///
/// Provides convenient methods to create Book request bodies with sensible defaults
use serde_json::{json, Value};

pub struct BookFactory {
    book_id: Option<i32>,
    title: String,
    publish_date: String,
    base_price: f64,
    author_id: i32,
    cover_id: Option<i32>,
}

impl Default for BookFactory {
    fn default() -> Self {
        Self {
            book_id: None,
            title: "Foo".to_string(),
            publish_date: "2020-01-01".to_string(),
            base_price: 9.99,
            author_id: 1,
            cover_id: None,
        }
    }
}

impl BookFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_book_id(mut self, book_id: i32) -> Self {
        self.book_id = Some(book_id);
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_publish_date(mut self, publish_date: &str) -> Self {
        self.publish_date = publish_date.to_string();
        self
    }

    pub fn with_base_price(mut self, base_price: f64) -> Self {
        self.base_price = base_price;
        self
    }

    pub fn with_author(mut self, author_id: i32) -> Self {
        self.author_id = author_id;
        self
    }

    pub fn with_cover(mut self, cover_id: i32) -> Self {
        self.cover_id = Some(cover_id);
        self
    }

    /// JSON body as a client would send it
    pub fn build(self) -> Value {
        let mut body = json!({
            "title": self.title,
            "publishDate": self.publish_date,
            "basePrice": self.base_price,
            "authorId": self.author_id,
        });
        if let Some(book_id) = self.book_id {
            body["bookId"] = json!(book_id);
        }
        if let Some(cover_id) = self.cover_id {
            body["coverId"] = json!(cover_id);
        }
        body
    }
}
