pub mod dto;
pub mod service;

pub use dto::BookPayload;
pub use service::BookService;
