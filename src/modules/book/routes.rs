//! HTTP bindings for the Book resource.
//!
//! ## Routes
//!
//! - `GET /api/Book/`: every book with author and cover (`GetAllBooks`).
//! - `GET /api/Book/:book_id`: one book, 404 when absent (`GetBookById`).
//! - `POST /api/Book/`: create; 201 with `Location: /api/Book/{bookId}` (`CreateBook`).
//! - `PUT /api/Book/:book_id`: overwrite title, publish date, price, author (`UpdateBook`).
//! - `DELETE /api/Book/:book_id`: remove one book (`DeleteBook`).
//!
//! The collection routes answer both with and without the trailing slash.
//! Malformed ids and bodies are reported as `InvalidInput` (400).
//! Outcomes are logged by `BookService`.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use super::application::BookPayload;
use super::domain::{Author, Book, Cover};
use crate::app::AppState;
use crate::shared::errors::AppResult;

pub const BASE_PATH: &str = "/api/Book";

/// OpenAPI description of the Book endpoints.
#[derive(OpenApi)]
#[openapi(
    paths(list_books, get_book, create_book, update_book, delete_book),
    components(schemas(Book, Author, Cover, BookPayload)),
    tags((name = "Book", description = "Books of the publisher catalogue"))
)]
pub struct BookApi;

/// Build the Book routes; merge into the application router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/Book", get(list_books).post(create_book))
        .route("/api/Book/", get(list_books).post(create_book))
        .route(
            "/api/Book/:book_id",
            get(get_book).put(update_book).delete(delete_book),
        )
}

/// Location of a single book resource.
pub fn book_location(book_id: i32) -> String {
    format!("{}/{}", BASE_PATH, book_id)
}

fn parse_book_id(raw: &str) -> AppResult<i32> {
    Ok(raw.trim().parse::<i32>()?)
}

#[utoipa::path(
    get,
    path = "/api/Book",
    operation_id = "GetAllBooks",
    tag = "Book",
    responses((status = 200, description = "Every book with its author and cover", body = [Book]))
)]
async fn list_books(State(state): State<AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.book_service.list_books().await?;
    Ok(Json(books))
}

#[utoipa::path(
    get,
    path = "/api/Book/{book_id}",
    operation_id = "GetBookById",
    tag = "Book",
    params(("book_id" = i32, Path, description = "Book id")),
    responses(
        (status = 200, description = "The book", body = Book),
        (status = 400, description = "Id is not an integer"),
        (status = 404, description = "No book with this id")
    )
)]
async fn get_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> AppResult<Json<Book>> {
    let book_id = parse_book_id(&book_id)?;
    let book = state.book_service.get_book(book_id).await?;
    Ok(Json(book))
}

#[utoipa::path(
    post,
    path = "/api/Book",
    operation_id = "CreateBook",
    tag = "Book",
    request_body = BookPayload,
    responses(
        (status = 201, description = "Created; Location points at the new book", body = Book),
        (status = 400, description = "Malformed body")
    )
)]
async fn create_book(
    State(state): State<AppState>,
    payload: Result<Json<BookPayload>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(payload) = payload?;
    let book = state.book_service.create_book(payload).await?;
    let location = book_location(book.book_id);

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(book)))
}

#[utoipa::path(
    put,
    path = "/api/Book/{book_id}",
    operation_id = "UpdateBook",
    tag = "Book",
    params(("book_id" = i32, Path, description = "Book id; any bookId in the body is ignored")),
    request_body = BookPayload,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Malformed id or body"),
        (status = 404, description = "No book with this id")
    )
)]
async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    payload: Result<Json<BookPayload>, JsonRejection>,
) -> AppResult<StatusCode> {
    let book_id = parse_book_id(&book_id)?;
    let Json(payload) = payload?;
    state.book_service.update_book(book_id, payload).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    delete,
    path = "/api/Book/{book_id}",
    operation_id = "DeleteBook",
    tag = "Book",
    params(("book_id" = i32, Path, description = "Book id")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 400, description = "Id is not an integer"),
        (status = 404, description = "No book with this id")
    )
)]
async fn delete_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> AppResult<StatusCode> {
    let book_id = parse_book_id(&book_id)?;
    state.book_service.delete_book(book_id).await?;
    Ok(StatusCode::OK)
}
