use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::error::{ApiError, ApiResult};
use super::extract::{BookIdPath, ValidatedJson};
use crate::models::{AddBookInput, Book, UpdateBookInput};
use crate::service::BookService;
use crate::store::BookStore;

pub(crate) const BOOK_NOT_FOUND: &str = "Book not found";

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

pub fn book_routes<S: BookStore + 'static>(service: Arc<BookService<S>>) -> Router {
    Router::new()
        .route("/books", get(list_books::<S>).post(add_book::<S>))
        .route(
            "/books/{id}",
            get(get_book::<S>)
                .put(update_book::<S>)
                .delete(delete_book::<S>),
        )
        .with_state(service)
}

async fn list_books<S: BookStore>(
    State(service): State<Arc<BookService<S>>>,
) -> ApiResult<Json<Vec<Book>>> {
    let books = service.list_books()?;
    if books.is_empty() {
        return Err(ApiError::NotFound("No books found"));
    }
    Ok(Json(books))
}

async fn get_book<S: BookStore>(
    State(service): State<Arc<BookService<S>>>,
    BookIdPath(id): BookIdPath,
) -> ApiResult<Json<Book>> {
    service
        .get_book(id)?
        .map(Json)
        .ok_or(ApiError::NotFound(BOOK_NOT_FOUND))
}

async fn add_book<S: BookStore>(
    State(service): State<Arc<BookService<S>>>,
    ValidatedJson(input): ValidatedJson<AddBookInput>,
) -> ApiResult<(StatusCode, Json<Book>)> {
    let book = service.add_book(input)?;
    Ok((StatusCode::CREATED, Json(book)))
}

async fn update_book<S: BookStore>(
    State(service): State<Arc<BookService<S>>>,
    BookIdPath(id): BookIdPath,
    ValidatedJson(input): ValidatedJson<UpdateBookInput>,
) -> ApiResult<Json<Book>> {
    service
        .update_book(id, input)?
        .map(Json)
        .ok_or(ApiError::NotFound(BOOK_NOT_FOUND))
}

async fn delete_book<S: BookStore>(
    State(service): State<Arc<BookService<S>>>,
    BookIdPath(id): BookIdPath,
) -> ApiResult<Json<MessageResponse>> {
    if !service.delete_book(id)? {
        return Err(ApiError::NotFound(BOOK_NOT_FOUND));
    }
    Ok(Json(MessageResponse {
        message: "Book deleted successfully".to_string(),
    }))
}
