//! Book (catalog) endpoints

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use super::extractors::{AppJson, AppPath, AppQuery};
use crate::{
    error::AppResult,
    models::book::{Book, BookQuery, CreateBook, UpdateBook},
};

/// List all books
#[utoipa::path(
    get,
    path = "/api/livros",
    tag = "livros",
    responses(
        (status = 200, description = "List of books", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.list_books().await?;
    Ok(Json(books))
}

/// Get book details by ID
#[utoipa::path(
    get,
    path = "/api/livros/{id}",
    tag = "livros",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    AppPath(id): AppPath<i32>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.get_book(id).await?;
    Ok(Json(book))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/api/livros",
    tag = "livros",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = Book,
            headers(("Location" = String, description = "URL of the created book"))),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    AppJson(book): AppJson<CreateBook>,
) -> AppResult<impl IntoResponse> {
    let created = state.services.catalog.create_book(book).await?;
    let location = format!("/api/livros/{}", created.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

/// Update an existing book
#[utoipa::path(
    put,
    path = "/api/livros/{id}",
    tag = "livros",
    params(
        ("id" = i32, Path, description = "Book ID, must match the body id")
    ),
    request_body = UpdateBook,
    responses(
        (status = 204, description = "Book updated"),
        (status = 400, description = "Path id does not match body id", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(book): AppJson<UpdateBook>,
) -> AppResult<StatusCode> {
    state.services.catalog.update_book(id, book).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/api/livros/{id}",
    tag = "livros",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 400, description = "Book is on loan", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    AppPath(id): AppPath<i32>,
) -> AppResult<StatusCode> {
    state.services.catalog.delete_book(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Search books by genre, author and publication year
#[utoipa::path(
    get,
    path = "/api/livros/consultar",
    tag = "livros",
    params(BookQuery),
    responses(
        (status = 200, description = "Matching books", body = Vec<Book>)
    )
)]
pub async fn search_books(
    State(state): State<crate::AppState>,
    AppQuery(query): AppQuery<BookQuery>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.search_books(&query).await?;
    Ok(Json(books))
}
