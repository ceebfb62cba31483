//! Catalog service: book CRUD and search

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookQuery, CreateBook, UpdateBook},
    repository::Repository,
};

pub const BOOK_ON_LOAN: &str = "O livro está emprestado e não pode ser excluído.";

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    pub async fn get_book(&self, id: i32) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    pub async fn create_book(&self, book: CreateBook) -> AppResult<Book> {
        book.validate()?;
        let created = self.repository.books.create(&book).await?;
        tracing::info!(livro_id = created.id, "Book created");
        Ok(created)
    }

    /// Update a book; `id` comes from the path and must match the body
    pub async fn update_book(&self, id: i32, book: UpdateBook) -> AppResult<Book> {
        if id != book.id {
            return Err(AppError::Validation(format!(
                "Path id {} does not match body id {}",
                id, book.id
            )));
        }
        book.validate()?;
        self.repository.books.update(&book).await
    }

    /// Delete a book unless it has an open loan.
    ///
    /// The loan table decides, not the book's availability flags.
    pub async fn delete_book(&self, id: i32) -> AppResult<()> {
        self.repository.books.get_by_id(id).await?;

        if self.repository.loans.is_book_loaned(id).await? {
            tracing::warn!(livro_id = id, "Refusing to delete a book on loan");
            return Err(AppError::Conflict(BOOK_ON_LOAN.to_string()));
        }

        self.repository.books.delete(id).await?;
        tracing::info!(livro_id = id, "Book deleted");
        Ok(())
    }

    pub async fn search_books(&self, query: &BookQuery) -> AppResult<Vec<Book>> {
        self.repository.books.search(query).await
    }
}
