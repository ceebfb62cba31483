//! Books repository for database operations

use sqlx::{Pool, Postgres, QueryBuilder};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookQuery, CreateBook, UpdateBook},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all books
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>("SELECT * FROM livros ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(books)
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("SELECT * FROM livros WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Livro {} não encontrado", id)))
    }

    /// Create a book; availability flags take their column defaults
    pub async fn create(&self, book: &CreateBook) -> AppResult<Book> {
        let created = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO livros (titulo, autor, ano_publicacao, genero)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&book.titulo)
        .bind(&book.autor)
        .bind(book.ano_publicacao)
        .bind(&book.genero)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    /// Update the descriptive fields of a book
    pub async fn update(&self, book: &UpdateBook) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            r#"
            UPDATE livros
            SET titulo = $1, autor = $2, ano_publicacao = $3, genero = $4
            WHERE id = $5
            RETURNING *
            "#,
        )
        .bind(&book.titulo)
        .bind(&book.autor)
        .bind(book.ano_publicacao)
        .bind(&book.genero)
        .bind(book.id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Livro {} não encontrado", book.id)))
    }

    /// Delete a book
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM livros WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Livro {} não encontrado", id)));
        }
        Ok(())
    }

    /// Search books by genre, author and publication year
    pub async fn search(&self, query: &BookQuery) -> AppResult<Vec<Book>> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT * FROM livros");
        push_book_filters(&mut builder, query);
        builder.push(" ORDER BY id");

        let books = builder
            .build_query_as::<Book>()
            .fetch_all(&self.pool)
            .await?;
        Ok(books)
    }
}

/// Append a WHERE clause with one equality per present filter, ANDed
fn push_book_filters<'a>(builder: &mut QueryBuilder<'a, Postgres>, query: &'a BookQuery) {
    let mut separator = " WHERE ";

    if let Some(ref genero) = query.genero {
        builder.push(separator).push("genero = ").push_bind(genero);
        separator = " AND ";
    }

    if let Some(ref autor) = query.autor {
        builder.push(separator).push("autor = ").push_bind(autor);
        separator = " AND ";
    }

    if let Some(ano) = query.ano {
        builder.push(separator).push("ano_publicacao = ").push_bind(ano);
    }
}
