//! Loans repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::loan::{due_date, CreateLoan, Loan},
};

#[derive(Clone)]
pub struct LoansRepository {
    pool: Pool<Postgres>,
}

impl LoansRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get loan by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Loan> {
        sqlx::query_as::<_, Loan>("SELECT * FROM emprestimos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Empréstimo {} não encontrado", id)))
    }

    /// Register a loan.
    ///
    /// Reserving the book and inserting the loan row happen in one
    /// transaction. The reservation is a conditional update, so two callers
    /// racing for the same book cannot both win: the second one re-checks
    /// the predicate after the first commits and touches no row.
    ///
    /// Returns `None` (and writes nothing) when the book does not exist or
    /// is not available.
    pub async fn register(&self, loan: &CreateLoan, duration_days: i64) -> AppResult<Option<Loan>> {
        let mut tx = self.pool.begin().await?;

        let reserved = sqlx::query(
            r#"
            UPDATE livros
            SET disponivel = FALSE, emprestado = TRUE
            WHERE id = $1 AND disponivel AND NOT emprestado
            "#,
        )
        .bind(loan.livro_id)
        .execute(&mut *tx)
        .await?;

        if reserved.rows_affected() == 0 {
            // Dropping the transaction rolls it back
            return Ok(None);
        }

        let now = Utc::now();
        let created = sqlx::query_as::<_, Loan>(
            r#"
            INSERT INTO emprestimos (livro_id, usuario_id, data_emprestimo, data_prevista_devolucao)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(loan.livro_id)
        .bind(loan.usuario_id)
        .bind(now)
        .bind(due_date(now, duration_days))
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Some(created))
    }

    /// Set the return date of an open loan.
    ///
    /// Only a loan whose return date is still NULL is touched, so repeated
    /// calls are no-ops returning `false`. With `restore_availability` the
    /// book is flipped back to available in the same transaction.
    pub async fn register_return(&self, loan_id: i32, restore_availability: bool) -> AppResult<bool> {
        let mut tx = self.pool.begin().await?;

        let book_id: Option<i32> = sqlx::query_scalar(
            r#"
            UPDATE emprestimos
            SET data_devolucao = $1
            WHERE id = $2 AND data_devolucao IS NULL
            RETURNING livro_id
            "#,
        )
        .bind(Utc::now())
        .bind(loan_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(book_id) = book_id else {
            return Ok(false);
        };

        if restore_availability {
            sqlx::query("UPDATE livros SET disponivel = TRUE, emprestado = FALSE WHERE id = $1")
                .bind(book_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(true)
    }

    /// Whether the book has an open loan, whatever its own flags say
    pub async fn is_book_loaned(&self, book_id: i32) -> AppResult<bool> {
        let open: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM emprestimos WHERE livro_id = $1 AND data_devolucao IS NULL",
        )
        .bind(book_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(open > 0)
    }

    /// Count open loans of a user
    pub async fn count_open_for_user(&self, user_id: i32) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM emprestimos WHERE usuario_id = $1 AND data_devolucao IS NULL",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    /// All loans of a user, open and returned
    pub async fn history_for_user(&self, user_id: i32) -> AppResult<Vec<Loan>> {
        let loans = sqlx::query_as::<_, Loan>(
            "SELECT * FROM emprestimos WHERE usuario_id = $1 ORDER BY data_emprestimo, id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(loans)
    }
}
