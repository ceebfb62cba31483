//! Loan workflow: borrow, return and availability checks

use crate::{
    config::LoansConfig,
    error::{AppError, AppResult},
    models::loan::{CreateLoan, Loan},
    repository::Repository,
};

pub const BOOK_UNAVAILABLE: &str = "Livro não disponível para empréstimo.";
pub const LOAN_NOT_OPEN: &str = "Empréstimo não encontrado ou já devolvido.";

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
    config: LoansConfig,
}

impl LoansService {
    pub fn new(repository: Repository, config: LoansConfig) -> Self {
        Self { repository, config }
    }

    /// Register a loan of `livro_id` to `usuario_id`.
    ///
    /// The book must exist, be available and not already loaned; it is
    /// marked unavailable/loaned together with the loan insert.
    pub async fn register_loan(&self, loan: CreateLoan) -> AppResult<Loan> {
        if !self.repository.users.exists(loan.usuario_id).await? {
            return Err(AppError::NotFound(format!(
                "Usuário {} não encontrado",
                loan.usuario_id
            )));
        }

        match self
            .repository
            .loans
            .register(&loan, self.config.duration_days)
            .await?
        {
            Some(created) => {
                tracing::info!(
                    loan_id = created.id,
                    livro_id = created.livro_id,
                    usuario_id = created.usuario_id,
                    "Loan registered"
                );
                Ok(created)
            }
            None => {
                tracing::warn!(livro_id = loan.livro_id, "Book not available for loan");
                Err(AppError::Conflict(BOOK_UNAVAILABLE.to_string()))
            }
        }
    }

    /// Register the return of an open loan.
    ///
    /// Unless `restore_availability_on_return` is set, the book keeps its
    /// unavailable/loaned flags after the return.
    pub async fn register_return(&self, loan_id: i32) -> AppResult<()> {
        let returned = self
            .repository
            .loans
            .register_return(loan_id, self.config.restore_availability_on_return)
            .await?;

        if !returned {
            return Err(AppError::NotFound(LOAN_NOT_OPEN.to_string()));
        }

        tracing::info!(loan_id, "Loan returned");
        Ok(())
    }

    /// Whether the book currently has an open loan
    pub async fn is_loaned(&self, book_id: i32) -> AppResult<bool> {
        self.repository.loans.is_book_loaned(book_id).await
    }

    /// Loan history of a user
    pub async fn history(&self, user_id: i32) -> AppResult<Vec<Loan>> {
        self.repository.loans.history_for_user(user_id).await
    }

    /// Get loan by ID
    pub async fn get_by_id(&self, loan_id: i32) -> AppResult<Loan> {
        self.repository.loans.get_by_id(loan_id).await
    }
}

