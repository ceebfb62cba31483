//! Loan (borrow) model and related types

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Loan row from the `emprestimos` table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub id: i32,
    pub livro_id: i32,
    pub usuario_id: i32,
    pub data_emprestimo: DateTime<Utc>,
    /// Due date
    pub data_prevista_devolucao: DateTime<Utc>,
    /// Return date; `None` while the book is out
    pub data_devolucao: Option<DateTime<Utc>>,
}

impl Loan {
    pub fn is_open(&self) -> bool {
        self.data_devolucao.is_none()
    }
}

/// Register loan request
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLoan {
    pub livro_id: i32,
    pub usuario_id: i32,
}

/// Due date for a loan starting at `start`
pub fn due_date(start: DateTime<Utc>, duration_days: i64) -> DateTime<Utc> {
    start + Duration::days(duration_days)
}
