//! Loan management endpoints

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use super::extractors::{AppJson, AppPath};
use crate::{
    error::AppResult,
    models::loan::{CreateLoan, Loan},
};

/// Register a loan (borrow a book)
#[utoipa::path(
    post,
    path = "/api/livros/emprestimo",
    tag = "emprestimos",
    request_body = CreateLoan,
    responses(
        (status = 201, description = "Loan registered", body = Loan,
            headers(("Location" = String, description = "URL of the created loan"))),
        (status = 400, description = "Book missing or not available", body = crate::error::ErrorResponse),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_loan(
    State(state): State<crate::AppState>,
    AppJson(request): AppJson<CreateLoan>,
) -> AppResult<impl IntoResponse> {
    let loan = state.services.loans.register_loan(request).await?;
    let location = format!("/api/livros/emprestimo/{}", loan.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(loan)))
}

/// Get loan details by ID
#[utoipa::path(
    get,
    path = "/api/livros/emprestimo/{id}",
    tag = "emprestimos",
    params(
        ("id" = i32, Path, description = "Loan ID")
    ),
    responses(
        (status = 200, description = "Loan details", body = Loan),
        (status = 404, description = "Loan not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_loan(
    State(state): State<crate::AppState>,
    AppPath(loan_id): AppPath<i32>,
) -> AppResult<Json<Loan>> {
    let loan = state.services.loans.get_by_id(loan_id).await?;
    Ok(Json(loan))
}

/// Register the return of a loan
#[utoipa::path(
    put,
    path = "/api/livros/devolucao/{id}",
    tag = "emprestimos",
    params(
        ("id" = i32, Path, description = "Loan ID")
    ),
    responses(
        (status = 204, description = "Loan returned"),
        (status = 404, description = "Loan not found or already returned", body = crate::error::ErrorResponse)
    )
)]
pub async fn return_loan(
    State(state): State<crate::AppState>,
    AppPath(loan_id): AppPath<i32>,
) -> AppResult<StatusCode> {
    state.services.loans.register_return(loan_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Loan history of a user
#[utoipa::path(
    get,
    path = "/api/livros/historico/{usuarioId}",
    tag = "emprestimos",
    params(
        ("usuarioId" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "All loans of the user", body = Vec<Loan>)
    )
)]
pub async fn get_user_loans(
    State(state): State<crate::AppState>,
    AppPath(user_id): AppPath<i32>,
) -> AppResult<Json<Vec<Loan>>> {
    let loans = state.services.loans.history(user_id).await?;
    Ok(Json(loans))
}
