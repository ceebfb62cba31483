//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, loans, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Biblioteca API",
        version = "1.0.0",
        description = "Library CRUD API: books, users and loans"
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
        books::search_books,
        // Users
        users::list_users,
        users::get_user,
        users::create_user,
        users::delete_user,
        users::search_users,
        // Loans
        loans::create_loan,
        loans::get_loan,
        loans::return_loan,
        loans::get_user_loans,
    ),
    components(
        schemas(
            crate::models::book::Book,
            crate::models::book::CreateBook,
            crate::models::book::UpdateBook,
            crate::models::book::BookQuery,
            crate::models::user::User,
            crate::models::user::CreateUser,
            crate::models::user::UserQuery,
            crate::models::loan::Loan,
            crate::models::loan::CreateLoan,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "livros", description = "Book management"),
        (name = "usuarios", description = "User management"),
        (name = "emprestimos", description = "Loans and returns")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
