//! API handlers for Biblioteca REST endpoints

pub mod books;
pub mod extractors;
pub mod health;
pub mod loans;
pub mod openapi;
pub mod users;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Books
        .route("/api/livros", get(books::list_books).post(books::create_book))
        .route("/api/livros/consultar", get(books::search_books))
        .route(
            "/api/livros/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        // Loans
        .route("/api/livros/emprestimo", post(loans::create_loan))
        .route("/api/livros/emprestimo/:id", get(loans::get_loan))
        .route("/api/livros/devolucao/:id", put(loans::return_loan))
        .route("/api/livros/historico/:usuario_id", get(loans::get_user_loans))
        // Users
        .route("/api/livros/usuario", post(users::create_user))
        .route("/api/livros/usuarios", get(users::list_users))
        .route("/api/livros/usuarios/consultar", get(users::search_users))
        .route(
            "/api/livros/usuarios/:id",
            get(users::get_user).delete(users::delete_user),
        )
        .with_state(state);

    Router::new()
        .merge(api)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
