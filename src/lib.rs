//! Biblioteca Library Server
//!
//! A REST JSON API for managing a small library: books, users, and the
//! loans (borrow/return) that link them, stored in PostgreSQL.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Build the state from a configuration and a database pool
    pub fn new(config: &AppConfig, pool: sqlx::PgPool) -> Self {
        let repository = repository::Repository::new(pool);
        let services = services::Services::new(repository, config.loans.clone());

        Self {
            services: Arc::new(services),
        }
    }
}
