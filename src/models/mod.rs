//! Data models for Biblioteca

pub mod book;
pub mod loan;
pub mod user;

// Re-export commonly used types
pub use book::{Book, BookQuery};
pub use loan::Loan;
pub use user::{User, UserQuery};
