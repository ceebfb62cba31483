//! User management service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::user::{CreateUser, User, UserQuery},
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repository.users.list().await
    }

    pub async fn get_user(&self, id: i32) -> AppResult<User> {
        self.repository.users.get_by_id(id).await
    }

    pub async fn create_user(&self, user: CreateUser) -> AppResult<User> {
        user.validate()?;
        let created = self.repository.users.create(&user).await?;
        tracing::info!(usuario_id = created.id, "User created");
        Ok(created)
    }

    /// Delete a user unless they still have books out
    pub async fn delete_user(&self, id: i32) -> AppResult<()> {
        self.repository.users.get_by_id(id).await?;

        let open_loans = self.repository.loans.count_open_for_user(id).await?;
        if open_loans > 0 {
            tracing::warn!(usuario_id = id, open_loans, "Refusing to delete a user with open loans");
            return Err(AppError::Conflict(format!(
                "O usuário possui {} empréstimo(s) em aberto e não pode ser excluído.",
                open_loans
            )));
        }

        self.repository.users.delete(id).await?;
        tracing::info!(usuario_id = id, "User deleted");
        Ok(())
    }

    pub async fn search_users(&self, query: &UserQuery) -> AppResult<Vec<User>> {
        self.repository.users.search(query).await
    }
}
