//! Users repository for database operations

use sqlx::{Pool, Postgres, QueryBuilder};

use crate::{
    error::{AppError, AppResult},
    models::user::{CreateUser, User, UserQuery},
};

#[derive(Clone)]
pub struct UsersRepository {
    pool: Pool<Postgres>,
}

impl UsersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all users
    pub async fn list(&self) -> AppResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>("SELECT * FROM usuarios ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<User> {
        sqlx::query_as::<_, User>("SELECT * FROM usuarios WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Usuário {} não encontrado", id)))
    }

    /// Check whether a user exists
    pub async fn exists(&self, id: i32) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM usuarios WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    /// Create a new user
    pub async fn create(&self, user: &CreateUser) -> AppResult<User> {
        let created = sqlx::query_as::<_, User>(
            "INSERT INTO usuarios (nome, email) VALUES ($1, $2) RETURNING *",
        )
        .bind(&user.nome)
        .bind(&user.email)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    /// Delete a user
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM usuarios WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Usuário {} não encontrado", id)));
        }
        Ok(())
    }

    /// Search users by partial name and/or partial email
    pub async fn search(&self, query: &UserQuery) -> AppResult<Vec<User>> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT * FROM usuarios");
        push_user_filters(&mut builder, query);
        builder.push(" ORDER BY id");

        let users = builder
            .build_query_as::<User>()
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }
}

/// `%value%` pattern for LIKE; the value is taken verbatim
fn contains_pattern(value: &str) -> String {
    format!("%{}%", value)
}

fn push_user_filters(builder: &mut QueryBuilder<'_, Postgres>, query: &UserQuery) {
    let mut separator = " WHERE ";

    if let Some(ref nome) = query.nome {
        builder
            .push(separator)
            .push("nome LIKE ")
            .push_bind(contains_pattern(nome));
        separator = " AND ";
    }

    if let Some(ref email) = query.email {
        builder
            .push(separator)
            .push("email LIKE ")
            .push_bind(contains_pattern(email));
    }
}
