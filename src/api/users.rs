//! User management endpoints

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use super::extractors::{AppJson, AppPath, AppQuery};
use crate::{
    error::{AppError, AppResult},
    models::user::{CreateUser, User, UserQuery},
};

/// List all users
#[utoipa::path(
    get,
    path = "/api/livros/usuarios",
    tag = "usuarios",
    responses(
        (status = 200, description = "List of users", body = Vec<User>)
    )
)]
pub async fn list_users(State(state): State<crate::AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.services.users.list_users().await?;
    Ok(Json(users))
}

/// Get user details by ID
#[utoipa::path(
    get,
    path = "/api/livros/usuarios/{id}",
    tag = "usuarios",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User details", body = User),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_user(
    State(state): State<crate::AppState>,
    AppPath(id): AppPath<i32>,
) -> AppResult<Json<User>> {
    let user = state.services.users.get_user(id).await?;
    Ok(Json(user))
}

/// Create a new user
///
/// A missing or unreadable body is reported as a validation error rather
/// than the extractor's own rejection.
#[utoipa::path(
    post,
    path = "/api/livros/usuario",
    tag = "usuarios",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = User,
            headers(("Location" = String, description = "URL of the created user"))),
        (status = 400, description = "Missing body", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<crate::AppState>,
    user: Option<AppJson<CreateUser>>,
) -> AppResult<impl IntoResponse> {
    let Some(AppJson(user)) = user else {
        return Err(AppError::Validation("Usuário não pode ser nulo.".to_string()));
    };

    let created = state.services.users.create_user(user).await?;
    let location = format!("/api/livros/usuarios/{}", created.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/api/livros/usuarios/{id}",
    tag = "usuarios",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "User has open loans", body = crate::error::ErrorResponse),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_user(
    State(state): State<crate::AppState>,
    AppPath(id): AppPath<i32>,
) -> AppResult<StatusCode> {
    state.services.users.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Search users by partial name and/or email
#[utoipa::path(
    get,
    path = "/api/livros/usuarios/consultar",
    tag = "usuarios",
    params(UserQuery),
    responses(
        (status = 200, description = "Matching users", body = Vec<User>)
    )
)]
pub async fn search_users(
    State(state): State<crate::AppState>,
    AppQuery(query): AppQuery<UserQuery>,
) -> AppResult<Json<Vec<User>>> {
    let users = state.services.users.search_users(&query).await?;
    Ok(Json(users))
}
