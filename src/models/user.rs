//! User model and related types

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, NoneAsEmptyString};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// User row from the `usuarios` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: i32,
    pub nome: String,
    pub email: String,
}

/// Create user request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(length(min = 1, message = "Nome is required"))]
    pub nome: String,
    pub email: String,
}

/// User search filters, matched as substrings; empty values are no filter
#[serde_as]
#[derive(Debug, Default, Clone, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct UserQuery {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub nome: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub email: Option<String>,
}
