//! Book model and related types

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, NoneAsEmptyString};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Book row from the `livros` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i32,
    pub titulo: String,
    pub autor: String,
    pub ano_publicacao: i32,
    pub genero: String,
    /// May be loaned
    pub disponivel: bool,
    /// Currently out on loan
    pub emprestado: bool,
}

/// Create book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBook {
    #[validate(length(min = 1, message = "Titulo is required"))]
    pub titulo: String,
    #[validate(length(min = 1, message = "Autor is required"))]
    pub autor: String,
    pub ano_publicacao: i32,
    pub genero: String,
}

/// Update book request. The id must match the one in the path.
///
/// Availability flags are not part of the update: they are owned by the
/// loan workflow.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBook {
    pub id: i32,
    #[validate(length(min = 1, message = "Titulo is required"))]
    pub titulo: String,
    #[validate(length(min = 1, message = "Autor is required"))]
    pub autor: String,
    pub ano_publicacao: i32,
    pub genero: String,
}

/// Book search filters; absent or empty filters do not restrict the result set
#[serde_as]
#[derive(Debug, Default, Clone, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct BookQuery {
    /// Exact genre
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub genero: Option<String>,
    /// Exact author
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub autor: Option<String>,
    /// Exact publication year
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub ano: Option<i32>,
}
