use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(#[from] SqlxError),

    #[error("Not found")]
    NotFound,

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Foreign key violation: {0}")]
    ForeignKey(String),

    #[error("Custom: {0}")]
    Custom(String),
}

impl RepositoryError {
    /// Classifies a sqlx error by Postgres error code so unique and
    /// foreign key violations surface as their own variants.
    pub fn from_database(err: SqlxError, what: &str) -> Self {
        if let Some(db_err) = err.as_database_error() {
            match db_err.code().as_deref() {
                Some("23505") => return RepositoryError::AlreadyExists(what.to_string()),
                Some("23503") => return RepositoryError::ForeignKey(what.to_string()),
                _ => {}
            }
        }
        RepositoryError::Sqlx(err)
    }
}
