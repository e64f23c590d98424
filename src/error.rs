use thiserror::Error;

use crate::models::RequestStatus;

/// Errors raised by the domain operations. UI handlers show these to the
/// user; anything else bubbles up as `anyhow::Error`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Email already registered")]
    EmailTaken,

    #[error("Incorrect email or password")]
    InvalidCredentials,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Forbidden(&'static str),

    #[error("cannot change a {} request to {}", .from.as_str(), .to.as_str())]
    InvalidTransition {
        from: RequestStatus,
        to: RequestStatus,
    },

    #[error("You can have at most {max} images in the portfolio")]
    PortfolioFull { max: usize },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }

    /// Errors the user can act on, as opposed to storage failures.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, AppError::Database(_) | AppError::Migrate(_))
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
