use std::fmt;
use validator::ValidationErrors;

#[derive(Debug)]
pub enum AppError {
    ConnectionError(String),
    ConfigError(String),
    ValidationError(String),
    DateParseError(String),
    DatabaseError(String),
    OutputError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ConnectionError(msg) => write!(f, "Database connection failed: {}", msg),
            AppError::ConfigError(msg) => write!(f, "Configuration Error: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
            AppError::DateParseError(msg) => write!(f, "Date Parse Error: {}", msg),
            AppError::DatabaseError(msg) => write!(f, "Database Error: {}", msg),
            AppError::OutputError(msg) => write!(f, "Output Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(err: ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::OutputError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_error_is_descriptive() {
        let err = AppError::ConnectionError("unable to open database file".to_string());
        assert_eq!(
            err.to_string(),
            "Database connection failed: unable to open database file"
        );
    }

    #[test]
    fn test_sqlx_error_maps_to_database_error() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, AppError::DatabaseError(_)));
    }
}
