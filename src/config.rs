use std::env;

use crate::errors::{AppError, AppResult};
use crate::utils::generator::DEFAULT_BATCH_SIZE;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://employees.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    /// Rows buffered before each flush during generation.
    pub batch_size: usize,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let batch_size = match lookup("BATCH_SIZE") {
            Some(raw) => match raw.parse::<usize>() {
                Ok(size) if size > 0 => size,
                _ => {
                    return Err(AppError::ConfigError(format!(
                        "BATCH_SIZE must be a positive integer, got '{}'",
                        raw
                    )))
                }
            },
            None => DEFAULT_BATCH_SIZE,
        };

        Ok(Config { database_url, batch_size })
    }
}
