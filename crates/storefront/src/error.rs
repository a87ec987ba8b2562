//! Unified error handling.
//!
//! Provides a unified `AppError` type for front ends. Library functions return
//! their own error types; front ends convert with `?`.

use thiserror::Error;

use crate::cart::StorageError;
use crate::catalog::{CatalogError, ParseSortOptionError};
use crate::config::ConfigError;
use crate::routes::UnknownRoute;

/// Application-level error type for the product store.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog service operation failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Local storage operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Path matched no view.
    #[error(transparent)]
    Route(#[from] UnknownRoute),

    /// Bad input from the user.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl From<ParseSortOptionError> for AppError {
    fn from(err: ParseSortOptionError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
