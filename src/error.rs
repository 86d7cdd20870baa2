//! Error types for the migrator
//!
//! Uses `thiserror` for library errors. The binary entry point is the
//! only place errors are turned into process exit codes.

use thiserror::Error;

/// Result type alias for migration operations
pub type MigrateResult<T> = Result<T, MigrateError>;

/// Main error type for migration operations
#[derive(Error, Debug)]
pub enum MigrateError {
    /// Legacy settings source cannot be loaded and there is no existing
    /// destination to fall back on
    #[error("Python config file missing, unable to migrate")]
    SourceUnavailable,

    /// Required value absent from an otherwise loadable legacy source
    #[error("legacy config is missing required field '{field}'")]
    MissingField { field: &'static str },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
