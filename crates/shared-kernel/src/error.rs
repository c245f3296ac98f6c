// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum DaysortError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<DaysortError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),
}

pub type Result<T> = std::result::Result<T, DaysortError>;

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid overwrite mode '{value}'. Valid options: skip, overwrite, rename")]
    InvalidOverwriteMode { value: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Infrastructure-layer errors. Every variant is fatal for the run.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("failed to create directory '{path}': {source}")]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk '{path}': {reason}")]
    Walk { path: PathBuf, reason: String },

    #[error("failed to copy '{from}' to '{to}' ({operation}): {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        operation: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write progress output: {source}")]
    Output {
        #[source]
        source: std::io::Error,
    },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Presentation-layer errors. Reported by the binary before a run starts.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("{reason}")]
    ArgumentParsing { reason: String },

    #[error("Source directory '{path}' does not exist")]
    SourceNotFound { path: PathBuf },
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<DaysortError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| DaysortError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| DaysortError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
