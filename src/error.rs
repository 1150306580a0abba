use std::path::PathBuf;
use thiserror::Error;

/// Errores de la librería. "Sin horarios" nunca es un error: se representa
/// como una lista vacía.
#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("catalog directory not found: {}", .0.display())]
    CatalogDirMissing(PathBuf),

    #[error("failed to read catalog directory {}: {source}", .path.display())]
    CatalogDirUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid credit target {requested}: expected one of {allowed:?}")]
    InvalidCreditTarget { requested: u32, allowed: Vec<u32> },

    #[error("max_schedules must be at least 1")]
    InvalidMaxSchedules,

    #[error("failed to extract text from PDF: {0}")]
    PdfExtract(String),

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("upload error: {0}")]
    Upload(String),

    #[error("internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl SchedulerError {
    /// true si el error se debe a la petición del cliente (HTTP 400).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            SchedulerError::InvalidCreditTarget { .. }
                | SchedulerError::InvalidMaxSchedules
                | SchedulerError::PdfExtract(_)
                | SchedulerError::InvalidDate(_)
                | SchedulerError::Upload(_)
                | SchedulerError::Json(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, SchedulerError>;
