use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FacilityVizError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("Could not read spreadsheet {}: {reason}", path.display())]
    UnreadableInput { path: PathBuf, reason: String },

    #[error("Sheet '{sheet}' not found (available: {})", available.join(", "))]
    SheetNotFound { sheet: String, available: Vec<String> },

    #[error("Missing column in sheet header: {0}")]
    MissingColumn(String),

    #[error("Sheet contains no facility rows")]
    EmptySheet,

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FacilityVizError>;
