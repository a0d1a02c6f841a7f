use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Unable to initialize Tesseract: {0}")]
    EngineInit(String),

    #[error("Unable to load image {}: {reason}", path.display())]
    ImageLoad { path: PathBuf, reason: String },

    #[error("Unable to recognize text: {0}")]
    Recognition(String),

    #[error("Preprocessing error: {0}")]
    Preprocessing(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScanError {
    pub fn image_load(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        ScanError::ImageLoad {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;
