use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssemblyError {
    #[error("Invalid field key: '{key}' is reserved")]
    InvalidFieldKey { key: String },
    #[error("Key '{key}' is already defined in {section}")]
    AlreadyDefinedKey { key: String, section: &'static str },
    #[error("File is not openable: {}", path.display())]
    FileNotOpenable { path: PathBuf },
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AssemblyError>;
