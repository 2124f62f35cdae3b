use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Recipe source failed: {0}")]
    Source(String),

    #[error("Recipe pool came back empty for diet '{0}'")]
    EmptyPool(String),

    #[error("Unsupported catalog format '{0}' (expected .json or .csv)")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, PlanError>;
