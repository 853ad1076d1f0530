use thiserror::Error;

#[derive(Debug, Error)]
pub enum MazeError {
    #[error("Invalid maze dimensions: {rows} rows x {columns} columns (both must be at least 1)")]
    InvalidDimensions { rows: usize, columns: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MazeError>;
