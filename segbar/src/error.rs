//! Segmented control error types.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("segment index {index} out of range (count {count})")]
    OutOfRange { index: usize, count: usize },

    #[error("no layout for segment {index} (layout covers {laid_out} segments)")]
    StaleLayout { index: usize, laid_out: usize },
}

#[derive(Debug, Error)]
pub enum StyleError {
    #[error("invalid {field}: {value}")]
    Invalid { field: &'static str, value: f32 },

    #[error("invalid color: {0:?}")]
    Color(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
