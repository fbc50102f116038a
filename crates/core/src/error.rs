//! Error types for catalog loading

use crate::types::VideoId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed catalog entry on line {line}: {content}")]
    MalformedLine { line: usize, content: String },

    #[error("Duplicate video id in catalog: {0}")]
    DuplicateId(VideoId),
}

/// Convenience alias for catalog results
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
