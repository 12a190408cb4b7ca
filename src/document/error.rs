//! Errors raised while reading or rendering scene documents.

use thiserror::Error;

/// Errors that can occur while loading or rendering a scene document.
///
/// `source_label` is a file path or `<stdin>`.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Failed to read scene document {source_label}")]
    Io {
        source_label: String,
        #[source]
        error: std::io::Error,
    },

    #[error("Scene document {source_label} is {size} bytes which exceeds the limit of {limit} bytes")]
    TooLarge {
        source_label: String,
        size: u64,
        limit: u64,
    },

    /// Raised while streaming, so the full size is unknown.
    #[error("Scene document {source_label} exceeds the limit of {limit} bytes")]
    LimitExceeded { source_label: String, limit: u64 },

    #[error("Failed to decompress scene document {source_label}")]
    Decompress {
        source_label: String,
        #[source]
        error: std::io::Error,
    },

    #[error("Failed to parse scene document {source_label}")]
    Parse {
        source_label: String,
        #[source]
        error: serde_json::Error,
    },

    #[error("Failed to serialise scene document: {0}")]
    Serialize(#[from] serde_json::Error),
}
