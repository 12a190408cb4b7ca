//! Configuration type definitions.

use crate::document::DEFAULT_MAX_DOCUMENT_BYTES;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How scene documents are rendered back to JSON.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct OutputConfig {
    /// Pretty-print JSON output (one field per line). `--compact` overrides this.
    #[serde(default = "default_pretty")]
    pub pretty: bool,

    /// Spaces per indentation level when pretty-printing (valid range: 0 - 8)
    #[serde(default = "default_indent")]
    pub indent: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
            indent: default_indent(),
        }
    }
}

/// Where scene documents come from and how much of them is accepted.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct InputConfig {
    /// Largest document accepted, before and after decompression
    /// (valid range: 1 KiB - 256 MiB)
    #[serde(default = "default_max_document_bytes")]
    pub max_document_bytes: u64,

    /// Document read when no FILE argument is given
    #[serde(default)]
    pub default_document: Option<PathBuf>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_document_bytes: default_max_document_bytes(),
            default_document: None,
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_pretty() -> bool {
    true
}

fn default_indent() -> usize {
    2
}

fn default_max_document_bytes() -> u64 {
    DEFAULT_MAX_DOCUMENT_BYTES
}
