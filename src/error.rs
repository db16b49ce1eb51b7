//! Error types for loading guide content.
//!
//! Only store construction can fail. Lookups and rendering recover locally
//! (clamping, skipping unknown blocks) and never return these.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GuideError {
    /// Content file could not be read.
    #[error("Failed to read guide content from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Content is not valid guide JSON.
    #[error("Invalid guide content: {0}")]
    Parse(#[from] serde_json::Error),

    /// A guide must contain at least one section.
    #[error("Guide contains no sections")]
    Empty,

    /// Section ids must run 1..=N in order with no gaps.
    #[error("Section at position {position} has id {found}, expected {expected}")]
    NonContiguousId {
        position: usize,
        found: u32,
        expected: u32,
    },
}

pub type Result<T> = std::result::Result<T, GuideError>;
