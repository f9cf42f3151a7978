//! Error types for textcountlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while counting a directory tree
#[derive(Error, Debug)]
pub enum TextcountError {
    /// The root path is missing or cannot be accessed
    #[error("error accessing '{path}': {source}")]
    RootNotFound {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The ignore file is missing or contains an invalid pattern
    #[error("failed to load ignore rules from '{path}': {source}")]
    IgnoreLoad {
        path: PathBuf,
        source: ignore::Error,
    },

    /// A directory could not be read during the walk
    #[error("couldn't load file paths under '{path}': {source}")]
    Traversal {
        path: PathBuf,
        source: walkdir::Error,
    },

    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl TextcountError {
    /// Whether the driver must abort the run on this error.
    ///
    /// Only [`TextcountError::FileRead`] is recoverable: the file contributes
    /// nothing and counting moves on to the next one.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, TextcountError::FileRead { .. })
    }
}
