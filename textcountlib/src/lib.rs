//! # textcountlib
//!
//! Counts text lines and characters across a directory tree.
//!
//! ## Overview
//!
//! The library walks a root directory, leaves out the files matched by the
//! root's `.gitignore` or ending with a configured suffix, and adds up the
//! lines and characters of every remaining text file:
//!
//! - **Lines**: number of `\n` terminators (a last line without one is not counted)
//! - **Chars**: number of Unicode scalar values, not bytes
//! - **Files**: every discovered file, binary and unreadable ones included
//!
//! Binary files are detected from their first 64 bytes and contribute no
//! lines or characters.
//!
//! ## Example
//!
//! ```rust
//! use textcountlib::{count_directory, count_file, CountOptions};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join(".gitignore"), "target/\n").unwrap();
//! fs::write(dir.path().join("go.mod"), "module demo\n").unwrap();
//! let file_path = dir.path().join("notes.txt");
//! fs::write(&file_path, "a\nb\nc").unwrap();
//!
//! // Count a single file
//! let counts = count_file(&file_path).unwrap();
//! assert_eq!(counts.lines, 2);
//! assert_eq!(counts.chars, 5);
//!
//! // Count the whole tree; go.mod is skipped by default
//! let result = count_directory(&CountOptions::new().root(dir.path())).unwrap();
//! assert_eq!(result.file_count, 2);
//! assert_eq!(result.total.lines, 3);
//! ```

pub mod data;
pub mod error;
pub mod source;

pub use data::{
    count_bytes, count_directory, count_file, looks_like_text, CountOptions, CountResult, Counts,
    FileFailure, SAMPLE_LEN,
};
pub use error::TextcountError;
pub use source::{discover_files, IgnoreMatcher, SkipFilter, DEFAULT_SKIPPED, IGNORE_FILE};

/// Result type for textcountlib operations
pub type Result<T> = std::result::Result<T, TextcountError>;
