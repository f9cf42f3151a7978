//! Data collection: classify files and count their lines and characters.
//!
//! This module handles the second stage of the pipeline. It provides:
//!
//! - **Classification**: text/binary detection on the leading bytes
//! - **Statistics**: `Counts` and the per-run `CountResult`
//! - **Counting**: `count_bytes`, `count_file` and `count_directory`
//!
//! ## Example
//!
//! ```rust,ignore
//! use textcountlib::data::{count_directory, CountOptions};
//!
//! let result = count_directory(&CountOptions::new().root("."))?;
//! println!("Total lines: {}", result.total.lines);
//! ```

pub mod classify;
pub mod counter;
pub mod stats;

pub use classify::{looks_like_text, SAMPLE_LEN};
pub use counter::{count_bytes, count_directory, count_file, CountOptions};
pub use stats::{CountResult, Counts, FileFailure};
