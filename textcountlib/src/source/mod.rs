//! Source discovery: find the files to count.
//!
//! This module handles the first stage of the pipeline. It provides:
//!
//! - **Ignore rules**: `.gitignore` at the root, compiled once per run
//! - **Skip filtering**: literal suffixes plus the ignore rules
//! - **Discovery**: recursive walk that returns files only
//!
//! ## Example
//!
//! ```rust,ignore
//! use textcountlib::source::{discover_files, IgnoreMatcher, SkipFilter};
//!
//! let filter = SkipFilter::new(".")
//!     .skip_list(["go.mod", "go.sum"])
//!     .ignore(IgnoreMatcher::load(".")?);
//! let files = discover_files(".", &filter)?;
//! ```

pub mod filter;
pub mod ignore;
pub mod walk;

pub use filter::{SkipFilter, DEFAULT_SKIPPED};
pub use self::ignore::{IgnoreMatcher, IGNORE_FILE};
pub use walk::discover_files;
