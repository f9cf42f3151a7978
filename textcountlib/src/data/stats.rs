//! Line and character totals.

use std::ops::{Add, AddAssign};
use std::path::PathBuf;

/// Line and character counts of one file or of a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    /// Number of `\n` terminators
    pub lines: u64,
    /// Number of Unicode scalar values
    pub chars: u64,
}

impl Counts {
    /// Create a new Counts with all zeros.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Add for Counts {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            lines: self.lines + other.lines,
            chars: self.chars + other.chars,
        }
    }
}

impl AddAssign for Counts {
    fn add_assign(&mut self, other: Self) {
        self.lines += other.lines;
        self.chars += other.chars;
    }
}

/// A file that could not be read during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    /// Path of the file
    pub path: PathBuf,
    /// Rendered error
    pub message: String,
}

/// Result of counting a directory tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountResult {
    /// Number of discovered files, including binary and unreadable ones
    pub file_count: usize,
    /// Totals across all readable text files
    pub total: Counts,
    /// Files that failed to read and contributed nothing
    pub failures: Vec<FileFailure>,
}

impl CountResult {
    /// Create a new empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the counts of one successfully read file.
    pub fn add_file(&mut self, counts: Counts) {
        self.file_count += 1;
        self.total += counts;
    }

    /// Record a file that could not be read.
    pub fn add_failure(&mut self, path: PathBuf, message: String) {
        self.file_count += 1;
        self.failures.push(FileFailure { path, message });
    }

    /// Render the plain-text summary, one `name\tvalue` line per total.
    pub fn summary(&self) -> String {
        format!(
            "lines\t{}\nchars\t{}\nfiles\t{}\n",
            self.total.lines, self.total.chars, self.file_count
        )
    }
}
