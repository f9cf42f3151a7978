//! Counting API: single buffers, single files and whole directory trees.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::TextcountError;
use crate::source::filter::{SkipFilter, DEFAULT_SKIPPED};
use crate::source::ignore::IgnoreMatcher;
use crate::source::walk::discover_files;
use crate::Result;

use super::classify::{looks_like_text, sample};
use super::stats::{CountResult, Counts};

/// Options for counting a directory tree.
#[derive(Debug, Clone)]
pub struct CountOptions {
    /// Root directory to scan
    pub root: PathBuf,
    /// Literal path suffixes that are always skipped
    pub skip_list: Vec<String>,
    /// Whether `<root>/.gitignore` is loaded and applied
    pub use_ignore: bool,
}

impl Default for CountOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("./"),
            skip_list: DEFAULT_SKIPPED.iter().map(|s| s.to_string()).collect(),
            use_ignore: true,
        }
    }
}

impl CountOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the root directory.
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Set the skipped suffixes.
    pub fn skip_list(mut self, suffixes: Vec<String>) -> Self {
        self.skip_list = suffixes;
        self
    }

    /// Enable or disable `.gitignore` handling.
    pub fn use_ignore(mut self, enabled: bool) -> Self {
        self.use_ignore = enabled;
        self
    }
}

/// Count lines and characters of an in-memory buffer.
///
/// Binary content counts as zero. For text, lines are the number of `\n`
/// bytes, so a last line without a terminator is not counted, and chars are
/// the number of UTF-8 encoded scalar values.
///
/// # Example
///
/// ```rust
/// use textcountlib::{count_bytes, Counts};
///
/// assert_eq!(count_bytes(b"a\nb\nc"), Counts { lines: 2, chars: 5 });
/// assert_eq!(count_bytes(&[0x00, 0x01, 0x02]), Counts { lines: 0, chars: 0 });
/// ```
pub fn count_bytes(content: &[u8]) -> Counts {
    if !looks_like_text(sample(content)) {
        return Counts::new();
    }

    Counts {
        lines: bytecount::count(content, b'\n') as u64,
        chars: count_chars(content),
    }
}

/// Number of scalar values once decoded, with every invalid sequence
/// decoding to one U+FFFD.
fn count_chars(content: &[u8]) -> u64 {
    match std::str::from_utf8(content) {
        Ok(_) => bytecount::num_chars(content) as u64,
        Err(_) => String::from_utf8_lossy(content).chars().count() as u64,
    }
}

/// Count lines and characters of a single file.
///
/// The file is read fully into memory and closed before returning.
pub fn count_file(path: impl AsRef<Path>) -> Result<Counts> {
    let path = path.as_ref();
    let read_error = |source| TextcountError::FileRead {
        path: path.to_path_buf(),
        source,
    };

    let mut content = Vec::new();
    File::open(path)
        .and_then(|mut file| file.read_to_end(&mut content))
        .map_err(read_error)?;

    let counts = count_bytes(&content);
    debug!(
        path = %path.display(),
        lines = counts.lines,
        chars = counts.chars,
        "counted"
    );
    Ok(counts)
}

/// Count every file under the configured root.
///
/// This is the main entry point. It:
/// 1. Checks that the root exists
/// 2. Loads `<root>/.gitignore` (unless disabled)
/// 3. Discovers the files that are neither skipped nor ignored
/// 4. Counts each file, logging and recording the ones that can't be read
///
/// Steps 1 to 3 fail the whole run. A file that can't be read contributes
/// nothing but is still part of the file count.
///
/// # Example
///
/// ```rust
/// use textcountlib::{count_directory, CountOptions};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// fs::write(dir.path().join(".gitignore"), "*.log\n").unwrap();
/// fs::write(dir.path().join("main.go"), "package main\n").unwrap();
/// fs::write(dir.path().join("debug.log"), "noise\n").unwrap();
///
/// let result = count_directory(&CountOptions::new().root(dir.path())).unwrap();
/// assert_eq!(result.file_count, 2); // .gitignore and main.go
/// assert_eq!(result.total.lines, 2);
/// ```
pub fn count_directory(options: &CountOptions) -> Result<CountResult> {
    let root = options.root.as_path();

    std::fs::metadata(root).map_err(|source| TextcountError::RootNotFound {
        path: root.to_path_buf(),
        source,
    })?;

    let mut filter = SkipFilter::new(root).skip_list(options.skip_list.iter().cloned());
    if options.use_ignore {
        filter = filter.ignore(IgnoreMatcher::load(root)?);
    }

    let files = discover_files(root, &filter)?;
    debug!(files = files.len(), root = %root.display(), "discovered files");

    let mut result = CountResult::new();
    for path in files {
        match count_file(&path) {
            Ok(counts) => result.add_file(counts),
            Err(err) => {
                warn!("error counting file {}", err);
                result.add_failure(path, err.to_string());
            }
        }
    }

    Ok(result)
}
