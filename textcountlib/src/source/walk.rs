//! Recursive file discovery under a root directory.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use super::filter::SkipFilter;
use crate::error::TextcountError;
use crate::Result;

/// Discover the files under `root` that the filter keeps.
///
/// Walks the tree without following symlinks, visiting the entries of each
/// directory in file name order. Directories are never returned. The first
/// walk error aborts discovery and no partial listing is returned.
///
/// # Example
///
/// ```rust
/// use textcountlib::{discover_files, SkipFilter};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// fs::create_dir(dir.path().join("src")).unwrap();
/// fs::write(dir.path().join("src/main.go"), "package main\n").unwrap();
/// fs::write(dir.path().join("go.mod"), "module demo\n").unwrap();
///
/// let filter = SkipFilter::new(dir.path()).skip_list(["go.mod"]);
/// let files = discover_files(dir.path(), &filter).unwrap();
/// assert_eq!(files, vec![dir.path().join("src/main.go")]);
/// ```
pub fn discover_files(root: impl AsRef<Path>, filter: &SkipFilter) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    let mut files = Vec::new();

    let walker = WalkDir::new(root).follow_links(false).sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|err| TextcountError::Traversal {
            path: err
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf()),
            source: err,
        })?;

        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        if filter.should_skip(path) {
            debug!(path = %path.display(), "skipped");
            continue;
        }

        files.push(entry.into_path());
    }

    Ok(files)
}
