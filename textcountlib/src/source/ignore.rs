//! Gitignore-style ignore rules loaded from the root of the counted tree.

use std::path::{Path, PathBuf};

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use tracing::debug;

use crate::error::TextcountError;
use crate::Result;

/// Name of the ignore file looked up at the root.
pub const IGNORE_FILE: &str = ".gitignore";

/// Compiled ignore rules anchored at a root directory.
#[derive(Debug, Clone)]
pub struct IgnoreMatcher {
    gitignore: Gitignore,
}

impl IgnoreMatcher {
    /// Load and compile `<root>/.gitignore`.
    ///
    /// Fails if the file is missing, unreadable or holds an invalid glob.
    pub fn load(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let path = root.join(IGNORE_FILE);

        let mut builder = GitignoreBuilder::new(root);
        if let Some(err) = builder.add(&path) {
            return Err(TextcountError::IgnoreLoad { path, source: err });
        }
        let gitignore = builder
            .build()
            .map_err(|err| TextcountError::IgnoreLoad {
                path: path.clone(),
                source: err,
            })?;

        debug!(
            path = %path.display(),
            ignores = gitignore.num_ignores(),
            whitelists = gitignore.num_whitelists(),
            "loaded ignore rules"
        );

        Ok(Self { gitignore })
    }

    /// Compile ignore rules from in-memory pattern lines.
    pub fn from_lines<'a>(
        root: impl AsRef<Path>,
        lines: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self> {
        let root = root.as_ref();
        let origin = PathBuf::from(IGNORE_FILE);

        let mut builder = GitignoreBuilder::new(root);
        for line in lines {
            builder
                .add_line(Some(origin.clone()), line)
                .map_err(|err| TextcountError::IgnoreLoad {
                    path: root.join(IGNORE_FILE),
                    source: err,
                })?;
        }
        let gitignore = builder.build().map_err(|err| TextcountError::IgnoreLoad {
            path: root.join(IGNORE_FILE),
            source: err,
        })?;

        Ok(Self { gitignore })
    }

    /// Check a root-relative file path against the rules.
    ///
    /// A file is ignored when it, or any directory above it, matches an
    /// ignore pattern that is not overridden by a later whitelist (`!`) pattern.
    pub fn is_ignored(&self, relative: &Path) -> bool {
        // Paths outside the root can't be matched and would trip the matcher.
        if relative.has_root() || relative.as_os_str().is_empty() {
            return false;
        }
        self.gitignore
            .matched_path_or_any_parents(relative, false)
            .is_ignore()
    }
}
