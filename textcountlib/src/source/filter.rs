//! Skip decisions for discovered paths.
//!
//! A path is skipped when it ends with one of the literal suffixes of the
//! skip list, or when the ignore rules of the root match it.

use std::path::{Path, PathBuf};

use super::ignore::IgnoreMatcher;

/// Suffixes skipped when none are configured.
pub const DEFAULT_SKIPPED: &[&str] = &["go.mod", "go.sum"];

/// Decides which discovered paths are left out of the count.
#[derive(Debug, Clone)]
pub struct SkipFilter {
    root: PathBuf,
    skip_list: Vec<String>,
    ignore: Option<IgnoreMatcher>,
}

impl SkipFilter {
    /// Create a filter for `root` with no skip list and no ignore rules.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            skip_list: Vec::new(),
            ignore: None,
        }
    }

    /// Set the literal suffixes to skip. Empty entries are dropped, since an
    /// empty suffix would match every path.
    pub fn skip_list<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skip_list = suffixes
            .into_iter()
            .map(Into::into)
            .filter(|s: &String| !s.is_empty())
            .collect();
        self
    }

    /// Attach compiled ignore rules.
    pub fn ignore(mut self, matcher: IgnoreMatcher) -> Self {
        self.ignore = Some(matcher);
        self
    }

    /// The root the ignore rules are evaluated against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The active skip suffixes.
    pub fn suffixes(&self) -> &[String] {
        &self.skip_list
    }

    /// Check whether `path` should be left out.
    pub fn should_skip(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        if self
            .skip_list
            .iter()
            .any(|suffix| path_str.ends_with(suffix.as_str()))
        {
            return true;
        }

        match &self.ignore {
            Some(matcher) => {
                let relative = path.strip_prefix(&self.root).unwrap_or(path);
                matcher.is_ignored(relative)
            }
            None => false,
        }
    }
}
