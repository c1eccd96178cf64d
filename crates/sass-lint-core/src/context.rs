//! Context types for rule execution.

use crate::node::{Node, Syntax};
use std::path::{Path, PathBuf};

/// Stylesheet extensions a parser dump may be named after (`main.scss.json`).
const STYLESHEET_EXTENSIONS: &[&str] = &["scss", "sass", "css", "less"];

/// Context provided to rules for the file being linted.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Path the tree was loaded from.
    pub path: &'a Path,
    /// Stylesheet path relative to the project root, used in reports.
    pub relative_path: PathBuf,
    /// Dialect of the tree.
    pub syntax: Syntax,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, root: &Path, tree: &Node) -> Self {
        let relative = path
            .strip_prefix(root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf);

        Self {
            path,
            relative_path: Self::source_path(&relative),
            syntax: tree.syntax,
        }
    }

    /// Maps a parser dump (`main.scss.json`) back to its stylesheet (`main.scss`).
    fn source_path(path: &Path) -> PathBuf {
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            return path.to_path_buf();
        }

        let stem = path.with_extension("");
        let is_stylesheet = stem
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| STYLESHEET_EXTENSIONS.contains(&e));

        if is_stylesheet {
            stem
        } else {
            path.to_path_buf()
        }
    }
}
