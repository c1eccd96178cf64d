//! Locating `.sass-lint.toml`.
//!
//! An explicit `--config` path always wins. Otherwise the project directory
//! is searched, then `$SASS_LINT_CONFIG_DIR/config.toml` (falling back to
//! `~/.sass-lint/config.toml`). When nothing exists the built-in defaults
//! apply.

use crate::commands::init::CONFIG_FILE_NAME;
use std::path::{Path, PathBuf};

/// Origin of the configuration in effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given with `--config` or `SASS_LINT_CONFIG`.
    Explicit(PathBuf),
    /// Next to the linted trees.
    Project(PathBuf),
    /// From the per-user directory.
    Global(PathBuf),
    /// Nothing found.
    Default,
}

impl ConfigSource {
    /// File to load, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Whether this is the per-user file.
    #[must_use]
    pub fn is_global(&self) -> bool {
        matches!(self, Self::Global(_))
    }
}

/// Checked in order.
const PROJECT_CONFIG_NAMES: &[&str] = &[CONFIG_FILE_NAME, "sass-lint.toml"];

const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Finds the configuration file for `project_dir`.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    resolve_inner(project_dir, explicit, global_config_dir())
}

fn resolve_inner(
    project_dir: &Path,
    explicit: Option<&Path>,
    global_dir: Option<PathBuf>,
) -> ConfigSource {
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    for name in PROJECT_CONFIG_NAMES {
        let candidate = project_dir.join(name);
        if candidate.exists() {
            tracing::debug!(path = %candidate.display(), "using project config");
            return ConfigSource::Project(candidate);
        }
    }

    if let Some(dir) = global_dir {
        let candidate = dir.join(GLOBAL_CONFIG_NAME);
        if candidate.exists() {
            tracing::debug!(path = %candidate.display(), "using global config");
            return ConfigSource::Global(candidate);
        }
    }

    ConfigSource::Default
}

/// `$SASS_LINT_CONFIG_DIR`, or `~/.sass-lint` when unset.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("SASS_LINT_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|h| h.join(".sass-lint"))
}
