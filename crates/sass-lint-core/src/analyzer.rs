//! Core analyzer for orchestrating lint execution.

use crate::config::Config;
use crate::context::FileContext;
use crate::ledger::Ledger;
use crate::node::Node;
use crate::rule::{Rule, RuleBox, RuleError};
use crate::types::{Detection, FileReport, LintResult};
use crate::utils::allowance::Directives;

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during analysis.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error reading files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A parser dump is not a valid syntax tree.
    #[error("Invalid syntax tree in {path}: {source}")]
    Tree {
        /// Path to the dump that failed to load.
        path: PathBuf,
        /// JSON error.
        source: serde_json::Error,
    },

    /// Glob pattern error.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// A rule failed while walking a tree; the file's run was aborted.
    #[error("Rule '{rule}' failed on {path}: {source}")]
    Rule {
        /// Name of the failing rule.
        rule: String,
        /// File being linted.
        path: PathBuf,
        /// Underlying rule error.
        source: RuleError,
    },
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    root: Option<PathBuf>,
    rules: Vec<RuleBox>,
    exclude_patterns: Vec<String>,
    include_patterns: Vec<String>,
    config: Option<Config>,
    fail_on_parse_error: bool,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root directory to analyze.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Adds a rule to the analyzer.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the analyzer.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Adds multiple exclude glob patterns.
    #[must_use]
    pub fn excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Adds an include glob pattern, relative to the root.
    #[must_use]
    pub fn include(mut self, pattern: impl Into<String>) -> Self {
        self.include_patterns.push(pattern.into());
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets whether an unreadable syntax tree aborts the run (default: false).
    #[must_use]
    pub fn fail_on_parse_error(mut self, fail: bool) -> Self {
        self.fail_on_parse_error = fail;
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be resolved.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let root = self
            .root
            .or_else(|| self.config.as_ref().map(|c| c.analyzer.root.clone()))
            .unwrap_or_else(|| PathBuf::from("."));

        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };

        let config = self.config.unwrap_or_default();

        // Merge patterns from config
        let mut exclude_patterns = self.exclude_patterns;
        exclude_patterns.extend(config.analyzer.exclude.iter().cloned());

        let mut include_patterns = self.include_patterns;
        if include_patterns.is_empty() {
            include_patterns.extend(config.analyzer.include.iter().cloned());
        }

        for name in config.rules.keys() {
            if !self.rules.iter().any(|r| r.name() == name) {
                warn!("Configured rule is not registered: {}", name);
            }
        }

        Ok(Analyzer {
            root,
            rules: self.rules,
            exclude_patterns,
            include_patterns,
            config,
            fail_on_parse_error: self.fail_on_parse_error,
        })
    }
}

/// The main analyzer that orchestrates lint execution.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    root: PathBuf,
    rules: Vec<RuleBox>,
    exclude_patterns: Vec<String>,
    include_patterns: Vec<String>,
    config: Config,
    fail_on_parse_error: bool,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the root directory being analyzed.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Discovers parser dumps under the root and lints each of them.
    ///
    /// # Errors
    ///
    /// Returns an error if discovery fails, a rule fails, or (with
    /// `fail_on_parse_error`) a dump is not a valid tree.
    pub fn analyze(&self) -> Result<LintResult, AnalyzerError> {
        info!("Starting analysis at {:?}", self.root);

        let mut result = LintResult::new();
        let files = self.discover_files()?;

        info!("Found {} files to analyze", files.len());

        for file_path in &files {
            match self.lint_file(file_path) {
                Ok(report) => result.files.push(report),
                Err(AnalyzerError::Tree { path, source }) => {
                    warn!("Failed to load {}: {}", path.display(), source);
                    if self.fail_on_parse_error {
                        return Err(AnalyzerError::Tree { path, source });
                    }
                }
                Err(e) => return Err(e),
            }
        }

        let (errors, warnings) = result.count_by_severity();
        info!(
            "Analysis complete: {} error(s), {} warning(s) in {} files",
            errors,
            warnings,
            result.files_checked()
        );

        Ok(result)
    }

    /// Loads a parser dump from disk and lints it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not a valid tree, or
    /// a rule fails.
    pub fn lint_file(&self, path: &Path) -> Result<FileReport, AnalyzerError> {
        debug!("Loading: {}", path.display());

        let content = std::fs::read_to_string(path)?;
        let tree: Node = serde_json::from_str(&content).map_err(|source| AnalyzerError::Tree {
            path: path.to_path_buf(),
            source,
        })?;

        self.lint_tree(path, &tree)
    }

    /// Runs every enabled rule over one tree.
    ///
    /// Each rule records into its own ledger; the union is filtered through
    /// disable directives and ordered by position.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::Rule`] as soon as a rule fails.
    pub fn lint_tree(&self, path: &Path, tree: &Node) -> Result<FileReport, AnalyzerError> {
        debug!("Analyzing: {}", path.display());

        let ctx = FileContext::new(path, &self.root, tree);
        let directives = Directives::from_tree(tree);
        let mut detections = Vec::new();

        for rule in &self.rules {
            if !self.config.is_rule_enabled(rule.name()) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }

            let mut ledger = Ledger::new();
            rule.detect(&ctx, tree, &mut ledger)
                .map_err(|source| AnalyzerError::Rule {
                    rule: rule.name().to_string(),
                    path: ctx.relative_path.clone(),
                    source,
                })?;

            debug!("{} reported {} detection(s)", rule.name(), ledger.len());

            let rule_detections = self.apply_severity_override(rule.name(), ledger.into_inner());
            detections.extend(
                rule_detections
                    .into_iter()
                    .filter(|d| !directives.is_disabled(d.line, rule.name())),
            );
        }

        Ok(FileReport::new(ctx.relative_path, detections))
    }

    /// Applies severity overrides from configuration.
    fn apply_severity_override(
        &self,
        rule_name: &str,
        mut detections: Vec<Detection>,
    ) -> Vec<Detection> {
        if let Some(severity) = self.config.rule_severity(rule_name) {
            for d in &mut detections {
                d.severity = severity;
            }
        }
        detections
    }

    /// Discovers all parser dumps to analyze.
    fn discover_files(&self) -> Result<Vec<PathBuf>, AnalyzerError> {
        let mut files = Vec::new();

        for include in &self.include_patterns {
            let pattern = format!("{}/{}", self.root.display(), include);

            for entry in glob::glob(&pattern)? {
                let path = entry.map_err(|e| AnalyzerError::Io(e.into_error()))?;

                if !path.is_file() {
                    continue;
                }

                if self.should_exclude(&path) {
                    debug!("Excluding: {}", path.display());
                    continue;
                }

                files.push(path);
            }
        }

        files.sort();
        files.dedup();
        Ok(files)
    }

    /// Checks if a path should be excluded.
    fn should_exclude(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        for pattern in &self.exclude_patterns {
            if let Ok(glob_pattern) = glob::Pattern::new(pattern) {
                if glob_pattern.matches(&path_str) {
                    return true;
                }
            }

            // Also check as substring for patterns like "**/node_modules/**"
            let normalized_pattern = pattern.replace("**", "");
            if !normalized_pattern.is_empty() && path_str.contains(&normalized_pattern) {
                return true;
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let analyzer = Analyzer::builder()
            .root(".")
            .exclude("**/node_modules/**")
            .build()
            .expect("Failed to build analyzer");

        assert!(analyzer.root().exists());
        assert_eq!(analyzer.rule_count(), 0);
    }

    #[test]
    fn test_exclude_patterns() {
        let analyzer = Analyzer::builder()
            .root(".")
            .exclude("**/vendor/**")
            .build()
            .expect("Failed to build analyzer");

        assert!(analyzer.should_exclude(Path::new("/foo/node_modules/bootstrap/a.scss.json")));
        assert!(analyzer.should_exclude(Path::new("/foo/vendor/lib.scss.json")));
        assert!(!analyzer.should_exclude(Path::new("/foo/styles/main.scss.json")));
    }

    #[test]
    fn test_default_include_comes_from_config() {
        let analyzer = Analyzer::builder().root(".").build().unwrap();
        assert_eq!(analyzer.include_patterns, vec!["**/*.json".to_string()]);

        let analyzer = Analyzer::builder()
            .root(".")
            .include("trees/*.json")
            .build()
            .unwrap();
        assert_eq!(analyzer.include_patterns, vec!["trees/*.json".to_string()]);
    }
}
