//! Configuration types for sass-lint.
//!
//! Rule entries follow the severity-or-pair convention:
//!
//! ```toml
//! [rules]
//! zero-unit = 0                                  # off
//! hex-notation = 2                               # error, default options
//! property-sort-order = [1, { order = "recess" }] # warning with options
//! ```
//!
//! Entries are resolved into [`RuleSetting`] once, while parsing.

use crate::types::Severity;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Top-level configuration for sass-lint.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Analyzer configuration.
    pub analyzer: AnalyzerConfig,

    /// Per-rule settings, keyed by rule name.
    pub rules: BTreeMap<String, RuleSetting>,
}

/// On-disk shape before rule entries are resolved.
#[derive(Deserialize)]
struct RawConfig {
    #[serde(default)]
    analyzer: AnalyzerConfig,
    #[serde(default)]
    rules: toml::Table,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = load_config_file(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or a rule entry is malformed.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;

        let rules = raw
            .rules
            .iter()
            .map(|(name, value)| Ok((name.clone(), RuleSetting::resolve(name, value)?)))
            .collect::<Result<BTreeMap<_, _>, ConfigError>>()?;

        Ok(Self {
            analyzer: raw.analyzer,
            rules,
        })
    }

    /// Checks if a rule is enabled. Rules absent from the config are enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rules
            .get(rule_name)
            .map_or(true, RuleSetting::is_enabled)
    }

    /// Gets the severity override for a rule.
    #[must_use]
    pub fn rule_severity(&self, rule_name: &str) -> Option<Severity> {
        self.rules.get(rule_name).and_then(|s| s.severity)
    }

    /// Gets the resolved setting for a rule.
    #[must_use]
    pub fn rule_setting(&self, rule_name: &str) -> Option<&RuleSetting> {
        self.rules.get(rule_name)
    }
}

/// Reads a UTF-8 text file, trimming a single trailing newline.
///
/// # Errors
///
/// I/O failures are returned unchanged.
pub fn load_config_file(path: &Path) -> std::io::Result<String> {
    let mut content = std::fs::read_to_string(path)?;
    if content.ends_with('\n') {
        content.pop();
        if content.ends_with('\r') {
            content.pop();
        }
    }
    Ok(content)
}

/// Analyzer-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Root directory to analyze (default: current directory).
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Glob patterns, relative to `root`, selecting parser dumps to lint.
    #[serde(default = "default_include")]
    pub include: Vec<String>,

    /// Glob patterns to exclude from analysis.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            include: default_include(),
            exclude: vec!["**/node_modules/**".to_string()],
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_include() -> Vec<String> {
    vec!["**/*.json".to_string()]
}

/// A resolved rule entry: severity (`None` = off) plus rule options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSetting {
    /// Severity, or `None` when the rule is switched off.
    pub severity: Option<Severity>,

    /// Rule-specific options.
    pub options: toml::Table,
}

impl RuleSetting {
    /// Resolves a raw `severity` or `[severity, { options }]` entry.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRule`] for any other shape.
    pub fn resolve(rule: &str, value: &toml::Value) -> Result<Self, ConfigError> {
        let invalid = |message: String| ConfigError::InvalidRule {
            rule: rule.to_string(),
            message,
        };

        match value {
            toml::Value::Integer(level) => Ok(Self {
                severity: severity_from_level(*level).map_err(invalid)?,
                options: toml::Table::new(),
            }),
            toml::Value::Array(pair) => match pair.as_slice() {
                [toml::Value::Integer(level), toml::Value::Table(options)] => Ok(Self {
                    severity: severity_from_level(*level).map_err(invalid)?,
                    options: options.clone(),
                }),
                _ => Err(invalid(
                    "expected a two-element array [severity, { options }]".to_string(),
                )),
            },
            other => Err(invalid(format!(
                "expected a severity or [severity, {{ options }}], found {}",
                other.type_str()
            ))),
        }
    }

    /// Returns true unless the severity is `0` (off).
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.severity.is_some()
    }

    /// Gets a raw option value.
    #[must_use]
    pub fn option(&self, key: &str) -> Option<&toml::Value> {
        self.options.get(key)
    }
}

fn severity_from_level(level: i64) -> Result<Option<Severity>, String> {
    Severity::from_level(level).map_err(|other| {
        format!("severity must be 0 (off), 1 (warning) or 2 (error), found {other}")
    })
}

/// Configuration errors.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    #[diagnostic(code(sass_lint::config::io))]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    #[diagnostic(code(sass_lint::config::parse))]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// A rule entry is neither a severity nor a `[severity, options]` pair.
    #[error("Invalid setting for rule '{rule}': {message}")]
    #[diagnostic(
        code(sass_lint::config::rule),
        help("use 0, 1, 2 or [severity, {{ option = value }}]")
    )]
    InvalidRule {
        /// Rule name.
        rule: String,
        /// What was wrong.
        message: String,
    },

    /// A rule option has an unsupported value.
    #[error("Invalid option '{option}' for rule '{rule}': {message}")]
    #[diagnostic(code(sass_lint::config::option))]
    InvalidOption {
        /// Rule name.
        rule: String,
        /// Option name.
        option: String,
        /// What was wrong.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.analyzer.include, vec!["**/*.json".to_string()]);
        assert!(config.rules.is_empty());
        assert!(config.is_rule_enabled("anything"));
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[analyzer]
root = "./build/trees"
exclude = ["**/vendor/**"]

[rules]
zero-unit = 0
hex-notation = 2
property-sort-order = [1, { order = "recess" }]
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.analyzer.root, PathBuf::from("./build/trees"));
        assert!(!config.is_rule_enabled("zero-unit"));
        assert!(config.is_rule_enabled("hex-notation"));
        assert_eq!(config.rule_severity("hex-notation"), Some(Severity::Error));

        let setting = config.rule_setting("property-sort-order").unwrap();
        assert_eq!(setting.severity, Some(Severity::Warning));
        assert_eq!(
            setting.option("order").and_then(toml::Value::as_str),
            Some("recess")
        );
    }

    #[test]
    fn test_custom_order_option() {
        let config = Config::parse(
            r#"
[rules]
property-sort-order = [1, { order = ["height", "width"] }]
"#,
        )
        .unwrap();

        let setting = config.rule_setting("property-sort-order").unwrap();
        let order: Vec<&str> = setting
            .option("order")
            .and_then(toml::Value::as_array)
            .unwrap()
            .iter()
            .filter_map(toml::Value::as_str)
            .collect();
        assert_eq!(order, vec!["height", "width"]);
    }

    #[test]
    fn test_rejects_bad_level() {
        let err = Config::parse("[rules]\nzero-unit = 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRule { ref rule, .. } if rule == "zero-unit"));
    }

    #[test]
    fn test_rejects_malformed_pair() {
        for entry in [
            "[1]",
            "[1, 2]",
            "[{ order = \"recess\" }, 1]",
            "[1, { order = \"recess\" }, 3]",
            "\"warn\"",
            "true",
        ] {
            let toml = format!("[rules]\nproperty-sort-order = {entry}\n");
            let err = Config::parse(&toml).unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidRule { .. }),
                "{entry} should be rejected, got {err:?}"
            );
        }
    }

    #[test]
    fn test_rejects_invalid_toml() {
        let err = Config::parse("[rules\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_config_file_trims_one_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("testFile.txt");
        std::fs::write(
            &path,
            "This is a test file that test's the loadConfigFile helper function.\n",
        )
        .unwrap();

        assert_eq!(
            load_config_file(&path).unwrap(),
            "This is a test file that test's the loadConfigFile helper function."
        );

        std::fs::write(&path, "a\n\n").unwrap();
        assert_eq!(load_config_file(&path).unwrap(), "a\n");

        std::fs::write(&path, "b\r\n").unwrap();
        assert_eq!(load_config_file(&path).unwrap(), "b");
    }

    #[test]
    fn test_load_config_file_propagates_io_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config_file(&dir.path().join("missing.toml")).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn test_from_file_wraps_io_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_file(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
