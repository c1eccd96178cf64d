//! # sass-lint-core
//!
//! Detection engine for linting SCSS/CSS syntax trees.
//!
//! The grammar parser lives outside this crate; it hands over a [`Node`]
//! tree and every rule walks that tree with the primitives provided here:
//!
//! - [`Node`] for the parser's syntax tree
//! - [`Ledger`] and [`is_equal`] for de-duplicating detections
//! - [`sort_detects`] for the deterministic report order
//! - [`utils::search::property_search`] and [`utils::text`] validators
//! - [`Rule`] trait for per-file rules
//! - [`Analyzer`] for orchestrating a lint run
//!
//! ## Example
//!
//! ```ignore
//! use sass_lint_core::{Analyzer, Node};
//! use std::path::Path;
//!
//! let tree: Node = serde_json::from_str(&json)?;
//! let analyzer = Analyzer::builder()
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let report = analyzer.lint_tree(Path::new("styles.scss"), &tree)?;
//! ```

mod analyzer;
mod config;
mod context;
mod ledger;
mod node;
mod rule;
mod types;

/// Utility modules for rule implementations.
pub mod utils;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use config::{load_config_file, AnalyzerConfig, Config, ConfigError, RuleSetting};
pub use context::FileContext;
pub use ledger::{is_equal, Fingerprint, Ledger, Shape};
pub use node::{Content, Node, Position, Syntax};
pub use rule::{Rule, RuleBox, RuleError};
pub use types::{sort_detects, Detection, FileReport, LintResult, Severity};
