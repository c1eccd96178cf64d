//! Rule presets and config-driven rule construction.

use crate::{empty_line_between_blocks, hex_notation, property_sort_order};
use crate::{EmptyLineBetweenBlocks, HexNotation, NoInvalidHex, PropertySortOrder, ZeroUnit};
use sass_lint_core::{Config, ConfigError, RuleBox, RuleSetting};
use tracing::debug;

/// Preset rule sets for sass-lint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Rules that rarely need tuning.
    Recommended,
    /// Every built-in rule with its default options.
    All,
}

impl Preset {
    /// Returns the rules for this preset.
    #[must_use]
    pub fn rules(self) -> Vec<RuleBox> {
        match self {
            Self::Recommended => recommended_rules(),
            Self::All => all_rules(),
        }
    }
}

/// Returns the recommended set of rules.
///
/// Includes:
/// - `property-sort-order` (SL001), alphabetical
/// - `no-invalid-hex` (SL002)
/// - `zero-unit` (SL004)
#[must_use]
pub fn recommended_rules() -> Vec<RuleBox> {
    vec![
        Box::new(PropertySortOrder::new()),
        Box::new(NoInvalidHex::new()),
        Box::new(ZeroUnit::new()),
    ]
}

/// Returns all available rules with default options.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![
        Box::new(PropertySortOrder::new()),
        Box::new(NoInvalidHex::new()),
        Box::new(HexNotation::new()),
        Box::new(ZeroUnit::new()),
        Box::new(EmptyLineBetweenBlocks::new()),
    ]
}

/// Builds every built-in rule, applying options from `config`.
///
/// Rules switched off in the config are still returned; the analyzer skips
/// them. Options of disabled rules are validated all the same.
///
/// # Errors
///
/// Returns the first [`ConfigError::InvalidOption`] met.
pub fn rules_from_config(config: &Config) -> Result<Vec<RuleBox>, ConfigError> {
    let default = RuleSetting::default();
    let setting = |name| config.rule_setting(name).unwrap_or(&default);

    let rules: Vec<RuleBox> = vec![
        Box::new(PropertySortOrder::from_setting(setting(
            property_sort_order::NAME,
        ))?),
        Box::new(NoInvalidHex::new()),
        Box::new(HexNotation::from_setting(setting(hex_notation::NAME))?),
        Box::new(ZeroUnit::new()),
        Box::new(EmptyLineBetweenBlocks::from_setting(setting(
            empty_line_between_blocks::NAME,
        ))?),
    ];

    debug!("Built {} rule(s) from configuration", rules.len());
    Ok(rules)
}

/// Keeps the rules whose name or code is listed in `selection`.
#[must_use]
pub fn select_rules(rules: Vec<RuleBox>, selection: &[String]) -> Vec<RuleBox> {
    rules
        .into_iter()
        .filter(|rule| {
            selection
                .iter()
                .any(|s| s == rule.name() || s.eq_ignore_ascii_case(rule.code()))
        })
        .collect()
}
