//! Rule enforcing blank lines between a ruleset and whatever precedes it.
//!
//! Applies to rulesets that start on their own line after another item of
//! the same stylesheet or block. A ruleset right after the opening brace is
//! not checked.
//!
//! # Configuration
//!
//! - `include` (default `true`): require the blank line; `false` forbids it.

use sass_lint_core::utils::{has_eol, is_empty_line};
use sass_lint_core::{
    ConfigError, Detection, FileContext, Ledger, Node, Rule, RuleError, RuleSetting, Severity,
};

/// Rule code for empty-line-between-blocks.
pub const CODE: &str = "SL005";

/// Rule name for empty-line-between-blocks.
pub const NAME: &str = "empty-line-between-blocks";

/// Requires (or forbids) a blank line before each ruleset.
#[derive(Debug, Clone)]
pub struct EmptyLineBetweenBlocks {
    /// Whether the blank line is required (`true`) or forbidden.
    pub include: bool,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for EmptyLineBetweenBlocks {
    fn default() -> Self {
        Self::new()
    }
}

impl EmptyLineBetweenBlocks {
    /// Creates a new rule requiring blank lines.
    #[must_use]
    pub fn new() -> Self {
        Self {
            include: true,
            severity: Severity::Warning,
        }
    }

    /// Builds the rule from its configuration entry.
    ///
    /// # Errors
    ///
    /// Returns an error if `include` is not a boolean.
    pub fn from_setting(setting: &RuleSetting) -> Result<Self, ConfigError> {
        match setting.option("include") {
            None => Ok(Self::new()),
            Some(toml::Value::Boolean(include)) => Ok(Self::new().include(*include)),
            Some(other) => Err(ConfigError::InvalidOption {
                rule: NAME.to_string(),
                option: "include".to_string(),
                message: format!("expected a boolean, found {}", other.type_str()),
            }),
        }
    }

    /// Sets whether the blank line is required.
    #[must_use]
    pub fn include(mut self, include: bool) -> Self {
        self.include = include;
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    fn check_children(&self, parent: &Node, ledger: &mut Ledger) -> Result<(), RuleError> {
        let children = parent.children();

        for (i, ruleset) in children.iter().enumerate().filter(|(_, n)| n.is("ruleset")) {
            let Some(space) = i
                .checked_sub(1)
                .map(|j| &children[j])
                .filter(|n| n.is("space"))
            else {
                continue;
            };
            // Nothing but whitespace before: first item of the container.
            if children[..i - 1].iter().all(|n| n.is("space")) {
                continue;
            }

            let whitespace = space
                .text()
                .ok_or_else(|| RuleError::malformed(space, "space has no text"))?;
            if !has_eol(whitespace) {
                continue;
            }

            if has_blank_line(whitespace) != self.include {
                let message = if self.include {
                    "Space between blocks should be included"
                } else {
                    "Space between blocks should be omitted"
                };
                ledger.add_unique(Detection::new(NAME, self.severity, ruleset, message));
            }
        }
        Ok(())
    }
}

/// Returns true if the whitespace run holds a line with nothing on it.
fn has_blank_line(whitespace: &str) -> bool {
    match (whitespace.find('\n'), whitespace.rfind('\n')) {
        (Some(first), Some(last)) if first < last => is_empty_line(&whitespace[first..=last]),
        _ => false,
    }
}

impl Rule for EmptyLineBetweenBlocks {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires a blank line before rulesets that follow other content"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn detect(
        &self,
        _ctx: &FileContext<'_>,
        ast: &Node,
        ledger: &mut Ledger,
    ) -> Result<(), RuleError> {
        for parent in ast
            .descendants()
            .filter(|n| n.is("stylesheet") || n.is("block"))
        {
            self.check_children(parent, ledger)?;
        }
        Ok(())
    }
}
