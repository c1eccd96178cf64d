//! Rule to forbid units on zero lengths.
//!
//! `0px`, `0.0em` and `-0rem` are flagged; `0` and `10px` are not.

use sass_lint_core::utils::is_number;
use sass_lint_core::{Detection, FileContext, Ledger, Node, Rule, RuleError, Severity};

/// Rule code for zero-unit.
pub const CODE: &str = "SL004";

/// Rule name for zero-unit.
pub const NAME: &str = "zero-unit";

/// Forbids units on zero-valued dimensions.
#[derive(Debug, Clone)]
pub struct ZeroUnit {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for ZeroUnit {
    fn default() -> Self {
        Self::new()
    }
}

impl ZeroUnit {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Warning,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

#[allow(clippy::float_cmp)]
fn is_zero(number: &str) -> bool {
    is_number(number) && number.trim().parse::<f64>().is_ok_and(|n| n == 0.0)
}

impl Rule for ZeroUnit {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids units on zero values"
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
        for dimension in ast.descendants().filter(|n| n.is("dimension")) {
            let number = dimension
                .first("number")
                .and_then(Node::text)
                .ok_or_else(|| RuleError::malformed(dimension, "dimension has no number"))?;

            let Some(unit) = dimension.first("ident").and_then(Node::text) else {
                continue;
            };

            if is_zero(number) {
                ledger.add_unique(Detection::new(
                    NAME,
                    self.severity,
                    dimension,
                    format!("No unit allowed for values of 0, found `{number}{unit}`"),
                ));
            }
        }
        Ok(())
    }
}
