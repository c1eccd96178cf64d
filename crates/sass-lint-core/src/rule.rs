//! Rule trait for defining lint rules.

use crate::context::FileContext;
use crate::ledger::Ledger;
use crate::node::Node;
use crate::types::Severity;

/// A per-file lint rule walking the parser's syntax tree.
///
/// Rules report into the [`Ledger`] they are handed; the analyzer owns one
/// ledger per rule and file, so a rule never sees another run's detections.
///
/// # Example
///
/// ```ignore
/// use sass_lint_core::{Detection, FileContext, Ledger, Node, Rule, RuleError};
///
/// pub struct NoImportant;
///
/// impl Rule for NoImportant {
///     fn name(&self) -> &'static str { "no-important" }
///     fn code(&self) -> &'static str { "SL100" }
///
///     fn detect(
///         &self,
///         _ctx: &FileContext<'_>,
///         ast: &Node,
///         ledger: &mut Ledger,
///     ) -> Result<(), RuleError> {
///         for node in ast.descendants().filter(|n| n.is("important")) {
///             let severity = self.default_severity();
///             ledger.add_unique(Detection::new(self.name(), severity, node, "!important found"));
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "property-sort-order").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "SL001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the severity for detections from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    /// Walks `ast` and records detections in `ledger`.
    ///
    /// # Errors
    ///
    /// Returns an error if the tree does not have the shape the rule relies
    /// on. Detections recorded before the failure stay valid.
    fn detect(
        &self,
        ctx: &FileContext<'_>,
        ast: &Node,
        ledger: &mut Ledger,
    ) -> Result<(), RuleError>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

/// Failure of a rule during a tree walk.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// A node is missing a child or value the rule requires.
    #[error("malformed `{kind}` node at {line}:{column}: {message}")]
    MalformedNode {
        /// Tag of the offending node.
        kind: String,
        /// Line of the offending node.
        line: usize,
        /// Column of the offending node.
        column: usize,
        /// What was wrong with it.
        message: String,
    },
}

impl RuleError {
    /// Creates a [`RuleError::MalformedNode`] for `node`.
    #[must_use]
    pub fn malformed(node: &Node, message: impl Into<String>) -> Self {
        Self::MalformedNode {
            kind: node.kind.clone(),
            line: node.start.line,
            column: node.start.column,
            message: message.into(),
        }
    }
}
