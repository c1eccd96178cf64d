//! Rule enforcing the order of declarations inside a block.
//!
//! # Policies
//!
//! - `alphabetical` (default): names compare lexicographically as written.
//! - `recess`, `smacss`, `concentric`: built-in grouped lists.
//! - a list of property names from configuration.
//!
//! List policies rank a declaration by its name without vendor prefix.
//! Declarations the policy does not rank are skipped entirely: they are
//! never flagged and do not move the running maximum, so under a partial
//! order only the listed properties are checked against each other.
//!
//! # Configuration
//!
//! ```toml
//! [rules]
//! property-sort-order = [1, { order = "concentric" }]
//! ```

mod orders;
mod policy;

pub use policy::{OrderEntry, OrderPreset, Policy, RankKey};

use sass_lint_core::{
    ConfigError, Detection, FileContext, Ledger, Node, Rule, RuleError, RuleSetting, Severity,
};
use tracing::trace;

/// Rule code for property-sort-order.
pub const CODE: &str = "SL001";

/// Rule name for property-sort-order.
pub const NAME: &str = "property-sort-order";

/// Flags declarations that appear after a declaration the policy ranks higher.
#[derive(Debug, Clone)]
pub struct PropertySortOrder {
    /// Active ordering policy.
    pub policy: Policy,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for PropertySortOrder {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertySortOrder {
    /// Creates a new rule with alphabetical ordering.
    #[must_use]
    pub fn new() -> Self {
        Self {
            policy: Policy::Alphabetical,
            severity: Severity::Warning,
        }
    }

    /// Builds the rule from its configuration entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the `order` option is invalid.
    pub fn from_setting(setting: &RuleSetting) -> Result<Self, ConfigError> {
        Ok(Self::new().policy(Policy::from_setting(NAME, setting)?))
    }

    /// Sets the ordering policy.
    #[must_use]
    pub fn policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    fn check_block(&self, block: &Node, ledger: &mut Ledger) {
        // (rank, name) of the highest-ranked declaration seen so far
        let mut highest: Option<(RankKey<'_>, &str)> = None;

        for (declaration, name) in declarations(block) {
            let Some(rank) = self.policy.rank(name) else {
                trace!("{} is not ordered by {}", name, self.policy);
                continue;
            };

            match highest {
                Some((max, before)) if rank < max => {
                    ledger.add_unique(Detection::new(
                        NAME,
                        self.severity,
                        declaration,
                        format!("Expected `{name}` to come before `{before}`"),
                    ));
                }
                _ => highest = Some((rank, name)),
            }
        }
    }
}

/// Direct declarations of `block` with a plain identifier as property name.
///
/// Variable assignments and interpolated names have no fixed position in any
/// ordering and are left out.
fn declarations(block: &Node) -> impl Iterator<Item = (&Node, &str)> {
    block.children_of("declaration").filter_map(|declaration| {
        let name = declaration.first("property")?.first("ident")?.text()?;
        Some((declaration, name))
    })
}

impl Rule for PropertySortOrder {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Enforces the order of declarations within a block"
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
        for block in ast.descendants().filter(|n| n.is("block")) {
            self.check_block(block, ledger);
        }
        Ok(())
    }
}
