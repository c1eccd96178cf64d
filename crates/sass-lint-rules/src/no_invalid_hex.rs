//! Rule to forbid malformed hexadecimal colors.
//!
//! # Detected Patterns
//!
//! - `#ab`, `#abcd`, `#abcdeff` (wrong length)
//! - `#ggg`, `#12345z` (non-hex digits)
//!
//! The parser stores a color without its leading `#`.

use sass_lint_core::utils::is_valid_hex;
use sass_lint_core::{Detection, FileContext, Ledger, Node, Rule, RuleError, Severity};

/// Rule code for no-invalid-hex.
pub const CODE: &str = "SL002";

/// Rule name for no-invalid-hex.
pub const NAME: &str = "no-invalid-hex";

/// Forbids hex colors that are not 3 or 6 hex digits.
#[derive(Debug, Clone)]
pub struct NoInvalidHex {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for NoInvalidHex {
    fn default() -> Self {
        Self::new()
    }
}

impl NoInvalidHex {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for NoInvalidHex {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids hexadecimal colors that are not 3 or 6 hex digits"
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
        for color in ast.descendants().filter(|n| n.is("color")) {
            let hex = color
                .text()
                .ok_or_else(|| RuleError::malformed(color, "color has no text"))?;

            if !is_valid_hex(hex) {
                ledger.add_unique(Detection::new(
                    NAME,
                    self.severity,
                    color,
                    format!("Hexadecimal color `#{hex}` must be 3 or 6 hex digits"),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sass_lint_core::Position;
    use std::path::Path;

    fn color(hex: &str, line: usize) -> Node {
        Node::leaf(
            "color",
            hex,
            Position::new(line, 10),
            Position::new(line, 10 + hex.len()),
        )
    }

    fn check(tree: &Node) -> Result<Vec<Detection>, RuleError> {
        let ctx = FileContext::new(Path::new("test.scss"), Path::new("."), tree);
        let mut ledger = Ledger::new();
        NoInvalidHex::new().detect(&ctx, tree, &mut ledger)?;
        Ok(ledger.into_sorted())
    }

    fn value(children: Vec<Node>) -> Node {
        Node::container("value", children, Position::new(1, 1), Position::new(9, 1))
    }

    #[test]
    fn test_valid_colors_pass() {
        let tree = value(vec![color("fff", 1), color("A0b1C2", 2)]);
        assert!(check(&tree).unwrap().is_empty());
    }

    #[test]
    fn test_detects_invalid_colors() {
        let tree = value(vec![
            color("ab", 1),
            color("abcd", 2),
            color("ggg", 3),
            color("1234567", 4),
        ]);
        let detections = check(&tree).unwrap();
        assert_eq!(detections.len(), 4);
        assert!(detections.iter().all(|d| d.severity == Severity::Error));
        assert_eq!(
            detections[2].message,
            "Hexadecimal color `#ggg` must be 3 or 6 hex digits"
        );
    }

    #[test]
    fn test_container_color_is_malformed() {
        let p = Position::new(3, 4);
        let tree = value(vec![Node::container("color", vec![], p, p)]);
        let err = check(&tree).unwrap_err();
        assert_eq!(err.to_string(), "malformed `color` node at 3:4: color has no text");
    }
}
