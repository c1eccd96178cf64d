//! Rule enforcing a single letter case in hex colors.
//!
//! # Configuration
//!
//! - `style`: `lowercase` (default) or `uppercase`
//!
//! Colors made of digits only (`#123`) satisfy either style.

use sass_lint_core::utils::{is_lower_case, is_upper_case};
use sass_lint_core::{
    ConfigError, Detection, FileContext, Ledger, Node, Rule, RuleError, RuleSetting, Severity,
};

/// Rule code for hex-notation.
pub const CODE: &str = "SL003";

/// Rule name for hex-notation.
pub const NAME: &str = "hex-notation";

/// Letter case required in hex colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HexStyle {
    /// `#abcdef`
    #[default]
    Lowercase,
    /// `#ABCDEF`
    Uppercase,
}

impl HexStyle {
    fn accepts(self, hex: &str) -> bool {
        match self {
            Self::Lowercase => is_lower_case(hex),
            Self::Uppercase => is_upper_case(hex),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Lowercase => "lowercase",
            Self::Uppercase => "uppercase",
        }
    }
}

/// Requires hex colors to use one letter case.
#[derive(Debug, Clone)]
pub struct HexNotation {
    /// Required case.
    pub style: HexStyle,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for HexNotation {
    fn default() -> Self {
        Self::new()
    }
}

impl HexNotation {
    /// Creates a new rule requiring lowercase.
    #[must_use]
    pub fn new() -> Self {
        Self {
            style: HexStyle::Lowercase,
            severity: Severity::Warning,
        }
    }

    /// Builds the rule from its configuration entry.
    ///
    /// # Errors
    ///
    /// Returns an error if `style` is neither `lowercase` nor `uppercase`.
    pub fn from_setting(setting: &RuleSetting) -> Result<Self, ConfigError> {
        let style = match setting.option("style") {
            None => HexStyle::default(),
            Some(toml::Value::String(s)) if s == "lowercase" => HexStyle::Lowercase,
            Some(toml::Value::String(s)) if s == "uppercase" => HexStyle::Uppercase,
            Some(other) => {
                return Err(ConfigError::InvalidOption {
                    rule: NAME.to_string(),
                    option: "style".to_string(),
                    message: format!("expected \"lowercase\" or \"uppercase\", found {other}"),
                })
            }
        };
        Ok(Self::new().style(style))
    }

    /// Sets the required case.
    #[must_use]
    pub fn style(mut self, style: HexStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for HexNotation {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires hexadecimal colors to use a consistent letter case"
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

            if !hex.chars().any(char::is_alphabetic) || self.style.accepts(hex) {
                continue;
            }

            ledger.add_unique(Detection::new(
                NAME,
                self.severity,
                color,
                format!("Color `#{hex}` should be written in {}", self.style.as_str()),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sass_lint_core::{Config, Position};
    use std::path::Path;

    fn tree(colors: &[&str]) -> Node {
        let children = colors
            .iter()
            .enumerate()
            .map(|(i, hex)| {
                Node::leaf(
                    "color",
                    *hex,
                    Position::new(i + 1, 10),
                    Position::new(i + 1, 10 + hex.len()),
                )
            })
            .collect();
        Node::container("value", children, Position::new(1, 1), Position::new(9, 1))
    }

    fn check(rule: &HexNotation, tree: &Node) -> Vec<Detection> {
        let ctx = FileContext::new(Path::new("test.scss"), Path::new("."), tree);
        let mut ledger = Ledger::new();
        rule.detect(&ctx, tree, &mut ledger).unwrap();
        ledger.into_sorted()
    }

    #[test]
    fn test_lowercase_by_default() {
        let detections = check(&HexNotation::new(), &tree(&["fff", "FFF", "aBc", "123"]));
        let lines: Vec<usize> = detections.iter().map(|d| d.line).collect();
        assert_eq!(lines, vec![2, 3]);
        assert_eq!(detections[0].message, "Color `#FFF` should be written in lowercase");
    }

    #[test]
    fn test_uppercase_style() {
        let rule = HexNotation::new().style(HexStyle::Uppercase);
        let detections = check(&rule, &tree(&["fff", "FFF", "A1B2C3", "000"]));
        assert_eq!(detections.len(), 1);
        assert_eq!(detections[0].line, 1);
    }

    #[test]
    fn test_from_setting() {
        let config =
            Config::parse("[rules]\nhex-notation = [2, { style = \"uppercase\" }]\n").unwrap();
        let rule = HexNotation::from_setting(&config.rules[NAME]).unwrap();
        assert_eq!(rule.style, HexStyle::Uppercase);

        let config = Config::parse("[rules]\nhex-notation = [1, { style = \"camel\" }]\n").unwrap();
        let err = HexNotation::from_setting(&config.rules[NAME]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOption { ref option, .. } if option == "style"));
    }
}
