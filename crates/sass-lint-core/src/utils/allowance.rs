//! Comment-based disable directives.
//!
//! Supports directives like:
//! ```text
//! // sass-lint:disable-line zero-unit
//! /* sass-lint:disable-next-line property-sort-order, hex-notation */
//! ```
//!
//! `all` disables every rule on the targeted line.

use crate::node::Node;
use std::collections::{HashMap, HashSet};

const DIRECTIVE_PREFIX: &str = "sass-lint:";

/// Comment node tags that may carry directives.
const COMMENT_KINDS: &[&str] = &["singlelineComment", "multilineComment"];

/// Which line a directive applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// The line the comment sits on.
    DisableLine,
    /// The line after the comment ends.
    DisableNextLine,
}

/// Disabled rules per source line, collected from one tree.
#[derive(Debug, Clone, Default)]
pub struct Directives {
    by_line: HashMap<usize, HashSet<String>>,
}

impl Directives {
    /// Collects every directive comment in `root`.
    #[must_use]
    pub fn from_tree(root: &Node) -> Self {
        let mut directives = Self::default();

        for comment in root
            .descendants()
            .filter(|n| COMMENT_KINDS.contains(&n.kind.as_str()))
        {
            let Some((directive, rules)) = comment.text().and_then(parse_directive) else {
                continue;
            };
            let line = match directive {
                Directive::DisableLine => comment.start.line,
                Directive::DisableNextLine => comment.end.line + 1,
            };
            directives.by_line.entry(line).or_default().extend(rules);
        }

        directives
    }

    /// Returns true if `rule_name` is disabled on `line`.
    #[must_use]
    pub fn is_disabled(&self, line: usize, rule_name: &str) -> bool {
        self.by_line
            .get(&line)
            .is_some_and(|rules| rules.contains(rule_name) || rules.contains("all"))
    }

    /// Returns true if the tree carried no directives.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_line.is_empty()
    }
}

/// Parses a directive from the text of a comment (delimiters already stripped).
fn parse_directive(comment: &str) -> Option<(Directive, HashSet<String>)> {
    let body = comment.trim().strip_prefix(DIRECTIVE_PREFIX)?;

    let (directive, rest) = if let Some(rest) = body.strip_prefix("disable-next-line") {
        (Directive::DisableNextLine, rest)
    } else if let Some(rest) = body.strip_prefix("disable-line") {
        (Directive::DisableLine, rest)
    } else {
        return None;
    };

    // Require a separator so `disable-linefoo` is not a directive.
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let mut rules: HashSet<String> = rest
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if rules.is_empty() {
        rules.insert("all".to_string());
    }

    Some((directive, rules))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Position;

    fn comment(kind: &str, text: &str, start: usize, end: usize) -> Node {
        Node::leaf(kind, text, Position::new(start, 3), Position::new(end, 20))
    }

    #[test]
    fn test_parse_disable_line() {
        let (directive, rules) = parse_directive(" sass-lint:disable-line zero-unit").unwrap();
        assert_eq!(directive, Directive::DisableLine);
        assert!(rules.contains("zero-unit"));
    }

    #[test]
    fn test_parse_multiple_rules() {
        let (directive, rules) =
            parse_directive(" sass-lint:disable-next-line rule1, rule2,rule3 ").unwrap();
        assert_eq!(directive, Directive::DisableNextLine);
        assert_eq!(rules.len(), 3);
        assert!(rules.contains("rule2"));
    }

    #[test]
    fn test_parse_without_rules_means_all() {
        let (_, rules) = parse_directive("sass-lint:disable-line").unwrap();
        assert!(rules.contains("all"));
    }

    #[test]
    fn test_parse_rejects_other_comments() {
        assert!(parse_directive(" just a comment").is_none());
        assert!(parse_directive(" sass-lint:enable zero-unit").is_none());
        assert!(parse_directive(" sass-lint:disable-linezero-unit").is_none());
    }

    #[test]
    fn test_directives_from_tree() {
        let p = Position::new(1, 1);
        let tree = Node::container(
            "stylesheet",
            vec![
                comment("singlelineComment", " sass-lint:disable-line zero-unit", 4, 4),
                comment(
                    "multilineComment",
                    " sass-lint:disable-next-line all ",
                    6,
                    7,
                ),
                comment("singlelineComment", " unrelated", 9, 9),
            ],
            p,
            Position::new(10, 1),
        );

        let directives = Directives::from_tree(&tree);
        assert!(directives.is_disabled(4, "zero-unit"));
        assert!(!directives.is_disabled(4, "hex-notation"));
        assert!(!directives.is_disabled(7, "hex-notation"));
        assert!(directives.is_disabled(8, "hex-notation"));
        assert!(!directives.is_disabled(9, "zero-unit"));
    }

    #[test]
    fn test_no_directives() {
        let p = Position::new(1, 1);
        let tree = Node::container("stylesheet", vec![], p, p);
        assert!(Directives::from_tree(&tree).is_empty());
    }
}
