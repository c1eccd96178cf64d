//! Builders for parser-shaped SCSS trees.
//!
//! Positions follow the parser: 1-indexed, `end` on the last character.
//! Every declaration sits on its own line.

#![allow(dead_code)]

use sass_lint_core::{Node, Position};

fn at(line: usize, column: usize) -> Position {
    Position::new(line, column)
}

fn leaf(kind: &str, text: &str, line: usize, column: usize) -> Node {
    let width = text.chars().count().max(1);
    Node::leaf(kind, text, at(line, column), at(line, column + width - 1))
}

/// `#hex` as a value token.
pub fn color(hex: &str, line: usize, column: usize) -> Node {
    Node::leaf("color", hex, at(line, column), at(line, column + hex.len()))
}

/// `<number><unit>` as a value token.
pub fn dimension(number: &str, unit: &str, line: usize, column: usize) -> Node {
    let unit_column = column + number.len();
    Node::container(
        "dimension",
        vec![
            leaf("number", number, line, column),
            leaf("ident", unit, line, unit_column),
        ],
        at(line, column),
        at(line, unit_column + unit.len() - 1),
    )
}

/// A plain identifier value token.
pub fn ident(text: &str, line: usize, column: usize) -> Node {
    leaf("ident", text, line, column)
}

/// `name: <value>` at `indent` columns, where `value` builds the value
/// tokens from the column they start at.
pub fn declaration_with(
    name: &str,
    line: usize,
    indent: usize,
    value: impl FnOnce(usize) -> Vec<Node>,
) -> Node {
    let start = indent + 1;
    let colon = start + name.len();
    let value_start = colon + 2;
    let tokens = value(value_start);
    let value_end = tokens.last().map_or(value_start, |t| t.end.column);

    Node::container(
        "declaration",
        vec![
            Node::container(
                "property",
                vec![leaf("ident", name, line, start)],
                at(line, start),
                at(line, colon - 1),
            ),
            leaf("propertyDelimiter", ":", line, colon),
            leaf("space", " ", line, colon + 1),
            Node::container("value", tokens, at(line, value_start), at(line, value_end)),
        ],
        at(line, start),
        at(line, value_end),
    )
}

/// `name: value` with a single identifier value.
pub fn declaration(name: &str, value: &str, line: usize, indent: usize) -> Node {
    declaration_with(name, line, indent, |column| vec![ident(value, line, column)])
}

/// `$name: value`.
pub fn variable(name: &str, value: &str, line: usize, indent: usize) -> Node {
    let start = indent + 1;
    let colon = start + name.len() + 1;
    let value_start = colon + 2;
    let value_end = value_start + value.len() - 1;

    Node::container(
        "declaration",
        vec![
            Node::container(
                "property",
                vec![Node::container(
                    "variable",
                    vec![leaf("ident", name, line, start + 1)],
                    at(line, start),
                    at(line, colon - 1),
                )],
                at(line, start),
                at(line, colon - 1),
            ),
            leaf("propertyDelimiter", ":", line, colon),
            leaf("space", " ", line, colon + 1),
            Node::container(
                "value",
                vec![ident(value, line, value_start)],
                at(line, value_start),
                at(line, value_end),
            ),
        ],
        at(line, start),
        at(line, value_end),
    )
}

/// `.name` selector.
pub fn class_selector(name: &str, line: usize, indent: usize) -> Node {
    let start = indent + 1;
    let end = start + name.len();
    Node::container(
        "selector",
        vec![Node::container(
            "class",
            vec![leaf("ident", name, line, start + 1)],
            at(line, start),
            at(line, end),
        )],
        at(line, start),
        at(line, end),
    )
}

/// `&:name` selector.
pub fn parent_pseudo_selector(name: &str, line: usize, indent: usize) -> Node {
    let start = indent + 1;
    let end = start + 1 + name.len();
    Node::container(
        "selector",
        vec![
            leaf("parentSelector", "&", line, start),
            Node::container(
                "pseudoClass",
                vec![leaf("ident", name, line, start + 2)],
                at(line, start + 1),
                at(line, end),
            ),
        ],
        at(line, start),
        at(line, end),
    )
}

fn whitespace(from_line: usize, to_line: usize, indent: usize) -> String {
    let mut text = "\n".repeat(to_line.saturating_sub(from_line));
    text.push_str(&" ".repeat(indent));
    text
}

/// `selector { items }` where `items` are declarations or nested rulesets
/// indented by `indent + 2`, and the closing brace sits on `end_line`.
pub fn ruleset(selector: Node, end_line: usize, indent: usize, items: Vec<Node>) -> Node {
    let line = selector.start.line;
    let brace = selector.end.column + 2;
    let mut children = Vec::new();
    let mut previous = line;

    for item in items {
        children.push(Node::leaf(
            "space",
            whitespace(previous, item.start.line, indent + 2),
            at(previous, brace + 1),
            at(item.start.line, indent + 2),
        ));
        previous = item.end.line;
        let is_declaration = item.is("declaration");
        let end = item.end;
        children.push(item);
        if is_declaration {
            children.push(leaf("declarationDelimiter", ";", end.line, end.column + 1));
        }
    }
    children.push(Node::leaf(
        "space",
        whitespace(previous, end_line, indent),
        at(previous, 1),
        at(end_line, indent),
    ));

    let start = selector.start;
    let block = Node::container("block", children, at(line, brace), at(end_line, indent + 1));
    Node::container(
        "ruleset",
        vec![selector, leaf("space", " ", line, brace - 1), block],
        start,
        at(end_line, indent + 1),
    )
}

/// Top-level rulesets separated by the whitespace their lines imply.
pub fn stylesheet(rulesets: Vec<Node>) -> Node {
    let mut children = Vec::new();
    let mut previous: Option<usize> = None;
    let mut last = 1;

    for ruleset in rulesets {
        if let Some(prev) = previous {
            children.push(Node::leaf(
                "space",
                whitespace(prev, ruleset.start.line, 0),
                at(prev, 2),
                at(ruleset.start.line, 1),
            ));
        }
        previous = Some(ruleset.end.line);
        last = ruleset.end.line;
        children.push(ruleset);
    }

    Node::container("stylesheet", children, at(1, 1), at(last, 1))
}

/// The property-order fixture:
///
/// ```scss
/// .alpha {
///   position: relative;
///   color: red;
///   height: 1px;
/// }
///
/// .bravo {
///   color: red;
///   position: absolute;
///   height: 1px;
///   width: 1px;
///   display: block;
///
///   &:hover {
///     color: blue;
///   }
/// }
///
/// .charlie {
///   height: 1px;
///   -webkit-transition: none;
/// }
///
/// .delta {
///   $gap: 4px;
///   width: 1px;
///   transition: none;
/// }
///
/// .echo {
///   display: block;
/// }
/// ```
pub fn property_order_fixture() -> Node {
    stylesheet(vec![
        ruleset(
            class_selector("alpha", 1, 0),
            5,
            0,
            vec![
                declaration("position", "relative", 2, 2),
                declaration("color", "red", 3, 2),
                declaration("height", "1px", 4, 2),
            ],
        ),
        ruleset(
            class_selector("bravo", 7, 0),
            17,
            0,
            vec![
                declaration("color", "red", 8, 2),
                declaration("position", "absolute", 9, 2),
                declaration("height", "1px", 10, 2),
                declaration("width", "1px", 11, 2),
                declaration("display", "block", 12, 2),
                ruleset(
                    parent_pseudo_selector("hover", 14, 2),
                    16,
                    2,
                    vec![declaration("color", "blue", 15, 4)],
                ),
            ],
        ),
        ruleset(
            class_selector("charlie", 19, 0),
            22,
            0,
            vec![
                declaration("height", "1px", 20, 2),
                declaration("-webkit-transition", "none", 21, 2),
            ],
        ),
        ruleset(
            class_selector("delta", 24, 0),
            28,
            0,
            vec![
                variable("gap", "4px", 25, 2),
                declaration("width", "1px", 26, 2),
                declaration("transition", "none", 27, 2),
            ],
        ),
        ruleset(
            class_selector("echo", 30, 0),
            32,
            0,
            vec![declaration("display", "block", 31, 2)],
        ),
    ])
}
