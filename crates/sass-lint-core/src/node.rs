//! Syntax tree produced by the external SCSS/CSS parser.
//!
//! The engine only ever reads these nodes. The serde shape matches the
//! parser's JSON dump: `type`, `content`, `syntax`, `start`, `end` and
//! `indexHasChanged`.

use serde::{Deserialize, Serialize};

/// Source dialect a tree was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Syntax {
    /// Sassy CSS (`.scss`).
    #[default]
    Scss,
    /// Indented Sass (`.sass`).
    Sass,
    /// Plain CSS.
    Css,
    /// Less.
    Less,
}

impl Syntax {
    /// Lowercase name as written in parser dumps.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scss => "scss",
            Self::Sass => "sass",
            Self::Css => "css",
            Self::Less => "less",
        }
    }
}

impl std::fmt::Display for Syntax {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A 1-indexed line/column pair.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Position {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Payload of a node: nested children for containers, raw text for leaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    /// Container node (rule set, block, declaration, ...).
    Children(Vec<Node>),
    /// Leaf node (identifier, number, whitespace, ...).
    Text(String),
}

impl Content {
    /// Number of children for containers, number of characters for leaves.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Children(children) => children.len(),
            Self::Text(text) => text.chars().count(),
        }
    }

    /// Returns true if there are no children / no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A syntax-tree element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Node tag (e.g. "ruleset", "declaration", "ident").
    #[serde(rename = "type")]
    pub kind: String,
    /// Children or scalar text.
    pub content: Content,
    /// Source dialect.
    #[serde(default)]
    pub syntax: Syntax,
    /// Position of the first character.
    pub start: Position,
    /// Position of the last character.
    pub end: Position,
    /// Child indexes shifted by rewrite passes; only meaningful to fixers.
    #[serde(default)]
    pub index_has_changed: Vec<usize>,
}

impl Node {
    /// Creates a container node.
    #[must_use]
    pub fn container(
        kind: impl Into<String>,
        children: Vec<Node>,
        start: Position,
        end: Position,
    ) -> Self {
        Self {
            kind: kind.into(),
            content: Content::Children(children),
            syntax: Syntax::default(),
            start,
            end,
            index_has_changed: Vec::new(),
        }
    }

    /// Creates a leaf node.
    #[must_use]
    pub fn leaf(
        kind: impl Into<String>,
        text: impl Into<String>,
        start: Position,
        end: Position,
    ) -> Self {
        Self {
            kind: kind.into(),
            content: Content::Text(text.into()),
            syntax: Syntax::default(),
            start,
            end,
            index_has_changed: Vec::new(),
        }
    }

    /// Sets the syntax of this node.
    #[must_use]
    pub fn with_syntax(mut self, syntax: Syntax) -> Self {
        self.syntax = syntax;
        self
    }

    /// Returns true if this node has the given tag.
    #[must_use]
    pub fn is(&self, kind: &str) -> bool {
        self.kind == kind
    }

    /// Returns true for container nodes.
    #[must_use]
    pub fn is_container(&self) -> bool {
        matches!(self.content, Content::Children(_))
    }

    /// Direct children; empty for leaves.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match &self.content {
            Content::Children(children) => children,
            Content::Text(_) => &[],
        }
    }

    /// Scalar text; `None` for containers.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            Content::Children(_) => None,
        }
    }

    /// Length of the content (see [`Content::len`]).
    #[must_use]
    pub fn content_len(&self) -> usize {
        self.content.len()
    }

    /// First direct child with the given tag.
    #[must_use]
    pub fn first(&self, kind: &str) -> Option<&Node> {
        self.children().iter().find(|child| child.is(kind))
    }

    /// Direct children with the given tag, in source order.
    pub fn children_of<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.children().iter().filter(move |child| child.is(kind))
    }

    /// Pre-order walk over this node and all of its descendants.
    #[must_use]
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

/// Pre-order iterator returned by [`Node::descendants`].
#[derive(Debug)]
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}
