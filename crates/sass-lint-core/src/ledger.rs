//! Shallow structural fingerprints and the per-run detection ledger.
//!
//! Two items are the "same" detection when their tag, start line, end line
//! and content length agree. Nothing deeper is inspected: within one lint
//! pass that combination identifies a single code region.

use crate::node::Node;
use crate::types::{sort_detects, Detection};

/// The four fields compared by [`is_equal`].
pub trait Fingerprint {
    /// Node tag.
    fn kind(&self) -> &str;
    /// Line of the first character.
    fn start_line(&self) -> usize;
    /// Line of the last character.
    fn end_line(&self) -> usize;
    /// Child count for containers, character count for leaves.
    fn content_len(&self) -> usize;
}

/// Returns true iff `a` and `b` share tag, start line, end line and content length.
#[must_use]
pub fn is_equal<A, B>(a: &A, b: &B) -> bool
where
    A: Fingerprint + ?Sized,
    B: Fingerprint + ?Sized,
{
    a.kind() == b.kind()
        && a.start_line() == b.start_line()
        && a.end_line() == b.end_line()
        && a.content_len() == b.content_len()
}

impl Fingerprint for Node {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn start_line(&self) -> usize {
        self.start.line
    }

    fn end_line(&self) -> usize {
        self.end.line
    }

    fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Owned snapshot of a node's fingerprint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Shape {
    /// Node tag.
    pub kind: String,
    /// Line of the first character.
    pub start_line: usize,
    /// Line of the last character.
    pub end_line: usize,
    /// Child count or character count.
    pub content_len: usize,
}

impl Shape {
    /// Captures the fingerprint of `item`.
    #[must_use]
    pub fn of<F: Fingerprint + ?Sized>(item: &F) -> Self {
        Self {
            kind: item.kind().to_string(),
            start_line: item.start_line(),
            end_line: item.end_line(),
            content_len: item.content_len(),
        }
    }
}

impl Fingerprint for Shape {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn start_line(&self) -> usize {
        self.start_line
    }

    fn end_line(&self) -> usize {
        self.end_line
    }

    fn content_len(&self) -> usize {
        self.content_len
    }
}

/// Ordered collection of detections for one lint pass.
///
/// No two entries are ever structurally equal. A ledger belongs to a single
/// run; concurrent runs each own their own instance.
#[derive(Debug, Clone)]
pub struct Ledger<T = Detection> {
    entries: Vec<T>,
}

impl<T> Default for Ledger<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: Fingerprint> Ledger<T> {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true iff no entry is structurally equal to `item`.
    #[must_use]
    pub fn is_unique<F: Fingerprint + ?Sized>(&self, item: &F) -> bool {
        !self.entries.iter().any(|entry| is_equal(entry, item))
    }

    /// Appends `item` unless a structurally equal entry exists.
    ///
    /// Returns the same ledger so calls can be chained.
    pub fn add_unique(&mut self, item: T) -> &mut Self {
        if self.is_unique(&item) {
            self.entries.push(item);
        }
        self
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    /// Consumes the ledger, returning entries in insertion order.
    #[must_use]
    pub fn into_inner(self) -> Vec<T> {
        self.entries
    }
}

impl Ledger<Detection> {
    /// Consumes the ledger, returning detections top-to-bottom, left-to-right.
    #[must_use]
    pub fn into_sorted(self) -> Vec<Detection> {
        let mut detections = self.entries;
        detections.sort_by(sort_detects);
        detections
    }
}

impl<'a, T> IntoIterator for &'a Ledger<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
