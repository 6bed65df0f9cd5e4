//! Collected clues, kept in a binary search tree.
//!
//! Clues are ordered by byte-wise comparison of their text. The tree never
//! holds the same text twice, so an in-order walk yields every collected clue
//! exactly once, alphabetically.

use std::cmp::Ordering;

use tracing::instrument;

#[derive(Debug)]
struct ClueNode {
    text: String,
    left: Option<Box<ClueNode>>,
    right: Option<Box<ClueNode>>,
}

impl ClueNode {
    fn new(text: &str) -> Box<Self> {
        Box::new(Self {
            text: text.to_owned(),
            left: None,
            right: None,
        })
    }
}

/// A binary search tree of unique clue texts.
#[derive(Debug, Default)]
pub struct ClueIndex {
    root: Option<Box<ClueNode>>,
    len: usize,
}

impl ClueIndex {
    /// Creates an empty index.
    #[must_use]
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of clues collected.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether no clue has been collected yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Checks whether `text` has already been collected.
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match text.cmp(&node.text) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Inserts a copy of `text`.
    ///
    /// Returns `false`, leaving the tree untouched, if the clue is already
    /// present.
    #[instrument(level = "debug", skip(self))]
    pub fn insert(&mut self, text: &str) -> bool {
        let inserted = insert_into(&mut self.root, text);
        if inserted {
            self.len += 1;
            tracing::debug!(len = self.len, "clue indexed");
        }
        inserted
    }

    /// Calls `visit` with every clue in ascending order.
    pub fn in_order<F>(&self, mut visit: F)
    where
        F: FnMut(&str),
    {
        walk(self.root.as_deref(), &mut visit);
    }

    /// Iterates over the clues in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter { stack: Vec::new() };
        iter.descend(self.root.as_deref());
        iter
    }
}

fn insert_into(slot: &mut Option<Box<ClueNode>>, text: &str) -> bool {
    match slot {
        None => {
            *slot = Some(ClueNode::new(text));
            true
        }
        Some(node) => match text.cmp(&node.text) {
            Ordering::Less => insert_into(&mut node.left, text),
            Ordering::Greater => insert_into(&mut node.right, text),
            Ordering::Equal => false,
        },
    }
}

fn walk<F>(node: Option<&ClueNode>, visit: &mut F)
where
    F: FnMut(&str),
{
    if let Some(node) = node {
        walk(node.left.as_deref(), visit);
        visit(node.text.as_str());
        walk(node.right.as_deref(), visit);
    }
}

/// In-order iterator over a [`ClueIndex`].
#[derive(Debug)]
pub struct Iter<'a> {
    stack: Vec<&'a ClueNode>,
}

impl<'a> Iter<'a> {
    fn descend(&mut self, mut node: Option<&'a ClueNode>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.descend(node.right.as_deref());
        Some(node.text.as_str())
    }
}

impl<'a> IntoIterator for &'a ClueIndex {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> Extend<&'a str> for ClueIndex {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for text in iter {
            self.insert(text);
        }
    }
}
