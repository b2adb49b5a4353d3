//! The clue notebook
//!
//! An unbalanced binary search tree of collected clue texts, kept in
//! lexicographic order with duplicates suppressed.

use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq)]
struct ClueEntry {
    text: String,
    left: Option<Box<ClueEntry>>,
    right: Option<Box<ClueEntry>>,
}

impl ClueEntry {
    fn new(text: String) -> Box<Self> {
        Box::new(Self {
            text,
            left: None,
            right: None,
        })
    }
}

/// Ordered set of the clues collected during a session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClueLedger {
    root: Option<Box<ClueEntry>>,
    len: usize,
}

impl ClueLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a clue. Returns `false` if the same text was already noted,
    /// in which case the notebook is left untouched.
    pub fn insert(&mut self, text: impl Into<String>) -> bool {
        let mut inserted = false;
        self.root = insert_entry(self.root.take(), text.into(), &mut inserted);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    pub fn contains(&self, text: &str) -> bool {
        let mut node = self.root.as_deref();
        while let Some(entry) = node {
            node = match text.cmp(entry.text.as_str()) {
                Ordering::Less => entry.left.as_deref(),
                Ordering::Greater => entry.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Clues in ascending lexicographic order.
    ///
    /// Lazy and non-destructive; call it as often as needed.
    pub fn in_order(&self) -> InOrder<'_> {
        let mut iter = InOrder { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Discard the notebook, releasing each entry after its subtrees.
    ///
    /// Returns the clue texts in release order.
    pub fn teardown(self) -> Vec<String> {
        let mut released = Vec::with_capacity(self.len);
        if let Some(root) = self.root {
            release_entry(root, &mut released);
        }
        released
    }
}

/// Insert `text` below `node` and hand back the subtree for the caller to
/// rebind. New entries always land in an empty leaf slot.
fn insert_entry(
    node: Option<Box<ClueEntry>>,
    text: String,
    inserted: &mut bool,
) -> Option<Box<ClueEntry>> {
    match node {
        None => {
            *inserted = true;
            Some(ClueEntry::new(text))
        }
        Some(mut entry) => {
            match text.cmp(&entry.text) {
                Ordering::Less => entry.left = insert_entry(entry.left.take(), text, inserted),
                Ordering::Greater => entry.right = insert_entry(entry.right.take(), text, inserted),
                Ordering::Equal => {}
            }
            Some(entry)
        }
    }
}

fn release_entry(mut entry: Box<ClueEntry>, released: &mut Vec<String>) {
    if let Some(left) = entry.left.take() {
        release_entry(left, released);
    }
    if let Some(right) = entry.right.take() {
        release_entry(right, released);
    }
    released.push(std::mem::take(&mut entry.text));
}

/// In-order walk over a [`ClueLedger`]
pub struct InOrder<'a> {
    stack: Vec<&'a ClueEntry>,
}

impl<'a> InOrder<'a> {
    fn push_left_spine(&mut self, mut node: Option<&'a ClueEntry>) {
        while let Some(entry) = node {
            self.stack.push(entry);
            node = entry.left.as_deref();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.stack.pop()?;
        self.push_left_spine(entry.right.as_deref());
        Some(entry.text.as_str())
    }
}

impl<'a> IntoIterator for &'a ClueLedger {
    type Item = &'a str;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}
