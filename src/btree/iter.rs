//! In-order key iteration.

use std::iter::FusedIterator;

use crate::btree::node::Node;
use crate::common::Key;

/// Ascending iterator over every key in a [`BTree`](crate::BTree).
///
/// Keeps an explicit stack of `(node, next key index)` frames, one per
/// level, so memory use is bounded by the tree height.
pub struct Iter<'a> {
    stack: Vec<(&'a Node, usize)>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(root: &'a Node, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_leftmost(root);
        iter
    }

    /// Push `node` and the leftmost path below it.
    fn push_leftmost(&mut self, mut node: &'a Node) {
        loop {
            self.stack.push((node, 0));
            match node.children.first() {
                Some(child) => node = child,
                None => return,
            }
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = Key;

    fn next(&mut self) -> Option<Key> {
        while let Some((node, index)) = self.stack.pop() {
            if index < node.len() {
                let key = node.keys[index];
                self.stack.push((node, index + 1));
                if !node.leaf {
                    self.push_leftmost(&node.children[index + 1]);
                }
                self.remaining = self.remaining.saturating_sub(1);
                return Some(key);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
