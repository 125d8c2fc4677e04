//! B-tree node: the fixed-capacity storage unit.
//!
//! Every node is created with room for [`MAX_KEYS`] keys and, when internal,
//! [`MAX_CHILDREN`] children. Splits, merges and borrows only ever move
//! elements between already-reserved buffers, so restructuring never
//! allocates once a node exists.

use std::collections::TryReserveError;

use crate::common::config::{MAX_CHILDREN, MAX_KEYS, MIN_DEGREE};
use crate::common::Key;

/// A single B-tree node.
///
/// # Layout
/// ```text
///            keys:   [ k0 | k1 | k2 ]
///                   /    |    |     \
/// children:      [c0]  [c1]  [c2]  [c3]
/// ```
/// Keys under `c[i]` are `<= k[i]` and keys under `c[i+1]` are `>= k[i]`.
/// Leaves have no children. Children are owned inline, so a node is
/// released exactly when its parent drops or hands it off.
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) keys: Vec<Key>,
    pub(crate) children: Vec<Node>,
    pub(crate) leaf: bool,
}

impl Node {
    /// Create an empty node with its full capacity reserved up front.
    pub(crate) fn try_new(leaf: bool) -> std::result::Result<Self, TryReserveError> {
        let mut keys = Vec::new();
        keys.try_reserve_exact(MAX_KEYS)?;

        let mut children = Vec::new();
        if !leaf {
            children.try_reserve_exact(MAX_CHILDREN)?;
        }

        Ok(Self {
            keys,
            children,
            leaf,
        })
    }

    /// Number of keys currently held.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.keys.len()
    }

    /// A full node (`2t` keys) must be split before a key can enter it.
    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.keys.len() == MAX_KEYS
    }

    /// True when the node holds at least `t` keys and can give one away
    /// without dropping below the minimum.
    #[inline]
    pub(crate) fn can_lend(&self) -> bool {
        self.keys.len() >= MIN_DEGREE
    }

    /// Index of the first key strictly greater than `key`.
    ///
    /// This is both the insertion slot in a leaf and the child to descend
    /// into from an internal node.
    pub(crate) fn find_position(&self, key: Key) -> usize {
        self.keys
            .iter()
            .position(|&k| key < k)
            .unwrap_or(self.keys.len())
    }

    /// Index of the first key greater than or equal to `key`.
    pub(crate) fn lower_bound(&self, key: Key) -> usize {
        self.keys
            .iter()
            .position(|&k| k >= key)
            .unwrap_or(self.keys.len())
    }

    /// Largest key in this subtree (last key of its rightmost leaf).
    pub(crate) fn max_key(&self) -> Option<Key> {
        let mut node = self;
        while !node.leaf {
            node = node.children.last()?;
        }
        node.keys.last().copied()
    }

    /// Smallest key in this subtree (first key of its leftmost leaf).
    pub(crate) fn min_key(&self) -> Option<Key> {
        let mut node = self;
        while !node.leaf {
            node = node.children.first()?;
        }
        node.keys.first().copied()
    }

    // ========================================================================
    // Insertion support
    // ========================================================================

    /// Split the full child at `index`, using `sibling` as the new right half.
    ///
    /// The child keeps keys `0..t` and children `0..=t`; the median `k[t]`
    /// moves up into this node; keys `t+1..2t` and children `t+1..=2t` move
    /// into `sibling`, which is linked immediately after the child.
    ///
    /// This node must not be full and `sibling` must be empty. Returns the
    /// promoted median.
    pub(crate) fn split_child(&mut self, index: usize, mut sibling: Node) -> Key {
        debug_assert!(!self.is_full(), "parent of a split must have room");
        debug_assert!(sibling.keys.is_empty() && sibling.children.is_empty());

        let full = &mut self.children[index];
        debug_assert!(full.is_full(), "only full nodes are split");
        debug_assert_eq!(sibling.leaf, full.leaf);

        let median = full.keys[MIN_DEGREE];
        sibling.keys.extend(full.keys.drain(MIN_DEGREE + 1..));
        full.keys.truncate(MIN_DEGREE);
        if !full.leaf {
            sibling.children.extend(full.children.drain(MIN_DEGREE + 1..));
        }

        self.keys.insert(index, median);
        self.children.insert(index + 1, sibling);
        median
    }

    // ========================================================================
    // Deletion support
    // ========================================================================

    /// Replace `keys[index]` with its in-order predecessor if the left child
    /// can spare a key. Returns the predecessor that now has to be removed
    /// from `children[index]`.
    pub(crate) fn replace_with_predecessor(&mut self, index: usize) -> Option<Key> {
        let child = &self.children[index];
        if !child.can_lend() {
            return None;
        }
        let predecessor = child.max_key()?;
        self.keys[index] = predecessor;
        Some(predecessor)
    }

    /// Replace `keys[index]` with its in-order successor if the right child
    /// can spare a key. Returns the successor that now has to be removed
    /// from `children[index + 1]`.
    pub(crate) fn replace_with_successor(&mut self, index: usize) -> Option<Key> {
        let child = &self.children[index + 1];
        if !child.can_lend() {
            return None;
        }
        let successor = child.min_key()?;
        self.keys[index] = successor;
        Some(successor)
    }

    /// Rotate one key from the left sibling of `children[index]` through
    /// the parent separator. Returns false when there is no left sibling or
    /// it has no key to spare.
    pub(crate) fn borrow_from_left(&mut self, index: usize) -> bool {
        if index == 0 || !self.children[index - 1].can_lend() {
            return false;
        }

        let (before, after) = self.children.split_at_mut(index);
        let left = &mut before[index - 1];
        let child = &mut after[0];

        let Some(lent_key) = left.keys.pop() else {
            return false;
        };
        let lent_child = left.children.pop();

        let separator = std::mem::replace(&mut self.keys[index - 1], lent_key);
        child.keys.insert(0, separator);
        if let Some(grandchild) = lent_child {
            child.children.insert(0, grandchild);
        }
        true
    }

    /// Rotate one key from the right sibling of `children[index]` through
    /// the parent separator. Returns false when there is no right sibling or
    /// it has no key to spare.
    pub(crate) fn borrow_from_right(&mut self, index: usize) -> bool {
        if index == self.keys.len() || !self.children[index + 1].can_lend() {
            return false;
        }

        let (before, after) = self.children.split_at_mut(index + 1);
        let child = &mut before[index];
        let right = &mut after[0];

        let lent_key = right.keys.remove(0);
        let lent_child = if right.leaf {
            None
        } else {
            Some(right.children.remove(0))
        };

        let separator = std::mem::replace(&mut self.keys[index], lent_key);
        child.keys.push(separator);
        if let Some(grandchild) = lent_child {
            child.children.push(grandchild);
        }
        true
    }

    /// Merge `children[index]`, the separator `keys[index]` and
    /// `children[index + 1]` into `children[index]`.
    ///
    /// Both children must hold exactly `t - 1` keys, so the result holds
    /// `2t - 1` and fits the buffers the left child already owns. The right
    /// child is released here.
    pub(crate) fn merge_children(&mut self, index: usize) {
        let separator = self.keys.remove(index);
        let Node {
            keys: right_keys,
            children: right_children,
            ..
        } = self.children.remove(index + 1);

        let left = &mut self.children[index];
        debug_assert!(left.len() + right_keys.len() < MAX_KEYS);

        left.keys.push(separator);
        left.keys.extend(right_keys);
        left.children.extend(right_children);
    }

    // ========================================================================
    // Teardown
    // ========================================================================

    /// Release this subtree post-order: every child before its parent.
    ///
    /// Returns the number of nodes released.
    pub(crate) fn release(mut self) -> usize {
        let released: usize = self.children.drain(..).map(Node::release).sum();
        drop(self);
        released + 1
    }
}
