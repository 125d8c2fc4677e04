//! Deletion engine: single-pass descent with a guaranteed minimum.
//!
//! Before the descent enters any non-root node, that node is topped up to
//! at least `t` keys (one above the minimum) by borrowing from a sibling or
//! merging with one. Removing a key, or handing one up to replace a
//! separator, can then never leave a node below `t - 1`.
//!
//! All restructuring moves keys between buffers each node reserved at
//! creation, so deletion never allocates and cannot fail.

use tracing::{debug, trace};

use crate::btree::node::Node;
use crate::btree::stats::TreeStats;
use crate::btree::tree::BTree;
use crate::common::Key;

impl BTree {
    // ========================================================================
    // Public API: Delete
    // ========================================================================

    /// Remove one copy of `key`. Returns false if it was not stored.
    ///
    /// A missing key is detected by a read-only search first, so a failed
    /// delete never borrows, merges or collapses anything.
    pub fn delete(&mut self, key: Key) -> bool {
        if !self.search(key) {
            trace!(key, "delete of absent key");
            return false;
        }

        let found = delete_from(&mut self.root, key, &mut self.stats);
        debug_assert!(found, "search and delete descend the same path");

        if self.root.keys.is_empty() && !self.root.leaf {
            self.collapse_root();
        }

        if found {
            self.len -= 1;
        }
        found
    }

    /// Replace an emptied internal root by its only child.
    fn collapse_root(&mut self) {
        debug_assert_eq!(self.root.children.len(), 1);
        if let Some(child) = self.root.children.pop() {
            let old_root = std::mem::replace(&mut self.root, child);
            drop(old_root);

            self.stats.root_collapses += 1;
            debug!("root collapsed, tree shrank one level");
        }
    }
}

/// Remove one copy of `key` from the subtree rooted at `root`.
fn delete_from(root: &mut Node, mut key: Key, stats: &mut TreeStats) -> bool {
    let mut node = root;
    loop {
        let index = node.lower_bound(key);
        let present = node.keys.get(index) == Some(&key);

        if node.leaf {
            if present {
                node.keys.remove(index);
                trace!(key, index, "removed from leaf");
            }
            return present;
        }

        let next = if present {
            take_internal_key(node, index, &mut key, stats)
        } else {
            ensure_child_can_lend(node, index, stats)
        };

        trace!(key, next, "descending");
        node = &mut node.children[next];
    }
}

/// `keys[index]` equals the key being removed. Replace it with a neighbour
/// from whichever child can spare one, or merge the two children around it.
///
/// Updates `key` to the value that now has to be removed below and returns
/// the child to descend into.
fn take_internal_key(node: &mut Node, index: usize, key: &mut Key, stats: &mut TreeStats) -> usize {
    if let Some(predecessor) = node.replace_with_predecessor(index) {
        stats.predecessor_swaps += 1;
        trace!(predecessor, "replaced separator with predecessor");
        *key = predecessor;
        return index;
    }

    if let Some(successor) = node.replace_with_successor(index) {
        stats.successor_swaps += 1;
        trace!(successor, "replaced separator with successor");
        *key = successor;
        return index + 1;
    }

    node.merge_children(index);
    stats.merges += 1;
    debug!(index, "merged children around separator");
    index
}

/// Make sure `children[index]` holds at least `t` keys before the descent
/// enters it: borrow from the left sibling, else from the right sibling,
/// else merge with a sibling.
///
/// Returns the child's index afterwards (one lower if it was merged into
/// its left sibling).
fn ensure_child_can_lend(node: &mut Node, index: usize, stats: &mut TreeStats) -> usize {
    if node.children[index].can_lend() {
        return index;
    }

    if node.borrow_from_left(index) {
        stats.left_borrows += 1;
        debug!(index, "borrowed from left sibling");
        return index;
    }

    if node.borrow_from_right(index) {
        stats.right_borrows += 1;
        debug!(index, "borrowed from right sibling");
        return index;
    }

    stats.merges += 1;
    if index == node.len() {
        node.merge_children(index - 1);
        debug!(index = index - 1, "merged with left sibling");
        index - 1
    } else {
        node.merge_children(index);
        debug!(index, "merged with right sibling");
        index
    }
}
