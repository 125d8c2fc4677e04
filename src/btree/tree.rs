//! Tree handle, lifecycle and search.

use tracing::debug;

use crate::btree::iter::Iter;
use crate::btree::node::Node;
use crate::btree::stats::TreeStats;
use crate::btree::view::NodeView;
use crate::common::{Error, Key, Result};

/// An in-memory B-tree of minimum degree [`MIN_DEGREE`](crate::common::config::MIN_DEGREE).
///
/// The handle owns the root; every operation enters through it. The root
/// is replaced when the tree grows (an overflowing root is split under a
/// new root) or shrinks (an emptied root collapses into its only child).
///
/// Duplicate keys are allowed: every `insert` adds one copy and every
/// successful `delete` removes one copy.
///
/// # Usage
/// ```
/// use memtree::BTree;
///
/// let mut tree = BTree::new().unwrap();
/// tree.insert(42).unwrap();
/// assert!(tree.search(42));
///
/// assert!(tree.delete(42));
/// assert!(!tree.search(42));
/// ```
pub struct BTree {
    /// Current root (a leaf until the first split).
    pub(crate) root: Node,

    /// Number of keys stored, duplicates counted.
    pub(crate) len: usize,

    /// Restructuring counters.
    pub(crate) stats: TreeStats,
}

impl BTree {
    /// Create an empty tree: a single leaf root with no keys.
    ///
    /// # Errors
    /// - `Error::AllocationFailure` if the root cannot be reserved
    pub fn new() -> Result<Self> {
        let root = Node::try_new(true).map_err(|e| Error::allocation(1, e))?;
        debug!("created empty tree");

        Ok(Self {
            root,
            len: 0,
            stats: TreeStats::new(),
        })
    }

    // ========================================================================
    // Public API: Search
    // ========================================================================

    /// Return true if at least one copy of `key` is stored.
    ///
    /// Scans each node left to right; stops on an equal key, otherwise
    /// descends into the child left of the first greater key.
    pub fn search(&self, key: Key) -> bool {
        let mut node = &self.root;
        loop {
            let mut index = 0;
            while index < node.len() && key >= node.keys[index] {
                if key == node.keys[index] {
                    return true;
                }
                index += 1;
            }

            if node.leaf {
                return false;
            }
            node = &node.children[index];
        }
    }

    /// Alias of [`search`](Self::search).
    #[inline]
    pub fn contains(&self, key: Key) -> bool {
        self.search(key)
    }

    /// Smallest stored key.
    pub fn min(&self) -> Option<Key> {
        self.root.min_key()
    }

    /// Largest stored key.
    pub fn max(&self) -> Option<Key> {
        self.root.max_key()
    }

    // ========================================================================
    // Public API: Shape
    // ========================================================================

    /// Number of keys stored (duplicates counted).
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of levels; a lone root leaf has height 1.
    pub fn height(&self) -> usize {
        let mut height = 1;
        let mut node = &self.root;
        while let Some(child) = node.children.first() {
            node = child;
            height += 1;
        }
        height
    }

    /// Number of nodes currently allocated.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![&self.root];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children.iter());
        }
        count
    }

    /// Read-only view of the root, for printers and inspectors.
    pub fn root(&self) -> NodeView<'_> {
        NodeView::new(&self.root)
    }

    /// In-order iterator over every stored key.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.root, self.len)
    }

    /// Collect every stored key in ascending order.
    pub fn keys(&self) -> Vec<Key> {
        self.iter().collect()
    }

    /// Snapshot of the restructuring counters.
    pub fn stats(&self) -> TreeStats {
        self.stats
    }

    /// Reset the restructuring counters.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    // ========================================================================
    // Public API: Teardown
    // ========================================================================

    /// Release every node post-order (children before parents).
    ///
    /// Consumes the handle so it cannot be used afterwards. Returns how many
    /// nodes were released. Dropping the tree releases the same nodes.
    pub fn destroy(self) -> usize {
        let len = self.len;
        let released = self.root.release();
        debug!(released, keys = len, "destroyed tree");
        released
    }
}

impl<'a> IntoIterator for &'a BTree {
    type Item = Key;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_with(keys: impl IntoIterator<Item = Key>) -> BTree {
        let mut tree = BTree::new().unwrap();
        for key in keys {
            tree.insert(key).unwrap();
        }
        tree
    }

    #[test]
    fn test_new_tree_is_empty_leaf() {
        let tree = BTree::new().unwrap();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), 1);
        assert_eq!(tree.node_count(), 1);
        assert!(tree.root().is_leaf());
        assert!(tree.root().keys().is_empty());
        assert!(!tree.search(0));
        assert_eq!(tree.min(), None);
        assert_eq!(tree.max(), None);
    }

    #[test]
    fn test_search_across_levels() {
        let tree = tree_with((0..100).map(|k| k * 2));
        assert!(tree.height() > 1);

        for key in 0..100 {
            assert!(tree.search(key * 2), "missing {}", key * 2);
            assert!(!tree.search(key * 2 + 1), "phantom {}", key * 2 + 1);
        }
        assert!(tree.contains(198));
        assert!(!tree.contains(u32::MAX));
    }

    #[test]
    fn test_min_max() {
        let tree = tree_with([50, 10, 90, 30, 70, 20, 80, 60]);
        assert_eq!(tree.min(), Some(10));
        assert_eq!(tree.max(), Some(90));
    }

    #[test]
    fn test_node_count_and_destroy() {
        let tree = tree_with(0..50);
        let nodes = tree.node_count();
        assert!(nodes > 1);
        assert_eq!(tree.destroy(), nodes);
    }

    #[test]
    fn test_destroy_empty_tree() {
        let tree = BTree::new().unwrap();
        assert_eq!(tree.destroy(), 1);
    }

    #[test]
    fn test_stats_reset() {
        let mut tree = tree_with(0..20);
        assert!(tree.stats().splits > 0);

        tree.reset_stats();
        assert_eq!(tree.stats(), TreeStats::default());
    }

    #[test]
    fn test_into_iterator() {
        let tree = tree_with([3, 1, 2]);
        let collected: Vec<Key> = (&tree).into_iter().collect();
        assert_eq!(collected, vec![1, 2, 3]);
    }
}
