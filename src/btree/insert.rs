//! Insertion engine: single-pass descent with preemptive splits.
//!
//! Every node the descent enters already has room for one more key: a full
//! root is split under a new root first, and a full child is split before
//! the descent moves into it. No split ever propagates upward.
//!
//! Insertion is all-or-nothing. A read-only walk first counts the nodes the
//! descent will need (a new root plus one sibling per full node on the
//! path) and reserves them. The tree is only touched once every reservation
//! has succeeded.

use tracing::{debug, trace};

use crate::btree::node::Node;
use crate::btree::stats::TreeStats;
use crate::btree::tree::BTree;
use crate::common::{Error, Key, Result};

/// Nodes reserved ahead of a single insertion, in the order the descent
/// consumes them.
struct SparePool {
    nodes: Vec<Node>,

    /// Reservations allowed before `reserve` reports an allocation failure.
    #[cfg(test)]
    budget: Option<usize>,
}

impl SparePool {
    fn empty() -> Self {
        SparePool {
            nodes: Vec::new(),
            #[cfg(test)]
            budget: None,
        }
    }

    /// Reserve every node inserting `key` under `root` will need.
    fn reserve_for(root: &Node, key: Key) -> Result<Self> {
        Self::empty().plan(root, key)
    }

    fn plan(mut self, root: &Node, key: Key) -> Result<Self> {
        if root.is_full() {
            self.reserve(false)?;
            self.reserve(root.leaf)?;
        }

        // A split child routes the key to the same grandchild it would have
        // reached before the split, so the old shape predicts the path.
        let mut node = root;
        while !node.leaf {
            let child = &node.children[node.find_position(key)];
            if child.is_full() {
                self.reserve(child.leaf)?;
            }
            node = child;
        }

        self.nodes.reverse();
        Ok(self)
    }

    fn reserve(&mut self, leaf: bool) -> Result<()> {
        let nodes = self.nodes.len() + 1;
        self.check_budget(nodes)?;
        self.nodes
            .try_reserve(1)
            .map_err(|e| Error::allocation(nodes, e))?;
        let node = Node::try_new(leaf).map_err(|e| Error::allocation(nodes, e))?;
        self.nodes.push(node);
        Ok(())
    }

    #[cfg(test)]
    fn check_budget(&self, nodes: usize) -> Result<()> {
        match self.budget {
            Some(budget) if self.nodes.len() >= budget => {
                let mut overflow: Vec<u64> = Vec::new();
                match overflow.try_reserve(usize::MAX) {
                    Err(e) => Err(Error::allocation(nodes, e)),
                    Ok(()) => Ok(()),
                }
            }
            _ => Ok(()),
        }
    }

    #[cfg(not(test))]
    #[inline(always)]
    fn check_budget(&self, _nodes: usize) -> Result<()> {
        Ok(())
    }

    /// Hand out the next reserved node.
    ///
    /// `plan` walks the same path the descent takes, so the pool holds
    /// exactly one node per split. An empty pool means that walk and the
    /// descent disagree about the tree's shape.
    fn take(&mut self, leaf: bool) -> Result<Node> {
        let node = self.nodes.pop().ok_or_else(|| {
            Error::InvariantViolation("insertion ran out of reserved nodes".to_string())
        })?;
        debug_assert_eq!(node.leaf, leaf);
        Ok(node)
    }

    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl BTree {
    // ========================================================================
    // Public API: Insert
    // ========================================================================

    /// Insert one copy of `key`.
    ///
    /// Duplicates are not rejected: a repeated key lands before the first
    /// strictly greater key, after any equal ones in the same node.
    ///
    /// # Errors
    /// - `Error::AllocationFailure` if a node needed for a split cannot be
    ///   reserved. The tree is left exactly as it was.
    pub fn insert(&mut self, key: Key) -> Result<()> {
        let spares = SparePool::reserve_for(&self.root, key)?;
        self.insert_reserved(key, spares)
    }

    fn insert_reserved(&mut self, key: Key, mut spares: SparePool) -> Result<()> {
        if self.root.is_full() {
            self.grow_root(&mut spares)?;
        }
        insert_nonfull(&mut self.root, key, &mut spares, &mut self.stats)?;
        debug_assert!(spares.is_empty(), "every reserved node is linked");

        self.len += 1;
        Ok(())
    }

    /// Put a new empty root above the full root and split the old root into
    /// it. The tree gains one level.
    fn grow_root(&mut self, spares: &mut SparePool) -> Result<()> {
        let new_root = spares.take(false)?;
        let sibling = spares.take(self.root.leaf)?;
        let old_root = std::mem::replace(&mut self.root, new_root);

        self.root.children.push(old_root);
        let median = self.root.split_child(0, sibling);

        self.stats.splits += 1;
        self.stats.root_splits += 1;
        debug!(median, "root split, tree grew one level");
        Ok(())
    }
}

/// Descend from a non-full `node` to the leaf that receives `key`,
/// splitting any full child before entering it.
fn insert_nonfull(
    root: &mut Node,
    key: Key,
    spares: &mut SparePool,
    stats: &mut TreeStats,
) -> Result<()> {
    let mut node = root;
    loop {
        let mut index = node.find_position(key);

        if node.leaf {
            node.keys.insert(index, key);
            trace!(key, index, "inserted into leaf");
            return Ok(());
        }

        if node.children[index].is_full() {
            let sibling = spares.take(node.children[index].leaf)?;
            let median = node.split_child(index, sibling);
            stats.splits += 1;
            debug!(median, index, "split full child");

            if key >= median {
                index += 1;
            }
        }

        trace!(key, index, "descending");
        node = &mut node.children[index];
    }
}
