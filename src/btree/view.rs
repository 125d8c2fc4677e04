//! Read-only traversal for printers and inspectors.

use std::fmt;

use crate::btree::node::Node;
use crate::common::Key;

/// A borrowed, read-only view of one node.
///
/// Exposes exactly what an external printer needs: the leaf flag, the
/// ordered keys and the ordered children, recursively.
///
/// # Example
/// ```
/// use memtree::BTree;
///
/// let mut tree = BTree::new().unwrap();
/// for key in 1..=7 {
///     tree.insert(key).unwrap();
/// }
///
/// let root = tree.root();
/// assert!(!root.is_leaf());
/// assert_eq!(root.keys(), &[4]);
/// assert_eq!(root.children().count(), 2);
/// ```
#[derive(Clone, Copy)]
pub struct NodeView<'a> {
    node: &'a Node,
}

impl<'a> NodeView<'a> {
    pub(crate) fn new(node: &'a Node) -> Self {
        Self { node }
    }

    /// True for leaves (nodes without children).
    pub fn is_leaf(&self) -> bool {
        self.node.leaf
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> &'a [Key] {
        &self.node.keys
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.node.len()
    }

    /// True when the node holds no keys (only possible for the root).
    pub fn is_empty(&self) -> bool {
        self.node.keys.is_empty()
    }

    /// Children in order; empty for leaves, `len() + 1` otherwise.
    pub fn children(&self) -> impl ExactSizeIterator<Item = NodeView<'a>> + 'a {
        self.node.children.iter().map(NodeView::new)
    }

    /// Child at `index`, if any.
    pub fn child(&self, index: usize) -> Option<NodeView<'a>> {
        self.node.children.get(index).map(NodeView::new)
    }
}

impl fmt::Debug for NodeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeView")
            .field("leaf", &self.is_leaf())
            .field("keys", &self.keys())
            .field("children", &self.node.children.len())
            .finish()
    }
}
