//! In-memory B-tree index.
//!
//! # Components
//! - [`BTree`] - The tree handle: lifecycle, search, insert, delete
//! - [`NodeView`] - Read-only per-node traversal for printers
//! - [`Iter`] - In-order key iterator
//! - [`TreeStats`] - Split/borrow/merge counters
//!
//! Insertion splits full nodes on the way down; deletion tops nodes up on
//! the way down. Both finish in a single root-to-leaf pass.

mod delete;
mod display;
mod insert;
mod iter;
mod node;
mod stats;
mod tree;
mod validate;
mod view;

pub use iter::Iter;
pub use stats::TreeStats;
pub use tree::BTree;
pub use view::NodeView;
