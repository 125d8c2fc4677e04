//! memtree - an in-memory B-tree of fixed minimum degree over 32-bit keys.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            memtree                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Console (console/, bin/)                    │   │
//! │  │      menu loop → key validation → tree printer           │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                 Tree Handle (btree/)                     │   │
//! │  │     create · search · insert · delete · destroy          │   │
//! │  │   ┌───────────────────┐     ┌───────────────────────┐   │   │
//! │  │   │ Insertion engine  │     │   Deletion engine     │   │   │
//! │  │   │ preemptive splits │     │ borrow-left / right,  │   │   │
//! │  │   │                   │     │ merge, root collapse  │   │   │
//! │  │   └───────────────────┘     └───────────────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                    Nodes (btree/node)                    │   │
//! │  │   up to 2t keys, 2t+1 owned children, reserved upfront   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (Key, Error, config)
//! - [`btree`] - The tree, its engines and read-only views
//! - [`console`] - Line-oriented command loop
//!
//! # Quick Start
//! ```
//! use memtree::BTree;
//!
//! let mut tree = BTree::new().unwrap();
//! for key in [10, 20, 30, 40, 50, 60, 70] {
//!     tree.insert(key).unwrap();
//! }
//!
//! assert_eq!(tree.height(), 2);
//! assert!(tree.delete(40));
//! assert!(!tree.search(40));
//! assert_eq!(tree.keys(), vec![10, 20, 30, 50, 60, 70]);
//! ```

pub mod btree;
pub mod common;
pub mod console;

// Re-export commonly used items at crate root for convenience
pub use common::config::{MAX_KEYS, MIN_DEGREE, MIN_KEYS};
pub use common::{Error, Key, Result};

pub use btree::{BTree, Iter, NodeView, TreeStats};
