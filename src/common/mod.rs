//! Common types and utilities shared across memtree.
//!
//! - Configuration constants (degree and fill thresholds)
//! - Error types

pub mod config;
pub mod error;

pub use error::{Error, Result};

/// A key stored in the tree.
///
/// Keys are non-negative 32-bit integers compared by their natural order.
pub type Key = u32;
