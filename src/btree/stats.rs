//! Structural statistics tracking.

use std::fmt;

/// Counters for the restructuring work the tree has performed.
///
/// Each mutating operation bumps the counter for every split, borrow,
/// merge or root change it causes. Reads never touch these.
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
/// let stats = tree.stats();
/// assert_eq!(stats.root_splits, 1);
/// assert_eq!(stats.splits, 1);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TreeStats {
    /// Full nodes split during insertion (root splits included).
    pub splits: u64,

    /// Splits of the root, each of which grows the tree by one level.
    pub root_splits: u64,

    /// Sibling merges (consolidations) during deletion.
    pub merges: u64,

    /// Keys rotated in from a left sibling.
    pub left_borrows: u64,

    /// Keys rotated in from a right sibling.
    pub right_borrows: u64,

    /// Internal keys replaced by their in-order predecessor.
    pub predecessor_swaps: u64,

    /// Internal keys replaced by their in-order successor.
    pub successor_swaps: u64,

    /// Times an emptied root was replaced by its only child.
    pub root_collapses: u64,
}

impl TreeStats {
    /// Create a stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total borrows in either direction.
    pub fn borrows(&self) -> u64 {
        self.left_borrows + self.right_borrows
    }

    /// Total structural changes (splits, merges and borrows).
    pub fn restructures(&self) -> u64 {
        self.splits + self.merges + self.borrows()
    }

    /// Reset all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for TreeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ splits: {} (root: {}), merges: {}, borrows: {} (left: {}, right: {}), root_collapses: {} }}",
            self.splits,
            self.root_splits,
            self.merges,
            self.borrows(),
            self.left_borrows,
            self.right_borrows,
            self.root_collapses
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = TreeStats::new();
        assert_eq!(stats.splits, 0);
        assert_eq!(stats.restructures(), 0);
    }

    #[test]
    fn test_stats_totals() {
        let stats = TreeStats {
            splits: 3,
            merges: 2,
            left_borrows: 1,
            right_borrows: 4,
            ..TreeStats::default()
        };

        assert_eq!(stats.borrows(), 5);
        assert_eq!(stats.restructures(), 10);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = TreeStats {
            splits: 100,
            root_collapses: 2,
            ..TreeStats::default()
        };

        stats.reset();

        assert_eq!(stats, TreeStats::default());
    }

    #[test]
    fn test_stats_display() {
        let stats = TreeStats {
            splits: 8,
            root_splits: 2,
            merges: 3,
            left_borrows: 1,
            right_borrows: 1,
            ..TreeStats::default()
        };
        let display = format!("{}", stats);

        assert!(display.contains("splits: 8 (root: 2)"));
        assert!(display.contains("merges: 3"));
        assert!(display.contains("borrows: 2"));
    }
}
