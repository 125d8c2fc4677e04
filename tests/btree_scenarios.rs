//! B-tree Scenario Tests
//!
//! Concrete insert/delete sequences with the expected shape after each
//! step, using the default minimum degree (t = 3, six keys per node).

use memtree::{BTree, Key, MAX_KEYS, MIN_DEGREE};

fn tree_with(keys: &[Key]) -> BTree {
    let mut tree = BTree::new().unwrap();
    for &key in keys {
        tree.insert(key).unwrap();
    }
    tree.validate().unwrap();
    tree
}

fn child_keys(tree: &BTree) -> Vec<Vec<Key>> {
    tree.root()
        .children()
        .map(|child| child.keys().to_vec())
        .collect()
}

// ============================================================================
// Insertion: root split
// ============================================================================

/// Six keys fill the root leaf; the seventh splits it around median 4.
#[test]
fn test_root_split_on_seventh_insert() {
    assert_eq!(MIN_DEGREE, 3);
    let mut tree = tree_with(&[1, 2, 3, 4, 5, 6]);

    assert_eq!(tree.height(), 1);
    assert!(tree.root().is_leaf());
    assert_eq!(tree.root().len(), MAX_KEYS);

    tree.insert(7).unwrap();

    assert_eq!(tree.height(), 2);
    assert_eq!(tree.root().keys(), &[4]);
    assert_eq!(child_keys(&tree), vec![vec![1, 2, 3], vec![5, 6, 7]]);
    tree.validate().unwrap();
}

// ============================================================================
// Deletion: key held by an internal node
// ============================================================================

/// Deleting the root separator takes the internal-key path.
#[test]
fn test_delete_root_separator() {
    let mut tree = tree_with(&[10, 20, 30, 40, 50, 60, 70]);
    assert_eq!(tree.height(), 2);
    assert_eq!(tree.root().keys(), &[40]);

    assert!(tree.delete(40));

    assert!(!tree.search(40));
    for key in [10, 20, 30, 50, 60, 70] {
        assert!(tree.search(key), "lost {}", key);
    }
    assert_eq!(tree.len(), 6);
    let stats = tree.stats();
    assert_eq!(
        stats.predecessor_swaps + stats.successor_swaps + stats.merges,
        1
    );
    tree.validate().unwrap();
}

// ============================================================================
// Deletion: underflowing leaf borrows before merging
// ============================================================================

/// A minimal leaf next to a sibling with a spare key borrows, and the
/// parent separator rotates.
#[test]
fn test_underflow_borrows_before_merge() {
    let mut tree = tree_with(&[10, 20, 30, 40, 50, 60, 70]);
    assert!(tree.delete(20));
    assert_eq!(child_keys(&tree), vec![vec![10, 30], vec![50, 60, 70]]);

    assert!(tree.delete(10));

    let stats = tree.stats();
    assert_eq!(stats.right_borrows, 1);
    assert_eq!(stats.merges, 0);
    assert_eq!(tree.root().keys(), &[50]);
    assert_eq!(child_keys(&tree), vec![vec![30, 40], vec![60, 70]]);
    tree.validate().unwrap();
}

/// The left sibling is tried first, even when the right one has more keys.
#[test]
fn test_underflow_prefers_left_sibling() {
    let keys: Vec<Key> = (1..=13).map(|i| i * 10).collect();
    let mut tree = tree_with(&keys);
    assert_eq!(tree.root().keys(), &[40, 80]);
    assert_eq!(
        child_keys(&tree),
        vec![vec![10, 20, 30], vec![50, 60, 70], vec![90, 100, 110, 120, 130]]
    );

    assert!(tree.delete(60));
    assert_eq!(tree.stats().borrows(), 0);

    assert!(tree.delete(50));

    let stats = tree.stats();
    assert_eq!(stats.left_borrows, 1);
    assert_eq!(stats.right_borrows, 0);
    assert_eq!(stats.merges, 0);
    assert_eq!(tree.root().keys(), &[30, 80]);
    assert_eq!(
        child_keys(&tree),
        vec![vec![10, 20], vec![40, 70], vec![90, 100, 110, 120, 130]]
    );
    tree.validate().unwrap();
}

// ============================================================================
// Deletion: emptying the tree
// ============================================================================

/// Deleting every key leaves a single empty leaf root.
#[test]
fn test_delete_until_empty() {
    let keys: Vec<Key> = (1..=100).map(|i| (i * 7919) % 1000).collect();
    let mut tree = tree_with(&keys);
    assert!(tree.height() > 2);

    for &key in &keys {
        assert!(tree.delete(key), "failed to delete {}", key);
        tree.validate().unwrap();
    }

    assert!(tree.is_empty());
    assert_eq!(tree.height(), 1);
    assert_eq!(tree.node_count(), 1);
    assert!(tree.root().is_leaf());
    assert!(tree.root().keys().is_empty());
    for &key in &keys {
        assert!(!tree.search(key));
    }
    assert!(tree.stats().root_collapses >= 1);
}

// ============================================================================
// Duplicates
// ============================================================================

/// Two inserts of one key need two deletes.
#[test]
fn test_duplicate_insert_then_delete() {
    let mut tree = BTree::new().unwrap();
    tree.insert(5).unwrap();
    tree.insert(5).unwrap();

    assert!(tree.delete(5));
    assert!(tree.search(5));

    assert!(tree.delete(5));
    assert!(!tree.search(5));

    assert!(!tree.delete(5));
}

/// Duplicates spread across many nodes are removed one for one.
#[test]
fn test_duplicates_across_levels() {
    let mut tree = BTree::new().unwrap();
    for i in 0..120 {
        tree.insert(i % 3).unwrap();
    }
    tree.validate().unwrap();
    assert!(tree.height() > 1);

    for remaining in (0..40).rev() {
        assert!(tree.delete(1));
        tree.validate().unwrap();
        assert_eq!(tree.search(1), remaining > 0);
    }
    assert!(!tree.delete(1));
    assert_eq!(tree.len(), 80);
}

// ============================================================================
// Lifecycle
// ============================================================================

/// Destroying releases every node once.
#[test]
fn test_destroy_releases_all_nodes() {
    let tree = tree_with(&(0..1_000).collect::<Vec<Key>>());
    let nodes = tree.node_count();
    assert_eq!(tree.destroy(), nodes);
}

/// Large keys at the edge of the console range and beyond are accepted.
#[test]
fn test_full_key_domain() {
    let mut tree = tree_with(&[0, u32::MAX, 2_147_483_646, 1]);
    assert_eq!(tree.min(), Some(0));
    assert_eq!(tree.max(), Some(u32::MAX));
    assert!(tree.delete(u32::MAX));
    assert_eq!(tree.max(), Some(2_147_483_646));
}
