//! Structural invariant checker.

use crate::btree::node::Node;
use crate::btree::tree::BTree;
use crate::common::config::{MAX_KEYS, MIN_KEYS};
use crate::common::{Error, Key, Result};

/// Inclusive key range a subtree must stay within.
#[derive(Clone, Copy)]
struct Bounds {
    low: Option<Key>,
    high: Option<Key>,
}

impl Bounds {
    const UNBOUNDED: Bounds = Bounds {
        low: None,
        high: None,
    };

    fn contains(&self, key: Key) -> bool {
        self.low.map_or(true, |low| key >= low) && self.high.map_or(true, |high| key <= high)
    }
}

/// What a validated subtree reports to its parent.
struct Summary {
    depth: usize,
    keys: usize,
}

impl BTree {
    /// Check every structural invariant.
    ///
    /// - keys within a node are non-decreasing
    /// - non-root nodes hold `t-1..=2t` keys; the root at most `2t`
    /// - internal nodes have exactly one more child than keys, and an
    ///   internal root has at least one key
    /// - keys under `c[i]` are `<= k[i]` and keys under `c[i+1]` are
    ///   `>= k[i]` (duplicates may sit on either side of an equal separator)
    /// - all leaves are at the same depth
    /// - the stored length matches the number of keys
    ///
    /// # Errors
    /// - `Error::InvariantViolation` describing the first broken invariant
    pub fn validate(&self) -> Result<()> {
        if self.root.len() > MAX_KEYS {
            return Err(violation(format!(
                "root holds {} keys, max is {}",
                self.root.len(),
                MAX_KEYS
            )));
        }
        if !self.root.leaf && self.root.keys.is_empty() {
            return Err(violation("internal root has no keys".to_string()));
        }

        let summary = check_node(&self.root, Bounds::UNBOUNDED, true)?;
        if summary.keys != self.len {
            return Err(violation(format!(
                "tree reports {} keys but holds {}",
                self.len, summary.keys
            )));
        }
        Ok(())
    }
}

fn violation(message: String) -> Error {
    Error::InvariantViolation(message)
}

fn check_node(node: &Node, bounds: Bounds, is_root: bool) -> Result<Summary> {
    if !is_root && !(MIN_KEYS..=MAX_KEYS).contains(&node.len()) {
        return Err(violation(format!(
            "node {:?} holds {} keys, expected {}..={}",
            node.keys,
            node.len(),
            MIN_KEYS,
            MAX_KEYS
        )));
    }

    if node.keys.windows(2).any(|pair| pair[0] > pair[1]) {
        return Err(violation(format!("node keys {:?} out of order", node.keys)));
    }

    if let Some(&key) = node.keys.iter().find(|&&key| !bounds.contains(key)) {
        return Err(violation(format!(
            "key {} outside separator range {:?}..={:?}",
            key, bounds.low, bounds.high
        )));
    }

    if node.leaf {
        if !node.children.is_empty() {
            return Err(violation(format!("leaf {:?} has children", node.keys)));
        }
        return Ok(Summary {
            depth: 1,
            keys: node.len(),
        });
    }

    if node.children.len() != node.len() + 1 {
        return Err(violation(format!(
            "internal node {:?} has {} children",
            node.keys,
            node.children.len()
        )));
    }

    let mut depth = None;
    let mut keys = node.len();
    for (index, child) in node.children.iter().enumerate() {
        let child_bounds = Bounds {
            low: if index == 0 {
                bounds.low
            } else {
                Some(node.keys[index - 1])
            },
            high: node.keys.get(index).copied().or(bounds.high),
        };
        let summary = check_node(child, child_bounds, false)?;

        match depth {
            None => depth = Some(summary.depth),
            Some(d) if d != summary.depth => {
                return Err(violation(format!(
                    "leaves under {:?} at uneven depths",
                    node.keys
                )));
            }
            Some(_) => {}
        }
        keys += summary.keys;
    }

    Ok(Summary {
        depth: depth.unwrap_or(0) + 1,
        keys,
    })
}
