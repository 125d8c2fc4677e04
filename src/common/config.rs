//! Configuration constants for memtree.

/// Minimum degree `t` of the tree.
///
/// Every node except the root holds between [`MIN_KEYS`] and [`MAX_KEYS`]
/// keys once an operation completes. The root may hold anywhere from zero
/// to [`MAX_KEYS`].
///
/// # Fan-out
/// With `t = 3`:
/// - Max keys per node: 6
/// - Min keys per non-root node: 2
/// - Max children per internal node: 7
pub const MIN_DEGREE: usize = 3;

/// Number of keys in a full node (`2t`).
pub const MAX_KEYS: usize = 2 * MIN_DEGREE;

/// Fewest keys a non-root node may hold at rest (`t - 1`).
pub const MIN_KEYS: usize = MIN_DEGREE - 1;

/// Child slots reserved for an internal node (`2t + 1`).
pub const MAX_CHILDREN: usize = MAX_KEYS + 1;

/// Largest key the console accepts (`2^31 - 2`).
///
/// The core itself accepts any `u32`; this bound belongs to the input layer.
pub const MAX_CONSOLE_KEY: u32 = (i32::MAX - 1) as u32;
