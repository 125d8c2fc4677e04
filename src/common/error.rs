//! Error types for memtree.

use std::collections::TryReserveError;

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in memtree.
///
/// A missing key is not an error: `delete` and `search` report it as `false`.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error from the console's input or output stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Node storage could not be reserved.
    ///
    /// Raised before any structural change, so the tree is left exactly as
    /// it was when the operation began.
    #[error("failed to allocate {nodes} node(s): {source}")]
    AllocationFailure {
        /// How many nodes the operation tried to reserve.
        nodes: usize,
        #[source]
        source: TryReserveError,
    },

    /// A structural invariant does not hold (reported by `validate`).
    #[error("B-tree invariant violated: {0}")]
    InvariantViolation(String),

    /// Input rejected by the console layer.
    #[error("invalid key: {0}")]
    InvalidKey(String),
}

impl Error {
    /// Wrap a failed reservation made on behalf of `nodes` nodes.
    pub(crate) fn allocation(nodes: usize, source: TryReserveError) -> Self {
        Error::AllocationFailure { nodes, source }
    }
}
