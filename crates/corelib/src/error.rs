//! Error types for the core library.

use num_bigint::BigUint;
use thiserror::Error;

/// Result type alias for the core library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the core library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The ring range cannot be used as a modulus.
    #[error("invalid ring range: ring range must be greater than zero")]
    InvalidRingRange,

    /// A single datacenter has more nodes than can be held in memory.
    #[error("datacenter #{datacenter} has too many nodes to allocate tokens for: {count}")]
    NodeCountTooLarge { datacenter: usize, count: BigUint },

    /// The cluster as a whole has more nodes than can be held in memory.
    #[error("cluster has too many nodes to allocate tokens for")]
    TotalNodeCountTooLarge,

    /// Text could not be converted to an arbitrary-precision integer.
    #[error("failed to convert '{0}' to big integer")]
    Parse(String),
}
