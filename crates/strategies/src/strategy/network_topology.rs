//! Network topology token strategy (NTS).
//!
//! Treats every datacenter as an independent ring, which is how
//! NetworkTopologyStrategy places replicas. Each datacenter's nodes are spaced
//! evenly around the full ring and the whole set is rotated by a multiple of
//! the ring's per-datacenter offset, so tokens of different datacenters do
//! not sit on top of each other.
//!
//! # Algorithm
//!
//! For datacenter `i` with `n` nodes:
//!
//! 1. `offset = i * ring.best_per_dc_offset()` (shared by all its nodes)
//! 2. `arc = ring_range / n`
//! 3. node `x` gets `(x * arc + offset) mod ring_range`, using floor modulo so
//!    the negative offset wraps to the top of the ring
//!
//! Tokens are emitted in node order, not sorted by value.
//!
//! # Performance
//!
//! - **Time**: O(total nodes) big-integer multiplications
//! - **Space**: O(total nodes)

use corelib::{Result, Token, TokenAssignment, TokenRing};
use num_bigint::BigInt;
use num_integer::Integer;
use tracing::trace;

use crate::strategy::TokenStrategy;

/// Evenly spaced, offset tokens per datacenter.
///
/// # Example
///
/// ```rust
/// use corelib::TokenRing;
/// use strategies::{NetworkTopologyStrategy, TokenStrategy};
///
/// let ring = TokenRing::builder().datacenter(3u32).build().unwrap();
/// let tokens = NetworkTopologyStrategy::new().tokens(&ring).unwrap();
/// assert_eq!(tokens[0][1].to_string(), "56713727820156410577229101238628035242");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NetworkTopologyStrategy;

impl NetworkTopologyStrategy {
    /// Create a new network topology strategy.
    pub fn new() -> Self {
        Self
    }
}

impl TokenStrategy for NetworkTopologyStrategy {
    fn tokens(&self, ring: &TokenRing) -> Result<TokenAssignment> {
        let node_counts = ring.node_counts()?;
        let ring_range = BigInt::from(ring.ring_range().clone());
        let dc_offset = ring.best_per_dc_offset();

        let mut dc_list = Vec::with_capacity(node_counts.len());

        for (dc, &nodes) in node_counts.iter().enumerate() {
            // No arc to compute for an empty datacenter
            if nodes == 0 {
                dc_list.push(Vec::new());
                continue;
            }

            let offset = &dc_offset * BigInt::from(dc);
            let arc_size = &ring_range / BigInt::from(nodes);

            let dc_tokens: Vec<Token> = (0..nodes)
                .map(|x| (BigInt::from(x) * &arc_size + &offset).mod_floor(&ring_range))
                .collect();

            trace!(dc = dc + 1, nodes, arc_size = %arc_size, offset = %offset, "datacenter tokens");
            dc_list.push(dc_tokens);
        }

        Ok(dc_list)
    }

    fn name(&self) -> &'static str {
        "NetworkTopologyStrategy"
    }
}
