//! Old network topology token strategy (ONTS).
//!
//! OldNetworkTopologyStrategy walks a single ring and expects consecutive
//! tokens to alternate between datacenters. This strategy therefore lays all
//! nodes of all datacenters out on one ring, interleaved round-robin and
//! weighted by datacenter size, then splits the ring evenly across that
//! combined layout.
//!
//! # Algorithm
//!
//! 1. Order datacenters by node count, largest first
//! 2. Node map: each datacenter's index repeated once per node, in that order
//! 3. Layout map: read the node map column-major over a grid whose width is
//!    the largest node count
//! 4. Position `p` of the layout gets token `ring_range * p / len` and is
//!    handed to the datacenter recorded there
//!
//! # Tie-breaking
//!
//! Datacenters with equal node counts keep their input order (stable sort).
//!
//! # Performance
//!
//! - **Time**: O(total nodes + dcs * log dcs)
//! - **Space**: O(total nodes) for the node and layout maps

use corelib::{Result, TokenAssignment, TokenRing};
use num_bigint::BigInt;
use tracing::{debug, trace};

use crate::strategy::TokenStrategy;

/// Tokens interleaved across datacenters on one shared ring.
///
/// # Example
///
/// ```rust
/// use corelib::TokenRing;
/// use strategies::{OldNetworkTopologyStrategy, TokenStrategy};
///
/// let ring = TokenRing::builder()
///     .datacenters([2u32, 1, 1])
///     .ring_range(100u32)
///     .build()
///     .unwrap();
/// let tokens = OldNetworkTopologyStrategy::new().tokens(&ring).unwrap();
/// assert_eq!(tokens[0].len(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct OldNetworkTopologyStrategy;

impl OldNetworkTopologyStrategy {
    /// Create a new old network topology strategy.
    pub fn new() -> Self {
        Self
    }
}

/// `(dc index, node count)` pairs, largest datacenter first.
fn dcs_by_count(node_counts: &[usize]) -> Vec<(usize, usize)> {
    let mut dcs: Vec<(usize, usize)> = node_counts.iter().copied().enumerate().collect();
    dcs.sort_by(|a, b| b.1.cmp(&a.1));
    dcs
}

/// Datacenter index of every node, datacenters in `dcs` order.
fn node_map(dcs: &[(usize, usize)]) -> Vec<usize> {
    dcs.iter()
        .flat_map(|&(dc, nodes)| std::iter::repeat(dc).take(nodes))
        .collect()
}

/// Column-major read of `node_map` laid out in rows of `width`.
fn layout_map(node_map: &[usize], width: usize) -> Vec<usize> {
    (0..width)
        .flat_map(|column| node_map.iter().skip(column).step_by(width).copied())
        .collect()
}

impl TokenStrategy for OldNetworkTopologyStrategy {
    fn tokens(&self, ring: &TokenRing) -> Result<TokenAssignment> {
        let node_counts = ring.node_counts()?;
        let mut dc_list: TokenAssignment = vec![Vec::new(); node_counts.len()];

        let dcs = dcs_by_count(&node_counts);
        let node_map = node_map(&dcs);

        // All datacenters empty (or none at all): nothing to divide
        let Some(&(_, widest)) = dcs.first().filter(|_| !node_map.is_empty()) else {
            return Ok(dc_list);
        };

        let layout = layout_map(&node_map, widest);
        let ring_range = BigInt::from(ring.ring_range().clone());
        let layout_len = BigInt::from(layout.len());

        debug!(nodes = layout.len(), width = widest, "interleaved layout built");

        for (position, &dc) in layout.iter().enumerate() {
            let token = &ring_range * BigInt::from(position) / &layout_len;
            trace!(position, dc = dc + 1, token = %token, "layout token");
            dc_list[dc].push(token);
        }

        Ok(dc_list)
    }

    fn name(&self) -> &'static str {
        "OldNetworkTopologyStrategy"
    }
}
