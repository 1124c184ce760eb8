//! Token distribution strategy abstractions.
//!
//! A strategy decides which tokens each datacenter's nodes own. Different
//! strategies optimize for the replication strategy the cluster will use:
//!
//! - **NetworkTopologyStrategy**: each datacenter treated as an independent ring
//! - **OldNetworkTopologyStrategy**: datacenters interleaved on one shared ring

pub mod network_topology;
pub mod old_network_topology;

pub use network_topology::NetworkTopologyStrategy;
pub use old_network_topology::OldNetworkTopologyStrategy;

use corelib::{Result, TokenAssignment, TokenRing};

/// Trait for token distribution strategies.
///
/// Implementations are pure functions of the ring: the same ring always
/// yields the same assignment and no state is kept between calls.
///
/// # Thread Safety
///
/// Implementations must be thread-safe (Send + Sync) as they may be
/// shared across threads.
pub trait TokenStrategy: Send + Sync + 'static {
    /// Computes the tokens for every datacenter in the ring.
    ///
    /// # Returns
    /// One token list per datacenter, in the ring's datacenter order. A
    /// datacenter with zero nodes gets an empty list. Every token lies in
    /// `[0, ring_range)`.
    ///
    /// # Errors
    /// Fails if the ring's node counts cannot be materialized in memory.
    fn tokens(&self, ring: &TokenRing) -> Result<TokenAssignment>;

    /// Get the strategy name (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// Selects one of the built-in strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyKind {
    /// [`NetworkTopologyStrategy`].
    #[default]
    Nts,
    /// [`OldNetworkTopologyStrategy`].
    Onts,
}

impl StrategyKind {
    /// Returns the strategy implementation for this kind.
    pub fn strategy(self) -> Box<dyn TokenStrategy> {
        match self {
            StrategyKind::Nts => Box::new(NetworkTopologyStrategy::new()),
            StrategyKind::Onts => Box::new(OldNetworkTopologyStrategy::new()),
        }
    }

    /// Computes the ring's tokens with this kind of strategy.
    pub fn tokens(self, ring: &TokenRing) -> Result<TokenAssignment> {
        let strategy = self.strategy();
        tracing::debug!(strategy = strategy.name(), "generating tokens");
        strategy.tokens(ring)
    }
}
