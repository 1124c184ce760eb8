//! Ring configuration type and builder.

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};
use tracing::debug;

use crate::error::{Error, Result};
use crate::token::default_ring_range;

/// Configuration of a cluster's ring for calculating tokens.
///
/// Datacenter identity is positional: index `i` of [`dc_counts`](Self::dc_counts)
/// is datacenter `i`, and that order is preserved in every generated
/// assignment.
///
/// # Invariants
///
/// - `ring_range > 0`
/// - node counts are non-negative (enforced by `BigUint`)
///
/// A `TokenRing` is immutable once built, so it can be shared freely across
/// threads and generation is idempotent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRing {
    dc_counts: Vec<BigUint>,
    ring_range: BigUint,
}

impl TokenRing {
    /// Creates a ring from per-datacenter node counts and a ring range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRingRange`] if `ring_range` is zero.
    pub fn new(dc_counts: Vec<BigUint>, ring_range: BigUint) -> Result<Self> {
        if ring_range.is_zero() {
            return Err(Error::InvalidRingRange);
        }

        debug!(
            datacenters = dc_counts.len(),
            ring_range = %ring_range,
            "token ring configured"
        );

        Ok(Self {
            dc_counts,
            ring_range,
        })
    }

    /// Starts a [`RingBuilder`] with the default 2^127 ring range.
    pub fn builder() -> RingBuilder {
        RingBuilder::default()
    }

    /// Node counts, one per datacenter, in input order.
    pub fn dc_counts(&self) -> &[BigUint] {
        &self.dc_counts
    }

    /// Size of the token space.
    pub fn ring_range(&self) -> &BigUint {
        &self.ring_range
    }

    /// Number of datacenters.
    pub fn dc_count(&self) -> usize {
        self.dc_counts.len()
    }

    /// Node count of the largest datacenter, never less than one.
    pub fn most_nodes(&self) -> BigUint {
        self.dc_counts
            .iter()
            .filter(|count| **count > BigUint::one())
            .max()
            .cloned()
            .unwrap_or_else(BigUint::one)
    }

    /// Sum of all node counts.
    pub fn total_nodes(&self) -> BigUint {
        self.dc_counts.iter().sum()
    }

    /// Node counts narrowed to `usize`.
    ///
    /// Every generated token has to be held in memory, so a count (or a sum of
    /// counts) beyond `usize` can never produce an assignment.
    pub fn node_counts(&self) -> Result<Vec<usize>> {
        let mut total: usize = 0;
        let mut counts = Vec::with_capacity(self.dc_counts.len());

        for (datacenter, count) in self.dc_counts.iter().enumerate() {
            let nodes = count.to_usize().ok_or_else(|| Error::NodeCountTooLarge {
                datacenter: datacenter + 1,
                count: count.clone(),
            })?;
            total = total
                .checked_add(nodes)
                .ok_or(Error::TotalNodeCountTooLarge)?;
            counts.push(nodes);
        }

        Ok(counts)
    }
}

/// Builder for [`TokenRing`].
///
/// # Example
///
/// ```rust
/// use corelib::TokenRing;
///
/// let ring = TokenRing::builder()
///     .datacenter(3u32)
///     .datacenter(4u32)
///     .build()
///     .unwrap();
/// assert_eq!(ring.dc_count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RingBuilder {
    dc_counts: Vec<BigUint>,
    ring_range: Option<BigUint>,
}

impl RingBuilder {
    /// Appends a datacenter with `nodes` nodes.
    pub fn datacenter(mut self, nodes: impl Into<BigUint>) -> Self {
        self.dc_counts.push(nodes.into());
        self
    }

    /// Appends one datacenter per item, in iteration order.
    pub fn datacenters<I>(mut self, counts: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<BigUint>,
    {
        self.dc_counts.extend(counts.into_iter().map(Into::into));
        self
    }

    /// Overrides the ring range.
    pub fn ring_range(mut self, ring_range: impl Into<BigUint>) -> Self {
        self.ring_range = Some(ring_range.into());
        self
    }

    /// Validates and builds the ring.
    pub fn build(self) -> Result<TokenRing> {
        let ring_range = self.ring_range.unwrap_or_else(default_ring_range);
        TokenRing::new(self.dc_counts, ring_range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_ring_range_rejected() {
        let err = TokenRing::new(vec![BigUint::from(3u32)], BigUint::zero()).unwrap_err();
        assert_eq!(err, Error::InvalidRingRange);
        assert_eq!(
            err.to_string(),
            "invalid ring range: ring range must be greater than zero"
        );
    }

    #[test]
    fn test_builder_defaults_to_2_pow_127() {
        let ring = TokenRing::builder().datacenter(1u32).build().unwrap();
        assert_eq!(ring.ring_range(), &(BigUint::one() << 127u32));
    }

    #[test]
    fn test_most_nodes_floor_is_one() {
        let empty = TokenRing::builder().build().unwrap();
        assert_eq!(empty.most_nodes(), BigUint::one());

        let zeros = TokenRing::builder().datacenters([0u32, 0, 1]).build().unwrap();
        assert_eq!(zeros.most_nodes(), BigUint::one());

        let mixed = TokenRing::builder().datacenters([3u32, 7, 2]).build().unwrap();
        assert_eq!(mixed.most_nodes(), BigUint::from(7u32));
    }

    #[test]
    fn test_node_counts_preserve_order() {
        let ring = TokenRing::builder().datacenters([2u32, 0, 5]).build().unwrap();
        assert_eq!(ring.node_counts().unwrap(), vec![2, 0, 5]);
        assert_eq!(ring.total_nodes(), BigUint::from(7u32));
    }

    #[test]
    fn test_node_counts_too_large() {
        let huge = BigUint::one() << 200u32;
        let ring = TokenRing::builder()
            .datacenter(1u32)
            .datacenter(huge.clone())
            .build()
            .unwrap();
        assert_eq!(
            ring.node_counts(),
            Err(Error::NodeCountTooLarge {
                datacenter: 2,
                count: huge
            })
        );
    }

    #[test]
    fn test_node_counts_sum_overflow() {
        let ring = TokenRing::builder()
            .datacenter(usize::MAX)
            .datacenter(1u32)
            .build()
            .unwrap();
        assert_eq!(ring.node_counts(), Err(Error::TotalNodeCountTooLarge));
    }
}
