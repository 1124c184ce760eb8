//! Per-datacenter token offset.
//!
//! Each datacenter's token set is rotated by a multiple of one shared offset,
//! so that nodes of different datacenters do not land on adjacent positions.
//!
//! ```text
//! divider = max(dc_count * most_nodes * OFFSET_SPACER, MIN_DC_OFFSET_DIVIDER)
//! offset  = floor(-ring_range / divider)
//! ```
//!
//! The offset is always `<= 0`; strategies normalize the rotated tokens back
//! into `[0, ring_range)`.

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use tracing::debug;

use super::config::TokenRing;

/// Minimum divider for the offset. Keeps the offset from becoming large
/// enough to collide with neighbouring tokens on small clusters.
pub const MIN_DC_OFFSET_DIVIDER: u32 = 235;

/// Spacing multiplier applied to `dc_count * most_nodes`.
pub const OFFSET_SPACER: u32 = 2;

impl TokenRing {
    /// The divider used by [`best_per_dc_offset`](Self::best_per_dc_offset).
    ///
    /// Always at least [`MIN_DC_OFFSET_DIVIDER`], so it is never zero.
    pub fn offset_divider(&self) -> BigUint {
        let lowest_division = BigUint::from(self.dc_count()) * self.most_nodes() * OFFSET_SPACER;
        lowest_division.max(BigUint::from(MIN_DC_OFFSET_DIVIDER))
    }

    /// The per-datacenter offset: `floor(-ring_range / divider)`.
    ///
    /// Floor division matches Euclidean division for the positive divider, so
    /// a remainder rounds the offset away from zero. For a 2^127 ring and a
    /// divider of 235 this yields `-724005036001996730773137462620783429`.
    pub fn best_per_dc_offset(&self) -> BigInt {
        let divider = BigInt::from(self.offset_divider());
        let offset = (-BigInt::from(self.ring_range().clone())).div_floor(&divider);

        debug!(divider = %divider, offset = %offset, "computed per-datacenter offset");

        offset
    }
}
