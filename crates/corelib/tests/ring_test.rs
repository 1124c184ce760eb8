//! Tests for ring configuration and offset calculation.
//!
//! # Test Strategy
//!
//! 1. **Configuration**: Builder, validation, datacenter ordering
//! 2. **Offsets**: Divider bounds, known values for the default ring
//! 3. **Properties**: Offset sign and divider minimum over random clusters

use corelib::ring::{MIN_DC_OFFSET_DIVIDER, OFFSET_SPACER};
use corelib::token::{default_ring_range, parse_count, DEFAULT_RING_RANGE};
use corelib::{Error, TokenRing};
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;
use proptest::prelude::*;

// ============================================================================
// Configuration Tests
// ============================================================================

#[test]
fn test_ring_from_parsed_counts() {
    // Counts parsed from text keep their input order
    let counts = ["3", "2", "1"]
        .iter()
        .map(|c| parse_count(c))
        .collect::<corelib::Result<Vec<_>>>()
        .unwrap();
    let ring = TokenRing::new(counts, parse_count(DEFAULT_RING_RANGE).unwrap()).unwrap();

    assert_eq!(ring.dc_count(), 3);
    assert_eq!(ring.node_counts().unwrap(), vec![3, 2, 1]);
    assert_eq!(ring.ring_range(), &default_ring_range());
}

#[test]
fn test_ring_rejects_zero_range() {
    let result = TokenRing::builder().datacenter(1u32).ring_range(0u32).build();
    assert_eq!(result, Err(Error::InvalidRingRange));
}

#[test]
fn test_ring_is_immutable_across_calls() {
    // Offsets are a pure function of the configuration
    let ring = TokenRing::builder().datacenters([5u32, 3, 8]).build().unwrap();
    let first = ring.best_per_dc_offset();
    let second = ring.best_per_dc_offset();
    assert_eq!(first, second);
}

// ============================================================================
// Offset Tests
// ============================================================================

#[test]
fn test_offset_single_dc_default_ring() {
    // 1 dc * 1 node * 2 < 235, so the minimum divider applies
    let ring = TokenRing::builder().datacenter(1u32).build().unwrap();
    assert_eq!(ring.offset_divider(), BigUint::from(MIN_DC_OFFSET_DIVIDER));
    assert_eq!(
        ring.best_per_dc_offset(),
        "-724005036001996730773137462620783429".parse::<BigInt>().unwrap()
    );
}

#[test]
fn test_offset_large_cluster_uses_spacer() {
    // 3 dcs * 100 nodes * 2 = 600
    let ring = TokenRing::builder()
        .datacenters([100u32, 50, 10])
        .ring_range(6000u32)
        .build()
        .unwrap();
    assert_eq!(
        ring.offset_divider(),
        BigUint::from(3u32 * 100 * OFFSET_SPACER)
    );
    assert_eq!(ring.best_per_dc_offset(), BigInt::from(-10));
}

#[test]
fn test_offset_ignores_zero_sized_datacenters_for_max() {
    // Zero-node datacenters still count towards the number of datacenters
    let ring = TokenRing::builder()
        .datacenters([0u32; 200])
        .ring_range(1000u32)
        .build()
        .unwrap();
    // 200 dcs * 1 * 2 = 400
    assert_eq!(ring.offset_divider(), BigUint::from(400u32));
    assert_eq!(ring.best_per_dc_offset(), BigInt::from(-3));
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_offset_bounds(
        counts in prop::collection::vec(0u32..500, 0..12),
        range in 1u64..u64::MAX,
    ) {
        let ring = TokenRing::builder()
            .datacenters(counts)
            .ring_range(range)
            .build()
            .unwrap();

        prop_assert!(ring.offset_divider() >= BigUint::from(MIN_DC_OFFSET_DIVIDER));
        prop_assert!(ring.best_per_dc_offset() <= BigInt::zero());
        prop_assert!(-ring.best_per_dc_offset() <= BigInt::from(range));
    }
}
