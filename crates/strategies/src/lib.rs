//! Token distribution strategies for multi-datacenter rings.
//!
//! This crate turns a [`corelib::TokenRing`] into per-datacenter token
//! assignments. Two strategies are provided, named after the replication
//! strategy the cluster will run:
//! - **NTS** ([`NetworkTopologyStrategy`]): every datacenter is its own evenly
//!   spaced ring, rotated by a per-datacenter offset
//! - **ONTS** ([`OldNetworkTopologyStrategy`]): all nodes interleaved into one
//!   global ring, largest datacenter first

pub mod strategy;

pub use strategy::{NetworkTopologyStrategy, OldNetworkTopologyStrategy, StrategyKind, TokenStrategy};
