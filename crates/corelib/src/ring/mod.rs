//! Token ring configuration.
//!
//! The ring holds the per-datacenter node counts and the ring range that the
//! distribution strategies compute tokens over.

pub mod config;
pub mod offset;

pub use config::{RingBuilder, TokenRing};
pub use offset::{MIN_DC_OFFSET_DIVIDER, OFFSET_SPACER};
