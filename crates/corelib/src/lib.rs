//! Core library for token ring calculation.
//!
//! This crate provides the fundamental pieces shared by the token
//! distribution strategies:
//! - Ring configuration (per-datacenter node counts and ring range)
//! - Per-datacenter offset calculation
//! - Token type and integer parsing helpers
//! - Error types

pub mod error;
pub mod ring;
pub mod token;

pub use error::{Error, Result};
pub use ring::{RingBuilder, TokenRing};
pub use token::{Token, TokenAssignment};
