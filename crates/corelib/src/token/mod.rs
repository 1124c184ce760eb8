//! Token representation for the ring.
//!
//! Tokens are positions in `[0, ring_range)`. Ring ranges are routinely as
//! large as 2^127, so every token, offset and ring value is an
//! arbitrary-precision integer. Fixed-width integers are never used for them.

use std::str::FromStr;

use num_bigint::{BigInt, BigUint};
use num_traits::One;

use crate::error::{Error, Result};

/// A position on the ring.
pub type Token = BigInt;

/// Tokens per datacenter, outer index aligned with the datacenter's position
/// in the ring configuration.
pub type TokenAssignment = Vec<Vec<Token>>;

/// Decimal text of the default ring range, 2^127.
pub const DEFAULT_RING_RANGE: &str = "170141183460469231731687303715884105728";

/// The default ring range, 2^127.
pub fn default_ring_range() -> BigUint {
    BigUint::one() << 127u32
}

/// Parses a base-10 non-negative integer such as a node or datacenter count.
///
/// Only ASCII digits are accepted, surrounding whitespace aside. Signs and
/// `_` separators are rejected.
pub fn parse_count(text: &str) -> Result<BigUint> {
    let digits = text.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::Parse(text.to_string()));
    }
    BigUint::from_str(digits).map_err(|_| Error::Parse(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ring_range_matches_text() {
        assert_eq!(default_ring_range().to_string(), DEFAULT_RING_RANGE);
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("3").unwrap(), BigUint::from(3u32));
        assert_eq!(parse_count(" 42 ").unwrap(), BigUint::from(42u32));
        assert_eq!(parse_count(DEFAULT_RING_RANGE).unwrap(), default_ring_range());
    }

    #[test]
    fn test_parse_count_rejects_garbage() {
        assert_eq!(parse_count("-1"), Err(Error::Parse("-1".to_string())));
        assert_eq!(parse_count("three"), Err(Error::Parse("three".to_string())));
        assert_eq!(parse_count(""), Err(Error::Parse(String::new())));
    }

    #[test]
    fn test_parse_count_rejects_separators_and_signs() {
        assert_eq!(parse_count("1_0"), Err(Error::Parse("1_0".to_string())));
        assert_eq!(parse_count("+5"), Err(Error::Parse("+5".to_string())));
        assert_eq!(parse_count("1 0"), Err(Error::Parse("1 0".to_string())));
    }
}
