//! Base32 decoding for Stellar account ids.
//!
//! Decodes the RFC4648 base32 alphabet without relying on padding: trailing
//! `=` characters are tolerated and stripped, lowercase letters are accepted,
//! and the output length is truncated to whole bytes.
//!
//! # Example
//!
//! ```
//! use stellar_checksum_base32::from_base32;
//!
//! let decoded = from_base32("GD4T35DMXYDE7BJWYPUWK43VFJO5IBUQYG2YGMICPTWP4JTNWQELKAVA").unwrap();
//! assert_eq!(decoded.len(), 35);
//! assert_eq!(decoded[0], 6 << 3);
//! ```

mod char_to_value;
mod constants;
mod from_base32;

pub use char_to_value::char_to_value;
pub use constants::{ALPHABET, PAD};
pub use from_base32::from_base32;

use thiserror::Error;

/// Error type for base32 decoding.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Base32Error {
    #[error("base32 input is empty")]
    Empty,
    #[error("invalid base32 character {ch:?} at index {index}")]
    InvalidCharacter { ch: char, index: usize },
}
