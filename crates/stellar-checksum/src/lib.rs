//! Checksum validation for Stellar public account ids.
//!
//! An account id such as `GD4T35DMXYDE7BJWYPUWK43VFJO5IBUQYG2YGMICPTWP4JTNWQELKAVA`
//! is base32 text that decodes to a version byte, a raw public key, and a
//! trailing little-endian CRC16-XModem of the bytes before it.
//!
//! # Overview
//!
//! - [`is_valid`] - Predicate over the text. All failures collapse to `false`.
//! - [`create_account`] - Wraps a valid id in a [`StellarAccount`].
//! - [`crc16_xmodem`] / [`checksum`] - The checksum routine itself.
//!
//! Decoding lives in the `stellar-checksum-base32` crate.
//!
//! # Example
//!
//! ```
//! use stellar_checksum::{create_account, is_valid};
//!
//! let id = "GBX6DXELQKLHMKVX2G24E3TPQV6APUAQECIC3XUJJ77Y2NYDM66TDTVY";
//! assert!(is_valid(id));
//! assert_eq!(create_account(id).unwrap().account_id(), id);
//! ```

mod account;
mod checksum;
mod crc16;

pub use account::{create_account, InvalidAccountId, StellarAccount};
pub use checksum::is_valid;
pub use crc16::{checksum, crc16_xmodem};
