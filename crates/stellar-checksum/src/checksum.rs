//! Account id checksum validation.
//!
//! A decoded account id is laid out as
//!
//! ```text
//! +---------+-----------------+-----------------+
//! | version | key payload     | crc16 (LE)      |
//! | 1 byte  | N bytes         | 2 bytes         |
//! +---------+-----------------+-----------------+
//! ```
//!
//! The checksum covers the version byte together with the key payload.

use stellar_checksum_base32::{from_base32, Base32Error};
use thiserror::Error;

use crate::crc16::checksum;

/// Length of the trailing checksum.
pub(crate) const CHECKSUM_LEN: usize = 2;

/// Smallest decoded length that still carries a version byte.
pub(crate) const MIN_DECODED_LEN: usize = 1 + CHECKSUM_LEN;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ChecksumError {
    #[error(transparent)]
    Decode(#[from] Base32Error),
    #[error("decoded account id is {len} bytes, need at least {}", MIN_DECODED_LEN)]
    TooShort { len: usize },
    #[error("checksum mismatch: expected {expected:02x?}, found {actual:02x?}")]
    Mismatch {
        expected: [u8; CHECKSUM_LEN],
        actual: [u8; CHECKSUM_LEN],
    },
}

/// Decodes `encoded` and checks its trailing CRC16-XModem.
pub(crate) fn verify(encoded: &str) -> Result<(), ChecksumError> {
    let decoded = from_base32(encoded)?;
    let (payload, actual) = match decoded.split_last_chunk::<CHECKSUM_LEN>() {
        Some((payload, actual)) if !payload.is_empty() => (payload, actual),
        _ => return Err(ChecksumError::TooShort { len: decoded.len() }),
    };

    let expected = checksum(payload);
    if expected != *actual {
        return Err(ChecksumError::Mismatch {
            expected,
            actual: *actual,
        });
    }
    Ok(())
}

/// Returns `true` when `encoded` is base32 whose trailing two bytes are the
/// little-endian CRC16-XModem of everything before them.
///
/// Never panics. Absent, empty, malformed and mismatching inputs all yield
/// `false`.
///
/// # Example
///
/// ```
/// use stellar_checksum::is_valid;
///
/// assert!(is_valid("GBX6DXELQKLHMKVX2G24E3TPQV6APUAQECIC3XUJJ77Y2NYDM66TDTVY"));
/// assert!(!is_valid("0x6f46cf5569aefa1acc1009290c8e043747172d89"));
/// assert!(!is_valid(None));
/// ```
pub fn is_valid<'a>(encoded: impl Into<Option<&'a str>>) -> bool {
    let Some(encoded) = encoded.into() else {
        return false;
    };
    match verify(encoded) {
        Ok(()) => true,
        Err(err) => {
            log::trace!("rejected account id: {err}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "GD4T35DMXYDE7BJWYPUWK43VFJO5IBUQYG2YGMICPTWP4JTNWQELKAVA";

    #[test]
    fn verify_accepts_known_account() {
        assert_eq!(verify(VALID), Ok(()));
    }

    #[test]
    fn verify_reports_decode_failure() {
        assert_eq!(
            verify("not valid"),
            Err(ChecksumError::Decode(Base32Error::InvalidCharacter {
                ch: ' ',
                index: 3
            }))
        );
        assert_eq!(verify(""), Err(ChecksumError::Decode(Base32Error::Empty)));
    }

    #[test]
    fn verify_requires_version_byte() {
        // Two zero bytes would match the checksum of an empty payload.
        assert_eq!(verify("AAAA"), Err(ChecksumError::TooShort { len: 2 }));
        assert_eq!(verify("AA"), Err(ChecksumError::TooShort { len: 1 }));
        assert_eq!(verify("A"), Err(ChecksumError::TooShort { len: 0 }));
        assert_eq!(verify("===="), Err(ChecksumError::TooShort { len: 0 }));
    }

    #[test]
    fn verify_includes_version_byte_in_checksum() {
        // 35 bytes: version 0x30, 32 key bytes, crc [0x02, 0xa0].
        let mut mutated = VALID.to_string();
        mutated.replace_range(0..1, "A");
        assert!(matches!(
            verify(&mutated),
            Err(ChecksumError::Mismatch { actual: [0x02, 0xa0], .. })
        ));
    }

    #[test]
    fn shortest_valid_id() {
        // [0x00, 0x00, 0x00]: crc16 of a lone zero version byte is zero.
        assert_eq!(verify("AAAAA"), Ok(()));
        assert!(is_valid("AAAAA"));
    }

    #[test]
    fn too_short_message() {
        assert_eq!(
            ChecksumError::TooShort { len: 2 }.to_string(),
            format!("decoded account id is 2 bytes, need at least {MIN_DECODED_LEN}")
        );
        assert_eq!(MIN_DECODED_LEN, 3);
    }

    #[test]
    fn mismatch_message() {
        let err = ChecksumError::Mismatch {
            expected: [0x02, 0xa0],
            actual: [0x00, 0x01],
        };
        assert_eq!(
            err.to_string(),
            "checksum mismatch: expected [02, a0], found [00, 01]"
        );
    }
}
