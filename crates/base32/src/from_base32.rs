//! Unpadded base32 decoding.

use crate::constants::{BITS_PER_SYMBOL, PAD};
use crate::{char_to_value, Base32Error};

/// Decodes a base32 string to bytes.
///
/// Trailing `=` padding is stripped before decoding, and letters are accepted
/// in either case. Symbols are packed most-significant-bit first. The output
/// holds `len * 5 / 8` bytes, so bits that do not complete a final byte are
/// dropped.
///
/// # Errors
///
/// Returns [`Base32Error::Empty`] for an empty string and
/// [`Base32Error::InvalidCharacter`] for the first character outside the
/// alphabet.
///
/// # Example
///
/// ```
/// use stellar_checksum_base32::from_base32;
///
/// assert_eq!(from_base32("NBSWY3DP").unwrap(), b"hello");
/// assert_eq!(from_base32("nbswy3dp").unwrap(), b"hello");
/// assert_eq!(from_base32("MZXW6===").unwrap(), b"foo");
/// ```
pub fn from_base32(encoded: &str) -> Result<Vec<u8>, Base32Error> {
    if encoded.is_empty() {
        return Err(Base32Error::Empty);
    }

    let input = encoded.trim_end_matches(PAD);
    let byte_count = input.len() * BITS_PER_SYMBOL as usize / 8;
    let mut out = Vec::with_capacity(byte_count);

    let mut cur: u8 = 0;
    let mut bits_remaining: u32 = 8;

    for (index, ch) in input.chars().enumerate() {
        let value = char_to_value(ch).ok_or(Base32Error::InvalidCharacter { ch, index })?;
        let value = u32::from(value);

        if bits_remaining > BITS_PER_SYMBOL {
            cur |= (value << (bits_remaining - BITS_PER_SYMBOL)) as u8;
            bits_remaining -= BITS_PER_SYMBOL;
        } else {
            cur |= (value >> (BITS_PER_SYMBOL - bits_remaining)) as u8;
            out.push(cur);
            // Low bits of the symbol that did not fit start the next byte.
            cur = (value << (3 + bits_remaining)) as u8;
            bits_remaining += 3;
        }
    }

    if out.len() < byte_count {
        out.push(cur);
    }

    Ok(out)
}
