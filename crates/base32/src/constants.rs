/// RFC4648 base32 alphabet. Symbol `i` of the alphabet decodes to value `i`.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Padding character. Only trailing occurrences are accepted, and they are stripped.
pub const PAD: char = '=';

/// Number of bits carried by one base32 symbol.
pub(crate) const BITS_PER_SYMBOL: u32 = 5;
