//! Base32 symbol table.

/// Maps one base32 symbol to its 5-bit value.
///
/// Letters are case-insensitive: `A`-`Z` and `a`-`z` map to `0..=25`, and the
/// digits `2`-`7` map to `26..=31`. Any other character has no value.
///
/// # Example
///
/// ```
/// use stellar_checksum_base32::char_to_value;
///
/// assert_eq!(char_to_value('A'), Some(0));
/// assert_eq!(char_to_value('z'), Some(25));
/// assert_eq!(char_to_value('7'), Some(31));
/// assert_eq!(char_to_value('1'), None);
/// ```
pub fn char_to_value(c: char) -> Option<u8> {
    match c {
        'A'..='Z' => Some(c as u8 - b'A'),
        '2'..='7' => Some(c as u8 - 24),
        'a'..='z' => Some(c as u8 - b'a'),
        _ => None,
    }
}
