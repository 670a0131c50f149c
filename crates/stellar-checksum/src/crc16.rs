//! CRC16-XModem (polynomial 0x1021, initial value 0, no final XOR).

/// Computes CRC16-XModem over `bytes` without a lookup table.
///
/// # Example
///
/// ```
/// use stellar_checksum::crc16_xmodem;
///
/// assert_eq!(crc16_xmodem(b"123456789"), 0x31c3);
/// assert_eq!(crc16_xmodem(&[]), 0);
/// ```
pub fn crc16_xmodem(bytes: &[u8]) -> u16 {
    bytes.iter().fold(0u16, |crc, &byte| {
        let mut code = (crc >> 8) ^ u16::from(byte);
        code ^= code >> 4;
        let mut crc = (crc << 8) ^ code;
        code <<= 5;
        crc ^= code;
        code <<= 7;
        crc ^ code
    })
}

/// CRC16-XModem of `bytes` in the little-endian order it is stored in an account id.
pub fn checksum(bytes: &[u8]) -> [u8; 2] {
    crc16_xmodem(bytes).to_le_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_value() {
        assert_eq!(crc16_xmodem(b"123456789"), 0x31c3);
        assert_eq!(checksum(b"123456789"), [0xc3, 0x31]);
    }

    #[test]
    fn empty_input() {
        assert_eq!(crc16_xmodem(&[]), 0x0000);
        assert_eq!(checksum(&[]), [0x00, 0x00]);
    }

    #[test]
    fn single_bytes() {
        assert_eq!(crc16_xmodem(&[0x00]), 0x0000);
        assert_eq!(crc16_xmodem(&[0x01]), 0x1021);
        assert_eq!(crc16_xmodem(b"A"), 0x58e5);
    }
}
