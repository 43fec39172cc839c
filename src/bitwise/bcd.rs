// Binary-Coded Decimal (BCD) decoding

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum BcdError {
    #[error("Invalid BCD digit: {0:#x}")]
    InvalidDigit(u8),

    #[error("Value too large for BCD decode: {0}")]
    ValueTooLarge(u64),
}

pub type Result<T> = std::result::Result<T, BcdError>;

/// Convert a BCD byte to its two decimal digits (tens, ones)
/// Example: 0x12 -> (1, 2), 0x95 -> (9, 5)
pub fn bcd_byte_to_digits(byte: u8) -> Result<(u8, u8)> {
    let tens = (byte & 0xF0) >> 4;
    let ones = byte & 0x0F;

    if tens > 9 || ones > 9 {
        return Err(BcdError::InvalidDigit(byte));
    }

    Ok((tens, ones))
}

/// Convert a BCD array to an integer, first byte most significant
/// Example: [0x04, 0x62, 0x56, 0x25] -> 4625625
pub fn bcd_to_int_be(bcd_array: &[u8]) -> Result<u64> {
    let mut value: u64 = 0;

    for &byte in bcd_array {
        let (tens, ones) = bcd_byte_to_digits(byte)?;
        value = value
            .checked_mul(100)
            .ok_or(BcdError::ValueTooLarge(value))?;
        value = value
            .checked_add((tens * 10 + ones) as u64)
            .ok_or(BcdError::ValueTooLarge(value))?;
    }

    Ok(value)
}
