// Parser combinators using nom for channel block fields

use super::bcd::bcd_to_int_be;
use nom::{
    bytes::complete::take,
    error::{Error, ErrorKind},
    IResult,
};

/// Parse a BCD-encoded value (big-endian) of specified byte length
pub fn parse_bcd_be(num_bytes: usize) -> impl Fn(&[u8]) -> IResult<&[u8], u64> {
    move |input: &[u8]| {
        let (rest, bytes) = take::<_, _, Error<&[u8]>>(num_bytes)(input)?;
        let value = bcd_to_int_be(bytes)
            .map_err(|_| nom::Err::Error(Error::new(input, ErrorKind::Verify)))?;
        Ok((rest, value))
    }
}

/// Parse a fixed-length text field terminated by a padding byte
///
/// Everything from the first `pad` byte onward is ignored. Bytes outside
/// the ASCII range are dropped rather than failing the parse, and the
/// result is trimmed of whitespace, the 0x1C-0x1F separators and NUL padding.
pub fn parse_padded_string(len: usize, pad: u8) -> impl Fn(&[u8]) -> IResult<&[u8], String> {
    move |input: &[u8]| {
        let (rest, bytes) = take::<_, _, Error<&[u8]>>(len)(input)?;

        let end = bytes.iter().position(|&b| b == pad).unwrap_or(bytes.len());
        let text: String = bytes[..end]
            .iter()
            .filter(|b| b.is_ascii())
            .map(|&b| b as char)
            .collect();

        let trimmed = text.trim_matches(is_name_padding);
        Ok((rest, trimmed.to_string()))
    }
}

fn is_name_padding(c: char) -> bool {
    c.is_whitespace() || c == '\0' || ('\x1c'..='\x1f').contains(&c)
}
