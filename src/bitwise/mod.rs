// Binary parsing helpers for radio image blocks

pub mod bcd;
pub mod parser;

pub use bcd::{bcd_byte_to_digits, bcd_to_int_be, BcdError};
pub use parser::{parse_bcd_be, parse_padded_string};
