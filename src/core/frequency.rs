// Fixed-point channel frequency with BCD decoding

use super::constants::{
    FREQ_FIELD_SIZE, FREQ_UNITS_PER_MHZ, MAX_FREQ_UNITS, MIN_FREQ_UNITS, UNSET_BYTE,
};
use crate::bitwise::parse_bcd_be;
use serde::{Serialize, Serializer};
use std::fmt;

/// A channel frequency in units of 0.0001 MHz
///
/// Only values within [50.0, 1000.0] MHz can be constructed; anything
/// outside that range in an image is a false-positive decode of unrelated
/// bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Frequency(u32);

impl Frequency {
    /// Create a frequency from 0.0001 MHz units, rejecting out-of-range values
    pub fn from_units(units: u32) -> Option<Self> {
        if (MIN_FREQ_UNITS..=MAX_FREQ_UNITS).contains(&units) {
            Some(Self(units))
        } else {
            None
        }
    }

    /// Decode a 4-byte BCD frequency field
    ///
    /// The eight digits are read high nibble first, first byte first, and
    /// count 0.0001 MHz units: `04 62 56 25` is 462.5625 MHz. Returns `None`
    /// for a span of the wrong width, an unset (0xFF) byte, a nibble above 9,
    /// or a value out of range.
    pub fn from_bcd(span: &[u8]) -> Option<Self> {
        if span.len() != FREQ_FIELD_SIZE || span.contains(&UNSET_BYTE) {
            return None;
        }

        let (_, units) = parse_bcd_be(FREQ_FIELD_SIZE)(span).ok()?;
        let units = u32::try_from(units).ok()?;
        Self::from_units(units)
    }

    /// Raw value in 0.0001 MHz units
    pub fn units(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:04}",
            self.0 / FREQ_UNITS_PER_MHZ,
            self.0 % FREQ_UNITS_PER_MHZ
        )
    }
}

impl Serialize for Frequency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
