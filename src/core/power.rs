// Power level as stored in a channel's flag byte

use super::constants::POWER_HIGH_BITS;
use serde::Serialize;
use std::fmt;

/// Transmit power of a channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PowerLevel {
    High,
    Low,
}

impl PowerLevel {
    /// Derive the power level from a channel flag byte
    ///
    /// Observed values: 0x40 is low, 0x44 and 0x01 are high.
    pub fn from_flags(flags: u8) -> Self {
        if flags & POWER_HIGH_BITS != 0 {
            PowerLevel::High
        } else {
            PowerLevel::Low
        }
    }

    /// Get the display label
    pub fn label(&self) -> &'static str {
        match self {
            PowerLevel::High => "High",
            PowerLevel::Low => "Low",
        }
    }
}

impl fmt::Display for PowerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
