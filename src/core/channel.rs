// Decoded channel record
// One entry per accepted block of a radio image

use super::frequency::Frequency;
use super::power::PowerLevel;
use serde::{Serialize, Serializer};
use std::fmt;

/// A single decoded channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelRecord {
    /// 1-based physical position of the block in the image
    #[serde(rename = "channel")]
    pub channel_index: u32,

    /// Channel name, empty when the layout carries no names
    pub name: String,

    #[serde(rename = "rx_freq")]
    pub rx_frequency: Frequency,

    /// Equal to `rx_frequency` for simplex channels
    #[serde(rename = "tx_freq")]
    pub tx_frequency: Frequency,

    pub power: PowerLevel,

    /// Raw CTCSS/tone bytes, not interpreted
    #[serde(rename = "tone", serialize_with = "serialize_tone")]
    pub tone_bytes: [u8; 2],
}

impl ChannelRecord {
    /// CSV header, in output field order
    pub const CSV_HEADER: &'static [&'static str] =
        &["channel", "name", "rx_freq", "tx_freq", "power", "tone"];

    /// Tone bytes as four lowercase hex characters
    pub fn tone_hex(&self) -> String {
        format!("{:02x}{:02x}", self.tone_bytes[0], self.tone_bytes[1])
    }

    /// True when transmit and receive share a frequency
    pub fn is_simplex(&self) -> bool {
        self.rx_frequency == self.tx_frequency
    }

    /// Export to CSV row
    pub fn to_csv(&self) -> Vec<String> {
        vec![
            self.channel_index.to_string(),
            self.name.clone(),
            self.rx_frequency.to_string(),
            self.tx_frequency.to_string(),
            self.power.to_string(),
            self.tone_hex(),
        ]
    }
}

fn serialize_tone<S: Serializer>(tone: &[u8; 2], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&format_args!("{:02x}{:02x}", tone[0], tone[1]))
}

impl fmt::Display for ChannelRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} \"{}\" rx {}", self.channel_index, self.name, self.rx_frequency)?;
        if self.is_simplex() {
            write!(f, " simplex")?;
        } else {
            write!(f, " tx {}", self.tx_frequency)?;
        }
        write!(f, " {} tone {}", self.power, self.tone_hex())
    }
}
