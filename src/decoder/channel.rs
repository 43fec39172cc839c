// Single channel block decoder
//
// Byte layout (absolute offsets, `+1` on frequencies when a leading byte
// is skipped):
// - Bytes 0-3:   rx frequency (BCD, 0.0001 MHz units) or 0xFF when unset
// - Bytes 4-7:   tx frequency (BCD), unset or invalid means simplex
// - Bytes 8-9:   tone/CTCSS bytes, kept raw
// - Byte 14:     flags, power is High when bit 0x04 or 0x01 is set
// - Bytes 16-31: name, 0xFF padded (named layouts only)

use super::layout::LayoutConfig;
use crate::bitwise::parse_padded_string;
use crate::core::{
    ChannelRecord, Frequency, PowerLevel, DEFAULT_FLAGS, FLAGS_OFFSET, FREQ_FIELD_SIZE,
    NAME_OFFSET, NAME_SIZE, NAMED_BLOCK_SIZE, TONE_OFFSET, TONE_SIZE, UNSET_BYTE,
};

/// Decode one channel block
///
/// Returns `None` when the block is too short for the layout or carries no
/// valid receive frequency; such blocks are not channels.
pub fn decode_channel(
    block: &[u8],
    channel_index: u32,
    layout: &LayoutConfig,
) -> Option<ChannelRecord> {
    if block.len() < layout.min_block_size() {
        return None;
    }

    let mut offset = usize::from(layout.skip_leading_byte);

    let rx_frequency = match freq_at(block, offset) {
        Some(freq) => freq,
        None if layout.skip_leading_byte => {
            let freq = freq_at(block, 0)?;
            offset = 0;
            freq
        }
        None => return None,
    };

    let tx_frequency = freq_at(block, offset + FREQ_FIELD_SIZE).unwrap_or(rx_frequency);

    let tone_bytes = block
        .get(TONE_OFFSET..TONE_OFFSET + TONE_SIZE)
        .map(|t| [t[0], t[1]])
        .unwrap_or([0, 0]);

    let flags = block.get(FLAGS_OFFSET).copied().unwrap_or(DEFAULT_FLAGS);

    let name = if layout.has_name && block.len() >= NAMED_BLOCK_SIZE {
        parse_padded_string(NAME_SIZE, UNSET_BYTE)(&block[NAME_OFFSET..])
            .map(|(_, name)| name)
            .unwrap_or_default()
    } else {
        String::new()
    };

    Some(ChannelRecord {
        channel_index,
        name,
        rx_frequency,
        tx_frequency,
        power: PowerLevel::from_flags(flags),
        tone_bytes,
    })
}

fn freq_at(block: &[u8], offset: usize) -> Option<Frequency> {
    let span = block.get(offset..offset + FREQ_FIELD_SIZE)?;
    let freq = Frequency::from_bcd(span);
    if freq.is_none() {
        tracing::trace!("No frequency at +{}: {:02X?}", offset, span);
    }
    freq
}
