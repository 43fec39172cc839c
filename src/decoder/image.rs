// Image decoder and format detector
//
// The layout of an image is not recorded anywhere in the file, so every
// candidate layout is decoded in full and the one accepting the most
// channels wins.

use super::channel::decode_channel;
use super::layout::{candidates, Candidate};
use crate::core::{ChannelRecord, MAX_BLOCKS, SNIFF_WINDOW};
use crate::memmap::RawBuffer;
use regex::bytes::Regex;

lazy_static::lazy_static! {
    /// Text found near the start of images from models that store channel names
    static ref NAMED_MODEL_MARKER: Regex = Regex::new("FRS|GMRS").expect("valid marker regex");
}

/// Result of decoding the image under one candidate
#[derive(Debug, Clone, PartialEq)]
pub struct Pass {
    pub channels: Vec<ChannelRecord>,
    /// Blocks sliced from the buffer, accepted or not
    pub blocks_consumed: usize,
}

/// The winning candidate and its channels
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub candidate: Candidate,
    /// Position of the candidate in trial order
    pub trial: usize,
    pub blocks_consumed: usize,
    pub channels: Vec<ChannelRecord>,
}

/// Check the start of the image for markers of a name-bearing model
///
/// This is a weak hint, only used to choose the block size tried.
pub fn sniff_names(buffer: &RawBuffer) -> bool {
    NAMED_MODEL_MARKER.is_match(buffer.head(SNIFF_WINDOW))
}

/// Decode consecutive blocks under a single candidate
///
/// The channel index counts every block consumed, so skipped blocks leave
/// gaps. Traversal stops at the last full block or after `MAX_BLOCKS`.
pub fn decode_pass(buffer: &RawBuffer, candidate: &Candidate) -> Pass {
    let mut channels = Vec::new();
    let mut blocks_consumed = 0;

    for (i, block) in buffer
        .blocks(candidate.start_offset, candidate.layout.block_size)
        .take(MAX_BLOCKS)
        .enumerate()
    {
        blocks_consumed += 1;
        if let Some(channel) = decode_channel(block, i as u32 + 1, &candidate.layout) {
            channels.push(channel);
        }
    }

    Pass {
        channels,
        blocks_consumed,
    }
}

/// Try every candidate and keep the one accepting the most channels
///
/// Ties go to the earliest candidate. Returns `None` when no candidate
/// accepts a single channel.
pub fn detect(buffer: &RawBuffer) -> Option<Detection> {
    let has_name = sniff_names(buffer);
    tracing::debug!(
        "Detecting layout of {} (names {})",
        buffer,
        if has_name { "expected" } else { "not expected" }
    );

    let mut best: Option<Detection> = None;

    for (trial, candidate) in candidates(has_name).iter().enumerate() {
        let pass = decode_pass(buffer, candidate);
        tracing::debug!(
            "Candidate {} ({}): {} channels in {} blocks",
            trial,
            candidate,
            pass.channels.len(),
            pass.blocks_consumed
        );

        let best_count = best.as_ref().map_or(0, |b| b.channels.len());
        if pass.channels.len() > best_count {
            best = Some(Detection {
                candidate: *candidate,
                trial,
                blocks_consumed: pass.blocks_consumed,
                channels: pass.channels,
            });
        }
    }

    best
}

/// Decode all channels of an image, ordered by channel index
///
/// An empty result means the layout was not recognized or the image has no
/// active channels; it is not an error.
pub fn decode_image(buffer: &RawBuffer) -> Vec<ChannelRecord> {
    detect(buffer).map(|d| d.channels).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::channel::tests::{bcd, named_block, plain_block};

    fn channel(units: u32) -> Vec<u8> {
        plain_block(bcd(units), [0xFF; 4], [0x00, 0x00], 0x44)
    }

    fn empty_block() -> Vec<u8> {
        vec![0xFF; 16]
    }

    #[test]
    fn test_empty_buffer() {
        let buf = RawBuffer::new(Vec::new());
        assert!(detect(&buf).is_none());
        assert!(decode_image(&buf).is_empty());
    }

    #[test]
    fn test_no_valid_channels() {
        let buf = RawBuffer::new(vec![0xFF; 1024]);
        assert!(decode_image(&buf).is_empty());

        let buf = RawBuffer::new(vec![0xAB; 1024]);
        assert!(decode_image(&buf).is_empty());
    }

    #[test]
    fn test_sniff_names() {
        let mut data = vec![0u8; 200];
        assert!(!sniff_names(&RawBuffer::new(data.clone())));

        data[40..44].copy_from_slice(b"GMRS");
        assert!(sniff_names(&RawBuffer::new(data.clone())));

        let mut data = vec![0u8; 200];
        data[97..100].copy_from_slice(b"FRS");
        assert!(sniff_names(&RawBuffer::new(data)));

        // Outside the first 100 bytes
        let mut data = vec![0u8; 200];
        data[98..101].copy_from_slice(b"FRS");
        assert!(!sniff_names(&RawBuffer::new(data)));
    }

    #[test]
    fn test_offset_zero_layout() {
        let mut data = Vec::new();
        data.extend(channel(4_625_625));
        data.extend(channel(4_625_875));
        data.extend(empty_block());
        data.extend(channel(4_626_125));

        let det = detect(&RawBuffer::new(data)).unwrap();
        assert_eq!(det.trial, 0);
        assert_eq!(det.candidate.start_offset, 0);
        assert_eq!(det.blocks_consumed, 4);

        let indices: Vec<u32> = det.channels.iter().map(|c| c.channel_index).collect();
        assert_eq!(indices, vec![1, 2, 4]);
        assert_eq!(det.channels[2].rx_frequency.to_string(), "462.6125");
    }

    #[test]
    fn test_equal_counts_keep_offset_zero() {
        // A blank 16-byte header: offset 0 sees it as block 1 and then the
        // same channels as offset 0x10
        let mut data = vec![0xFFu8; 16];
        for units in [4_625_625, 4_625_875, 4_626_125] {
            data.extend(channel(units));
        }
        let buf = RawBuffer::new(data);
        assert_eq!(decode_pass(&buf, &candidates(false)[1]).channels.len(), 3);

        let det = detect(&buf).unwrap();
        assert_eq!(det.trial, 0);
        let indices: Vec<u32> = det.channels.iter().map(|c| c.channel_index).collect();
        assert_eq!(indices, vec![2, 3, 4]);
    }

    #[test]
    fn test_larger_count_wins() {
        // Leading-byte layout at 0x10: 5 valid channels only when shifted
        let mut data = vec![0xFFu8; 16];
        for units in [4_625_625, 4_625_875, 4_626_125, 4_626_375, 4_626_625] {
            let mut block = vec![0xAAu8; 16];
            block[1..5].copy_from_slice(&bcd(units));
            block[5..9].copy_from_slice(&[0xFF; 4]);
            data.extend(block);
        }
        // Three blocks decodable without the skip, after the shifted run
        for units in [1_465_200, 1_465_400, 1_465_600] {
            data.extend(channel(units));
        }

        let buf = RawBuffer::new(data);
        let list = candidates(false);
        assert_eq!(decode_pass(&buf, &list[0]).channels.len(), 3);
        assert_eq!(decode_pass(&buf, &list[1]).channels.len(), 3);
        assert_eq!(decode_pass(&buf, &list[2]).channels.len(), 8);

        let det = detect(&buf).unwrap();
        assert_eq!(det.trial, 2);
        assert_eq!(det.channels.len(), 8);
        assert_eq!(det.channels[0].rx_frequency.to_string(), "462.5625");
        assert_eq!(det.channels[0].channel_index, 1);
    }

    #[test]
    fn test_tie_keeps_earliest() {
        let mut data = Vec::new();
        for _ in 0..4 {
            data.extend(channel(4_625_625));
        }
        let buf = RawBuffer::new(data);
        let list = candidates(false);
        assert_eq!(decode_pass(&buf, &list[0]).channels.len(), 4);
        assert_eq!(decode_pass(&buf, &list[1]).channels.len(), 3);

        let det = detect(&buf).unwrap();
        assert_eq!(det.trial, 0);
    }

    #[test]
    fn test_block_cap() {
        let mut data = Vec::new();
        for _ in 0..250 {
            data.extend(channel(4_625_625));
        }
        let buf = RawBuffer::new(data);
        let pass = decode_pass(&buf, &candidates(false)[0]);
        assert_eq!(pass.blocks_consumed, 200);
        assert_eq!(pass.channels.len(), 200);
        assert_eq!(pass.channels.last().unwrap().channel_index, 200);

        assert_eq!(decode_image(&buf).len(), 200);
    }

    #[test]
    fn test_partial_tail_block_ignored() {
        let mut data = channel(4_625_625);
        data.extend(&channel(4_625_875)[..10]);
        let buf = RawBuffer::new(data);
        let pass = decode_pass(&buf, &candidates(false)[0]);
        assert_eq!(pass.blocks_consumed, 1);
        assert_eq!(pass.channels.len(), 1);
    }

    #[test]
    fn test_named_image() {
        let mut data = Vec::new();
        data.extend(named_block(bcd(4_625_625), [0xFF; 4], "FRS 1"));
        data.extend(named_block(bcd(4_625_875), [0xFF; 4], "FRS 2"));
        data.extend(named_block(bcd(4_626_125), bcd(4_676_125), "GMRS 3"));

        let det = detect(&RawBuffer::new(data)).unwrap();
        assert!(det.candidate.layout.has_name);
        assert_eq!(det.candidate.layout.block_size, 32);
        assert_eq!(det.trial, 0);

        let names: Vec<&str> = det.channels.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["FRS 1", "FRS 2", "GMRS 3"]);
        assert_eq!(det.channels[2].tx_frequency.to_string(), "467.6125");
    }

    #[test]
    fn test_indices_strictly_increasing() {
        let mut data = Vec::new();
        for i in 0..20 {
            if i % 3 == 0 {
                data.extend(empty_block());
            } else {
                data.extend(channel(4_625_625 + i * 250));
            }
        }
        let channels = decode_image(&RawBuffer::new(data));
        assert!(!channels.is_empty());
        assert!(channels
            .windows(2)
            .all(|w| w[0].channel_index < w[1].channel_index));
        assert!(channels.iter().all(|c| c.channel_index % 3 != 1));
    }
}
