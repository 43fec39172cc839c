// Candidate layouts for an image of unknown model

use crate::core::{NAMED_BLOCK_SIZE, PLAIN_BLOCK_SIZE};
use std::fmt;

/// One interpretation of a channel block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Bytes per channel block (16, or 32 with names)
    pub block_size: usize,
    /// Block carries a 16-byte name field at offset 16
    pub has_name: bool,
    /// Frequencies may be preceded by one leading byte
    pub skip_leading_byte: bool,
}

impl LayoutConfig {
    pub fn new(has_name: bool, skip_leading_byte: bool) -> Self {
        Self {
            block_size: if has_name {
                NAMED_BLOCK_SIZE
            } else {
                PLAIN_BLOCK_SIZE
            },
            has_name,
            skip_leading_byte,
        }
    }

    /// Smallest block the channel decoder will accept for this layout
    pub fn min_block_size(&self) -> usize {
        if self.has_name {
            NAMED_BLOCK_SIZE
        } else {
            PLAIN_BLOCK_SIZE
        }
    }
}

/// A layout paired with the offset where the first block starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub start_offset: usize,
    pub layout: LayoutConfig,
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "offset 0x{:02X}, {}-byte blocks, names={}, skip={}",
            self.start_offset,
            self.layout.block_size,
            self.layout.has_name,
            self.layout.skip_leading_byte
        )
    }
}

/// Candidates in trial order:
/// - offset 0x00, no leading byte (AR-5RM style, names at 0x10 of each block)
/// - offset 0x10, no leading byte (standard Baofeng)
/// - offset 0x10, with a leading zero byte (some Baofeng variants)
pub fn candidates(has_name: bool) -> [Candidate; 3] {
    [(0x00, false), (0x10, false), (0x10, true)].map(|(start_offset, skip)| Candidate {
        start_offset,
        layout: LayoutConfig::new(has_name, skip),
    })
}
