// Immutable byte image of a radio memory file

use std::fmt;

/// The complete content of one image file
///
/// Decoding slices blocks at arbitrary offsets, so the whole file is held
/// in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct RawBuffer {
    data: Vec<u8>,
}

impl RawBuffer {
    /// Create a new buffer from bytes
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Get the size of the buffer
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get up to the first @length bytes
    pub fn head(&self, length: usize) -> &[u8] {
        &self.data[..length.min(self.data.len())]
    }

    /// Iterate over consecutive full @size blocks starting at @start
    ///
    /// A trailing partial block is not yielded.
    pub fn blocks(&self, start: usize, size: usize) -> impl Iterator<Item = &[u8]> {
        self.data
            .get(start..)
            .unwrap_or(&[])
            .chunks_exact(size.max(1))
    }
}

impl From<Vec<u8>> for RawBuffer {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl From<&[u8]> for RawBuffer {
    fn from(data: &[u8]) -> Self {
        Self::new(data.to_vec())
    }
}

impl AsRef<[u8]> for RawBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Display for RawBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RawBuffer({} bytes)", self.data.len())
    }
}
