// In-memory radio image
pub mod raw_buffer;

pub use raw_buffer::RawBuffer;
