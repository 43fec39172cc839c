// radioimg: channel decoder for handheld radio memory images (.img)

pub mod bitwise;
pub mod convert;
pub mod core;
pub mod decoder;
pub mod formats;
pub mod memmap;

// Re-export commonly used types
pub use convert::{convert_directory, convert_file, ConvertError, ConvertOutcome, OutputFormat};
pub use crate::core::{ChannelRecord, Frequency, PowerLevel};
pub use decoder::{decode_image, detect, Candidate, Detection, LayoutConfig};
pub use formats::{export_csv, export_json, load_img};
pub use memmap::RawBuffer;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
