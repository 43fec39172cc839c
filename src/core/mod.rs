// Core module containing the decoded channel data structures
pub mod channel;
pub mod constants;
pub mod frequency;
pub mod power;

// Re-export commonly used types
pub use channel::ChannelRecord;
pub use constants::*;
pub use frequency::Frequency;
pub use power::PowerLevel;
