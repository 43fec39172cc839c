// Constants describing the radio image layout

/// Byte value marking an unset field in the image
pub const UNSET_BYTE: u8 = 0xFF;

/// Frequency resolution: one unit is 0.0001 MHz (100 Hz)
pub const FREQ_UNITS_PER_MHZ: u32 = 10_000;

/// Lowest accepted frequency, 50.0 MHz
pub const MIN_FREQ_UNITS: u32 = 50 * FREQ_UNITS_PER_MHZ;

/// Highest accepted frequency, 1000.0 MHz
pub const MAX_FREQ_UNITS: u32 = 1000 * FREQ_UNITS_PER_MHZ;

/// Width of a BCD frequency field
pub const FREQ_FIELD_SIZE: usize = 4;

/// Channel block without a name field
pub const PLAIN_BLOCK_SIZE: usize = 16;

/// Channel block carrying a 16-byte name field
pub const NAMED_BLOCK_SIZE: usize = 32;

/// Tone/CTCSS bytes (absolute offsets within a block)
pub const TONE_OFFSET: usize = 8;
pub const TONE_SIZE: usize = 2;

/// Flag byte holding the power bits (absolute offset within a block)
pub const FLAGS_OFFSET: usize = 14;

/// Flag value assumed when a block is too short to carry one (reads as High)
pub const DEFAULT_FLAGS: u8 = 0x44;

/// Power bits: either one set means High (0x40=low, 0x44=high, 0x01=high)
pub const POWER_HIGH_BITS: u8 = 0x04 | 0x01;

/// Name field (absolute offsets within a named block)
pub const NAME_OFFSET: usize = 16;
pub const NAME_SIZE: usize = 16;

/// Number of leading bytes searched for name-bearing model markers
pub const SNIFF_WINDOW: usize = 100;

/// Upper bound on blocks consumed per layout candidate
pub const MAX_BLOCKS: usize = 200;
