/// Record layout
pub const FIELD_SEPARATOR: u8 = b';';
pub const LINE_TERMINATOR: u8 = b'\n';
pub const DECIMAL_POINT: u8 = b'.';
pub const MINUS_SIGN: u8 = b'-';

/// Longest retained temperature token: sign plus digits, decimal point excluded
pub const MAX_TOKEN_LEN: usize = 8;

/// FNV-1a (64-bit) parameters
pub const FNV_PRIME: u64 = 1_099_511_628_211;
pub const FNV_SEED: u64 = 0;

/// Processing defaults
pub const DEFAULT_TABLE_CAPACITY: usize = 16_384;
pub const DEFAULT_OUTPUT_BUFFER_SIZE: usize = 8192 * 16; // 128KB

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "STATION_STATS";
