//! Codec-wide constants
//!
//! Centralized constants to avoid duplication and ensure consistency.

// =============================================================================
// Wire format
// =============================================================================

/// Frame delimiter on a byte stream (never produced by the encoders)
pub const DELIMITER: u8 = 0x00;

/// Longest run of payload bytes covered by a single code byte
pub const MAX_RUN_PAYLOAD: usize = 254;

/// Code byte of a full run (254 payload bytes, no implicit zero)
pub const FULL_RUN_CODE: u8 = 0xFF;

// =============================================================================
// Tool
// =============================================================================

/// Config file name, looked up next to the executable
pub const CONFIG_FILE_NAME: &str = "oc-cobs.toml";

/// Default number of bytes per line in hex output
pub const DEFAULT_HEX_LINE_WIDTH: usize = 16;
