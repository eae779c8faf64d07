//! Centralized error types
//!
//! - `CobsError`: failures of the codec itself (shared by COBS and COBS/R)
//! - `ToolError`: failures of the `oc-cobs` command-line tool (IO, config, codec)
//!
//! Use `Result<T>` as shorthand for `std::result::Result<T, ToolError>`.

use std::fmt;
use std::path::PathBuf;

// =============================================================================
// Codec errors
// =============================================================================

/// Errors returned by `encode`/`decode` of both variants
///
/// All of them are values: malformed input never panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CobsError {
    /// Caller contract violated (empty encoded input, output slice too small)
    InvalidArgument { reason: &'static str },
    /// A 0x00 byte where only a code or payload byte may appear
    ZeroInEncodedData { index: usize },
    /// A run's code byte claims more payload than the input holds (COBS only)
    TruncatedEncodedData { code_index: usize, code: u8 },
}

impl fmt::Display for CobsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => write!(f, "Invalid argument: {}", reason),
            Self::ZeroInEncodedData { index } => {
                write!(f, "Zero byte in encoded data at offset {}", index)
            }
            Self::TruncatedEncodedData { code_index, code } => write!(
                f,
                "Truncated encoded data: run at offset {} (code 0x{:02X}) ends past input",
                code_index, code
            ),
        }
    }
}

impl std::error::Error for CobsError {}

// =============================================================================
// Tool errors
// =============================================================================

/// All errors of the command-line tool
#[derive(Debug)]
pub enum ToolError {
    // === IO ===
    /// Reading or writing a file failed
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Reading stdin or writing stdout failed
    Stdio { source: std::io::Error },

    // === Config ===
    /// Config file could not be read
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Invalid config value
    ConfigValidation { field: &'static str, reason: String },

    // === Codec ===
    /// Encoding or decoding failed
    Codec {
        variant: &'static str,
        source: CobsError,
    },
    /// Hex input could not be parsed
    InvalidHex { offset: usize, reason: &'static str },
}

impl std::error::Error for ToolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. }
            | Self::Stdio { source }
            | Self::ConfigRead { source, .. } => Some(source),
            Self::Codec { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, .. } => write!(f, "IO error: {}", path.display()),
            Self::Stdio { source } => write!(f, "IO error on standard stream: {}", source),
            Self::ConfigRead { path, .. } => {
                write!(f, "Cannot read config file: {}", path.display())
            }
            Self::ConfigValidation { field, reason } => {
                write!(f, "Invalid {}: {}", field, reason)
            }
            Self::Codec { variant, source } => write!(f, "{} failed: {}", variant, source),
            Self::InvalidHex { offset, reason } => {
                write!(f, "Invalid hex input at offset {}: {}", offset, reason)
            }
        }
    }
}

/// Alias for Result with ToolError
pub type Result<T> = std::result::Result<T, ToolError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_cobs_error_display() {
        let err = CobsError::ZeroInEncodedData { index: 3 };
        assert_eq!(err.to_string(), "Zero byte in encoded data at offset 3");

        let err = CobsError::TruncatedEncodedData {
            code_index: 0,
            code: 0x05,
        };
        assert!(err.to_string().contains("code 0x05"));
    }

    #[test]
    fn test_tool_error_source_chain() {
        let err = ToolError::Codec {
            variant: "cobs",
            source: CobsError::InvalidArgument {
                reason: "empty input",
            },
        };
        assert_eq!(err.to_string(), "cobs failed: Invalid argument: empty input");
        assert!(err.source().is_some());

        let err = ToolError::InvalidHex {
            offset: 2,
            reason: "odd digit count",
        };
        assert!(err.source().is_none());
    }
}
