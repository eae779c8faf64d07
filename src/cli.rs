//! Command-line interface definition using clap
//!
//! Provides structured argument parsing with automatic help generation.

use crate::codec::Variant;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

// =============================================================================
// CLI Definition
// =============================================================================

/// COBS and COBS/R byte-stuffing encoder/decoder
#[derive(Parser, Debug)]
#[command(name = "oc-cobs")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file to use (default: oc-cobs.toml next to the executable)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode plain bytes (no delimiter is appended)
    Encode(IoArgs),

    /// Decode an encoded block (input must not contain the delimiter)
    Decode(IoArgs),

    /// Print worst-case buffer sizes for a length
    Sizes {
        /// Input length in bytes
        len: usize,

        /// Codec variant (overrides config)
        #[arg(long, value_enum)]
        variant: Option<Variant>,
    },
}

/// Input/output options shared by `encode` and `decode`
#[derive(Args, Debug, Default)]
pub struct IoArgs {
    /// Codec variant (overrides config)
    #[arg(long, value_enum)]
    pub variant: Option<Variant>,

    /// Read from file instead of stdin
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Write to file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Encoded side is hex text (encode writes hex, decode reads hex)
    #[arg(long)]
    pub hex: bool,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_encode_defaults() {
        let cli = Cli::parse_from(["oc-cobs", "encode"]);
        assert!(!cli.verbose);
        assert!(cli.config.is_none());
        match cli.command {
            Command::Encode(args) => {
                assert!(args.variant.is_none());
                assert!(args.input.is_none());
                assert!(args.output.is_none());
                assert!(!args.hex);
            }
            _ => panic!("Expected Encode command"),
        }
    }

    #[test]
    fn test_cli_parse_verbose() {
        let cli = Cli::parse_from(["oc-cobs", "-v", "encode"]);
        assert!(cli.verbose);

        let cli = Cli::parse_from(["oc-cobs", "decode", "--verbose"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_parse_decode_options() {
        let cli = Cli::parse_from([
            "oc-cobs", "decode", "--variant", "cobsr", "-i", "in.bin", "-o", "out.bin", "--hex",
        ]);
        match cli.command {
            Command::Decode(args) => {
                assert_eq!(args.variant, Some(Variant::Cobsr));
                assert_eq!(args.input, Some(PathBuf::from("in.bin")));
                assert_eq!(args.output, Some(PathBuf::from("out.bin")));
                assert!(args.hex);
            }
            _ => panic!("Expected Decode command"),
        }
    }

    #[test]
    fn test_cli_parse_sizes() {
        let cli = Cli::parse_from(["oc-cobs", "sizes", "300", "--variant", "cobs"]);
        match cli.command {
            Command::Sizes { len, variant } => {
                assert_eq!(len, 300);
                assert_eq!(variant, Some(Variant::Cobs));
            }
            _ => panic!("Expected Sizes command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_variant() {
        let result = Cli::try_parse_from(["oc-cobs", "encode", "--variant", "slip"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_config_path() {
        let cli = Cli::parse_from(["oc-cobs", "--config", "custom.toml", "sizes", "0"]);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }
}
