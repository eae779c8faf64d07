//! Command execution for the `oc-cobs` binary
//!
//! Reads input, runs the selected codec, writes output. Hex conversion
//! applies to the encoded side only.

use crate::cli::{Cli, Command, IoArgs};
use crate::codec::Variant;
use crate::config::{self, Config};
use crate::error::{Result, ToolError};
use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

/// Direction of a codec run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encode,
    Decode,
}

/// Run the parsed command line
pub fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => config::load_strict(path)?,
        None => config::load(),
    };

    match &cli.command {
        Command::Encode(args) => run_io(Direction::Encode, args, &config),
        Command::Decode(args) => run_io(Direction::Decode, args, &config),
        Command::Sizes { len, variant } => {
            let codec = variant.unwrap_or(config.codec.variant).codec();
            let mut stdout = std::io::stdout().lock();
            writeln!(
                stdout,
                "{}: max_encoded_size({len}) = {}, max_decoded_size({len}) = {}",
                codec.name(),
                codec.max_encoded_size(*len),
                codec.max_decoded_size(*len),
            )
            .map_err(|e| ToolError::Stdio { source: e })
        }
    }
}

fn run_io(direction: Direction, args: &IoArgs, config: &Config) -> Result<()> {
    let input = read_input(args.input.as_deref())?;
    let output = process(direction, args, config, &input)?;
    write_output(args.output.as_deref(), &output)
}

/// Transform `input` according to the command-line options and config
///
/// Command-line options take precedence over the config.
pub fn process(direction: Direction, args: &IoArgs, config: &Config, input: &[u8]) -> Result<Vec<u8>> {
    let variant = effective_variant(args, config);
    let hex = args.hex || config.io.hex;
    let codec = variant.codec();
    let codec_error = |source| ToolError::Codec {
        variant: codec.name(),
        source,
    };

    match direction {
        Direction::Encode => {
            let encoded = codec.encode_to_vec(input).map_err(codec_error)?;
            debug!(
                "{}: encoded {} bytes into {} bytes",
                codec.name(),
                input.len(),
                encoded.len()
            );
            if hex {
                Ok(format_hex(&encoded, config.io.line_width).into_bytes())
            } else {
                Ok(encoded)
            }
        }
        Direction::Decode => {
            let encoded = if hex {
                let text = std::str::from_utf8(input).map_err(|e| ToolError::InvalidHex {
                    offset: e.valid_up_to(),
                    reason: "not UTF-8 text",
                })?;
                parse_hex(text)?
            } else {
                input.to_vec()
            };
            let decoded = codec.decode_to_vec(&encoded).map_err(codec_error)?;
            debug!(
                "{}: decoded {} bytes into {} bytes",
                codec.name(),
                encoded.len(),
                decoded.len()
            );
            Ok(decoded)
        }
    }
}

/// Select the variant a command would use
pub fn effective_variant(args: &IoArgs, config: &Config) -> Variant {
    args.variant.unwrap_or(config.codec.variant)
}

// =============================================================================
// Hex text
// =============================================================================

/// Format bytes as uppercase hex pairs, `line_width` per line
pub fn format_hex(bytes: &[u8], line_width: usize) -> String {
    let mut text = String::with_capacity(bytes.len() * 3 + 1);
    for line in bytes.chunks(line_width.max(1)) {
        let pairs: Vec<String> = line.iter().map(|b| format!("{:02X}", b)).collect();
        text.push_str(&pairs.join(" "));
        text.push('\n');
    }
    text
}

/// Parse hex pairs, ignoring whitespace
pub fn parse_hex(text: &str) -> Result<Vec<u8>> {
    let digits: Vec<(usize, char)> = text
        .char_indices()
        .filter(|(_, c)| !c.is_whitespace())
        .collect();

    if digits.len() % 2 != 0 {
        return Err(ToolError::InvalidHex {
            offset: text.len(),
            reason: "odd number of hex digits",
        });
    }

    let nibble = |(offset, c): (usize, char)| {
        c.to_digit(16).ok_or(ToolError::InvalidHex {
            offset,
            reason: "not a hex digit",
        })
    };

    digits
        .chunks(2)
        .map(|pair| -> Result<u8> { Ok(((nibble(pair[0])? << 4) | nibble(pair[1])?) as u8) })
        .collect()
}

// =============================================================================
// IO
// =============================================================================

fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) => fs::read(path).map_err(|e| ToolError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
        None => {
            let mut input = Vec::new();
            std::io::stdin()
                .lock()
                .read_to_end(&mut input)
                .map_err(|e| ToolError::Stdio { source: e })?;
            Ok(input)
        }
    }
}

fn write_output(path: Option<&Path>, data: &[u8]) -> Result<()> {
    match path {
        Some(path) => fs::write(path, data).map_err(|e| ToolError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(data)
                .and_then(|_| stdout.flush())
                .map_err(|e| ToolError::Stdio { source: e })
        }
    }
}
