//! COBS (Consistent Overhead Byte Stuffing)
//!
//! Zero-allocation encoding/decoding using caller-provided output slices.
//! Encodes data so 0x00 never appears in the output, allowing it as frame delimiter.
//!
//! Each run of at most 254 bytes becomes one code byte followed by its
//! non-zero bytes. Code `n < 0xFF` means `n - 1` bytes then an implicit zero;
//! `0xFF` means 254 bytes and no zero.
//!
//! The run splitting here is shared with COBS/R, which only changes how the
//! final run is closed (encoder) and read back (decoder).

use super::{check_capacity, Codec};
use crate::constants::{FULL_RUN_CODE, MAX_RUN_PAYLOAD};
use crate::error::CobsError;

// =============================================================================
// Run splitting (shared with COBS/R)
// =============================================================================

/// Final run left open by [`stuff_runs`]
pub(crate) struct OpenRun {
    /// Position of the run's code byte (not yet written)
    pub code_index: usize,
    /// Next free output position
    pub write_index: usize,
    /// Last payload byte written, 0 if the run is empty
    pub last_value: u8,
}

impl OpenRun {
    /// Code byte closing the run the classic way
    pub fn code(&self) -> u8 {
        // At most MAX_RUN_PAYLOAD + 1, fits in a u8
        (self.write_index - self.code_index) as u8
    }
}

/// Split `plain` into runs, writing payload bytes and the code byte of every
/// closed run
///
/// The final run stays open: the caller writes `output[code_index]`.
/// `output` must hold `max_encoded_size(plain.len())` bytes.
pub(crate) fn stuff_runs(plain: &[u8], output: &mut [u8]) -> OpenRun {
    let mut code_index = 0;
    let mut write_index = 1;
    let mut last_value = 0;

    for &byte in plain {
        if write_index - code_index == MAX_RUN_PAYLOAD + 1 {
            output[code_index] = FULL_RUN_CODE;
            code_index = write_index;
            write_index += 1;
        }

        if byte == 0 {
            output[code_index] = (write_index - code_index) as u8;
            code_index = write_index;
            write_index += 1;
            last_value = 0;
        } else {
            output[write_index] = byte;
            write_index += 1;
            last_value = byte;
        }
    }

    OpenRun {
        code_index,
        write_index,
        last_value,
    }
}

/// How the decoder treats a run whose code byte reaches past the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShortRun {
    /// Truncated input (COBS)
    Reject,
    /// The code byte doubles as the run's last payload byte (COBS/R)
    CodeIsLastByte,
}

/// Rebuild the plain bytes from `encoded` into `output`
///
/// `output` must hold the variant's `max_decoded_size(encoded.len())` bytes.
pub(crate) fn unstuff_runs(
    encoded: &[u8],
    output: &mut [u8],
    short_run: ShortRun,
) -> Result<usize, CobsError> {
    let mut code_index = 0;
    let mut out_index = 0;

    while code_index < encoded.len() {
        let code = encoded[code_index];
        if code == 0 {
            return Err(CobsError::ZeroInEncodedData { index: code_index });
        }

        let run_end = code_index + code as usize;
        for in_index in code_index + 1..run_end {
            if in_index >= encoded.len() {
                if short_run == ShortRun::Reject {
                    return Err(CobsError::TruncatedEncodedData { code_index, code });
                }
                output[out_index] = code;
                out_index += 1;
                break;
            }

            let byte = encoded[in_index];
            if byte == 0 {
                return Err(CobsError::ZeroInEncodedData { index: in_index });
            }
            output[out_index] = byte;
            out_index += 1;
        }

        code_index = run_end;
        if code_index >= encoded.len() {
            break;
        }
        if code < FULL_RUN_CODE {
            output[out_index] = 0;
            out_index += 1;
        }
    }

    Ok(out_index)
}

// =============================================================================
// Public API
// =============================================================================

/// Worst-case encoded length for `plain_len` input bytes
pub fn max_encoded_size(plain_len: usize) -> usize {
    if plain_len == 0 {
        1
    } else {
        plain_len + plain_len.div_ceil(MAX_RUN_PAYLOAD)
    }
}

/// Worst-case decoded length for `encoded_len` input bytes
pub fn max_decoded_size(encoded_len: usize) -> usize {
    encoded_len.saturating_sub(1)
}

/// Encode `plain` into `output`
///
/// Returns number of bytes written. The delimiter is not appended.
pub fn encode(plain: &[u8], output: &mut [u8]) -> Result<usize, CobsError> {
    check_capacity(max_encoded_size(plain.len()), output)?;

    let run = stuff_runs(plain, output);
    output[run.code_index] = run.code();
    Ok(run.write_index)
}

/// Decode `encoded` (without delimiter) into `output`
///
/// Returns number of bytes written.
pub fn decode(encoded: &[u8], output: &mut [u8]) -> Result<usize, CobsError> {
    if encoded.is_empty() {
        return Err(CobsError::InvalidArgument {
            reason: "empty encoded input",
        });
    }
    check_capacity(max_decoded_size(encoded.len()), output)?;

    unstuff_runs(encoded, output, ShortRun::Reject)
}

/// Encode into a newly allocated vector sized to the encoded length
pub fn encode_to_vec(plain: &[u8]) -> Result<Vec<u8>, CobsError> {
    CobsCodec.encode_to_vec(plain)
}

/// Decode into a newly allocated vector sized to the decoded length
pub fn decode_to_vec(encoded: &[u8]) -> Result<Vec<u8>, CobsError> {
    CobsCodec.decode_to_vec(encoded)
}

/// Classic COBS codec
#[derive(Debug, Clone, Copy, Default)]
pub struct CobsCodec;

impl Codec for CobsCodec {
    fn name(&self) -> &'static str {
        "cobs"
    }

    fn max_encoded_size(&self, plain_len: usize) -> usize {
        max_encoded_size(plain_len)
    }

    fn max_decoded_size(&self, encoded_len: usize) -> usize {
        max_decoded_size(encoded_len)
    }

    fn encode(&self, plain: &[u8], output: &mut [u8]) -> Result<usize, CobsError> {
        encode(plain, output)
    }

    fn decode(&self, encoded: &[u8], output: &mut [u8]) -> Result<usize, CobsError> {
        decode(encoded, output)
    }
}
