//! COBS/R (Consistent Overhead Byte Stuffing, Reduced)
//!
//! Same runs as COBS. Only the last run of a block differs: when its last
//! payload byte is at least as large as the code byte that would close it,
//! that payload byte replaces the code byte and is dropped from the output.
//! The decoder sees a code reaching past the end of input and restores the
//! code value as the final byte.
//!
//! Typical saving is one byte per block, worst case is the same as COBS.

use super::cobs::{self, ShortRun};
use super::{check_capacity, Codec};
use crate::error::CobsError;

/// Worst-case encoded length for `plain_len` input bytes (same as COBS)
pub fn max_encoded_size(plain_len: usize) -> usize {
    cobs::max_encoded_size(plain_len)
}

/// Worst-case decoded length for `encoded_len` input bytes
///
/// An elided last byte makes the decoded block as long as the encoded one.
pub fn max_decoded_size(encoded_len: usize) -> usize {
    encoded_len
}

/// Encode `plain` into `output`
///
/// Returns number of bytes written. The delimiter is not appended.
pub fn encode(plain: &[u8], output: &mut [u8]) -> Result<usize, CobsError> {
    check_capacity(max_encoded_size(plain.len()), output)?;

    let run = cobs::stuff_runs(plain, output);
    let code = run.code();
    if run.last_value >= code {
        output[run.code_index] = run.last_value;
        Ok(run.write_index - 1)
    } else {
        output[run.code_index] = code;
        Ok(run.write_index)
    }
}

/// Decode `encoded` (without delimiter) into `output`
///
/// A final run reaching past the input is read as an elided run, never as
/// truncation: COBS/R has no `TruncatedEncodedData`.
pub fn decode(encoded: &[u8], output: &mut [u8]) -> Result<usize, CobsError> {
    if encoded.is_empty() {
        return Err(CobsError::InvalidArgument {
            reason: "empty encoded input",
        });
    }
    check_capacity(max_decoded_size(encoded.len()), output)?;

    cobs::unstuff_runs(encoded, output, ShortRun::CodeIsLastByte)
}

/// Encode into a newly allocated vector sized to the encoded length
pub fn encode_to_vec(plain: &[u8]) -> Result<Vec<u8>, CobsError> {
    CobsrCodec.encode_to_vec(plain)
}

/// Decode into a newly allocated vector sized to the decoded length
pub fn decode_to_vec(encoded: &[u8]) -> Result<Vec<u8>, CobsError> {
    CobsrCodec.decode_to_vec(encoded)
}

/// Reduced-overhead COBS/R codec
#[derive(Debug, Clone, Copy, Default)]
pub struct CobsrCodec;

impl Codec for CobsrCodec {
    fn name(&self) -> &'static str {
        "cobsr"
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

#[cfg(test)]
mod tests {
    use super::*;

    /// Non-zero bytes 1, 2, ... wrapping before 0
    fn non_zero(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i % 255 + 1) as u8).collect()
    }

    fn concat(parts: &[&[u8]]) -> Vec<u8> {
        parts.concat()
    }

    fn vectors() -> Vec<(Vec<u8>, Vec<u8>)> {
        // 253 bytes ending in 0xFD, so the final 0xFE/0xFF can be chosen
        let run_253 = non_zero(253);
        let run_254 = non_zero(254);
        let run_255 = non_zero(255);

        vec![
            (vec![], vec![0x01]),
            (vec![0x01], vec![0x02, 0x01]),
            (vec![0x02], vec![0x02]),
            (vec![0x03], vec![0x03]),
            (vec![0x7E], vec![0x7E]),
            (vec![0x7F], vec![0x7F]),
            (vec![0x80], vec![0x80]),
            (vec![0xD5], vec![0xD5]),
            (vec![0xFE], vec![0xFE]),
            (vec![0xFF], vec![0xFF]),
            (b"a\x02".to_vec(), b"\x03a\x02".to_vec()),
            (b"a\x03".to_vec(), b"\x03a".to_vec()),
            (b"a\xFF".to_vec(), b"\xFFa".to_vec()),
            (
                vec![0x05, 0x04, 0x03, 0x02, 0x01],
                vec![0x06, 0x05, 0x04, 0x03, 0x02, 0x01],
            ),
            (b"12345".to_vec(), b"51234".to_vec()),
            (
                b"12345\x00\x04\x03\x02\x01".to_vec(),
                b"\x0612345\x05\x04\x03\x02\x01".to_vec(),
            ),
            (b"12345\x006789".to_vec(), b"\x06123459678".to_vec()),
            (b"\x0012345\x006789".to_vec(), b"\x01\x06123459678".to_vec()),
            (b"12345\x006789\x00".to_vec(), b"\x0612345\x056789\x01".to_vec()),
            (vec![0x00], vec![0x01, 0x01]),
            (vec![0x00, 0x00], vec![0x01, 0x01, 0x01]),
            (vec![0x00, 0x00, 0x00], vec![0x01, 0x01, 0x01, 0x01]),
            // 0xFD < 0xFE: no elision
            (run_253.clone(), concat(&[&[0xFE], &run_253])),
            // 0xFE < 0xFF: no elision
            (run_254.clone(), concat(&[&[0xFF], &run_254])),
            (
                concat(&[&run_253, &[0xFF]]),
                concat(&[&[0xFF], &run_253]),
            ),
            (
                concat(&[&run_253, &[0x00]]),
                concat(&[&[0xFE], &run_253, &[0x01]]),
            ),
            (
                concat(&[&run_254, &[0x00]]),
                concat(&[&[0xFF], &run_254, &[0x01, 0x01]]),
            ),
            // Last run is [0xFF], elided into its code byte
            (run_255.clone(), concat(&[&[0xFF], &run_255])),
            (
                concat(&[&run_254, &[0x35, 0x00]]),
                concat(&[&[0xFF], &run_254, &[0x02, 0x35, 0x01]]),
            ),
        ]
    }

    #[test]
    fn test_encode_vectors() {
        let mut buffer = [0u8; 300];
        for (i, (plain, encoded)) in vectors().iter().enumerate() {
            let len = encode(plain, &mut buffer).unwrap();
            assert_eq!(&buffer[..len], &encoded[..], "vector {}", i);
        }
    }

    #[test]
    fn test_decode_vectors() {
        let mut buffer = [0u8; 300];
        for (i, (plain, encoded)) in vectors().iter().enumerate() {
            let len = decode(encoded, &mut buffer).unwrap();
            assert_eq!(&buffer[..len], &plain[..], "vector {}", i);
        }
    }

    #[test]
    fn test_elision_saves_one_byte() {
        let plain = b"a\x03";
        let reduced = encode_to_vec(plain).unwrap();
        let classic = cobs::encode_to_vec(plain).unwrap();
        assert_eq!(reduced.len() + 1, classic.len());
        assert_eq!(decode_to_vec(&reduced).unwrap(), plain);
    }

    #[test]
    fn test_elision_only_on_last_run() {
        // Interior run "a\x7F" closes on a zero and keeps its code byte
        let encoded = encode_to_vec(b"a\x7F\x00b").unwrap();
        assert_eq!(encoded, b"\x03a\x7Fb");
    }

    #[test]
    fn test_decode_never_reports_truncation() {
        // Truncated under COBS, elided under COBS/R
        let mut buffer = [0u8; 8];
        let len = decode(&[0x05, 0x01], &mut buffer).unwrap();
        assert_eq!(&buffer[..len], &[0x01, 0x05]);
    }

    #[test]
    fn test_decode_errors() {
        let mut buffer = [0u8; 8];
        assert!(matches!(
            decode(&[], &mut buffer),
            Err(CobsError::InvalidArgument { .. })
        ));
        assert_eq!(
            decode(&[0x00], &mut buffer),
            Err(CobsError::ZeroInEncodedData { index: 0 })
        );
        assert_eq!(
            decode(&[0x04, 0x11, 0x00], &mut buffer),
            Err(CobsError::ZeroInEncodedData { index: 2 })
        );
    }

    #[test]
    fn test_size_functions() {
        assert_eq!(max_encoded_size(0), 1);
        assert_eq!(max_encoded_size(255), cobs::max_encoded_size(255));
        assert_eq!(max_decoded_size(0), 0);
        assert_eq!(max_decoded_size(1), 1);
        assert_eq!(max_decoded_size(300), 300);
    }

    #[test]
    fn test_decode_output_too_small() {
        // [0x02] decodes to one byte, needs a one-byte buffer
        let mut buffer = [0u8; 0];
        assert!(matches!(
            decode(&[0x02], &mut buffer),
            Err(CobsError::InvalidArgument { .. })
        ));
    }
}
