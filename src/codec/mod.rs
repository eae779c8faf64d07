//! Codec abstraction for byte stuffing
//!
//! Two variants share one contract:
//! - **COBS**: one code byte per run of at most 254 bytes, always present
//! - **COBS/R**: same runs, but the final code byte may replace the last
//!   payload byte, saving one byte in the common case
//!
//! Both only transform byte buffers. Framing (the 0x00 delimiter around an
//! encoded block) belongs to the transport.
//!
//! # Adding a new codec
//!
//! 1. Create `codec/my_codec.rs`
//! 2. Implement the `Codec` trait
//! 3. Add `pub mod my_codec;` here and a `Variant`
//! 4. No other changes needed

pub mod cobs;
pub mod cobsr;

pub use cobs::CobsCodec;
pub use cobsr::CobsrCodec;

use crate::error::CobsError;
use bytes::BytesMut;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Codec trait for byte stuffing
///
/// Implementors provide the four core operations over caller-owned slices.
/// The provided methods add allocating wrappers on top of them.
pub trait Codec: Send + Sync {
    /// Short name used in logs and errors
    fn name(&self) -> &'static str;

    /// Worst-case encoded length for `plain_len` input bytes
    fn max_encoded_size(&self, plain_len: usize) -> usize;

    /// Worst-case decoded length for `encoded_len` input bytes
    fn max_decoded_size(&self, encoded_len: usize) -> usize;

    /// Encode `plain` into `output`, returning the number of bytes written
    ///
    /// `output` must hold at least `max_encoded_size(plain.len())` bytes.
    fn encode(&self, plain: &[u8], output: &mut [u8]) -> Result<usize, CobsError>;

    /// Decode `encoded` into `output`, returning the number of bytes written
    ///
    /// `output` must hold at least `max_decoded_size(encoded.len())` bytes.
    /// On error the contents of `output` are unspecified.
    fn decode(&self, encoded: &[u8], output: &mut [u8]) -> Result<usize, CobsError>;

    /// Encode into a reusable vector (cleared first)
    fn encode_into(&self, plain: &[u8], output: &mut Vec<u8>) -> Result<usize, CobsError> {
        output.clear();
        output.resize(self.max_encoded_size(plain.len()), 0);
        let written = self.encode(plain, output)?;
        output.truncate(written);
        Ok(written)
    }

    /// Encode into a freshly allocated vector sized exactly to the output
    fn encode_to_vec(&self, plain: &[u8]) -> Result<Vec<u8>, CobsError> {
        let mut output = Vec::new();
        self.encode_into(plain, &mut output)?;
        Ok(output)
    }

    /// Decode into a freshly allocated vector sized exactly to the output
    fn decode_to_vec(&self, encoded: &[u8]) -> Result<Vec<u8>, CobsError> {
        let mut output = vec![0; self.max_decoded_size(encoded.len())];
        let written = self.decode(encoded, &mut output).inspect_err(|e| {
            debug!("{} decode of {} bytes failed: {}", self.name(), encoded.len(), e)
        })?;
        output.truncate(written);
        Ok(output)
    }

    /// Decode and append to a `BytesMut` (does not clear it)
    ///
    /// On error the buffer keeps its original length.
    fn decode_into_bytes(&self, encoded: &[u8], output: &mut BytesMut) -> Result<usize, CobsError> {
        let start_len = output.len();
        output.resize(start_len + self.max_decoded_size(encoded.len()), 0);

        match self.decode(encoded, &mut output[start_len..]) {
            Ok(written) => {
                output.truncate(start_len + written);
                Ok(written)
            }
            Err(e) => {
                output.truncate(start_len);
                debug!("{} decode of {} bytes failed: {}", self.name(), encoded.len(), e);
                Err(e)
            }
        }
    }
}

/// Selectable codec variant (config files and command line)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Classic COBS
    #[default]
    Cobs,
    /// Reduced-overhead COBS/R
    Cobsr,
}

impl Variant {
    /// Codec implementing this variant
    pub fn codec(self) -> &'static dyn Codec {
        match self {
            Self::Cobs => &CobsCodec,
            Self::Cobsr => &CobsrCodec,
        }
    }
}

/// Fails with `InvalidArgument` unless `output` holds `needed` bytes
pub(crate) fn check_capacity(needed: usize, output: &[u8]) -> Result<(), CobsError> {
    if output.len() < needed {
        return Err(CobsError::InvalidArgument {
            reason: "output buffer smaller than worst-case size",
        });
    }
    Ok(())
}
