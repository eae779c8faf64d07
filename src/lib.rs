//! COBS and COBS/R byte stuffing
//!
//! Turns arbitrary bytes into a block free of 0x00, so 0x00 can delimit
//! frames on a serial line or socket, and back again.
//!
//! - [`codec::cobs`]: classic COBS, one code byte per run of at most 254 bytes
//! - [`codec::cobsr`]: COBS/R, saves the final code byte when unambiguous
//!
//! Both variants work on caller-provided slices (`encode`/`decode` plus
//! `max_encoded_size`/`max_decoded_size` to size them) and offer allocating
//! wrappers through the [`Codec`] trait. Adding or stripping the delimiter is
//! left to the transport.
//!
//! ```
//! use oc_cobs::codec::{cobs, cobsr};
//!
//! let mut buf = [0u8; 8];
//! let len = cobs::encode(b"\x11\x00\x22", &mut buf).unwrap();
//! assert_eq!(&buf[..len], &[0x02, 0x11, 0x02, 0x22]);
//!
//! let encoded = cobsr::encode_to_vec(b"a\x03").unwrap();
//! assert_eq!(encoded, b"\x03a");
//! assert_eq!(cobsr::decode_to_vec(&encoded).unwrap(), b"a\x03");
//! ```

pub mod cli;
pub mod codec;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod tool;

pub use codec::{Codec, CobsCodec, CobsrCodec, Variant};
pub use error::{CobsError, ToolError};
