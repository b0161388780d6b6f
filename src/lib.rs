//! Parameterised CRC-32/CRC-64 checksums.
//!
//! This crate computes CRC checksums under arbitrary parameterisations: a
//! catalogue of named standards (CRC-32/ISO-HDLC, CRC-32/BZIP2, CRC-64/XZ,
//! ...) and fully custom models defined by width, polynomial, initial value,
//! input/output reflection, and final XOR. It supports one-shot checksums
//! over buffers and files, streaming digests, and an algebraic **combine**
//! operation that merges the checksums of adjacent byte ranges without
//! re-reading any data.
//!
//! # One-shot
//!
//! ```
//! use crckit::Algorithm;
//!
//! assert_eq!(crckit::checksum(Algorithm::Crc32IsoHdlc, b"123456789"), 0xCBF43926);
//! assert_eq!(crckit::checksum_hex(Algorithm::Crc64Xz, b"123456789"), "995dc9bbdf1939fa");
//! ```
//!
//! # Streaming
//!
//! ```
//! use crckit::{Algorithm, Digest};
//!
//! let mut digest = Digest::new(Algorithm::Crc32IsoHdlc);
//! digest.update(b"1234").update(b"56789");
//! assert_eq!(digest.finalize(), 0xCBF43926);
//! ```
//!
//! # Combine
//!
//! Hash independent ranges (in parallel if you like), then merge the results
//! in left-to-right order:
//!
//! ```
//! use crckit::Algorithm;
//!
//! let crc_a = crckit::checksum(Algorithm::Crc32IsoHdlc, b"123");
//! let crc_b = crckit::checksum(Algorithm::Crc32IsoHdlc, b"456789");
//! let merged = crckit::checksum_combine(Algorithm::Crc32IsoHdlc, crc_a, crc_b, 6).unwrap();
//! assert_eq!(merged, 0xCBF43926);
//! ```
//!
//! # Custom models
//!
//! ```
//! use crckit::CrcParams;
//!
//! // CRC-32/ISO-HDLC spelled out by hand; a wrong check value is rejected.
//! let params = CrcParams::new(32, 0x04C11DB7, 0xFFFFFFFF, true, true, 0xFFFFFFFF, 0xCBF43926)?;
//! assert_eq!(crckit::checksum(params, b"123456789"), 0xCBF43926);
//! # Ok::<(), crckit::Error>(())
//! ```
//!
//! CRC is not a cryptographic hash: it detects accidental corruption, not
//! adversarial tampering.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod combine;
mod digest;
mod error;
mod format;
mod gf2;
#[cfg(feature = "std")]
mod io;
mod kernels;
pub mod parallel;
mod params;
pub mod reference;
mod registry;

use alloc::{string::String, vec::Vec};

pub use digest::Digest;
pub use error::Error;
#[cfg(feature = "std")]
pub use io::{DigestReader, DigestWriter, checksum_file, checksum_file_binary, checksum_file_hex};
pub use params::{CrcParams, KEY_COUNT};
pub use registry::{Algorithm, Model, list_algorithms};

/// Largest segment length accepted by the combine surface.
///
/// No real segment exceeds it; anything larger is treated as a caller error
/// rather than computed.
pub const MAX_COMBINE_LEN: u64 = i64::MAX as u64;

/// Checksum a buffer, returning the raw value.
#[must_use]
pub fn checksum(model: impl Into<Model>, data: &[u8]) -> u64 {
  Digest::new(model).update(data).finalize()
}

/// Checksum a buffer, rendered as fixed-width lowercase hex.
#[must_use]
pub fn checksum_hex(model: impl Into<Model>, data: &[u8]) -> String {
  let model = model.into();
  model.format_hex(checksum(model, data))
}

/// Checksum a buffer, rendered as big-endian bytes.
#[must_use]
pub fn checksum_binary(model: impl Into<Model>, data: &[u8]) -> Vec<u8> {
  let model = model.into();
  model.format_binary(checksum(model, data))
}

/// Combine two raw checksums of adjacent segments.
///
/// Given `crc_a = crc(A)` and `crc_b = crc(B)`, computes `crc(A || B)` from
/// the checksums and `len_b = |B|` alone. `len_b == 0` returns `crc_a`
/// unchanged. The caller supplies operands in left-to-right order; a swapped
/// order silently yields the checksum of the swapped concatenation.
///
/// # Errors
///
/// [`Error::InvalidLength`] when `len_b` exceeds [`MAX_COMBINE_LEN`].
pub fn checksum_combine(model: impl Into<Model>, crc_a: u64, crc_b: u64, len_b: u64) -> Result<u64, Error> {
  if len_b > MAX_COMBINE_LEN {
    return Err(Error::InvalidLength(len_b));
  }
  Ok(combine::combine_raw(model.into().params(), crc_a, crc_b, len_b))
}

/// Combine two rendered checksums, returning hex.
///
/// Inputs are auto-detected by length: exactly `width / 4` hex characters or
/// `width / 8` raw bytes.
///
/// # Errors
///
/// [`Error::MalformedChecksumInput`] for inputs in neither form;
/// [`Error::InvalidLength`] when `len_b` exceeds [`MAX_COMBINE_LEN`].
pub fn combine_hex(model: impl Into<Model>, checksum_a: &[u8], checksum_b: &[u8], len_b: u64) -> Result<String, Error> {
  let model = model.into();
  let raw = combine_parsed(&model, checksum_a, checksum_b, len_b)?;
  Ok(model.format_hex(raw))
}

/// Combine two rendered checksums, returning big-endian bytes.
///
/// # Errors
///
/// Same as [`combine_hex`].
pub fn combine_binary(
  model: impl Into<Model>,
  checksum_a: &[u8],
  checksum_b: &[u8],
  len_b: u64,
) -> Result<Vec<u8>, Error> {
  let model = model.into();
  let raw = combine_parsed(&model, checksum_a, checksum_b, len_b)?;
  Ok(model.format_binary(raw))
}

fn combine_parsed(model: &Model, checksum_a: &[u8], checksum_b: &[u8], len_b: u64) -> Result<u64, Error> {
  if len_b > MAX_COMBINE_LEN {
    return Err(Error::InvalidLength(len_b));
  }
  let crc_a = model.parse_checksum(checksum_a)?;
  let crc_b = model.parse_checksum(checksum_b)?;
  Ok(combine::combine_raw(model.params(), crc_a, crc_b, len_b))
}

/// Raw CRC-32/ISO-HDLC of a buffer, the everyday `crc32()`.
#[inline]
#[must_use]
pub fn crc32(data: &[u8]) -> u32 {
  checksum(Algorithm::Crc32IsoHdlc, data) as u32
}
