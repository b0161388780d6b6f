//! Streaming CRC digest.
//!
//! A [`Digest`] wraps a resolved model and absorbs input incrementally.
//! `finalize` is a snapshot read, not a state transition, so further updates
//! after a finalize are valid and keep accumulating. A digest also tracks how
//! many bytes it has absorbed, which is what lets two digests be merged with
//! [`Digest::combine`]: hash independent ranges in parallel (one digest per
//! range, no shared state), then combine them in left-to-right order.
//!
//! A digest is a single-owner mutable value with no internal locking;
//! Rust's `&mut` receiver is what makes `finalize_reset` atomic with respect
//! to concurrent misuse.

use alloc::{boxed::Box, string::String, vec::Vec};

use crate::{
  combine,
  error::Error,
  kernels::{self, Tables},
  params::CrcParams,
  registry::Model,
};

/// Incremental checksum computation over one CRC model.
///
/// # Example
///
/// ```
/// use crckit::{Algorithm, Digest};
///
/// let mut digest = Digest::new(Algorithm::Crc32IsoHdlc);
/// digest.update(b"1234").update(b"56789");
/// assert_eq!(digest.finalize_hex(), "cbf43926");
/// ```
#[derive(Clone)]
pub struct Digest {
  model: Model,
  tables: Box<Tables>,
  register: u64,
  count: u64,
}

impl Digest {
  /// Create a digest bound to a model.
  #[must_use]
  pub fn new(model: impl Into<Model>) -> Self {
    let model = model.into();
    let tables = kernels::generate_tables(model.params());
    let register = model.params().init_register();
    Self {
      model,
      tables,
      register,
      count: 0,
    }
  }

  /// Absorb more input. Chainable.
  pub fn update(&mut self, data: &[u8]) -> &mut Self {
    self.register = kernels::update(self.model.params(), &self.tables, self.register, data);
    self.count += data.len() as u64;
    self
  }

  /// The checksum of everything absorbed so far.
  ///
  /// Reads a copy of the register; the digest keeps accumulating.
  #[must_use]
  pub fn finalize(&self) -> u64 {
    self.model.params().checksum_of(self.register)
  }

  /// [`Self::finalize`] rendered as fixed-width lowercase hex.
  #[must_use]
  pub fn finalize_hex(&self) -> String {
    self.model.format_hex(self.finalize())
  }

  /// [`Self::finalize`] rendered as big-endian bytes.
  #[must_use]
  pub fn finalize_binary(&self) -> Vec<u8> {
    self.model.format_binary(self.finalize())
  }

  /// Finalize, then reset to the initial state in one call.
  pub fn finalize_reset(&mut self) -> u64 {
    let checksum = self.finalize();
    self.reset();
    checksum
  }

  /// Discard all absorbed input and return to the initial state. Chainable.
  pub fn reset(&mut self) -> &mut Self {
    self.register = self.model.params().init_register();
    self.count = 0;
    self
  }

  /// Merge another digest into this one, in place.
  ///
  /// Afterwards `self` is the digest of "`self`'s bytes followed by
  /// `other`'s bytes". The caller supplies operands in left-to-right order;
  /// a swapped order silently yields the checksum of the swapped
  /// concatenation; the algorithm cannot detect it.
  ///
  /// # Errors
  ///
  /// [`Error::IncompatibleParameters`] when the digests were built from
  /// different parameter sets.
  pub fn combine(&mut self, other: &Digest) -> Result<&mut Self, Error> {
    if self.model.params() != other.model.params() {
      return Err(Error::IncompatibleParameters);
    }
    self.register = combine::combine_registers(self.model.params(), self.register, other.register, other.count);
    self.count += other.count;
    Ok(self)
  }

  /// Number of bytes absorbed since construction or the last reset.
  #[inline]
  #[must_use]
  pub fn count(&self) -> u64 {
    self.count
  }

  /// The resolved parameter set this digest computes under.
  #[inline]
  #[must_use]
  pub fn params(&self) -> &CrcParams {
    self.model.params()
  }
}

impl core::fmt::Debug for Digest {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    // Tables are derived data; eliding them keeps the output readable.
    f.debug_struct("Digest")
      .field("model", &self.model)
      .field("register", &self.register)
      .field("count", &self.count)
      .finish_non_exhaustive()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{Algorithm, checksum};

  const TEST_DATA: &[u8] = b"123456789";

  #[test]
  fn streaming_matches_oneshot() {
    for &(name, algorithm) in crate::list_algorithms() {
      let oneshot = checksum(algorithm, TEST_DATA);

      let mut digest = Digest::new(algorithm);
      digest.update(&TEST_DATA[..4]).update(&[]).update(&TEST_DATA[4..]);
      assert_eq!(digest.finalize(), oneshot, "{name}");
      assert_eq!(digest.count(), TEST_DATA.len() as u64);
    }
  }

  #[test]
  fn finalize_is_a_snapshot() {
    let mut digest = Digest::new(Algorithm::Crc64Xz);
    digest.update(b"1234");
    let partial = digest.finalize();
    assert_eq!(partial, checksum(Algorithm::Crc64Xz, b"1234"));

    // Updating after a finalize keeps accumulating.
    digest.update(b"56789");
    assert_eq!(digest.finalize(), checksum(Algorithm::Crc64Xz, TEST_DATA));
  }

  #[test]
  fn reset_restores_fresh_state() {
    let mut digest = Digest::new(Algorithm::Crc32Iscsi);
    digest.update(b"some unrelated data").reset().update(TEST_DATA);
    assert_eq!(digest.finalize(), checksum(Algorithm::Crc32Iscsi, TEST_DATA));
    assert_eq!(digest.count(), TEST_DATA.len() as u64);
  }

  #[test]
  fn finalize_reset_equals_finalize_then_reset() {
    let mut a = Digest::new(Algorithm::Crc32Bzip2);
    let mut b = Digest::new(Algorithm::Crc32Bzip2);
    a.update(TEST_DATA);
    b.update(TEST_DATA);

    let via_pair = {
      let checksum = b.finalize();
      b.reset();
      checksum
    };
    assert_eq!(a.finalize_reset(), via_pair);
    assert_eq!(a.finalize(), b.finalize());
    assert_eq!(a.count(), 0);
  }

  #[test]
  fn combine_digests() {
    for &(name, algorithm) in crate::list_algorithms() {
      let mut left = Digest::new(algorithm);
      let mut right = Digest::new(algorithm);
      left.update(b"123");
      right.update(b"456789");

      left.combine(&right).expect("same parameters");
      assert_eq!(left.finalize(), checksum(algorithm, TEST_DATA), "{name}");
      assert_eq!(left.count(), 9);
    }
  }

  #[test]
  fn combine_is_usable_after_merge() {
    // The merged digest keeps working: more updates and further combines.
    let mut digest = Digest::new(Algorithm::Crc64Nvme);
    digest.update(b"12");

    let mut mid = Digest::new(Algorithm::Crc64Nvme);
    mid.update(b"345");
    digest.combine(&mid).expect("same parameters");

    digest.update(b"6789");
    assert_eq!(digest.finalize(), checksum(Algorithm::Crc64Nvme, TEST_DATA));
  }

  #[test]
  fn combine_with_empty_digest_is_identity() {
    let mut digest = Digest::new(Algorithm::Crc32IsoHdlc);
    digest.update(TEST_DATA);
    let before = digest.finalize();

    let empty = Digest::new(Algorithm::Crc32IsoHdlc);
    digest.combine(&empty).expect("same parameters");
    assert_eq!(digest.finalize(), before);
  }

  #[test]
  fn combine_rejects_mismatched_parameters() {
    let mut digest = Digest::new(Algorithm::Crc32IsoHdlc);
    let other = Digest::new(Algorithm::Crc64Xz);
    let err = digest.combine(&other).unwrap_err();
    assert!(matches!(err, Error::IncompatibleParameters));
  }

  #[test]
  fn php_alias_digest_formats_swapped() {
    let mut php = Digest::new(Algorithm::Crc32Php);
    let mut bzip2 = Digest::new(Algorithm::Crc32Bzip2);
    php.update(TEST_DATA);
    bzip2.update(TEST_DATA);

    // Same math, different rendering.
    assert_eq!(php.finalize(), bzip2.finalize());
    let swapped = (bzip2.finalize() as u32).swap_bytes();
    assert_eq!(php.finalize_hex(), alloc::format!("{swapped:08x}"));
  }
}
