//! Chunked checksum helpers built on the combine operation.
//!
//! These helpers bring no parallelism of their own: callers hash independent
//! chunks however they like (threads, rayon, a work queue) and fold the
//! results here. The combine operation makes the fold O(chunks × log len)
//! instead of re-reading any data.
//!
//! The caller is responsible for folding chunks in their original order; the
//! algorithm cannot detect a swapped pair.

use crate::{Digest, combine, registry::Model};

/// Checksum of the concatenation of `chunks`, computed chunk by chunk.
///
/// Equivalent to hashing the concatenated bytes in one pass.
///
/// # Example
///
/// ```
/// use crckit::{Algorithm, parallel::checksum_chunks};
///
/// let data = b"The quick brown fox jumps over the lazy dog";
/// let chunks: Vec<&[u8]> = data.chunks(16).collect();
/// assert_eq!(checksum_chunks(Algorithm::Crc32IsoHdlc, &chunks), crckit::checksum(Algorithm::Crc32IsoHdlc, data));
/// ```
#[must_use]
pub fn checksum_chunks(model: impl Into<Model>, chunks: &[&[u8]]) -> u64 {
  let model = model.into();
  let mut digest = Digest::new(model);

  let Some((first, rest)) = chunks.split_first() else {
    return digest.finalize();
  };

  let mut result = digest.update(first).finalize_reset();
  for chunk in rest {
    let chunk_crc = digest.update(chunk).finalize_reset();
    result = combine::combine_raw(model.params(), result, chunk_crc, chunk.len() as u64);
  }
  result
}

/// Fold pre-computed `(checksum, length)` pairs, in order, into the checksum
/// of the concatenated data. Returns `None` for an empty slice.
#[must_use]
pub fn combine_checksums(model: impl Into<Model>, checksums: &[(u64, u64)]) -> Option<u64> {
  let model = model.into();
  let mut iter = checksums.iter();
  let &(first, _) = iter.next()?;

  let mut result = first;
  for &(crc, len) in iter {
    result = combine::combine_raw(model.params(), result, crc, len);
  }
  Some(result)
}
