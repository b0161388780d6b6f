//! File hashing and I/O adapters.
//!
//! [`checksum_file`] streams a file through a digest in fixed-size chunks.
//! [`DigestReader`] and [`DigestWriter`] wrap `std::io::Read`/`Write` and
//! update a digest transparently with exactly the bytes actually transferred:
//! short reads hash only what arrived, and writes hash before handing bytes
//! to the inner writer so a failed write leaves no ambiguity about what was
//! hashed.

use std::{fs::File, io, path::Path, vec};

use crate::{Digest, error::Error, registry::Model};

/// Chunk size for file streaming.
const FILE_CHUNK: usize = 512 * 1024;

/// Checksum a file's contents.
///
/// Streams the file in 512 KiB chunks; the result is identical to hashing
/// the whole contents in memory.
///
/// # Errors
///
/// [`Error::Io`] when the file cannot be opened or read.
pub fn checksum_file(model: impl Into<Model>, path: impl AsRef<Path>) -> Result<u64, Error> {
  let mut file = File::open(path)?;
  let mut digest = Digest::new(model);
  let mut buf = vec![0u8; FILE_CHUNK];
  loop {
    let n = io::Read::read(&mut file, &mut buf)?;
    if n == 0 {
      break;
    }
    if let Some(data) = buf.get(..n) {
      digest.update(data);
    }
  }
  Ok(digest.finalize())
}

/// Checksum a file's contents, rendered as fixed-width lowercase hex.
///
/// # Errors
///
/// Same as [`checksum_file`].
pub fn checksum_file_hex(model: impl Into<Model>, path: impl AsRef<Path>) -> Result<alloc::string::String, Error> {
  let model = model.into();
  Ok(model.format_hex(checksum_file(model, path)?))
}

/// Checksum a file's contents, rendered as big-endian bytes.
///
/// # Errors
///
/// Same as [`checksum_file`].
pub fn checksum_file_binary(model: impl Into<Model>, path: impl AsRef<Path>) -> Result<alloc::vec::Vec<u8>, Error> {
  let model = model.into();
  Ok(model.format_binary(checksum_file(model, path)?))
}

fn read_and_update<R: io::Read>(inner: &mut R, buf: &mut [u8], digest: &mut Digest) -> io::Result<usize> {
  let n = inner.read(buf)?;
  if let Some(data) = buf.get(..n) {
    digest.update(data);
  }
  Ok(n)
}

// ─────────────────────────────────────────────────────────────────────────────
// Reader adapter
// ─────────────────────────────────────────────────────────────────────────────

/// Wraps a [`Read`](std::io::Read) and checksums everything read through it.
///
/// # Example
///
/// ```
/// use std::io::{Cursor, Read};
///
/// use crckit::{Algorithm, DigestReader};
///
/// let mut reader = DigestReader::new(Cursor::new(b"hello world".to_vec()), Algorithm::Crc32IsoHdlc);
/// let mut contents = Vec::new();
/// reader.read_to_end(&mut contents)?;
/// assert_eq!(reader.crc(), crckit::checksum(Algorithm::Crc32IsoHdlc, &contents));
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone)]
pub struct DigestReader<R> {
  inner: R,
  digest: Digest,
}

impl<R> DigestReader<R> {
  /// Wrap a reader, checksumming under `model`.
  #[must_use]
  pub fn new(inner: R, model: impl Into<Model>) -> Self {
    Self {
      inner,
      digest: Digest::new(model),
    }
  }

  /// The checksum of everything read so far.
  ///
  /// Does not consume the reader; further reads keep updating it.
  #[inline]
  #[must_use]
  pub fn crc(&self) -> u64 {
    self.digest.finalize()
  }

  /// The underlying digest.
  #[inline]
  pub fn digest_mut(&mut self) -> &mut Digest {
    &mut self.digest
  }

  /// Unwrap, returning the inner reader and the final checksum.
  #[inline]
  pub fn into_parts(self) -> (R, u64) {
    let crc = self.digest.finalize();
    (self.inner, crc)
  }

  /// Unwrap, discarding the checksum.
  #[inline]
  pub fn into_inner(self) -> R {
    self.inner
  }
}

impl<R: io::Read> io::Read for DigestReader<R> {
  #[inline]
  fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
    read_and_update(&mut self.inner, buf, &mut self.digest)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Writer adapter
// ─────────────────────────────────────────────────────────────────────────────

/// Wraps a [`Write`](std::io::Write) and checksums everything written.
///
/// The digest is updated *before* the inner write, so after a failed write
/// the caller knows exactly what was hashed versus what was delivered.
#[derive(Clone)]
pub struct DigestWriter<W> {
  inner: W,
  digest: Digest,
}

impl<W> DigestWriter<W> {
  /// Wrap a writer, checksumming under `model`.
  #[must_use]
  pub fn new(inner: W, model: impl Into<Model>) -> Self {
    Self {
      inner,
      digest: Digest::new(model),
    }
  }

  /// The checksum of everything written so far.
  #[inline]
  #[must_use]
  pub fn crc(&self) -> u64 {
    self.digest.finalize()
  }

  /// The underlying digest.
  #[inline]
  pub fn digest_mut(&mut self) -> &mut Digest {
    &mut self.digest
  }

  /// Unwrap, returning the inner writer and the final checksum.
  #[inline]
  pub fn into_parts(self) -> (W, u64) {
    let crc = self.digest.finalize();
    (self.inner, crc)
  }

  /// Unwrap, discarding the checksum.
  #[inline]
  pub fn into_inner(self) -> W {
    self.inner
  }
}

impl<W: io::Write> io::Write for DigestWriter<W> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    self.digest.update(buf);
    self.inner.write(buf)
  }

  #[inline]
  fn flush(&mut self) -> io::Result<()> {
    self.inner.flush()
  }
}

#[cfg(test)]
mod tests {
  use std::{
    io::{Cursor, Read, Write},
    vec::Vec,
  };

  use super::*;
  use crate::{Algorithm, checksum};

  #[test]
  fn reader_hashes_what_it_reads() {
    let data = b"The quick brown fox jumps over the lazy dog".to_vec();
    let mut reader = DigestReader::new(Cursor::new(data.clone()), Algorithm::Crc64Xz);

    let mut out = Vec::new();
    reader.read_to_end(&mut out).unwrap();
    assert_eq!(out, data);
    assert_eq!(reader.crc(), checksum(Algorithm::Crc64Xz, &data));
  }

  #[test]
  fn reader_handles_small_buffers() {
    let data = b"chunk boundary stress".to_vec();
    let mut reader = DigestReader::new(Cursor::new(data.clone()), Algorithm::Crc32IsoHdlc);

    let mut buf = [0u8; 3];
    loop {
      let n = reader.read(&mut buf).unwrap();
      if n == 0 {
        break;
      }
    }
    assert_eq!(reader.crc(), checksum(Algorithm::Crc32IsoHdlc, &data));
  }

  #[test]
  fn writer_hashes_what_it_writes() {
    let data = b"hello world";
    let mut writer = DigestWriter::new(Vec::new(), Algorithm::Crc32Iscsi);
    writer.write_all(data).unwrap();

    let (out, crc) = writer.into_parts();
    assert_eq!(out, data);
    assert_eq!(crc, checksum(Algorithm::Crc32Iscsi, data));
  }

  #[test]
  fn file_checksum_matches_in_memory() {
    let data: Vec<u8> = (0..100_000u32).map(|i| (i % 251) as u8).collect();
    let path = std::env::temp_dir().join("crckit-io-test.bin");
    std::fs::write(&path, &data).unwrap();

    let from_file = checksum_file(Algorithm::Crc64Nvme, &path).unwrap();
    let hex = checksum_file_hex(Algorithm::Crc64Nvme, &path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(from_file, checksum(Algorithm::Crc64Nvme, &data));
    assert_eq!(hex, crate::checksum_hex(Algorithm::Crc64Nvme, &data));
  }

  #[test]
  fn missing_file_surfaces_io_error() {
    let err = checksum_file(Algorithm::Crc32IsoHdlc, "/nonexistent/crckit-test-path").unwrap_err();
    assert!(matches!(err, Error::Io(_)));
  }
}
