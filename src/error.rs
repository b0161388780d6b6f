//! Error type for CRC parameter construction and checksum operations.
//!
//! One enum covers every failure the engine can report. Construction-time
//! errors (`UnsupportedWidth`, `ValueOutOfRange`, `SelfCheckFailed`) are fatal
//! to that construction attempt only; per-call errors are returned to the
//! immediate caller and nothing is retried internally.

use alloc::string::String;
use core::fmt;

/// Errors reported by checksum operations.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
  /// No catalogue entry with the requested name.
  UnknownAlgorithm(String),
  /// CRC width other than 32 or 64 bits.
  UnsupportedWidth(u8),
  /// A parameter does not fit within the model's width.
  ValueOutOfRange {
    /// Name of the offending parameter (`"poly"`, `"init"`, ...).
    field: &'static str,
    /// The rejected value.
    value: u64,
    /// The model width the value must fit in.
    width: u8,
  },
  /// The candidate parameters do not reproduce their own check value.
  SelfCheckFailed {
    /// The `check` field supplied by the caller.
    expected: u64,
    /// The checksum of `b"123456789"` actually computed.
    computed: u64,
  },
  /// Two digests with different parameter sets cannot be combined.
  IncompatibleParameters,
  /// Combine was given an implausibly large segment length.
  InvalidLength(u64),
  /// A checksum string is neither the hex nor the binary form for this width.
  MalformedChecksumInput {
    /// Length of the rejected input, in bytes.
    len: usize,
    /// The model width the input was parsed against.
    width: u8,
  },
  /// An underlying file-system failure, surfaced unmodified.
  #[cfg(feature = "std")]
  Io(std::io::Error),
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::UnknownAlgorithm(name) => write!(f, "unknown CRC algorithm: {name:?}"),
      Self::UnsupportedWidth(width) => write!(f, "unsupported CRC width {width} (expected 32 or 64)"),
      Self::ValueOutOfRange { field, value, width } => {
        write!(f, "{field} value {value:#x} does not fit in {width} bits")
      }
      Self::SelfCheckFailed { expected, computed } => {
        write!(
          f,
          "parameter self-check failed: expected {expected:#x}, computed {computed:#x}"
        )
      }
      Self::IncompatibleParameters => f.write_str("digests use different CRC parameters"),
      Self::InvalidLength(len) => write!(f, "invalid segment length {len}"),
      Self::MalformedChecksumInput { len, width } => {
        write!(
          f,
          "checksum input of {len} bytes is neither {} hex characters nor {} raw bytes",
          width / 4,
          width / 8
        )
      }
      #[cfg(feature = "std")]
      Self::Io(err) => write!(f, "i/o error: {err}"),
    }
  }
}

impl core::error::Error for Error {
  fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
    match self {
      #[cfg(feature = "std")]
      Self::Io(err) => Some(err),
      _ => None,
    }
  }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for Error {
  fn from(err: std::io::Error) -> Self {
    Self::Io(err)
  }
}

#[cfg(test)]
mod tests {
  use alloc::string::ToString;

  use super::*;

  #[test]
  fn display_messages() {
    assert_eq!(
      Error::UnsupportedWidth(16).to_string(),
      "unsupported CRC width 16 (expected 32 or 64)"
    );
    assert_eq!(
      Error::MalformedChecksumInput { len: 5, width: 32 }.to_string(),
      "checksum input of 5 bytes is neither 8 hex characters nor 4 raw bytes"
    );
  }

  #[test]
  fn self_check_carries_both_values() {
    let err = Error::SelfCheckFailed {
      expected: 0xCBF43926,
      computed: 0xDEADBEEF,
    };
    let msg = err.to_string();
    assert!(msg.contains("0xcbf43926"));
    assert!(msg.contains("0xdeadbeef"));
  }

  #[test]
  fn trait_bounds() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<Error>();
    assert_sync::<Error>();
  }
}
