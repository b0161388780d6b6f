//! CRC parameter model.
//!
//! [`CrcParams`] captures a complete CRC variant following the conventions of
//! the [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/):
//!
//! | Parameter | Description |
//! |-----------|-------------|
//! | `width`   | CRC width in bits (32 or 64) |
//! | `poly`    | Generator polynomial (without the implicit high bit) |
//! | `init`    | Initial register value |
//! | `refin`   | Reflect input bytes (true for most CRCs) |
//! | `refout`  | Reflect output before the final XOR |
//! | `xorout`  | Final XOR value |
//! | `check`   | Checksum of `b"123456789"`, the construction oracle |
//! | `keys`    | 23 combine-acceleration coefficients (see [`crate::gf2`]) |
//!
//! A `CrcParams` is valid exactly when computing the checksum of
//! `b"123456789"` under its parameters reproduces `check`. Validity is
//! established once, at construction, against the bitwise reference, never
//! against the table kernels, so a kernel bug cannot validate itself.

use crate::{error::Error, gf2, reference};

/// Number of combine-acceleration coefficients carried by every model.
pub const KEY_COUNT: usize = 23;

/// Mask covering the low `width` bits.
#[inline]
#[must_use]
pub(crate) const fn width_mask(width: u8) -> u64 {
  if width >= 64 {
    return u64::MAX;
  }
  (1u64 << width) - 1
}

/// Reflect (bit-reverse) the lower `width` bits of `value`.
#[must_use]
pub(crate) const fn reflect_bits(value: u64, width: u8) -> u64 {
  let mut result = 0u64;
  let mut i = 0u8;
  while i < width {
    if (value >> i) & 1 != 0 {
      result |= 1 << (width - 1 - i);
    }
    i += 1;
  }
  result
}

/// A validated CRC parameter set.
///
/// Immutable once constructed; every constructor runs the full validation of
/// the Rocksoft model fields and the `b"123456789"` self-check, so no invalid
/// `CrcParams` can escape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrcParams {
  pub(crate) width: u8,
  pub(crate) poly: u64,
  pub(crate) init: u64,
  pub(crate) refin: bool,
  pub(crate) refout: bool,
  pub(crate) xorout: u64,
  pub(crate) check: u64,
  pub(crate) keys: [u64; KEY_COUNT],
}

impl CrcParams {
  /// Build a custom parameter set, deriving the combine keys.
  ///
  /// # Errors
  ///
  /// - [`Error::UnsupportedWidth`] unless `width` is 32 or 64.
  /// - [`Error::ValueOutOfRange`] when `poly`, `init`, `xorout`, or `check`
  ///   exceeds `width` bits.
  /// - [`Error::SelfCheckFailed`] when the assembled parameters do not
  ///   reproduce `check` over `b"123456789"`. Construction is all-or-nothing;
  ///   no partially-validated value is returned.
  pub fn new(
    width: u8,
    poly: u64,
    init: u64,
    refin: bool,
    refout: bool,
    xorout: u64,
    check: u64,
  ) -> Result<Self, Error> {
    Self::build(width, poly, init, refin, refout, xorout, check, None)
  }

  /// Build a custom parameter set from caller-supplied combine keys.
  ///
  /// The keys are copied verbatim; the caller asserts they are correct for
  /// this model. Everything else is validated exactly as in [`Self::new`].
  ///
  /// # Errors
  ///
  /// Same as [`Self::new`].
  pub fn with_keys(
    width: u8,
    poly: u64,
    init: u64,
    refin: bool,
    refout: bool,
    xorout: u64,
    check: u64,
    keys: [u64; KEY_COUNT],
  ) -> Result<Self, Error> {
    Self::build(width, poly, init, refin, refout, xorout, check, Some(keys))
  }

  fn build(
    width: u8,
    poly: u64,
    init: u64,
    refin: bool,
    refout: bool,
    xorout: u64,
    check: u64,
    keys: Option<[u64; KEY_COUNT]>,
  ) -> Result<Self, Error> {
    if width != 32 && width != 64 {
      return Err(Error::UnsupportedWidth(width));
    }
    let mask = width_mask(width);
    for (field, value) in [("poly", poly), ("init", init), ("xorout", xorout), ("check", check)] {
      if value > mask {
        return Err(Error::ValueOutOfRange { field, value, width });
      }
    }

    let keys = match keys {
      Some(keys) => keys,
      None => gf2::derive_keys(width, poly, refin),
    };

    let computed = reference::crc_bitwise(width, poly, init, refin, refout, xorout, reference::CHECK_INPUT);
    if computed != check {
      return Err(Error::SelfCheckFailed {
        expected: check,
        computed,
      });
    }

    Ok(Self {
      width,
      poly,
      init,
      refin,
      refout,
      xorout,
      check,
      keys,
    })
  }

  /// Catalogue constructor: fields are trusted, keys are derived.
  ///
  /// Registry entries are verified separately by compile-time assertions, so
  /// this skips the runtime validation path.
  pub(crate) const fn catalog(
    width: u8,
    poly: u64,
    init: u64,
    refin: bool,
    refout: bool,
    xorout: u64,
    check: u64,
  ) -> Self {
    Self {
      width,
      poly,
      init,
      refin,
      refout,
      xorout,
      check,
      keys: gf2::derive_keys(width, poly, refin),
    }
  }

  /// Width in bits (32 or 64).
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u8 {
    self.width
  }

  /// Generator polynomial, normal (non-reflected) form.
  #[inline]
  #[must_use]
  pub const fn poly(&self) -> u64 {
    self.poly
  }

  /// Initial register value.
  #[inline]
  #[must_use]
  pub const fn init(&self) -> u64 {
    self.init
  }

  /// Whether input bytes are processed bit-reflected.
  #[inline]
  #[must_use]
  pub const fn refin(&self) -> bool {
    self.refin
  }

  /// Whether the final register is bit-reflected before the XOR.
  #[inline]
  #[must_use]
  pub const fn refout(&self) -> bool {
    self.refout
  }

  /// Final XOR value.
  #[inline]
  #[must_use]
  pub const fn xorout(&self) -> u64 {
    self.xorout
  }

  /// Expected checksum of `b"123456789"`.
  #[inline]
  #[must_use]
  pub const fn check(&self) -> u64 {
    self.check
  }

  /// Combine-acceleration coefficients.
  #[inline]
  #[must_use]
  pub const fn keys(&self) -> &[u64; KEY_COUNT] {
    &self.keys
  }

  /// Mask covering the low `width` bits.
  #[inline]
  #[must_use]
  pub const fn mask(&self) -> u64 {
    width_mask(self.width)
  }

  /// Generator polynomial in register bit order: reflected for `refin`
  /// models, normal otherwise.
  #[inline]
  pub(crate) const fn stream_poly(&self) -> u64 {
    if self.refin {
      reflect_bits(self.poly, self.width)
    } else {
      self.poly
    }
  }

  /// The register value a fresh computation starts from.
  #[inline]
  pub(crate) const fn init_register(&self) -> u64 {
    if self.refin {
      reflect_bits(self.init, self.width)
    } else {
      self.init
    }
  }

  /// Undo the output transform: finalized checksum back to register state.
  #[inline]
  pub(crate) const fn register_of(&self, raw: u64) -> u64 {
    let value = (raw ^ self.xorout) & self.mask();
    if self.refout != self.refin {
      reflect_bits(value, self.width)
    } else {
      value
    }
  }

  /// Apply the output transform: register state to finalized checksum.
  #[inline]
  pub(crate) const fn checksum_of(&self, register: u64) -> u64 {
    let value = if self.refout != self.refin {
      reflect_bits(register, self.width)
    } else {
      register
    };
    (value ^ self.xorout) & self.mask()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::Algorithm;

  #[test]
  fn reflect_bits_basics() {
    assert_eq!(reflect_bits(0b1010, 4), 0b0101);
    assert_eq!(reflect_bits(0b1100, 4), 0b0011);
    assert_eq!(reflect_bits(0xFF, 8), 0xFF);
    assert_eq!(reflect_bits(0x80, 8), 0x01);
    // CRC-32 (ISO) polynomial 0x04C11DB7 reflected is 0xEDB88320.
    assert_eq!(reflect_bits(0x04C11DB7, 32), 0xEDB88320);
    // CRC-64-XZ polynomial reflected.
    assert_eq!(reflect_bits(0x42F0E1EBA9EA3693, 64), 0xC96C5795D7870F42);
  }

  #[test]
  fn custom_construction_matches_catalogue() {
    let params = CrcParams::new(32, 0x04C11DB7, 0xFFFFFFFF, true, true, 0xFFFFFFFF, 0xCBF43926)
      .expect("ISO-HDLC parameters must validate");
    assert_eq!(&params, Algorithm::Crc32IsoHdlc.params());
  }

  #[test]
  fn rejects_unsupported_width() {
    let err = CrcParams::new(16, 0x1021, 0xFFFF, false, false, 0, 0x29B1).unwrap_err();
    assert!(matches!(err, Error::UnsupportedWidth(16)));
  }

  #[test]
  fn rejects_out_of_range_values() {
    let err = CrcParams::new(32, 0x1_0000_0000, 0, false, false, 0, 0).unwrap_err();
    assert!(matches!(err, Error::ValueOutOfRange { field: "poly", .. }));

    let err = CrcParams::new(32, 0x04C11DB7, u64::MAX, true, true, 0, 0).unwrap_err();
    assert!(matches!(err, Error::ValueOutOfRange { field: "init", .. }));
  }

  #[test]
  fn rejects_wrong_check_value() {
    let err = CrcParams::new(32, 0x04C11DB7, 0xFFFFFFFF, true, true, 0xFFFFFFFF, 0xDEADBEEF).unwrap_err();
    match err {
      Error::SelfCheckFailed { expected, computed } => {
        assert_eq!(expected, 0xDEADBEEF);
        assert_eq!(computed, 0xCBF43926);
      }
      other => panic!("expected SelfCheckFailed, got {other:?}"),
    }
  }

  #[test]
  fn supplied_keys_are_copied_verbatim() {
    let derived = *Algorithm::Crc64Xz.params().keys();
    let params = CrcParams::with_keys(
      64,
      0x42F0E1EBA9EA3693,
      u64::MAX,
      true,
      true,
      u64::MAX,
      0x995DC9BBDF1939FA,
      derived,
    )
    .expect("XZ parameters must validate");
    assert_eq!(params.keys(), &derived);
  }

  #[test]
  fn register_round_trip() {
    for (_, algorithm) in crate::list_algorithms() {
      let p = algorithm.params();
      for raw in [0u64, 1, 0xCBF43926, p.check(), p.mask()] {
        let raw = raw & p.mask();
        assert_eq!(p.checksum_of(p.register_of(raw)), raw, "{}", algorithm.name());
      }
    }
  }
}
