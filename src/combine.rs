//! CRC combination.
//!
//! Computes `crc(A || B)` from `crc(A)`, `crc(B)`, and `len(B)` in
//! O(log len(B)) time, never touching the original bytes.
//!
//! # Mathematical background
//!
//! In register space the CRC recurrence is affine: processing `B` from
//! register `r` gives `F(B, r) = F(B, 0) ^ x^(8·len(B))·r`. Writing `I` for
//! the encoded init value, `reg(X)` for the register after hashing `X`:
//!
//! ```text
//! reg(A || B) = F(B, reg(A)) = F(B, 0) ^ x^(8n)·reg(A)
//! reg(B)      = F(B, I)      = F(B, 0) ^ x^(8n)·I
//! =>  reg(A || B) = reg(B) ^ x^(8n)·(reg(A) ^ I)
//! ```
//!
//! The exponentiation runs over the model's precomputed key schedule
//! ([`crate::gf2`]). Working in register space makes the identity exact for
//! every parameter set, including models whose `refin` and `refout` differ.

use crate::{gf2, params::CrcParams};

/// Combine two register states: the register of `A || B` from the registers
/// of `A` and `B` and `B`'s byte length.
#[must_use]
pub(crate) fn combine_registers(params: &CrcParams, reg_a: u64, reg_b: u64, len_b: u64) -> u64 {
  if len_b == 0 {
    return reg_a;
  }
  reg_b ^ gf2::shift_bytes(params, reg_a ^ params.init_register(), len_b)
}

/// Combine two finalized checksums.
///
/// `len_b == 0` returns `crc_a` (masked) unchanged, the identity element
/// for an empty right operand.
#[must_use]
pub(crate) fn combine_raw(params: &CrcParams, crc_a: u64, crc_b: u64, len_b: u64) -> u64 {
  if len_b == 0 {
    return crc_a & params.mask();
  }
  let merged = combine_registers(params, params.register_of(crc_a), params.register_of(crc_b), len_b);
  params.checksum_of(merged)
}

#[cfg(test)]
mod tests {
  use alloc::vec;

  use super::*;
  use crate::{Algorithm, checksum};

  #[test]
  fn combine_simple() {
    let a = b"hello ";
    let b = b"world";

    for &(name, algorithm) in crate::list_algorithms() {
      let params = algorithm.params();
      let crc_a = checksum(algorithm, a);
      let crc_b = checksum(algorithm, b);
      let crc_ab = checksum(algorithm, b"hello world");

      assert_eq!(combine_raw(params, crc_a, crc_b, b.len() as u64), crc_ab, "{name}");
    }
  }

  #[test]
  fn combine_empty_second() {
    let crc_a = checksum(Algorithm::Crc32IsoHdlc, b"hello");
    assert_eq!(combine_raw(Algorithm::Crc32IsoHdlc.params(), crc_a, 0, 0), crc_a);
  }

  #[test]
  fn combine_empty_first() {
    // crc("") combined with crc(B) must give crc(B).
    let data = b"123456789";
    for algorithm in [Algorithm::Crc32IsoHdlc, Algorithm::Crc32Bzip2, Algorithm::Crc64We] {
      let params = algorithm.params();
      let crc_empty = checksum(algorithm, b"");
      let crc_b = checksum(algorithm, data);
      assert_eq!(
        combine_raw(params, crc_empty, crc_b, data.len() as u64),
        crc_b,
        "{}",
        algorithm.name()
      );
    }
  }

  #[test]
  fn combine_all_splits() {
    let data = b"The quick brown fox jumps over the lazy dog";

    for &(name, algorithm) in crate::list_algorithms() {
      let params = algorithm.params();
      let crc_ab = checksum(algorithm, data);

      for split in 0..=data.len() {
        let (a, b) = data.split_at(split);
        let crc_a = checksum(algorithm, a);
        let crc_b = checksum(algorithm, b);
        assert_eq!(
          combine_raw(params, crc_a, crc_b, b.len() as u64),
          crc_ab,
          "{name} split {split}"
        );
      }
    }
  }

  #[test]
  fn combine_large() {
    let a = vec![0xABu8; 4096];
    let b = vec![0xCDu8; 4096];
    let mut ab = a.clone();
    ab.extend_from_slice(&b);

    for algorithm in [Algorithm::Crc32Iscsi, Algorithm::Crc64Nvme] {
      let params = algorithm.params();
      let crc_a = checksum(algorithm, &a);
      let crc_b = checksum(algorithm, &b);
      assert_eq!(
        combine_raw(params, crc_a, crc_b, b.len() as u64),
        checksum(algorithm, &ab),
        "{}",
        algorithm.name()
      );
    }
  }

  #[test]
  fn combine_mixed_reflection_model() {
    // A refin != refout model exercises the register_of reconciliation.
    let check = crate::reference::crc_bitwise(32, 0x04C11DB7, 0xFFFFFFFF, true, false, 0, crate::reference::CHECK_INPUT);
    let params = crate::CrcParams::new(32, 0x04C11DB7, 0xFFFFFFFF, true, false, 0, check).unwrap();

    let data = b"mixed reflection combine";
    let crc_ab = checksum(params, data.as_slice());
    for split in [0usize, 1, 5, 11, data.len()] {
      let (a, b) = data.split_at(split);
      let crc_a = checksum(params, a);
      let crc_b = checksum(params, b);
      assert_eq!(combine_raw(&params, crc_a, crc_b, b.len() as u64), crc_ab, "split {split}");
    }
  }
}
