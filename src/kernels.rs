//! Table-driven update kernels (slice-by-8).
//!
//! Slice-by-8 processes eight bytes per iteration using eight 256-entry
//! lookup tables; each table holds the register contribution of one byte at a
//! given distance from the end of the block. Tables are generated at runtime
//! from the model's polynomial: the fixed-polynomial compile-time tables of
//! a single-algorithm implementation, generalised to arbitrary parameters.
//!
//! Both reflection modes share one width-independent shape:
//!
//! - reflected models keep the register low-aligned and shift right, exactly
//!   the classic LSB-first kernel;
//! - non-reflected models are processed top-aligned in a `u64`
//!   (`register << (64 - width)`), which turns every MSB-first width into the
//!   same 64-bit left-shifting kernel. The alignment is transient per call;
//!   digests store the natural low-aligned register.
//!
//! The kernels must be bit-exact with [`crate::reference`]; the proptests
//! enforce it for arbitrary parameter sets.

// SAFETY: table indices are always a single extracted byte (`& 0xFF` or a
// `>> 56` of a u64), and table construction loops over 0..256 / 0..8.
#![allow(clippy::indexing_slicing)]

use alloc::boxed::Box;

use crate::params::CrcParams;

/// Slice-by-8 lookup tables.
pub(crate) type Tables = [[u64; 256]; 8];

// ─────────────────────────────────────────────────────────────────────────────
// Table generation
// ─────────────────────────────────────────────────────────────────────────────

/// One reflected table entry: eight LSB-first steps of `index`.
const fn entry_reflected(poly: u64, index: u8) -> u64 {
  let mut crc = index as u64;
  let mut i = 0;
  while i < 8 {
    crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
    i += 1;
  }
  crc
}

/// One top-aligned entry: eight MSB-first steps of `index` entering the top
/// byte of the expanded register.
const fn entry_top_aligned(poly_top: u64, index: u8) -> u64 {
  let mut crc = (index as u64) << 56;
  let mut i = 0;
  while i < 8 {
    crc = if crc & (1u64 << 63) != 0 { (crc << 1) ^ poly_top } else { crc << 1 };
    i += 1;
  }
  crc
}

/// Generate the eight chained lookup tables for a model.
///
/// `tables[0]` is the byte-at-a-time table; `tables[k]` advances the entry of
/// `tables[k - 1]` past one further zero byte.
pub(crate) fn generate_tables(params: &CrcParams) -> Box<Tables> {
  let mut tables = [[0u64; 256]; 8];

  if params.refin() {
    let poly = params.stream_poly();
    for i in 0..256usize {
      tables[0][i] = entry_reflected(poly, i as u8);
    }
    for k in 1..8 {
      for i in 0..256usize {
        let prev = tables[k - 1][i];
        tables[k][i] = tables[0][(prev & 0xFF) as usize] ^ (prev >> 8);
      }
    }
  } else {
    let poly_top = params.poly() << (64 - params.width() as u32);
    for i in 0..256usize {
      tables[0][i] = entry_top_aligned(poly_top, i as u8);
    }
    for k in 1..8 {
      for i in 0..256usize {
        let prev = tables[k - 1][i];
        tables[k][i] = tables[0][(prev >> 56) as usize] ^ (prev << 8);
      }
    }
  }

  Box::new(tables)
}

// ─────────────────────────────────────────────────────────────────────────────
// Update kernels
// ─────────────────────────────────────────────────────────────────────────────

/// Reflected slice-by-8 update (register low-aligned, pre-finalisation).
fn update_reflected(mut crc: u64, data: &[u8], tables: &Tables) -> u64 {
  let (chunks, remainder) = data.as_chunks::<8>();

  for chunk in chunks {
    let val = u64::from_le_bytes(*chunk) ^ crc;

    crc = tables[7][(val & 0xFF) as usize]
      ^ tables[6][((val >> 8) & 0xFF) as usize]
      ^ tables[5][((val >> 16) & 0xFF) as usize]
      ^ tables[4][((val >> 24) & 0xFF) as usize]
      ^ tables[3][((val >> 32) & 0xFF) as usize]
      ^ tables[2][((val >> 40) & 0xFF) as usize]
      ^ tables[1][((val >> 48) & 0xFF) as usize]
      ^ tables[0][(val >> 56) as usize];
  }

  for &byte in remainder {
    let index = ((crc ^ (byte as u64)) & 0xFF) as usize;
    crc = tables[0][index] ^ (crc >> 8);
  }

  crc
}

/// Top-aligned slice-by-8 update, the bit-mirror of [`update_reflected`].
fn update_top_aligned(mut crc: u64, data: &[u8], tables: &Tables) -> u64 {
  let (chunks, remainder) = data.as_chunks::<8>();

  for chunk in chunks {
    let val = u64::from_be_bytes(*chunk) ^ crc;

    crc = tables[7][(val >> 56) as usize]
      ^ tables[6][((val >> 48) & 0xFF) as usize]
      ^ tables[5][((val >> 40) & 0xFF) as usize]
      ^ tables[4][((val >> 32) & 0xFF) as usize]
      ^ tables[3][((val >> 24) & 0xFF) as usize]
      ^ tables[2][((val >> 16) & 0xFF) as usize]
      ^ tables[1][((val >> 8) & 0xFF) as usize]
      ^ tables[0][(val & 0xFF) as usize];
  }

  for &byte in remainder {
    let index = (((crc >> 56) ^ byte as u64) & 0xFF) as usize;
    crc = tables[0][index] ^ (crc << 8);
  }

  crc
}

/// Absorb `data` into a register in the model's natural representation.
#[inline]
pub(crate) fn update(params: &CrcParams, tables: &Tables, register: u64, data: &[u8]) -> u64 {
  if params.refin() {
    update_reflected(register, data, tables)
  } else {
    let align = 64 - params.width() as u32;
    update_top_aligned(register << align, data, tables) >> align
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
