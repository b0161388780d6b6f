//! Algorithm catalogue.
//!
//! A closed set of named CRC models following the
//! [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/) parameter
//! conventions. Entries are built once as statics with compile-time-derived
//! key schedules, and every entry's check value is asserted against the
//! bitwise reference at compile time; a registry typo fails the build.
//!
//! CRC-32/PHP is a presentation alias, not a distinct model: it resolves to
//! the CRC-32/BZIP2 parameters and flips a byte-reversal flag in the result
//! formatter, matching the output of PHP's `hash('crc32')`.

use alloc::string::ToString;

use crate::{
  error::Error,
  format,
  params::CrcParams,
  reference::{CHECK_INPUT, crc_bitwise},
};

// ─────────────────────────────────────────────────────────────────────────────
// Catalogue entries
// ─────────────────────────────────────────────────────────────────────────────

static CRC32_AIXM: CrcParams = CrcParams::catalog(32, 0x814141AB, 0x00000000, false, false, 0x00000000, 0x3010BF7F);
static CRC32_AUTOSAR: CrcParams = CrcParams::catalog(32, 0xF4ACFB13, 0xFFFFFFFF, true, true, 0xFFFFFFFF, 0x1697D06A);
static CRC32_BASE91_D: CrcParams = CrcParams::catalog(32, 0xA833982B, 0xFFFFFFFF, true, true, 0xFFFFFFFF, 0x87315576);
static CRC32_BZIP2: CrcParams = CrcParams::catalog(32, 0x04C11DB7, 0xFFFFFFFF, false, false, 0xFFFFFFFF, 0xFC891918);
static CRC32_CD_ROM_EDC: CrcParams = CrcParams::catalog(32, 0x8001801B, 0x00000000, true, true, 0x00000000, 0x6EC2EDC4);
static CRC32_CKSUM: CrcParams = CrcParams::catalog(32, 0x04C11DB7, 0x00000000, false, false, 0xFFFFFFFF, 0x765E7680);
static CRC32_ISCSI: CrcParams = CrcParams::catalog(32, 0x1EDC6F41, 0xFFFFFFFF, true, true, 0xFFFFFFFF, 0xE3069283);
static CRC32_ISO_HDLC: CrcParams = CrcParams::catalog(32, 0x04C11DB7, 0xFFFFFFFF, true, true, 0xFFFFFFFF, 0xCBF43926);
static CRC32_JAMCRC: CrcParams = CrcParams::catalog(32, 0x04C11DB7, 0xFFFFFFFF, true, true, 0x00000000, 0x340BC6D9);
static CRC32_MEF: CrcParams = CrcParams::catalog(32, 0x741B8CD7, 0xFFFFFFFF, true, true, 0x00000000, 0xD2C22F51);
static CRC32_MPEG_2: CrcParams = CrcParams::catalog(32, 0x04C11DB7, 0xFFFFFFFF, false, false, 0x00000000, 0x0376E6E7);
static CRC32_XFER: CrcParams = CrcParams::catalog(32, 0x000000AF, 0x00000000, false, false, 0x00000000, 0xBD0BE338);

static CRC64_ECMA_182: CrcParams = CrcParams::catalog(
  64,
  0x42F0E1EBA9EA3693,
  0x0000000000000000,
  false,
  false,
  0x0000000000000000,
  0x6C40DF5F0B497347,
);
static CRC64_GO_ISO: CrcParams = CrcParams::catalog(
  64,
  0x000000000000001B,
  0xFFFFFFFFFFFFFFFF,
  true,
  true,
  0xFFFFFFFFFFFFFFFF,
  0xB90956C775A41001,
);
static CRC64_MS: CrcParams = CrcParams::catalog(
  64,
  0x259C84CBA6426349,
  0xFFFFFFFFFFFFFFFF,
  true,
  true,
  0x0000000000000000,
  0x75D4B74F024ECEEA,
);
static CRC64_NVME: CrcParams = CrcParams::catalog(
  64,
  0xAD93D23594C93659,
  0xFFFFFFFFFFFFFFFF,
  true,
  true,
  0xFFFFFFFFFFFFFFFF,
  0xAE8B14860A799888,
);
static CRC64_REDIS: CrcParams = CrcParams::catalog(
  64,
  0xAD93D23594C935A9,
  0x0000000000000000,
  true,
  true,
  0x0000000000000000,
  0xE9C6D914C4B8D9CA,
);
static CRC64_WE: CrcParams = CrcParams::catalog(
  64,
  0x42F0E1EBA9EA3693,
  0xFFFFFFFFFFFFFFFF,
  false,
  false,
  0xFFFFFFFFFFFFFFFF,
  0x62EC59E3F1A4F00A,
);
static CRC64_XZ: CrcParams = CrcParams::catalog(
  64,
  0x42F0E1EBA9EA3693,
  0xFFFFFFFFFFFFFFFF,
  true,
  true,
  0xFFFFFFFFFFFFFFFF,
  0x995DC9BBDF1939FA,
);

/// Compile-time conformance oracle for a catalogue entry.
const fn entry_checks(p: &CrcParams) -> bool {
  crc_bitwise(p.width, p.poly, p.init, p.refin, p.refout, p.xorout, CHECK_INPUT) == p.check
}

const _: () = assert!(entry_checks(&CRC32_AIXM));
const _: () = assert!(entry_checks(&CRC32_AUTOSAR));
const _: () = assert!(entry_checks(&CRC32_BASE91_D));
const _: () = assert!(entry_checks(&CRC32_BZIP2));
const _: () = assert!(entry_checks(&CRC32_CD_ROM_EDC));
const _: () = assert!(entry_checks(&CRC32_CKSUM));
const _: () = assert!(entry_checks(&CRC32_ISCSI));
const _: () = assert!(entry_checks(&CRC32_ISO_HDLC));
const _: () = assert!(entry_checks(&CRC32_JAMCRC));
const _: () = assert!(entry_checks(&CRC32_MEF));
const _: () = assert!(entry_checks(&CRC32_MPEG_2));
const _: () = assert!(entry_checks(&CRC32_XFER));
const _: () = assert!(entry_checks(&CRC64_ECMA_182));
const _: () = assert!(entry_checks(&CRC64_GO_ISO));
const _: () = assert!(entry_checks(&CRC64_MS));
const _: () = assert!(entry_checks(&CRC64_NVME));
const _: () = assert!(entry_checks(&CRC64_REDIS));
const _: () = assert!(entry_checks(&CRC64_WE));
const _: () = assert!(entry_checks(&CRC64_XZ));

// ─────────────────────────────────────────────────────────────────────────────
// Algorithm
// ─────────────────────────────────────────────────────────────────────────────

/// A named catalogue model.
///
/// Declaration order is the enumeration order of [`list_algorithms`]; the
/// numeric ids are stable and leave room for catalogue growth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
  /// CRC-32/AIXM (a.k.a. CRC-32Q).
  Crc32Aixm,
  /// CRC-32/AUTOSAR.
  Crc32Autosar,
  /// CRC-32/BASE91-D (a.k.a. CRC-32D).
  Crc32Base91D,
  /// CRC-32/BZIP2.
  Crc32Bzip2,
  /// CRC-32/CD-ROM-EDC.
  Crc32CdRomEdc,
  /// CRC-32/CKSUM (POSIX `cksum`).
  Crc32Cksum,
  /// CRC-32/ISCSI (Castagnoli).
  Crc32Iscsi,
  /// CRC-32/ISO-HDLC (Ethernet, gzip, zip, PNG).
  Crc32IsoHdlc,
  /// CRC-32/JAMCRC.
  Crc32Jamcrc,
  /// CRC-32/MEF.
  Crc32Mef,
  /// CRC-32/MPEG-2.
  Crc32Mpeg2,
  /// CRC-32/PHP: CRC-32/BZIP2 with byte-reversed rendering, matching PHP's
  /// `hash('crc32')` output (but not its `crc32()` function).
  Crc32Php,
  /// CRC-32/XFER.
  Crc32Xfer,
  /// CRC-64/ECMA-182.
  Crc64Ecma182,
  /// CRC-64/GO-ISO.
  Crc64GoIso,
  /// CRC-64/MS.
  Crc64Ms,
  /// CRC-64/NVME.
  Crc64Nvme,
  /// CRC-64/REDIS.
  Crc64Redis,
  /// CRC-64/WE.
  Crc64We,
  /// CRC-64/XZ (XZ Utils, 7-Zip).
  Crc64Xz,
}

/// Catalogue in declaration order: `(display name, algorithm)`.
static CATALOGUE: [(&str, Algorithm); 20] = [
  ("CRC-32/AIXM", Algorithm::Crc32Aixm),
  ("CRC-32/AUTOSAR", Algorithm::Crc32Autosar),
  ("CRC-32/BASE91-D", Algorithm::Crc32Base91D),
  ("CRC-32/BZIP2", Algorithm::Crc32Bzip2),
  ("CRC-32/CD-ROM-EDC", Algorithm::Crc32CdRomEdc),
  ("CRC-32/CKSUM", Algorithm::Crc32Cksum),
  ("CRC-32/ISCSI", Algorithm::Crc32Iscsi),
  ("CRC-32/ISO-HDLC", Algorithm::Crc32IsoHdlc),
  ("CRC-32/JAMCRC", Algorithm::Crc32Jamcrc),
  ("CRC-32/MEF", Algorithm::Crc32Mef),
  ("CRC-32/MPEG-2", Algorithm::Crc32Mpeg2),
  ("CRC-32/PHP", Algorithm::Crc32Php),
  ("CRC-32/XFER", Algorithm::Crc32Xfer),
  ("CRC-64/ECMA-182", Algorithm::Crc64Ecma182),
  ("CRC-64/GO-ISO", Algorithm::Crc64GoIso),
  ("CRC-64/MS", Algorithm::Crc64Ms),
  ("CRC-64/NVME", Algorithm::Crc64Nvme),
  ("CRC-64/REDIS", Algorithm::Crc64Redis),
  ("CRC-64/WE", Algorithm::Crc64We),
  ("CRC-64/XZ", Algorithm::Crc64Xz),
];

impl Algorithm {
  /// The resolved parameter set for this entry.
  ///
  /// CRC-32/PHP resolves to the CRC-32/BZIP2 parameters; the byte reversal
  /// lives in the formatter, not in the math.
  #[must_use]
  pub fn params(self) -> &'static CrcParams {
    match self {
      Self::Crc32Aixm => &CRC32_AIXM,
      Self::Crc32Autosar => &CRC32_AUTOSAR,
      Self::Crc32Base91D => &CRC32_BASE91_D,
      Self::Crc32Bzip2 | Self::Crc32Php => &CRC32_BZIP2,
      Self::Crc32CdRomEdc => &CRC32_CD_ROM_EDC,
      Self::Crc32Cksum => &CRC32_CKSUM,
      Self::Crc32Iscsi => &CRC32_ISCSI,
      Self::Crc32IsoHdlc => &CRC32_ISO_HDLC,
      Self::Crc32Jamcrc => &CRC32_JAMCRC,
      Self::Crc32Mef => &CRC32_MEF,
      Self::Crc32Mpeg2 => &CRC32_MPEG_2,
      Self::Crc32Xfer => &CRC32_XFER,
      Self::Crc64Ecma182 => &CRC64_ECMA_182,
      Self::Crc64GoIso => &CRC64_GO_ISO,
      Self::Crc64Ms => &CRC64_MS,
      Self::Crc64Nvme => &CRC64_NVME,
      Self::Crc64Redis => &CRC64_REDIS,
      Self::Crc64We => &CRC64_WE,
      Self::Crc64Xz => &CRC64_XZ,
    }
  }

  /// Canonical display name, e.g. `"CRC-32/ISO-HDLC"`.
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Crc32Aixm => "CRC-32/AIXM",
      Self::Crc32Autosar => "CRC-32/AUTOSAR",
      Self::Crc32Base91D => "CRC-32/BASE91-D",
      Self::Crc32Bzip2 => "CRC-32/BZIP2",
      Self::Crc32CdRomEdc => "CRC-32/CD-ROM-EDC",
      Self::Crc32Cksum => "CRC-32/CKSUM",
      Self::Crc32Iscsi => "CRC-32/ISCSI",
      Self::Crc32IsoHdlc => "CRC-32/ISO-HDLC",
      Self::Crc32Jamcrc => "CRC-32/JAMCRC",
      Self::Crc32Mef => "CRC-32/MEF",
      Self::Crc32Mpeg2 => "CRC-32/MPEG-2",
      Self::Crc32Php => "CRC-32/PHP",
      Self::Crc32Xfer => "CRC-32/XFER",
      Self::Crc64Ecma182 => "CRC-64/ECMA-182",
      Self::Crc64GoIso => "CRC-64/GO-ISO",
      Self::Crc64Ms => "CRC-64/MS",
      Self::Crc64Nvme => "CRC-64/NVME",
      Self::Crc64Redis => "CRC-64/REDIS",
      Self::Crc64We => "CRC-64/WE",
      Self::Crc64Xz => "CRC-64/XZ",
    }
  }

  /// Stable numeric id.
  #[must_use]
  pub const fn id(self) -> u32 {
    match self {
      Self::Crc32Aixm => 10000,
      Self::Crc32Autosar => 10010,
      Self::Crc32Base91D => 10020,
      Self::Crc32Bzip2 => 10030,
      Self::Crc32CdRomEdc => 10040,
      Self::Crc32Cksum => 10050,
      Self::Crc32Iscsi => 10060,
      Self::Crc32IsoHdlc => 10070,
      Self::Crc32Jamcrc => 10080,
      Self::Crc32Mef => 10090,
      Self::Crc32Mpeg2 => 10100,
      Self::Crc32Php => 10200,
      Self::Crc32Xfer => 10300,
      Self::Crc64Ecma182 => 20000,
      Self::Crc64GoIso => 20010,
      Self::Crc64Ms => 20020,
      Self::Crc64Nvme => 20030,
      Self::Crc64Redis => 20040,
      Self::Crc64We => 20050,
      Self::Crc64Xz => 20060,
    }
  }

  /// Look an entry up by its canonical name (ASCII case-insensitive).
  ///
  /// # Errors
  ///
  /// [`Error::UnknownAlgorithm`] when no entry carries the name.
  pub fn from_name(name: &str) -> Result<Self, Error> {
    CATALOGUE
      .iter()
      .find(|(entry_name, _)| entry_name.eq_ignore_ascii_case(name))
      .map(|&(_, algorithm)| algorithm)
      .ok_or_else(|| Error::UnknownAlgorithm(name.to_string()))
  }
}

/// Enumerate the catalogue in declaration order.
#[must_use]
pub fn list_algorithms() -> &'static [(&'static str, Algorithm)] {
  &CATALOGUE
}

// ─────────────────────────────────────────────────────────────────────────────
// Model
// ─────────────────────────────────────────────────────────────────────────────

/// A CRC model: a catalogue entry or a custom parameter set.
///
/// Resolved once into a concrete [`CrcParams`] before any computation; every
/// engine entry point takes `impl Into<Model>` so both spellings work.
#[derive(Clone, Copy, Debug)]
pub enum Model {
  /// A catalogue entry.
  Named(Algorithm),
  /// A custom, validated parameter set.
  Custom(CrcParams),
}

impl Model {
  /// The resolved parameter set.
  #[inline]
  #[must_use]
  pub fn params(&self) -> &CrcParams {
    match self {
      Self::Named(algorithm) => algorithm.params(),
      Self::Custom(params) => params,
    }
  }

  /// Whether rendered output is byte-reversed (the CRC-32/PHP quirk).
  #[inline]
  pub(crate) fn byte_swapped(&self) -> bool {
    matches!(self, Self::Named(Algorithm::Crc32Php))
  }

  /// Render a raw checksum as fixed-width lowercase hex.
  #[must_use]
  pub fn format_hex(&self, raw: u64) -> alloc::string::String {
    format::format_hex(self.present(raw), self.params().width())
  }

  /// Render a raw checksum as big-endian bytes.
  #[must_use]
  pub fn format_binary(&self, raw: u64) -> alloc::vec::Vec<u8> {
    format::format_binary(self.present(raw), self.params().width())
  }

  /// Parse a checksum in either rendered form, auto-detected by length.
  ///
  /// The inverse of [`Self::format_hex`] / [`Self::format_binary`],
  /// including the CRC-32/PHP byte reversal.
  ///
  /// # Errors
  ///
  /// [`Error::MalformedChecksumInput`] when the input is neither form.
  pub fn parse_checksum(&self, input: &[u8]) -> Result<u64, Error> {
    let raw = format::parse(input, self.params().width())?;
    Ok(self.present(raw))
  }

  /// Apply the presentation transform (byte reversal is an involution, so
  /// this both renders and parses).
  #[inline]
  fn present(&self, raw: u64) -> u64 {
    if self.byte_swapped() {
      format::swap_low32(raw)
    } else {
      raw
    }
  }
}

impl From<Algorithm> for Model {
  #[inline]
  fn from(algorithm: Algorithm) -> Self {
    Self::Named(algorithm)
  }
}

impl From<CrcParams> for Model {
  #[inline]
  fn from(params: CrcParams) -> Self {
    Self::Custom(params)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
