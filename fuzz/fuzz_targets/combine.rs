//! Fuzz target for the combine operation.
//!
//! Splits arbitrary data at arbitrary points and checks that folding the
//! per-chunk checksums equals hashing the whole buffer, for every catalogue
//! entry.

#![no_main]

use arbitrary::Arbitrary;
use crckit::{checksum, checksum_combine};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  splits: Vec<usize>,
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  if data.is_empty() {
    return;
  }

  let mut splits: Vec<usize> = input.splits.iter().map(|s| s % (data.len() + 1)).collect();
  splits.sort_unstable();
  splits.dedup();

  for &(name, algorithm) in crckit::list_algorithms() {
    let expected = checksum(algorithm, data);

    let mut chunks = Vec::new();
    let mut prev = 0;
    for &split in &splits {
      if split > prev {
        chunks.push(&data[prev..split]);
        prev = split;
      }
    }
    if prev < data.len() {
      chunks.push(&data[prev..]);
    }
    if chunks.is_empty() {
      continue;
    }

    let mut merged = checksum(algorithm, chunks[0]);
    for chunk in &chunks[1..] {
      let chunk_crc = checksum(algorithm, chunk);
      merged = checksum_combine(algorithm, merged, chunk_crc, chunk.len() as u64).unwrap();
    }

    assert_eq!(merged, expected, "{name} combine chain mismatch");
  }
});
