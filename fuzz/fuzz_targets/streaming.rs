//! Fuzz target for streaming updates.
//!
//! Any chunking of the input through a digest must equal the one-shot
//! checksum and the bitwise reference.

#![no_main]

use arbitrary::Arbitrary;
use crckit::{Digest, checksum, reference};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  chunk_sizes: Vec<u8>,
}

fuzz_target!(|input: Input| {
  for &(name, algorithm) in crckit::list_algorithms() {
    let oneshot = checksum(algorithm, &input.data);
    assert_eq!(
      oneshot,
      reference::crc_bitwise_params(algorithm.params(), &input.data),
      "{name} reference mismatch"
    );

    let mut digest = Digest::new(algorithm);
    let mut offset = 0;
    let mut sizes = input.chunk_sizes.iter().cycle();
    while offset < input.data.len() {
      let size = (*sizes.next().unwrap_or(&1) as usize).max(1);
      let end = (offset + size).min(input.data.len());
      digest.update(&input.data[offset..end]);
      offset = end;
    }

    assert_eq!(digest.finalize(), oneshot, "{name} chunking mismatch");
  }
});
