//! Fuzz target for the streaming BLAKE2s API.
//!
//! Arbitrary update splits, parameters, and interleaved finalize calls must
//! all agree with a one-shot hash.

#![no_main]

use arbitrary::Arbitrary;
use blake2s::{Blake2s, Params};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
  key: Vec<u8>,
  salt: Vec<u8>,
  personal: Vec<u8>,
  out_len: u8,
  /// Finalize after every chunk instead of only at the end
  peek: bool,
}

fuzz_target!(|input: Input| {
  let Ok(params) = blake2s::kernel_test::params_from_raw(
    &input.key,
    &input.salt,
    &input.personal,
    usize::from(input.out_len % 32) + 1,
  ) else {
    return;
  };

  let expected = params.hash(&input.data);
  let mut state = params.to_state();
  stream(&mut state, &input.data, &input.chunk_sizes, input.peek);
  assert_eq!(state.finalize(), expected, "blake2s streaming mismatch");
  assert_eq!(state.finalize(), expected, "blake2s finalize not idempotent");
  assert_eq!(expected.len(), state.output_size());

  check_unkeyed(&input.data, &input.chunk_sizes);
});

fn stream(state: &mut Blake2s, data: &[u8], chunk_sizes: &[usize], peek: bool) {
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = if chunk_sizes.is_empty() {
      1
    } else {
      (chunk_sizes[chunk_idx % chunk_sizes.len()] % 256).max(1)
    };

    let end = (offset + chunk_size).min(data.len());
    assert_eq!(state.update(&data[offset..end]), end - offset);
    if peek {
      let _ = state.finalize();
    }
    offset = end;
    chunk_idx += 1;
  }
}

fn check_unkeyed(data: &[u8], chunk_sizes: &[usize]) {
  let expected = blake2s::blake2s(data);
  let mut state = Params::new().to_state();
  stream(&mut state, data, chunk_sizes, false);
  assert_eq!(state.finalize(), expected, "unkeyed streaming mismatch");
}
