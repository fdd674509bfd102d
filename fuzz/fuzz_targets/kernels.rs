#![no_main]

use blake2s::kernel_test::{params_from_raw, verify_blake2s_kernels};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: &[u8]| {
  let key_len = input.first().map_or(0, |&b| usize::from(b % 33)).min(input.len());
  let (key, data) = input.split_at(key_len);
  let Ok(params) = params_from_raw(key, b"", b"", 32) else {
    return;
  };
  verify_blake2s_kernels(&params, data).unwrap();
});
