//! Cross-kernel agreement checks, shared by unit tests and fuzz targets.

use std::vec::Vec;

use crate::{
  Blake2s, Output, ParamError, Params,
  kernels::{ALL, Blake2sKernelId},
};

#[derive(Clone, Debug)]
pub struct KernelResult {
  pub name: &'static str,
  pub digest: Output,
}

fn hasher_for_kernel(params: &Params, id: Blake2sKernelId) -> Blake2s {
  params.to_state().with_kernel(id)
}

fn digest_with_kernel(params: &Params, id: Blake2sKernelId, data: &[u8]) -> Output {
  let mut h = hasher_for_kernel(params, id);
  h.update(data);
  h.finalize()
}

#[must_use]
pub fn run_all_blake2s_kernels(params: &Params, data: &[u8]) -> Vec<KernelResult> {
  ALL
    .iter()
    .map(|&id| KernelResult {
      name: id.as_str(),
      digest: digest_with_kernel(params, id, data),
    })
    .collect()
}

/// Every kernel must agree with the first one on `data`.
pub fn verify_blake2s_kernels(params: &Params, data: &[u8]) -> Result<(), &'static str> {
  let results = run_all_blake2s_kernels(params, data);
  let Some((first, rest)) = results.split_first() else {
    return Ok(());
  };
  if rest.iter().any(|r| r.digest != first.digest) {
    return Err("blake2s kernel mismatch");
  }
  Ok(())
}

/// Build params from raw fuzz-style inputs, truncating each to its limit.
pub fn params_from_raw(key: &[u8], salt: &[u8], personal: &[u8], out_len: usize) -> Result<Params, ParamError> {
  let mut params = Params::new();
  params
    .hash_length(out_len)?
    .key(key.get(..crate::KEY_LEN_MAX).unwrap_or(key))?
    .salt(salt.get(..crate::SALT_LEN).unwrap_or(salt))?
    .personal(personal.get(..crate::PERSONAL_LEN).unwrap_or(personal))?;
  Ok(params)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn pattern(len: usize) -> Vec<u8> {
    (0..len)
      .map(|i| (i as u8).wrapping_mul(17).wrapping_add((i >> 8) as u8))
      .collect()
  }

  fn oracle_unkeyed(out_len: usize, data: &[u8]) -> Vec<u8> {
    use blake2::digest::{Update, VariableOutput};

    let mut h = blake2::Blake2sVar::new(out_len).unwrap();
    h.update(data);
    let mut out = std::vec![0u8; out_len];
    h.finalize_variable(&mut out).unwrap();
    out
  }

  #[test]
  fn all_kernels_match_blake2_oracle_and_streaming_splits() {
    let lens = [0usize, 1, 2, 3, 31, 32, 33, 63, 64, 65, 127, 128, 129, 1000, 10_000];

    for &id in ALL {
      for out_len in [1usize, 16, 20, 32] {
        let mut params = Params::new();
        params.hash_length(out_len).unwrap();

        for &len in &lens {
          let msg = pattern(len);
          let ours = digest_with_kernel(&params, id, &msg);
          assert_eq!(
            ours,
            oracle_unkeyed(out_len, &msg).as_slice(),
            "blake2s oracle mismatch for kernel={} out_len={out_len} len={len}",
            id.as_str()
          );

          for &chunk in &[1usize, 7, 31, 32, 63, 64, 65, 128, 1024, 4096] {
            let mut h = hasher_for_kernel(&params, id);
            for part in msg.chunks(chunk) {
              h.update(part);
            }
            assert_eq!(
              h.finalize(),
              ours,
              "blake2s streaming mismatch kernel={} len={} chunk={}",
              id.as_str(),
              len,
              chunk
            );
          }
        }
      }
    }
  }

  #[test]
  fn kernels_agree_on_keyed_input() {
    let params = params_from_raw(b"0123456789abcdef0123456789abcdef-extra", b"salty", b"person", 32).unwrap();
    verify_blake2s_kernels(&params, &pattern(777)).unwrap();
    assert_eq!(run_all_blake2s_kernels(&params, b"").len(), ALL.len());
  }

  #[test]
  fn params_from_raw_truncates_but_checks_length() {
    assert!(params_from_raw(&[1u8; 64], &[2u8; 16], &[3u8; 16], 32).is_ok());
    assert_eq!(
      params_from_raw(b"", b"", b"", 0).unwrap_err(),
      ParamError::OutputLength { len: 0 }
    );
  }
}
