//! BLAKE2s-256: the unkeyed, 32-byte configuration.

use traits::Digest;

use crate::{BLOCK_LEN, Blake2s, OUT_LEN_MAX, Params};

/// Unkeyed BLAKE2s with a 32-byte digest.
///
/// Unlike a keyed [`Blake2s`], this hasher can be reset: its initial state
/// depends on nothing secret.
#[derive(Clone, Debug)]
pub struct Blake2s256(Blake2s);

impl Blake2s256 {
  /// Borrow the underlying variable-output hasher.
  #[inline]
  #[must_use]
  pub const fn as_inner(&self) -> &Blake2s {
    &self.0
  }
}

impl Default for Blake2s256 {
  #[inline]
  fn default() -> Self {
    Self(Params::new().to_state())
  }
}

impl Digest for Blake2s256 {
  const OUTPUT_SIZE: usize = OUT_LEN_MAX;
  const BLOCK_SIZE: usize = BLOCK_LEN;
  type Output = [u8; OUT_LEN_MAX];

  #[inline]
  fn new() -> Self {
    Self::default()
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.0.update(data);
  }

  fn finalize(&self) -> Self::Output {
    let mut out = [0u8; OUT_LEN_MAX];
    self.0.finalize_into(&mut out);
    out
  }

  #[inline]
  fn reset(&mut self) {
    *self = Self::default();
  }
}

impl From<Blake2s256> for Blake2s {
  #[inline]
  fn from(h: Blake2s256) -> Self {
    h.0
  }
}
