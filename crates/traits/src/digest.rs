//! Unkeyed hashers with a compile-time digest length.

use core::fmt::Debug;

/// A hash whose configuration is fully known at compile time.
///
/// Because nothing secret goes into the initial state, [`new`](Self::new) and
/// [`reset`](Self::reset) can always rebuild it. Hashers that take a key or a
/// runtime output length implement [`VarDigest`](crate::VarDigest) instead.
///
/// Implementations must keep three promises:
///
/// - `new()` and `Default::default()` agree
/// - `finalize()` leaves the running state as it found it
/// - after `reset()` the hasher behaves like `new()`
pub trait Digest: Clone + Default {
  /// Digest length in bytes.
  const OUTPUT_SIZE: usize;

  /// Compression block length in bytes.
  const BLOCK_SIZE: usize;

  /// Digest bytes, usually `[u8; OUTPUT_SIZE]`.
  type Output: Copy + Eq + Debug + AsRef<[u8]>;

  /// Fresh hasher with nothing absorbed.
  #[must_use]
  fn new() -> Self;

  /// Absorb `data`.
  fn update(&mut self, data: &[u8]);

  /// Absorb each buffer of `bufs` in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    bufs.iter().for_each(|buf| self.update(buf));
  }

  /// Digest of everything absorbed so far.
  ///
  /// Takes `&self`; more input may follow.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Drop all absorbed input.
  fn reset(&mut self);

  /// One-shot digest of `data`.
  #[inline]
  #[must_use]
  fn digest(data: &[u8]) -> Self::Output {
    Self::digest_vectored(&[data])
  }

  /// One-shot digest of the concatenation of `bufs`.
  #[inline]
  #[must_use]
  fn digest_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut hasher = Self::new();
    hasher.update_vectored(bufs);
    hasher.finalize()
  }
}
