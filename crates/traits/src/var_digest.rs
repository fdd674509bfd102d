//! Variable-output digest trait.

/// Digest whose output length is chosen at construction time.
///
/// This is the shape of a parameterized hash such as keyed BLAKE2s: the
/// hasher is built once from validated parameters and cannot be reset,
/// because secret key material is not retained after it has been absorbed.
/// Build a fresh instance instead.
///
/// # Implementor Requirements
///
/// - `update()` must accept any length, including zero, and never fail
/// - `finalize_into()` must not disturb the running state, so repeated
///   finalization and interleaved updates are well-defined
/// - `output_size()` must stay fixed for the lifetime of the hasher
pub trait VarDigest: Clone {
  /// Input block size in bytes.
  const BLOCK_SIZE: usize;

  /// Largest output size any instance may produce.
  const MAX_OUTPUT_SIZE: usize;

  /// Absorb `data`, returning the number of bytes consumed.
  ///
  /// The return value is always `data.len()`.
  fn update(&mut self, data: &[u8]) -> usize;

  /// Update the hasher with multiple non-contiguous buffers.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) -> usize {
    bufs.iter().map(|buf| self.update(buf)).sum()
  }

  /// Number of bytes [`finalize_into`](Self::finalize_into) produces.
  #[must_use]
  fn output_size(&self) -> usize;

  /// Input block size in bytes.
  #[inline]
  #[must_use]
  fn block_size(&self) -> usize {
    Self::BLOCK_SIZE
  }

  /// Write the digest of everything absorbed so far into `out`.
  ///
  /// At most `min(out.len(), self.output_size())` bytes are written; the count
  /// written is returned.
  fn finalize_into(&self, out: &mut [u8]) -> usize;

  /// Append the digest of everything absorbed so far to `acc`.
  ///
  /// Returns the number of bytes appended, which is always
  /// [`output_size`](Self::output_size).
  #[cfg(feature = "alloc")]
  #[inline]
  fn finalize_append(&self, acc: &mut alloc::vec::Vec<u8>) -> usize {
    let start = acc.len();
    acc.resize(start + self.output_size(), 0);
    let tail = acc.get_mut(start..).unwrap_or_default();
    self.finalize_into(tail)
  }
}
