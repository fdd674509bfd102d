//! The streaming BLAKE2s engine.

#![allow(clippy::indexing_slicing)] // Buffer offsets are bounded by BLOCK_LEN

use core::{cmp, fmt};

use crate::{
  BLOCK_LEN, IV, OUT_LEN_MAX, Output, ParamError, Params,
  compress::LAST_BLOCK,
  kernels::{Blake2sKernelId, CompressFn, compress_fn},
  params::ParamBlock,
};

/// An incremental BLAKE2s hasher with a fixed output length.
///
/// Created from a key, salt, personalization, and output length, either with
/// [`Blake2s::new`] or through [`Params`]. There is no `reset`:
/// the key is forgotten once its block has been absorbed, so a fresh hasher
/// must be built instead.
///
/// [`finalize`](Self::finalize) works on a copy of the state, so it can be
/// called repeatedly and interleaved with further updates.
///
/// # Example
///
/// ```
/// use blake2s::Blake2s;
///
/// let mut state = Blake2s::new(b"key", b"", b"personal", 32)?;
/// state.update(b"hello ");
/// let partial = state.finalize();
/// state.update(b"world");
/// assert_ne!(partial, state.finalize());
/// # Ok::<(), blake2s::ParamError>(())
/// ```
#[derive(Clone)]
pub struct Blake2s {
  h: [u32; 8],
  t: [u32; 2],
  f: [u32; 2],
  buf: [u8; BLOCK_LEN],
  buf_len: usize,
  output_size: u8,
  kernel: Blake2sKernelId,
  compress: CompressFn,
}

impl Blake2s {
  /// Build a hasher.
  ///
  /// Empty `key`, `salt`, or `personal` slices mean "not supplied". Salt and
  /// personalization shorter than 8 bytes are zero-padded on the right.
  ///
  /// # Errors
  ///
  /// Returns [`ParamError`] when `output_len` is outside `1..=32`, the key is
  /// longer than 32 bytes, or the salt or personalization is longer than 8
  /// bytes.
  pub fn new(key: &[u8], salt: &[u8], personal: &[u8], output_len: usize) -> Result<Self, ParamError> {
    Ok(
      Params::new()
        .hash_length(output_len)?
        .key(key)?
        .salt(salt)?
        .personal(personal)?
        .to_state(),
    )
  }

  /// Initial state: IV XOR the parameter block, nothing absorbed yet.
  pub(crate) fn from_param_block(block: &ParamBlock) -> Self {
    let mut h = IV;
    for (word, param) in h.iter_mut().zip(block.words()) {
      *word ^= param;
    }
    let kernel = Blake2sKernelId::default();
    Self {
      h,
      t: [0; 2],
      f: [0; 2],
      buf: [0u8; BLOCK_LEN],
      buf_len: 0,
      output_size: block.digest_size(),
      kernel,
      compress: compress_fn(kernel),
    }
  }

  /// Absorb `data`. Returns the number of bytes consumed, always `data.len()`.
  ///
  /// At least one byte of a non-empty message stays buffered, so `finalize`
  /// always has a block to flag as the last one.
  pub fn update(&mut self, data: &[u8]) -> usize {
    let consumed = data.len();
    let rest = self.top_up(data);
    if rest.is_empty() {
      return consumed;
    }

    // More input is coming, so a full buffer is an interior block.
    if self.buf_len == BLOCK_LEN {
      (self.compress)(&mut self.h, &self.buf, &mut self.t, self.f, 0);
      self.buf_len = 0;
    }

    let held = match rest.len() % BLOCK_LEN {
      0 => BLOCK_LEN,
      partial => partial,
    };
    let (interior, held) = rest.split_at(rest.len() - held);
    if !interior.is_empty() {
      (self.compress)(&mut self.h, interior, &mut self.t, self.f, 0);
    }
    self.buf[..held.len()].copy_from_slice(held);
    self.buf_len = held.len();

    consumed
  }

  /// Complete a partially filled buffer from `data`; returns what is left.
  fn top_up<'a>(&mut self, data: &'a [u8]) -> &'a [u8] {
    if self.buf_len == 0 {
      return data;
    }
    let take = cmp::min(BLOCK_LEN - self.buf_len, data.len());
    let (head, rest) = data.split_at(take);
    self.buf[self.buf_len..self.buf_len + take].copy_from_slice(head);
    self.buf_len += take;
    rest
  }

  /// Absorb several buffers in order.
  pub fn update_vectored(&mut self, bufs: &[&[u8]]) -> usize {
    bufs.iter().map(|buf| self.update(buf)).sum()
  }

  /// Final chaining value, computed on a copy of the live state.
  fn finalized_words(&self) -> [u32; 8] {
    assert_eq!(self.f[0], 0, "blake2s: last-block flag already set on live state");

    let mut h = self.h;
    let mut t = self.t;
    let mut buf = self.buf;
    buf[self.buf_len..].fill(0);
    (self.compress)(&mut h, &buf, &mut t, [LAST_BLOCK, self.f[1]], self.buf_len as u32);
    h
  }

  /// Digest of everything absorbed so far. The hasher is left untouched.
  #[must_use]
  pub fn finalize(&self) -> Output {
    Output::from_words(&self.finalized_words(), self.output_size)
  }

  /// Write the digest into `out`, returning how many bytes were written:
  /// `min(out.len(), self.output_size())`.
  pub fn finalize_into(&self, out: &mut [u8]) -> usize {
    let digest = self.finalize();
    let n = cmp::min(out.len(), digest.len());
    out[..n].copy_from_slice(&digest.as_bytes()[..n]);
    n
  }

  /// Append the digest to `acc`, returning the number of bytes appended.
  #[cfg(feature = "alloc")]
  pub fn finalize_append(&self, acc: &mut alloc::vec::Vec<u8>) -> usize {
    let digest = self.finalize();
    acc.extend_from_slice(digest.as_bytes());
    digest.len()
  }

  /// Input block size: always 64.
  #[inline]
  #[must_use]
  pub const fn block_size(&self) -> usize {
    BLOCK_LEN
  }

  /// Digest length fixed at construction.
  #[inline]
  #[must_use]
  pub const fn output_size(&self) -> usize {
    self.output_size as usize
  }

  /// Total bytes absorbed, including the key block and any buffered input.
  #[inline]
  #[must_use]
  pub const fn count(&self) -> u64 {
    let compressed = ((self.t[1] as u64) << 32) | self.t[0] as u64;
    compressed.wrapping_add(self.buf_len as u64)
  }

  /// Compression kernel in use.
  #[inline]
  #[must_use]
  pub const fn kernel(&self) -> Blake2sKernelId {
    self.kernel
  }

  /// Switch to another compression kernel.
  ///
  /// Kernels are interchangeable at any point in the stream.
  #[must_use]
  pub fn with_kernel(mut self, kernel: Blake2sKernelId) -> Self {
    self.kernel = kernel;
    self.compress = compress_fn(kernel);
    self
  }

  #[cfg(test)]
  pub(crate) const fn chaining_value(&self) -> &[u32; 8] {
    &self.h
  }
}

impl fmt::Debug for Blake2s {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Blake2s")
      .field("output_size", &self.output_size)
      .field("count", &self.count())
      .field("kernel", &self.kernel)
      .finish_non_exhaustive()
  }
}

impl traits::VarDigest for Blake2s {
  const BLOCK_SIZE: usize = BLOCK_LEN;
  const MAX_OUTPUT_SIZE: usize = OUT_LEN_MAX;

  #[inline]
  fn update(&mut self, data: &[u8]) -> usize {
    Blake2s::update(self, data)
  }

  #[inline]
  fn output_size(&self) -> usize {
    Blake2s::output_size(self)
  }

  #[inline]
  fn finalize_into(&self, out: &mut [u8]) -> usize {
    Blake2s::finalize_into(self, out)
  }
}

#[cfg(feature = "std")]
impl std::io::Write for Blake2s {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    Ok(self.update(buf))
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}
