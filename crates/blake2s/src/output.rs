//! Digest output value.

#![allow(clippy::indexing_slicing)] // `len` never exceeds OUT_LEN_MAX

use core::fmt;

use crate::OUT_LEN_MAX;

/// A finished BLAKE2s digest of 1 to 32 bytes.
///
/// Comparisons look only at the first [`len`](Self::len) bytes.
#[derive(Clone, Copy)]
pub struct Output {
  bytes: [u8; OUT_LEN_MAX],
  len: u8,
}

impl Output {
  /// Serialize the first `len` bytes of `words`, little-endian.
  pub(crate) fn from_words(words: &[u32; 8], len: u8) -> Self {
    debug_assert!(len as usize <= OUT_LEN_MAX);
    let mut bytes = [0u8; OUT_LEN_MAX];
    let (chunks, _) = bytes.as_chunks_mut::<4>();
    for (chunk, word) in chunks.iter_mut().zip(words) {
      *chunk = word.to_le_bytes();
    }
    bytes[len as usize..].fill(0);
    Self { bytes, len }
  }

  #[inline]
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    &self.bytes[..self.len as usize]
  }

  #[inline]
  #[must_use]
  pub const fn len(&self) -> usize {
    self.len as usize
  }

  /// Always `false`; outputs are at least one byte.
  #[inline]
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Lowercase hexadecimal rendering.
  #[cfg(feature = "alloc")]
  #[must_use]
  pub fn to_hex(&self) -> alloc::string::String {
    alloc::format!("{self:x}")
  }
}

impl AsRef<[u8]> for Output {
  #[inline]
  fn as_ref(&self) -> &[u8] {
    self.as_bytes()
  }
}

impl PartialEq for Output {
  #[inline]
  fn eq(&self, other: &Self) -> bool {
    self.as_bytes() == other.as_bytes()
  }
}

impl Eq for Output {}

impl PartialEq<[u8]> for Output {
  #[inline]
  fn eq(&self, other: &[u8]) -> bool {
    self.as_bytes() == other
  }
}

impl PartialEq<&[u8]> for Output {
  #[inline]
  fn eq(&self, other: &&[u8]) -> bool {
    self.as_bytes() == *other
  }
}

impl<const N: usize> PartialEq<[u8; N]> for Output {
  #[inline]
  fn eq(&self, other: &[u8; N]) -> bool {
    self.as_bytes() == other.as_slice()
  }
}

impl fmt::LowerHex for Output {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for b in self.as_bytes() {
      write!(f, "{b:02x}")?;
    }
    Ok(())
  }
}

impl fmt::Display for Output {
  #[inline]
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::LowerHex::fmt(self, f)
  }
}

impl fmt::Debug for Output {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Output({self:x})")
  }
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::format;

  use super::*;

  fn sample(len: u8) -> Output {
    Output::from_words(
      &[
        0x0302_0100,
        0x0706_0504,
        0x0b0a_0908,
        0x0f0e_0d0c,
        0x1312_1110,
        0x1716_1514,
        0x1b1a_1918,
        0x1f1e_1d1c,
      ],
      len,
    )
  }

  #[test]
  fn words_serialize_little_endian() {
    let out = sample(32);
    let expected: [u8; 32] = core::array::from_fn(|i| i as u8);
    assert_eq!(out, expected);
  }

  #[test]
  fn truncation_keeps_prefix() {
    let out = sample(5);
    assert_eq!(out.len(), 5);
    assert!(!out.is_empty());
    assert_eq!(out.as_bytes(), &[0, 1, 2, 3, 4]);
  }

  #[test]
  fn equality_ignores_tail() {
    assert_eq!(sample(7), sample(7));
    assert_ne!(sample(7), sample(8));
  }

  #[test]
  fn hex_rendering() {
    let out = sample(4);
    assert_eq!(format!("{out}"), "00010203");
    assert_eq!(format!("{out:?}"), "Output(00010203)");
  }

  #[cfg(feature = "alloc")]
  #[test]
  fn to_hex_matches_display() {
    let out = sample(32);
    assert_eq!(out.to_hex(), format!("{out}"));
    assert_eq!(out.to_hex().len(), 64);
  }
}
