//! Parameter block and the `Params` builder.
//!
//! BLAKE2s folds its configuration into the initial chaining value: the
//! 32-byte parameter block is read as eight little-endian words and XORed
//! into the IV. Only sequential mode is supported, so the tree-hashing fields
//! are fixed (`fanout = depth = 1`, everything else zero) and kept purely for
//! layout fidelity.

#![allow(clippy::indexing_slicing)] // Fixed parameter block offsets

use core::fmt;

use crate::{BLOCK_LEN, Blake2s, KEY_LEN_MAX, OUT_LEN_MAX, Output, PERSONAL_LEN, ParamError, SALT_LEN};

/// Serialized size of the parameter block.
pub const PARAM_BLOCK_LEN: usize = 32;

/// The BLAKE2s parameter block (RFC 7693, section 2.5).
///
/// Immutable once built. Obtain one from [`Params::param_block`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParamBlock {
  digest_size: u8,
  key_length: u8,
  fanout: u8,
  depth: u8,
  leaf_length: u32,
  node_offset: u32,
  xof_length: u16,
  node_depth: u8,
  inner_length: u8,
  salt: [u8; SALT_LEN],
  personal: [u8; PERSONAL_LEN],
}

impl ParamBlock {
  /// Sequential-mode block. Lengths must already be validated.
  #[inline]
  pub(crate) const fn sequential(
    digest_size: u8,
    key_length: u8,
    salt: [u8; SALT_LEN],
    personal: [u8; PERSONAL_LEN],
  ) -> Self {
    Self {
      digest_size,
      key_length,
      fanout: 1,
      depth: 1,
      leaf_length: 0,
      node_offset: 0,
      xof_length: 0,
      node_depth: 0,
      inner_length: 0,
      salt,
      personal,
    }
  }

  #[inline]
  #[must_use]
  pub const fn digest_size(&self) -> u8 {
    self.digest_size
  }

  #[inline]
  #[must_use]
  pub const fn key_length(&self) -> u8 {
    self.key_length
  }

  #[inline]
  #[must_use]
  pub const fn salt(&self) -> &[u8; SALT_LEN] {
    &self.salt
  }

  #[inline]
  #[must_use]
  pub const fn personal(&self) -> &[u8; PERSONAL_LEN] {
    &self.personal
  }

  /// Serialize to the fixed 32-byte little-endian layout.
  ///
  /// | Bytes  | Field |
  /// |--------|-------|
  /// | 0      | digest size |
  /// | 1      | key length |
  /// | 2      | fanout |
  /// | 3      | depth |
  /// | 4..8   | leaf length (u32) |
  /// | 8..12  | node offset (u32) |
  /// | 12..14 | XOF length (u16) |
  /// | 14     | node depth |
  /// | 15     | inner length |
  /// | 16..24 | salt |
  /// | 24..32 | personalization |
  #[must_use]
  pub fn marshal(&self) -> [u8; PARAM_BLOCK_LEN] {
    let mut buf = [0u8; PARAM_BLOCK_LEN];
    buf[0] = self.digest_size;
    buf[1] = self.key_length;
    buf[2] = self.fanout;
    buf[3] = self.depth;
    buf[4..8].copy_from_slice(&self.leaf_length.to_le_bytes());
    buf[8..12].copy_from_slice(&self.node_offset.to_le_bytes());
    buf[12..14].copy_from_slice(&self.xof_length.to_le_bytes());
    buf[14] = self.node_depth;
    buf[15] = self.inner_length;
    buf[16..24].copy_from_slice(&self.salt);
    buf[24..32].copy_from_slice(&self.personal);
    buf
  }

  /// The marshaled block as eight little-endian words.
  #[must_use]
  pub fn words(&self) -> [u32; 8] {
    let bytes = self.marshal();
    let (chunks, _) = bytes.as_chunks::<4>();
    let mut words = [0u32; 8];
    for (w, c) in words.iter_mut().zip(chunks) {
      *w = u32::from_le_bytes(*c);
    }
    words
  }
}

/// Builder for keyed, salted, or personalized BLAKE2s hashers.
///
/// Each setter validates its own argument, so an out-of-range value is
/// reported where it is supplied:
///
/// ```
/// use blake2s::Params;
///
/// let mut state = Params::new().hash_length(16)?.key(b"secret")?.personal(b"app-v1")?.to_state();
/// state.update(b"message");
/// assert_eq!(state.finalize().len(), 16);
/// # Ok::<(), blake2s::ParamError>(())
/// ```
#[derive(Clone)]
pub struct Params {
  hash_length: u8,
  key_length: u8,
  key_block: [u8; BLOCK_LEN],
  salt: [u8; SALT_LEN],
  personal: [u8; PERSONAL_LEN],
}

impl Params {
  /// 32-byte output, no key, all-zero salt and personalization.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self {
      hash_length: OUT_LEN_MAX as u8,
      key_length: 0,
      key_block: [0u8; BLOCK_LEN],
      salt: [0u8; SALT_LEN],
      personal: [0u8; PERSONAL_LEN],
    }
  }

  /// Digest length in bytes, `1..=32`.
  pub fn hash_length(&mut self, len: usize) -> Result<&mut Self, ParamError> {
    if len == 0 || len > OUT_LEN_MAX {
      return Err(ParamError::OutputLength { len });
    }
    self.hash_length = len as u8;
    Ok(self)
  }

  /// Secret key, at most 32 bytes. An empty key means unkeyed.
  pub fn key(&mut self, key: &[u8]) -> Result<&mut Self, ParamError> {
    if key.len() > KEY_LEN_MAX {
      return Err(ParamError::KeyLength { len: key.len() });
    }
    self.key_block = [0u8; BLOCK_LEN];
    self.key_block[..key.len()].copy_from_slice(key);
    self.key_length = key.len() as u8;
    Ok(self)
  }

  /// Salt, at most 8 bytes. Shorter salts are zero-padded on the right.
  pub fn salt(&mut self, salt: &[u8]) -> Result<&mut Self, ParamError> {
    if salt.len() > SALT_LEN {
      return Err(ParamError::SaltLength { len: salt.len() });
    }
    self.salt = [0u8; SALT_LEN];
    self.salt[..salt.len()].copy_from_slice(salt);
    Ok(self)
  }

  /// Personalization string, at most 8 bytes. Shorter strings are
  /// zero-padded on the right.
  pub fn personal(&mut self, personal: &[u8]) -> Result<&mut Self, ParamError> {
    if personal.len() > PERSONAL_LEN {
      return Err(ParamError::PersonalLength { len: personal.len() });
    }
    self.personal = [0u8; PERSONAL_LEN];
    self.personal[..personal.len()].copy_from_slice(personal);
    Ok(self)
  }

  #[inline]
  #[must_use]
  pub const fn param_block(&self) -> ParamBlock {
    ParamBlock::sequential(self.hash_length, self.key_length, self.salt, self.personal)
  }

  /// Build a hasher. A non-empty key is absorbed as the first input block.
  #[must_use]
  pub fn to_state(&self) -> Blake2s {
    let mut state = Blake2s::from_param_block(&self.param_block());
    if self.key_length != 0 {
      state.update(&self.key_block);
    }
    state
  }

  /// Hash `data` in one shot with these parameters.
  #[must_use]
  pub fn hash(&self, data: &[u8]) -> Output {
    let mut state = self.to_state();
    state.update(data);
    state.finalize()
  }
}

impl Default for Params {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Debug for Params {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Params")
      .field("hash_length", &self.hash_length)
      .field("key_length", &self.key_length)
      .field("salt", &self.salt)
      .field("personal", &self.personal)
      .finish_non_exhaustive()
  }
}
