//! Parameter validation errors.
//!
//! Every rejection happens at construction time. Once a hasher exists, no
//! operation on it can fail.

use core::fmt;

use crate::{KEY_LEN_MAX, OUT_LEN_MAX, PERSONAL_LEN, SALT_LEN};

/// A BLAKE2s parameter was out of range.
///
/// Returned by [`Blake2s::new`](crate::Blake2s::new) and the
/// [`Params`](crate::Params) setters. No hasher is produced.
///
/// # Examples
///
/// ```
/// use blake2s::{Blake2s, ParamError};
///
/// let err = Blake2s::new(&[], &[], &[], 33).unwrap_err();
/// assert_eq!(err, ParamError::OutputLength { len: 33 });
/// assert_eq!(err.to_string(), "blake2s: output length 33 outside 1..=32");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ParamError {
  /// Requested digest length was zero or above 32 bytes.
  OutputLength { len: usize },
  /// Key was longer than 32 bytes.
  KeyLength { len: usize },
  /// Salt was longer than 8 bytes.
  SaltLength { len: usize },
  /// Personalization string was longer than 8 bytes.
  PersonalLength { len: usize },
}

impl ParamError {
  /// Length of the rejected input, in bytes.
  #[inline]
  #[must_use]
  pub const fn length(&self) -> usize {
    match *self {
      Self::OutputLength { len } | Self::KeyLength { len } | Self::SaltLength { len } | Self::PersonalLength { len } => {
        len
      }
    }
  }

  /// Largest accepted length for the rejected input.
  #[inline]
  #[must_use]
  pub const fn limit(&self) -> usize {
    match self {
      Self::OutputLength { .. } => OUT_LEN_MAX,
      Self::KeyLength { .. } => KEY_LEN_MAX,
      Self::SaltLength { .. } => SALT_LEN,
      Self::PersonalLength { .. } => PERSONAL_LEN,
    }
  }
}

impl fmt::Display for ParamError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match *self {
      Self::OutputLength { len } => write!(f, "blake2s: output length {len} outside 1..={OUT_LEN_MAX}"),
      Self::KeyLength { len } => write!(f, "blake2s: key length {len} exceeds {KEY_LEN_MAX}"),
      Self::SaltLength { len } => write!(f, "blake2s: salt length {len} exceeds {SALT_LEN}"),
      Self::PersonalLength { len } => {
        write!(f, "blake2s: personalization length {len} exceeds {PERSONAL_LEN}")
      }
    }
  }
}

impl core::error::Error for ParamError {}
