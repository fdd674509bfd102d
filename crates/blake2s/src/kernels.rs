//! Compression kernel registry.
//!
//! Hashers call compression through a [`CompressFn`] pointer chosen from this
//! table, so additional kernels slot in without touching the streaming code.

use crate::compress::compress_portable;

/// `(h, blocks, counter, flags, last_block_len)`.
pub(crate) type CompressFn = fn(&mut [u32; 8], &[u8], &mut [u32; 2], [u32; 2], u32);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Blake2sKernelId {
  #[default]
  Portable = 0,
}

pub const ALL: &[Blake2sKernelId] = &[Blake2sKernelId::Portable];

impl Blake2sKernelId {
  #[inline]
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Portable => "portable",
    }
  }
}

/// Look up a kernel by the name [`Blake2sKernelId::as_str`] reports.
#[must_use]
pub fn id_from_name(name: &str) -> Option<Blake2sKernelId> {
  ALL.iter().copied().find(|id| id.as_str().eq_ignore_ascii_case(name.trim()))
}

#[inline]
#[must_use]
pub(crate) fn compress_fn(id: Blake2sKernelId) -> CompressFn {
  match id {
    Blake2sKernelId::Portable => compress_portable,
  }
}
