//! BLAKE2s (RFC 7693) with keys, salts, and personalization.
//!
//! Portable, `no_std`, pure Rust, sequential mode only. Digests are 1 to 32
//! bytes long; keys are up to 32 bytes; salt and personalization are up to 8
//! bytes each and zero-padded.
//!
//! # Quick Start
//!
//! ```
//! use blake2s::{Blake2s, blake2s};
//!
//! // One-shot, unkeyed, 32 bytes.
//! let digest = blake2s(b"");
//! assert_eq!(
//!   digest.to_hex(),
//!   "69217a3079908094e11121d042354a7c1f55b6482ca1a51e1b250dfd1ed0eef9"
//! );
//!
//! // Streaming, keyed, personalized, truncated.
//! let mut state = Blake2s::new(b"secret key", b"", b"my-app", 16)?;
//! state.update(b"hello ");
//! state.update(b"world");
//! assert_eq!(state.finalize().len(), 16);
//! # Ok::<(), blake2s::ParamError>(())
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | `std::io::Write` for [`Blake2s`], the `b2ssum` binary |
//! | `alloc` | Yes | [`Blake2s::finalize_append`], [`Output::to_hex`] (implied by `std`) |
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod blake2s256;
mod compress;
mod error;
pub mod kernels;
mod output;
pub mod params;
mod state;

#[cfg(feature = "std")]
#[doc(hidden)]
pub mod kernel_test;

pub use blake2s256::Blake2s256;
pub use error::ParamError;
pub use kernels::Blake2sKernelId;
pub use output::Output;
pub use params::{ParamBlock, Params};
pub use state::Blake2s;
pub use traits::{Digest, VarDigest};

/// Input block size in bytes.
pub const BLOCK_LEN: usize = 64;
/// Largest digest, in bytes.
pub const OUT_LEN_MAX: usize = 32;
/// Largest key, in bytes.
pub const KEY_LEN_MAX: usize = 32;
/// Salt size, in bytes.
pub const SALT_LEN: usize = 8;
/// Personalization size, in bytes.
pub const PERSONAL_LEN: usize = 8;

/// Initialization vector (the SHA-256 IV).
pub(crate) const IV: [u32; 8] = [
  0x6A09_E667,
  0xBB67_AE85,
  0x3C6E_F372,
  0xA54F_F53A,
  0x510E_527F,
  0x9B05_688C,
  0x1F83_D9AB,
  0x5BE0_CD19,
];

/// Unkeyed 32-byte BLAKE2s of `data`.
#[must_use]
pub fn blake2s(data: &[u8]) -> Output {
  Params::new().hash(data)
}
