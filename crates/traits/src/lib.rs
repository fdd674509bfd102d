//! Core hashing traits for the b2s workspace.
//!
//! This crate provides the traits the BLAKE2s implementation conforms to. It is
//! `no_std` compatible and has zero dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`Digest`] | Fixed-size, unkeyed digests | BLAKE2s-256 |
//! | [`VarDigest`] | Runtime-sized, parameterized digests | Keyed/salted BLAKE2s |
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

mod digest;
mod var_digest;

pub use digest::Digest;
pub use var_digest::VarDigest;
