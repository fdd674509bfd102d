//! The BLAKE2s compression function.
//!
//! Portable, `no_std`, pure Rust. Every arithmetic step wraps modulo 2^32.

#![allow(clippy::indexing_slicing)] // Compression schedule uses fixed indices

use crate::{BLOCK_LEN, IV};

/// All-ones flag word marking the final block.
pub(crate) const LAST_BLOCK: u32 = 0xFFFF_FFFF;

/// Message word schedule, one row per round.
pub(crate) const SIGMA: [[usize; 16]; 10] = [
  [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
  [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
  [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
  [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
  [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
  [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
  [12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
  [13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
  [6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
  [10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
];

/// Add `inc` to the split byte counter, carrying from `t[0]` into `t[1]`.
#[inline(always)]
pub(crate) fn increment_counter(t: &mut [u32; 2], inc: u32) {
  t[0] = t[0].wrapping_add(inc);
  if t[0] < inc {
    t[1] = t[1].wrapping_add(1);
  }
}

/// The G mixing primitive.
#[inline(always)]
pub(crate) fn g(a: &mut u32, b: &mut u32, c: &mut u32, d: &mut u32, x: u32, y: u32) {
  *a = a.wrapping_add(*b).wrapping_add(x);
  *d = (*d ^ *a).rotate_right(16);
  *c = c.wrapping_add(*d);
  *b = (*b ^ *c).rotate_right(12);
  *a = a.wrapping_add(*b).wrapping_add(y);
  *d = (*d ^ *a).rotate_right(8);
  *c = c.wrapping_add(*d);
  *b = (*b ^ *c).rotate_right(7);
}

/// The sixteen little-endian message words of a block.
#[inline(always)]
fn message_words(block: &[u8; BLOCK_LEN]) -> [u32; 16] {
  let (chunks, _) = block.as_chunks::<4>();
  let mut m = [0u32; 16];
  for (word, bytes) in m.iter_mut().zip(chunks) {
    *word = u32::from_le_bytes(*bytes);
  }
  m
}

/// Mix one block into `h`.
///
/// `t` is the byte counter *including* this block; `f` holds the
/// finalization flags (`f[0] == LAST_BLOCK` on the final block only).
#[inline(always)]
pub(crate) fn compress(h: &mut [u32; 8], block: &[u8; BLOCK_LEN], t: [u32; 2], f: [u32; 2]) {
  let m = message_words(block);
  let [t0, t1] = t;
  let [f0, f1] = f;

  let mut v0 = h[0];
  let mut v1 = h[1];
  let mut v2 = h[2];
  let mut v3 = h[3];
  let mut v4 = h[4];
  let mut v5 = h[5];
  let mut v6 = h[6];
  let mut v7 = h[7];

  let mut v8 = IV[0];
  let mut v9 = IV[1];
  let mut v10 = IV[2];
  let mut v11 = IV[3];
  let mut v12 = IV[4] ^ t0;
  let mut v13 = IV[5] ^ t1;
  let mut v14 = IV[6] ^ f0;
  let mut v15 = IV[7] ^ f1;

  macro_rules! round {
    ($r:expr) => {{
      let s = &SIGMA[$r];

      g(&mut v0, &mut v4, &mut v8, &mut v12, m[s[0]], m[s[1]]);
      g(&mut v1, &mut v5, &mut v9, &mut v13, m[s[2]], m[s[3]]);
      g(&mut v2, &mut v6, &mut v10, &mut v14, m[s[4]], m[s[5]]);
      g(&mut v3, &mut v7, &mut v11, &mut v15, m[s[6]], m[s[7]]);

      g(&mut v0, &mut v5, &mut v10, &mut v15, m[s[8]], m[s[9]]);
      g(&mut v1, &mut v6, &mut v11, &mut v12, m[s[10]], m[s[11]]);
      g(&mut v2, &mut v7, &mut v8, &mut v13, m[s[12]], m[s[13]]);
      g(&mut v3, &mut v4, &mut v9, &mut v14, m[s[14]], m[s[15]]);
    }};
  }

  round!(0);
  round!(1);
  round!(2);
  round!(3);
  round!(4);
  round!(5);
  round!(6);
  round!(7);
  round!(8);
  round!(9);

  h[0] ^= v0 ^ v8;
  h[1] ^= v1 ^ v9;
  h[2] ^= v2 ^ v10;
  h[3] ^= v3 ^ v11;
  h[4] ^= v4 ^ v12;
  h[5] ^= v5 ^ v13;
  h[6] ^= v6 ^ v14;
  h[7] ^= v7 ^ v15;
}

/// Portable kernel entry point.
///
/// Interior calls (`f[0] == 0`) compress every 64-byte block in `blocks`,
/// advancing `t` by 64 before each one. A final call takes exactly one block
/// and advances `t` by `last_block_len`, the number of real bytes in it.
pub(crate) fn compress_portable(h: &mut [u32; 8], blocks: &[u8], t: &mut [u32; 2], f: [u32; 2], last_block_len: u32) {
  let (blocks, rest) = blocks.as_chunks::<BLOCK_LEN>();
  debug_assert!(rest.is_empty(), "blake2s: input is not a whole number of blocks");

  if f[0] == LAST_BLOCK {
    let [block] = blocks else {
      panic!("blake2s: final compression takes exactly one block, got {}", blocks.len());
    };
    assert!(last_block_len as usize <= BLOCK_LEN, "blake2s: final block length {last_block_len} exceeds 64");
    increment_counter(t, last_block_len);
    compress(h, block, *t, f);
    return;
  }

  for block in blocks {
    increment_counter(t, BLOCK_LEN as u32);
    compress(h, block, *t, f);
  }
}
