use blake2s::{Blake2s, Blake2s256, Digest as _, KEY_LEN_MAX, OUT_LEN_MAX, PERSONAL_LEN, SALT_LEN};
use proptest::prelude::*;

fn blake2s_var_ref(out_len: usize, data: &[u8]) -> Vec<u8> {
  use blake2::digest::{Update, VariableOutput};

  let mut h = blake2::Blake2sVar::new(out_len).unwrap();
  h.update(data);
  let mut out = vec![0u8; out_len];
  h.finalize_variable(&mut out).unwrap();
  out
}

fn blake2s_mac_ref(key: &[u8], salt: &[u8], personal: &[u8], data: &[u8]) -> Vec<u8> {
  use blake2::digest::Mac;

  let mut mac = blake2::Blake2sMac256::new_with_salt_and_personal(key, salt, personal).unwrap();
  mac.update(data);
  mac.finalize().into_bytes().to_vec()
}

fn ours(key: &[u8], salt: &[u8], personal: &[u8], out_len: usize, data: &[u8]) -> Vec<u8> {
  let mut state = Blake2s::new(key, salt, personal, out_len).unwrap();
  state.update(data);
  state.finalize().as_bytes().to_vec()
}

/// Feed `data` in pieces whose sizes come from `steps`.
fn feed_in_steps(state: &mut Blake2s, data: &[u8], steps: &[usize]) {
  let mut i = 0usize;
  let mut k = 0usize;
  while i < data.len() {
    let step = steps.get(k % steps.len().max(1)).copied().unwrap_or(1).max(1);
    let end = core::cmp::min(data.len(), i + step);
    assert_eq!(state.update(&data[i..end]), end - i);
    i = end;
    k += 1;
  }
}

proptest! {
  #[test]
  fn blake2s256_one_shot_matches_blake2(data in proptest::collection::vec(any::<u8>(), 0..4096)) {
    prop_assert_eq!(Blake2s256::digest(&data).to_vec(), blake2s_var_ref(32, &data));
  }

  #[test]
  fn variable_output_matches_blake2(
    data in proptest::collection::vec(any::<u8>(), 0..1024),
    out_len in 1usize..=OUT_LEN_MAX,
  ) {
    prop_assert_eq!(ours(b"", b"", b"", out_len, &data), blake2s_var_ref(out_len, &data));
  }

  #[test]
  fn keyed_salted_personal_matches_blake2(
    data in proptest::collection::vec(any::<u8>(), 0..1024),
    key in proptest::collection::vec(any::<u8>(), 1..=KEY_LEN_MAX),
    salt in proptest::array::uniform8(any::<u8>()),
    personal in proptest::array::uniform8(any::<u8>()),
  ) {
    prop_assert_eq!(ours(&key, &salt, &personal, 32, &data), blake2s_mac_ref(&key, &salt, &personal, &data));
  }

  #[test]
  fn streaming_matches_one_shot(
    data in proptest::collection::vec(any::<u8>(), 0..2048),
    steps in proptest::collection::vec(0usize..200, 1..16),
    key in proptest::collection::vec(any::<u8>(), 0..=KEY_LEN_MAX),
    salt in proptest::collection::vec(any::<u8>(), 0..=SALT_LEN),
    personal in proptest::collection::vec(any::<u8>(), 0..=PERSONAL_LEN),
    out_len in 1usize..=OUT_LEN_MAX,
  ) {
    let expected = ours(&key, &salt, &personal, out_len, &data);
    let mut state = Blake2s::new(&key, &salt, &personal, out_len).unwrap();
    feed_in_steps(&mut state, &data, &steps);
    let got = state.finalize();
    prop_assert_eq!(got.as_bytes(), expected.as_slice());
  }

  #[test]
  fn finalize_is_non_destructive(
    head in proptest::collection::vec(any::<u8>(), 0..300),
    tail in proptest::collection::vec(any::<u8>(), 0..300),
  ) {
    let mut state = Blake2s::new(b"key", b"", b"", 32).unwrap();
    state.update(&head);
    let first = state.finalize();
    state.update(&[]);
    prop_assert_eq!(state.finalize(), first);

    state.update(&tail);
    let mut whole = head.clone();
    whole.extend_from_slice(&tail);
    let got = state.finalize();
    let want = ours(b"key", b"", b"", 32, &whole);
    prop_assert_eq!(got.as_bytes(), want.as_slice());
  }

  #[test]
  fn output_and_block_sizes(
    data in proptest::collection::vec(any::<u8>(), 0..256),
    out_len in 1usize..=OUT_LEN_MAX,
  ) {
    let mut state = Blake2s::new(b"", b"", b"", out_len).unwrap();
    state.update(&data);
    prop_assert_eq!(state.finalize().len(), out_len);
    prop_assert_eq!(state.output_size(), out_len);
    prop_assert_eq!(state.block_size(), 64);
  }

  #[test]
  fn single_bit_flip_changes_digest(
    data in proptest::collection::vec(any::<u8>(), 1..512),
    bit in any::<usize>(),
  ) {
    let base = ours(b"k", b"s", b"p", 32, &data);
    let mut flipped = data.clone();
    let bit = bit % (flipped.len() * 8);
    flipped[bit / 8] ^= 1 << (bit % 8);
    prop_assert_ne!(base, ours(b"k", b"s", b"p", 32, &flipped));
  }
}

#[test]
fn parameter_bit_flips_change_digest() {
  let data = b"the quick brown fox";
  let base = ours(&[0x11; 32], &[0x22; 8], &[0x33; 8], 32, data);
  for byte in 0..32 {
    let mut key = [0x11u8; 32];
    key[byte] ^= 0x01;
    assert_ne!(base, ours(&key, &[0x22; 8], &[0x33; 8], 32, data), "key byte {byte}");
  }
  for byte in 0..8 {
    let mut salt = [0x22u8; 8];
    salt[byte] ^= 0x80;
    assert_ne!(base, ours(&[0x11; 32], &salt, &[0x33; 8], 32, data), "salt byte {byte}");

    let mut personal = [0x33u8; 8];
    personal[byte] ^= 0x04;
    assert_ne!(base, ours(&[0x11; 32], &[0x22; 8], &personal, 32, data), "personal byte {byte}");
  }
}

#[test]
fn construction_rejects_out_of_range() {
  assert!(Blake2s::new(b"", b"", b"", 0).is_err());
  assert!(Blake2s::new(b"", b"", b"", 33).is_err());
  assert!(Blake2s::new(&[0u8; 33], b"", b"", 32).is_err());
  assert!(Blake2s::new(b"", &[0u8; 9], b"", 32).is_err());
  assert!(Blake2s::new(b"", b"", &[0u8; 9], 32).is_err());
}
