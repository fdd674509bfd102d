#![no_main]

use blake2s::{Blake2s, Blake2s256, Digest as _};
use libfuzzer_sys::fuzz_target;

fn split_point(input: &[u8]) -> usize {
  if input.is_empty() {
    return 0;
  }
  (input[0] as usize) % (input.len() + 1)
}

fuzz_target!(|input: &[u8]| {
  let split = split_point(input);
  let (a, b) = input.split_at(split);

  {
    let ours = Blake2s256::digest(input);
    let mut h = Blake2s256::new();
    h.update(a);
    h.update(b);
    assert_eq!(ours, h.finalize());

    use blake2::Digest as _;
    let ref_out = blake2::Blake2s256::digest(input);
    let mut expected = [0u8; 32];
    expected.copy_from_slice(&ref_out);
    assert_eq!(ours, expected);
  }

  {
    use blake2::digest::Mac;

    // First 32 bytes (at least one) are the key, the rest is the message.
    let key_len = a.len().clamp(1, 32).min(input.len());
    if key_len == 0 {
      return;
    }
    let (key, msg) = input.split_at(key_len);

    let mut h = Blake2s::new(key, b"fuzzsalt", b"fuzzpers", 32).unwrap();
    h.update(msg);

    let mut mac = blake2::Blake2sMac256::new_with_salt_and_personal(key, b"fuzzsalt", b"fuzzpers").unwrap();
    mac.update(msg);
    assert_eq!(h.finalize(), mac.finalize().into_bytes().as_slice());
  }
});
