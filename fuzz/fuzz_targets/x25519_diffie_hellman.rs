#![no_main]
#[macro_use] extern crate libfuzzer_sys;
extern crate x25519_ref;

use x25519_ref::{x25519, x25519_base};

/// Check that two parties holding arbitrary 32-byte secrets `a` and `b`
/// always agree: `x25519(a, x25519_base(b)) == x25519(b, x25519_base(a))`.
fuzz_target!(|data: &[u8]| {
    if data.len() != 64 {
        return;
    }
    let mut a = [0u8; 32];
    let mut b = [0u8; 32];
    a.copy_from_slice(&data[0..32]);
    b.copy_from_slice(&data[32..64]);

    let shared_ab = x25519(a, x25519_base(b));
    let shared_ba = x25519(b, x25519_base(a));

    assert_eq!(shared_ab, shared_ba);
});
