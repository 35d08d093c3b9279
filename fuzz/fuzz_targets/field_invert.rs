#![no_main]
#[macro_use] extern crate libfuzzer_sys;
extern crate curve25519_ref;

use curve25519_ref::field::FieldElement;

/// Check that `a * a^-1 == 1` for every nonzero `a`, and that zero inverts
/// to zero.
fuzz_target!(|data: &[u8]| {
    if data.len() != 32 {
        return;
    }
    let mut a_bytes = [0u8; 32];
    a_bytes.copy_from_slice(data);

    let a = FieldElement::from_bytes(&a_bytes);
    let a_inv = a.invert();

    if bool::from(a.is_zero()) {
        assert!(bool::from(a_inv.is_zero()));
    } else {
        assert_eq!(&a * &a_inv, FieldElement::ONE);
    }
});
