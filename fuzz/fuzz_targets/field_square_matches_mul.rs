#![no_main]
#[macro_use] extern crate libfuzzer_sys;
extern crate curve25519_ref;

use curve25519_ref::field::FieldElement;

/// Check that squaring agrees with generic multiplication, limb for limb,
/// on loaded elements and on the redundant sums and differences the ladder
/// step produces, and that `freeze` canonicalizes all of them.
fuzz_target!(|data: &[u8]| {
    if data.len() != 64 {
        return;
    }
    let mut a_bytes = [0u8; 32];
    let mut b_bytes = [0u8; 32];
    a_bytes.copy_from_slice(&data[0..32]);
    b_bytes.copy_from_slice(&data[32..64]);

    let a = FieldElement::from_bytes(&a_bytes);
    let a_sq = a.square();
    let b_sq = FieldElement::from_bytes(&b_bytes).square();

    for x in [a, &a_sq + &b_sq, &a_sq - &b_sq] {
        let sq = x.square();
        assert_eq!(sq.as_limbs(), (&x * &x).as_limbs());

        let frozen = x.freeze();
        assert_eq!(frozen.as_limbs(), frozen.freeze().as_limbs());

        let encoded = x.to_bytes();
        assert_eq!(encoded[31] & 0x80, 0);
        assert_eq!(FieldElement::from_bytes(&encoded).to_bytes(), encoded);
    }
});
