//! Public-API tests for the Montgomery ladder.

use hex_literal::hex;
use rand::RngCore;

use curve25519_ref::constants::X25519_BASEPOINT;
use curve25519_ref::field::FieldElement;
use curve25519_ref::traits::{Identity, IsIdentity};
use curve25519_ref::{clamp_integer, MontgomeryPoint};

/// The basepoint times the all-zero scalar clamps to 2^254.
#[test]
fn zero_scalar_is_clamped_to_two_to_the_254() {
    let mut two_254 = [0u8; 32];
    two_254[31] = 0x40;
    assert_eq!(clamp_integer([0u8; 32]), two_254);

    assert_eq!(
        MontgomeryPoint::mul_base_clamped([0u8; 32]),
        X25519_BASEPOINT.mul_clamped(two_254)
    );
}

#[test]
fn non_canonical_point_equals_reduced_point() {
    // p + 9 encodes the same u-coordinate as the basepoint.
    let p_plus_9 = MontgomeryPoint(hex!(
        "f6ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7f"
    ));
    assert_eq!(p_plus_9, X25519_BASEPOINT);

    let k = [0x77; 32];
    assert_eq!(
        p_plus_9.mul_clamped(k).to_bytes(),
        X25519_BASEPOINT.mul_clamped(k).to_bytes()
    );
}

/// Bit 255 of the point is part of u: 2^255 + 9 and 28 are the same
/// field element.
#[test]
fn high_bit_of_point_adds_nineteen() {
    let k = [0x77; 32];

    let mut nine_high = [0u8; 32];
    nine_high[0] = 9;
    nine_high[31] = 0x80;
    let mut twenty_eight = [0u8; 32];
    twenty_eight[0] = 28;

    let expected = hex!("08c440757a1d705ba559066e6ebc306121d532cbd9fed5d112721b5aaa21e743");
    assert_eq!(MontgomeryPoint(nine_high).mul_clamped(k).to_bytes(), expected);
    assert_eq!(MontgomeryPoint(twenty_eight).mul_clamped(k).to_bytes(), expected);
    assert_ne!(X25519_BASEPOINT.mul_clamped(k).to_bytes(), expected);
}

#[test]
fn identity_stays_identity() {
    let mut rng = rand::rng();
    let mut k = [0u8; 32];
    rng.fill_bytes(&mut k);

    let out = MontgomeryPoint::identity().mul_clamped(k);
    assert!(out.is_identity());
    assert_eq!(out.to_bytes(), [0u8; 32]);
}

#[test]
fn outputs_decode_below_p() {
    let mut rng = rand::rng();
    for _ in 0..16 {
        let mut k = [0u8; 32];
        let mut u = [0u8; 32];
        rng.fill_bytes(&mut k);
        rng.fill_bytes(&mut u);

        let out = MontgomeryPoint(u).mul_clamped(k).to_bytes();
        assert_eq!(out[31] & 0x80, 0);
        assert_eq!(FieldElement::from_bytes(&out).to_bytes(), out);
    }
}
