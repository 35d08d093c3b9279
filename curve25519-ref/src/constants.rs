// -*- mode: rust; -*-
//
// This file is part of curve25519-ref.
// See LICENSE for licensing information.

//! Various constants, such as the X25519 basepoint.

use crate::field::FieldElement;
use crate::montgomery::MontgomeryPoint;

/// The X25519 basepoint, in `MontgomeryPoint` format.
pub const X25519_BASEPOINT: MontgomeryPoint = MontgomeryPoint([
    0x09, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
]);

/// `AMINUS2_OVER_FOUR` is (A-2)/4 = 121665 for the Montgomery coefficient
/// A = 486662 of Curve25519, in the form the ladder step multiplies by.
pub(crate) const AMINUS2_OVER_FOUR: u32 = 121665;

/// \\(2\^{256} - p = 2\^{255} + 19\\) in limb form.  Adding it to a reduced
/// element is the same as subtracting \\(p\\) modulo \\(2\^{256}\\).
pub(crate) const MINUS_P: FieldElement = FieldElement([
    19, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    128,
]);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn minus_p_plus_p_wraps_to_zero() {
        let p = FieldElement([
            0xed, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
            0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
            0xff, 0xff, 0xff, 0x7f,
        ]);
        let sum = &p + &MINUS_P;
        assert!(sum.as_limbs()[..31].iter().all(|limb| *limb == 0));
        // 2^256 lands in the unmasked top limb.
        assert_eq!(sum.as_limbs()[31], 0x100);
    }

    #[test]
    fn basepoint_is_nine() {
        let nine = FieldElement::from_bytes(&X25519_BASEPOINT.0);
        let mut expected = FieldElement::ZERO;
        expected.0[0] = 9;
        assert_eq!(nine, expected);
    }
}
