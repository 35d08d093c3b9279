// -*- mode: rust; -*-
//
// This file is part of curve25519-ref.
// See LICENSE for licensing information.

//! Scalar clamping for X25519.

/// _Clamps_ the given little-endian representation of a 32-byte integer.
///
/// Clamping clears the lowest three bits, so the integer is a multiple of
/// the cofactor 8, clears bit 255 and sets bit 254.  The ladder therefore
/// always runs over exactly 255 bit positions with a leading 1.
///
/// For more information on clamping, see
/// [here](https://neilmadden.blog/2020/05/28/whats-the-curve25519-clamping-all-about/).
#[must_use]
pub const fn clamp_integer(mut bytes: [u8; 32]) -> [u8; 32] {
    bytes[0] &= 0b1111_1000;
    bytes[31] &= 0b0111_1111;
    bytes[31] |= 0b0100_0000;
    bytes
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::RngCore;

    #[test]
    fn clamping_sets_and_clears_fixed_bits() {
        let mut rng = rand::rng();
        let mut inputs = [[0u8; 32], [0xff; 32], [0u8; 32]];
        rng.fill_bytes(&mut inputs[2]);

        for n in inputs.iter() {
            let e = clamp_integer(*n);
            assert_eq!(e[0] & 0b0000_0111, 0);
            assert_eq!(e[31] & 0b1000_0000, 0);
            assert_eq!(e[31] & 0b0100_0000, 0b0100_0000);
            // Everything else is untouched.
            assert_eq!(e[1..31], n[1..31]);
            assert_eq!(e[0] & 0b1111_1000, n[0] & 0b1111_1000);
            assert_eq!(e[31] & 0b0011_1111, n[31] & 0b0011_1111);
        }
    }

    #[test]
    fn clamping_is_idempotent() {
        let n = [0xa5; 32];
        assert_eq!(clamp_integer(clamp_integer(n)), clamp_integer(n));
    }
}
