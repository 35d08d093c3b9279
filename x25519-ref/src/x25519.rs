// -*- mode: rust; -*-
//
// This file is part of x25519-ref.
// See LICENSE for licensing information.

//! The X25519 function and a thin key layer over it.
//!
//! Everything here reduces to one operation: clamp a 32-byte scalar and run
//! the Montgomery ladder from a 32-byte u-coordinate.  The free functions
//! expose it on arrays ([`x25519`], [`x25519_base`]) and on checked slices
//! ([`scalarmult`], [`scalarmult_base`]).  The key types hold the same bytes
//! and route through the same calls, so a [`SecretKey`] loaded from a slice
//! is length-checked exactly like a slice passed to [`scalarmult`].

use core::fmt;

use curve25519_ref::montgomery::MontgomeryPoint;

use rand_core::CryptoRng;

use subtle::ConstantTimeEq;

use zeroize::Zeroizing;

use crate::errors::{check_length, check_length_mut, Error};

/// The X25519 basepoint \\(u = 9\\), for use with [`x25519`] and
/// [`scalarmult`].
pub const X25519_BASEPOINT_BYTES: [u8; 32] = [
    9, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

/// Multiply the point with u-coordinate `u` by the clamped scalar `k`.
///
/// Every input is accepted.  `k` is clamped, and all 32 bytes of `u` are
/// used as given, so bit 255 contributes \\(2\^{255} \equiv 19\\).  The
/// output is always the canonical encoding of a value below \\(p\\).
///
/// # Example
///
/// ```
/// use x25519_ref::{x25519, x25519_base};
///
/// let alice = [0x11u8; 32];
/// let bob = [0x22u8; 32];
///
/// assert_eq!(x25519(alice, x25519_base(bob)), x25519(bob, x25519_base(alice)));
/// ```
pub fn x25519(k: [u8; 32], u: [u8; 32]) -> [u8; 32] {
    MontgomeryPoint(u).mul_clamped(k).to_bytes()
}

/// Multiply the basepoint by the clamped scalar `k`, yielding the public
/// value for `k`.  Equal to `x25519(k, X25519_BASEPOINT_BYTES)`.
pub fn x25519_base(k: [u8; 32]) -> [u8; 32] {
    MontgomeryPoint::mul_base_clamped(k).to_bytes()
}

/// Write `x25519(k, u)` into `out`.
///
/// # Errors
///
/// Returns [`Error::InvalidLength`] unless `k`, `u` and `out` are each
/// exactly 32 bytes long.  All lengths are checked before the ladder runs,
/// and `out` is untouched on error.
pub fn scalarmult(out: &mut [u8], k: &[u8], u: &[u8]) -> Result<(), Error> {
    let k = check_length::<32>("k", k)?;
    let u = check_length::<32>("u", u)?;
    let out = check_length_mut::<32>("out", out)?;

    *out = x25519(*k, *u);
    Ok(())
}

/// Write `x25519_base(k)` into `out`.
///
/// # Errors
///
/// Returns [`Error::InvalidLength`] unless `k` and `out` are each exactly
/// 32 bytes long.  `out` is untouched on error.
pub fn scalarmult_base(out: &mut [u8], k: &[u8]) -> Result<(), Error> {
    scalarmult(out, k, &X25519_BASEPOINT_BYTES)
}

/// A 32-byte X25519 secret scalar.
///
/// Stored unclamped; clamping happens inside every multiplication.  The
/// bytes are wiped when the key is dropped, and `Debug` does not print
/// them.
#[derive(Clone)]
pub struct SecretKey(Zeroizing<[u8; 32]>);

impl SecretKey {
    /// Draw a fresh secret from `csprng`.
    pub fn generate<R: CryptoRng + ?Sized>(csprng: &mut R) -> SecretKey {
        let mut bytes = Zeroizing::new([0u8; 32]);
        csprng.fill_bytes(&mut bytes[..]);
        SecretKey(bytes)
    }

    /// Wrap an existing 32-byte secret.
    pub fn from_bytes(bytes: [u8; 32]) -> SecretKey {
        SecretKey(Zeroizing::new(bytes))
    }

    /// View the secret bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Compute the matching public key, `x25519_base(self)`.
    pub fn public_key(&self) -> PublicKey {
        PublicKey(x25519_base(*self.0))
    }

    /// Agree on a shared secret with the holder of `their_public`.
    pub fn diffie_hellman(&self, their_public: &PublicKey) -> SharedSecret {
        SharedSecret(Zeroizing::new(x25519(*self.0, their_public.0)))
    }
}

impl TryFrom<&[u8]> for SecretKey {
    type Error = Error;

    /// Load a secret from a slice of exactly 32 bytes.
    fn try_from(bytes: &[u8]) -> Result<SecretKey, Error> {
        let bytes = check_length::<32>("SecretKey", bytes)?;
        Ok(SecretKey::from_bytes(*bytes))
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(..)")
    }
}

/// A 32-byte X25519 public value: the u-coordinate a peer sends.
///
/// Equality and hashing are on the bytes as received.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; 32]);

impl PublicKey {
    /// The encoded u-coordinate.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Copy out the encoded u-coordinate.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }
}

impl From<[u8; 32]> for PublicKey {
    fn from(bytes: [u8; 32]) -> PublicKey {
        PublicKey(bytes)
    }
}

impl From<&SecretKey> for PublicKey {
    fn from(secret: &SecretKey) -> PublicKey {
        secret.public_key()
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = Error;

    /// Load a public value from a slice of exactly 32 bytes.
    fn try_from(bytes: &[u8]) -> Result<PublicKey, Error> {
        let bytes = check_length::<32>("PublicKey", bytes)?;
        Ok(PublicKey(*bytes))
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// The output of [`SecretKey::diffie_hellman`].  Wiped on drop.
pub struct SharedSecret(Zeroizing<[u8; 32]>);

impl SharedSecret {
    /// View the shared bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Whether the peer's value contributed to the result.
    ///
    /// A low-order peer value, such as \\(u = 0\\), forces the all-zero
    /// output whatever our secret is.  This check runs in constant time;
    /// see [RFC 7748 section 6.1](https://tools.ietf.org/html/rfc7748#section-6.1)
    /// on when a protocol should reject that case.
    #[must_use]
    pub fn was_contributory(&self) -> bool {
        !bool::from(self.0[..].ct_eq(&[0u8; 32][..]))
    }
}

impl AsRef<[u8]> for SharedSecret {
    fn as_ref(&self) -> &[u8] {
        &self.0[..]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use hex_literal::hex;

    fn do_rfc7748_ladder_test1(input_scalar: [u8; 32], input_point: [u8; 32], expected: [u8; 32]) {
        let result = x25519(input_scalar, input_point);

        assert_eq!(result, expected);
    }

    #[test]
    fn rfc7748_ladder_test1_vectorset1() {
        let input_scalar = hex!("a546e36bf0527c9d3b16154b82465edd62144c0ac1fc5a18506a2244ba449ac4");
        let input_point = hex!("e6db6867583030db3594c1a424b15f7c726624ec26b3353b10a903a6d0ab1c4c");
        let expected = hex!("c3da55379de9c6908e94ea4df28d084f32eccf03491c71f754b4075577a28552");

        do_rfc7748_ladder_test1(input_scalar, input_point, expected);
    }

    /// RFC 7748 decodes this point with bit 255 cleared; passed verbatim,
    /// the set bit adds 19 to u and changes the result.
    #[test]
    fn rfc7748_ladder_test1_vectorset2() {
        let input_scalar = hex!("4b66e9d4d1b4673c5ad22691957d6af5c11b6421e0ea01d42ca4169e7918ba0d");
        let mut input_point =
            hex!("e5210f12786811d3f4b7959d0538ae2c31dbe7106fc03c3efc4cd549c715a493");

        do_rfc7748_ladder_test1(
            input_scalar,
            input_point,
            hex!("d5f33573c9f6b8129483acce1e2534e95d3c41af6b00d0d30437b87cada57e4a"),
        );

        input_point[31] &= 0x7f;
        do_rfc7748_ladder_test1(
            input_scalar,
            input_point,
            hex!("95cbde9476e8907d7aade45cb4b873f88b595a68799fa152e6f8f7647aac7957"),
        );
    }

    #[test]
    fn x25519_base_matches_x25519_with_basepoint() {
        let k = [0x6c; 32];
        assert_eq!(x25519_base(k), x25519(k, X25519_BASEPOINT_BYTES));
    }

    #[test]
    fn scalarmult_writes_output() {
        let k = hex!("a546e36bf0527c9d3b16154b82465edd62144c0ac1fc5a18506a2244ba449ac4");
        let u = hex!("e6db6867583030db3594c1a424b15f7c726624ec26b3353b10a903a6d0ab1c4c");
        let mut out = [0u8; 32];

        scalarmult(&mut out, &k, &u).unwrap();
        assert_eq!(
            out,
            hex!("c3da55379de9c6908e94ea4df28d084f32eccf03491c71f754b4075577a28552")
        );
    }

    #[test]
    fn scalarmult_rejects_bad_lengths_without_writing() {
        let k = [1u8; 32];
        let u = [9u8; 32];
        let mut out = [0xaa; 32];

        assert_eq!(
            scalarmult(&mut out, &k[..31], &u),
            Err(Error::InvalidLength {
                name: "k",
                expected: 32,
                actual: 31
            })
        );
        assert_eq!(
            scalarmult(&mut out, &k, &[]),
            Err(Error::InvalidLength {
                name: "u",
                expected: 32,
                actual: 0
            })
        );
        assert_eq!(out, [0xaa; 32]);

        let mut long_out = [0xaa; 33];
        assert_eq!(
            scalarmult(&mut long_out, &k, &u),
            Err(Error::InvalidLength {
                name: "out",
                expected: 32,
                actual: 33
            })
        );
        assert_eq!(long_out, [0xaa; 33]);
    }

    #[test]
    fn scalarmult_base_matches_x25519_base() {
        let k = [0x3d; 32];
        let mut out = [0u8; 32];
        scalarmult_base(&mut out, &k).unwrap();
        assert_eq!(out, x25519_base(k));

        let mut short_out = [0u8; 16];
        assert!(scalarmult_base(&mut short_out, &k).is_err());
        assert_eq!(short_out, [0u8; 16]);
    }

    #[test]
    fn key_slices_are_length_checked() {
        let bytes = [0x5f; 40];
        assert_eq!(
            PublicKey::try_from(&bytes[..32]).unwrap().to_bytes(),
            [0x5f; 32]
        );
        assert_eq!(
            PublicKey::try_from(&bytes[..]),
            Err(Error::InvalidLength {
                name: "PublicKey",
                expected: 32,
                actual: 40
            })
        );
        assert_eq!(
            SecretKey::try_from(&bytes[..31]).map(|_| ()),
            Err(Error::InvalidLength {
                name: "SecretKey",
                expected: 32,
                actual: 31
            })
        );
    }

    #[test]
    fn key_layer_agrees_with_free_functions() {
        let k = [0x42; 32];
        let peer = x25519_base([0x24; 32]);
        let secret = SecretKey::from_bytes(k);

        assert_eq!(secret.public_key().to_bytes(), x25519_base(k));
        assert_eq!(
            secret.diffie_hellman(&PublicKey::from(peer)).as_bytes(),
            &x25519(k, peer)
        );
    }

    #[test]
    fn secret_key_debug_is_redacted() {
        let secret = SecretKey::from_bytes([0xab; 32]);
        assert_eq!(std::format!("{:?}", secret), "SecretKey(..)");
    }

    #[test]
    fn low_order_point_is_not_contributory() {
        let secret = SecretKey::generate(&mut rand::rng());
        let zero = PublicKey::from([0u8; 32]);
        assert!(!secret.diffie_hellman(&zero).was_contributory());

        let nine = PublicKey::from(X25519_BASEPOINT_BYTES);
        assert!(secret.diffie_hellman(&nine).was_contributory());
    }
}
