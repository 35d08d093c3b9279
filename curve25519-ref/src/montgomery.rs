// -*- mode: rust; -*-
//
// This file is part of curve25519-ref.
// See LICENSE for licensing information.

//! Scalar multiplication on the Montgomery form of Curve25519.
//!
//! To avoid notational confusion with affine \\(x\\), we use variables
//! \\( u, v \\) for the Montgomery curve
//!
//! $$
//!     v\^2 = u (u\^2 + 486662 u + 1),
//! $$
//!
//! so that “Montgomery \\(u\\)” here corresponds to “Montgomery
//! \\(x\\)” elsewhere.
//!
//! Montgomery arithmetic works not on the curve itself, but on the
//! \\(u\\)-line, which discards sign information and unifies the curve
//! and its quadratic twist.  See [_Montgomery curves and their
//! arithmetic_][costello-smith] by Costello and Smith for more details.
//!
//! # Scalar Multiplication
//!
//! Scalar multiplication is provided by `MontgomeryPoint::mul_clamped`
//! and `MontgomeryPoint::mul_base_clamped`, which run a Montgomery
//! ladder over exactly 255 bit positions of a clamped scalar.  The
//! sequence of field operations is the same for every scalar and every
//! point.
//!
//! [costello-smith]: https://eprint.iacr.org/2017/212.pdf

// We allow non snake_case names because coordinates in projective space are
// traditionally denoted by the capitalisation of their respective
// counterparts in affine space.
#![allow(non_snake_case)]

use core::hash::{Hash, Hasher};

use crate::constants::X25519_BASEPOINT;
use crate::field::FieldElement;
use crate::scalar::clamp_integer;
use crate::traits::Identity;

use subtle::Choice;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

use zeroize::{Zeroize, Zeroizing};

/// Holds the \\(u\\)-coordinate of a point on the Montgomery form of
/// Curve25519 or its twist.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MontgomeryPoint(pub [u8; 32]);

/// Equality of `MontgomeryPoint`s is defined mod p.
impl ConstantTimeEq for MontgomeryPoint {
    fn ct_eq(&self, other: &MontgomeryPoint) -> Choice {
        let self_fe = FieldElement::from_bytes(&self.0);
        let other_fe = FieldElement::from_bytes(&other.0);

        self_fe.ct_eq(&other_fe)
    }
}

impl PartialEq for MontgomeryPoint {
    fn eq(&self, other: &MontgomeryPoint) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for MontgomeryPoint {}

// Equal MontgomeryPoints must hash to the same value. So we have to get them into a canonical
// encoding first
impl Hash for MontgomeryPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Do a round trip through a `FieldElement`. `as_bytes` is guaranteed to give a canonical
        // 32-byte encoding
        let canonical_bytes = FieldElement::from_bytes(&self.0).to_bytes();
        canonical_bytes.hash(state);
    }
}

impl Identity for MontgomeryPoint {
    /// Return the group identity element, which has order 4.
    fn identity() -> MontgomeryPoint {
        MontgomeryPoint([0u8; 32])
    }
}

impl Zeroize for MontgomeryPoint {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl MontgomeryPoint {
    /// Multiply this point by `clamp_integer(bytes)`. For a description of clamping, see
    /// [`clamp_integer`].
    ///
    /// All 32 bytes of the point are used as given.  Bit 255 is part of the
    /// value and counts as \\(2\^{255} \equiv 19 \pmod p\\); callers that
    /// want the RFC 7748 decoding clear it first.
    pub fn mul_clamped(self, mut bytes: [u8; 32]) -> Self {
        let scalar = Zeroizing::new(clamp_integer(bytes));
        bytes.zeroize();

        let affine_u = FieldElement::from_bytes(&self.0);
        let x0 = Zeroizing::new(montgomery_ladder(&affine_u, &scalar));

        x0.as_affine()
    }

    /// Multiply the basepoint by `clamp_integer(bytes)`. For a description of clamping, see
    /// [`clamp_integer`].
    pub fn mul_base_clamped(bytes: [u8; 32]) -> Self {
        X25519_BASEPOINT.mul_clamped(bytes)
    }

    /// View this `MontgomeryPoint` as an array of bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert this `MontgomeryPoint` to an array of bytes.
    pub const fn to_bytes(&self) -> [u8; 32] {
        self.0
    }
}

/// A `ProjectivePoint` holds a point on the projective line
/// \\( \mathbb P(\mathbb F\_p) \\), which we identify with the Kummer
/// line of the Montgomery curve.
#[derive(Copy, Clone, Debug)]
pub(crate) struct ProjectivePoint {
    pub U: FieldElement,
    pub W: FieldElement,
}

impl Identity for ProjectivePoint {
    fn identity() -> ProjectivePoint {
        ProjectivePoint {
            U: FieldElement::ONE,
            W: FieldElement::ZERO,
        }
    }
}

impl Zeroize for ProjectivePoint {
    fn zeroize(&mut self) {
        self.U.zeroize();
        self.W.zeroize();
    }
}

impl ConditionallySelectable for ProjectivePoint {
    fn conditional_select(
        a: &ProjectivePoint,
        b: &ProjectivePoint,
        choice: Choice,
    ) -> ProjectivePoint {
        ProjectivePoint {
            U: FieldElement::conditional_select(&a.U, &b.U, choice),
            W: FieldElement::conditional_select(&a.W, &b.W, choice),
        }
    }
}

impl ProjectivePoint {
    /// Dehomogenize this point to affine coordinates.
    ///
    /// # Return
    ///
    /// * \\( u = U / W \\) if \\( W \neq 0 \\);
    /// * \\( 0 \\) if \\( W \eq 0 \\);
    pub fn as_affine(&self) -> MontgomeryPoint {
        let w_inv = Zeroizing::new(self.W.invert());
        let u = Zeroizing::new(&self.U * &*w_inv);
        MontgomeryPoint(u.to_bytes())
    }
}

/// Order a pair of ladder points by a secret bit.
///
/// Returns `(r, s)` when `bit` is 0 and `(s, r)` when `bit` is 1.  Only
/// the lowest bit of `bit` is used.  The mask is formed arithmetically
/// from the bit and applied to every limb of both points, so neither the
/// control flow nor the memory access pattern depends on it.
pub(crate) fn select(
    r: &ProjectivePoint,
    s: &ProjectivePoint,
    bit: u8,
) -> (ProjectivePoint, ProjectivePoint) {
    debug_assert!(bit <= 1);

    let swap = Choice::from(bit & 1);
    (
        ProjectivePoint::conditional_select(r, s, swap),
        ProjectivePoint::conditional_select(s, r, swap),
    )
}

/// Run the Montgomery ladder over bit positions 254 down to 0 of a
/// clamped `scalar`, starting from \\( (1 : 0) \\) and \\( (u : 1) \\).
///
/// Every position performs the same select, step, select sequence.
/// Returns the projective point \\( [n] (u : 1) \\).
fn montgomery_ladder(affine_u: &FieldElement, scalar: &[u8; 32]) -> ProjectivePoint {
    let mut x0 = Zeroizing::new(ProjectivePoint::identity());
    let mut x1 = Zeroizing::new(ProjectivePoint {
        U: *affine_u,
        W: FieldElement::ONE,
    });

    for pos in (0..255).rev() {
        let mut bit = (scalar[pos >> 3] >> (pos & 7)) & 1;

        let (P, Q) = select(&x0, &x1, bit);
        let (mut P, mut Q) = (Zeroizing::new(P), Zeroizing::new(Q));

        differential_add_and_double(&mut P, &mut Q, affine_u);

        let (next0, next1) = select(&P, &Q, bit);
        *x0 = next0;
        *x1 = next1;

        // Don't leave the bit in the stack
        bit.zeroize();
    }

    *x0
}

/// Perform the double-and-add step of the Montgomery ladder.
///
/// Given projective points
/// \\( (U\_P : W\_P) = u(P) \\),
/// \\( (U\_Q : W\_Q) = u(Q) \\),
/// and the affine difference
/// \\(      u\_{P-Q} = u(P-Q) \\), set
/// $$
///     (U\_P : W\_P) \gets u(\[2\]P)
/// $$
/// and
/// $$
///     (U\_Q : W\_Q) \gets u(P + Q).
/// $$
#[rustfmt::skip] // keep alignment of explanatory comments
fn differential_add_and_double(
    P: &mut ProjectivePoint,
    Q: &mut ProjectivePoint,
    affine_PmQ: &FieldElement,
) {
    let mut t0 = &P.U + &P.W;
    let mut t1 = &P.U - &P.W;
    let mut t2 = &Q.U + &Q.W;
    let mut t3 = &Q.U - &Q.W;

    let mut t4 = t0.square();   // (U_P + W_P)^2 = U_P^2 + 2 U_P W_P + W_P^2
    let mut t5 = t1.square();   // (U_P - W_P)^2 = U_P^2 - 2 U_P W_P + W_P^2

    let mut t6 = &t2 * &t1;     // (U_Q + W_Q) (U_P - W_P) = U_P U_Q - W_P U_Q + U_P W_Q - W_P W_Q
    let mut t7 = &t3 * &t0;     // (U_Q - W_Q) (U_P + W_P) = U_P U_Q + W_P U_Q - U_P W_Q - W_P W_Q

    let mut t8 = &t6 + &t7;     // 2 (U_P U_Q - W_P W_Q)
    let mut t9 = &t6 - &t7;     // 2 (U_P W_Q - W_P U_Q)

    let mut t10 = t9.square();  // 4 (U_P W_Q - W_P U_Q)^2

    let mut t11 = &t4 - &t5;    // 4 U_P W_P
    let mut t12 = t11.mul_121665(); // (A - 2) U_P W_P
    let mut t13 = &t12 + &t4;   // (U_P + W_P)^2 + (A - 2) U_P W_P = (U_P - W_P)^2 + (A + 2) U_P W_P

    P.U = &t4 * &t5;            // U_{P'} = (U_P + W_P)^2 (U_P - W_P)^2
    P.W = &t11 * &t13;          // W_{P'} = (4 U_P W_P) ((U_P - W_P)^2 + ((A + 2)/4) 4 U_P W_P)
    Q.U = t8.square();          // U_{Q'} = W_D * 4 (U_P U_Q - W_P W_Q)^2
    Q.W = &t10 * affine_PmQ;    // W_{Q'} = U_D * 4 (U_P W_Q - W_P U_Q)^2

    for t in [
        &mut t0, &mut t1, &mut t2, &mut t3, &mut t4, &mut t5, &mut t6,
        &mut t7, &mut t8, &mut t9, &mut t10, &mut t11, &mut t12, &mut t13,
    ] {
        t.zeroize();
    }
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------
