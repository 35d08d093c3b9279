// -*- mode: rust; -*-
//
// This file is part of curve25519-ref.
// See LICENSE for licensing information.

//! Field arithmetic modulo \\(p = 2\^{255} - 19\\), using 32-bit
//! arithmetic on thirty-two radix-\\(2\^8\\) limbs.
//!
//! A `FieldElement` is either *redundant*, as produced by addition and
//! subtraction, where limbs may temporarily exceed a byte, or *reduced*,
//! as produced by multiplication, squaring and `FieldElement::reduce`,
//! where limbs 0 through 30 lie in \\([0, 255]\\) and the top limb is at
//! most 128.  `from_bytes` keeps all 256 input bits, so its top limb may
//! reach 255; such an element is a valid multiplicand or minuend, but a
//! subtrahend must be reduced.  Only `FieldElement::freeze` yields
//! the unique representative below \\(p\\), with the top limb at most 127.
//!
//! Every limb operation uses explicitly wrapping `u32` arithmetic.  The
//! accumulators never actually wrap for the operands the ladder produces,
//! whose limbs stay below \\(2\^9\\): the largest column sum of a product
//! is bounded by \\(32 \cdot 38 \cdot 2\^{9} \cdot 2\^{9} < 2\^{29}\\).
//!
//! # Warning
//!
//! This module is low-level.  Its API carries no semver guarantees.

use core::fmt::Debug;
use core::ops::{Add, AddAssign};
use core::ops::Mul;
use core::ops::{Sub, SubAssign};

use subtle::Choice;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

use zeroize::{Zeroize, Zeroizing};

use crate::constants;

/// A `FieldElement` represents an element of the field
/// \\( \mathbb Z / (2\^{255} - 19)\\).
///
/// The element \\(t\\) with limbs \\(t\_0, \ldots, t\_{31}\\) represents
/// the integer \\(\sum\_i t\_i 2\^{8i}\\).
#[derive(Copy, Clone)]
pub struct FieldElement(pub(crate) [u32; 32]);

impl Debug for FieldElement {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "FieldElement({:?})", &self.0[..])
    }
}

impl Zeroize for FieldElement {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl Eq for FieldElement {}

impl PartialEq for FieldElement {
    fn eq(&self, other: &FieldElement) -> bool {
        self.ct_eq(other).into()
    }
}

impl ConstantTimeEq for FieldElement {
    /// Test equality between two `FieldElement`s.  Since the
    /// internal representation is not canonical, the field elements
    /// are normalized to wire format before comparison.
    fn ct_eq(&self, other: &FieldElement) -> Choice {
        self.to_bytes()[..].ct_eq(&other.to_bytes()[..])
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &FieldElement, b: &FieldElement, choice: Choice) -> FieldElement {
        let mut output = [0u32; 32];
        for i in 0..32 {
            output[i] = u32::conditional_select(&a.0[i], &b.0[i], choice);
        }
        FieldElement(output)
    }

    fn conditional_assign(&mut self, other: &FieldElement, choice: Choice) {
        for i in 0..32 {
            self.0[i].conditional_assign(&other.0[i], choice);
        }
    }
}

impl<'b> AddAssign<&'b FieldElement> for FieldElement {
    /// Limb-wise sum with a single running carry.  The top limb keeps
    /// the final carry unmasked, so the result is redundant.
    fn add_assign(&mut self, rhs: &'b FieldElement) {
        let mut u: u32 = 0;
        for j in 0..31 {
            u = u.wrapping_add(self.0[j]).wrapping_add(rhs.0[j]);
            self.0[j] = u & 0xff;
            u >>= 8;
        }
        u = u.wrapping_add(self.0[31]).wrapping_add(rhs.0[31]);
        self.0[31] = u;
    }
}

impl<'a, 'b> Add<&'b FieldElement> for &'a FieldElement {
    type Output = FieldElement;
    fn add(self, rhs: &'b FieldElement) -> FieldElement {
        let mut output = *self;
        output += rhs;
        output
    }
}

impl<'b> SubAssign<&'b FieldElement> for FieldElement {
    /// Limb-wise difference.  The borrow chain starts from 218 and adds
    /// 65280 to every lower limb, which adds \\(2p\\) overall and keeps
    /// every intermediate non-negative for reduced operands.
    fn sub_assign(&mut self, rhs: &'b FieldElement) {
        let mut u: u32 = 218;
        for j in 0..31 {
            u = u
                .wrapping_add(self.0[j])
                .wrapping_add(65280)
                .wrapping_sub(rhs.0[j]);
            self.0[j] = u & 0xff;
            u >>= 8;
        }
        u = u.wrapping_add(self.0[31]).wrapping_sub(rhs.0[31]);
        self.0[31] = u;
    }
}

impl<'a, 'b> Sub<&'b FieldElement> for &'a FieldElement {
    type Output = FieldElement;
    fn sub(self, rhs: &'b FieldElement) -> FieldElement {
        let mut output = *self;
        output -= rhs;
        output
    }
}

impl<'a, 'b> Mul<&'b FieldElement> for &'a FieldElement {
    type Output = FieldElement;

    /// Schoolbook multiplication with the reduction folded into the
    /// column sums: a coefficient of \\(2\^{8(i+32)}\\) equals
    /// \\(2 \cdot 19 \cdot 2\^{8i}\\) modulo \\(p\\), so the high products
    /// land in column \\(i\\) scaled by 38.
    fn mul(self, rhs: &'b FieldElement) -> FieldElement {
        let a = &self.0;
        let b = &rhs.0;
        let mut h = [0u32; 32];

        for i in 0..32 {
            let mut u: u32 = 0;
            for j in 0..=i {
                u = u.wrapping_add(a[j].wrapping_mul(b[i - j]));
            }
            for j in (i + 1)..32 {
                u = u.wrapping_add(38u32.wrapping_mul(a[j]).wrapping_mul(b[i + 32 - j]));
            }
            h[i] = u;
        }

        let mut output = FieldElement(h);
        output.reduce();
        output
    }
}

/// Propagate the carry `u` through limbs 0 to 30, leaving each of them in
/// \\([0, 255]\\), and return the accumulator for the top limb.
#[inline(always)]
fn carry_through(limbs: &mut [u32; 32], mut u: u32) -> u32 {
    for limb in limbs[..31].iter_mut() {
        u = u.wrapping_add(*limb);
        *limb = u & 0xff;
        u >>= 8;
    }
    u.wrapping_add(limbs[31])
}

impl FieldElement {
    /// The field element 0.
    pub const ZERO: FieldElement = FieldElement([0; 32]);

    /// The field element 1.
    pub const ONE: FieldElement = FieldElement([
        1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0,
    ]);

    /// The field element -1, that is \\(2\^{255} - 20\\).
    pub const MINUS_ONE: FieldElement = FieldElement([
        236, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255,
        255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 255, 127,
    ]);

    /// Load a `FieldElement` from a 256-bit little-endian input, one byte
    /// per limb.
    ///
    /// All 256 bits are kept.  Bit 255 lands in the top limb and counts as
    /// \\(2\^{255} \equiv 19\\), so the result may be redundant; every
    /// operation accepts it.
    ///
    /// # Warning
    ///
    /// This function does not check that the input used the canonical
    /// representative.  It will happily decode \\(2\^{255} - 18\\) to 1.
    pub fn from_bytes(bytes: &[u8; 32]) -> FieldElement {
        let mut limbs = [0u32; 32];
        for (limb, byte) in limbs.iter_mut().zip(bytes.iter()) {
            *limb = u32::from(*byte);
        }
        FieldElement(limbs)
    }

    /// Serialize this `FieldElement` to a 32-byte array.  The
    /// encoding is canonical.
    pub fn to_bytes(&self) -> [u8; 32] {
        let canonical = Zeroizing::new(self.freeze());
        let mut bytes = [0u8; 32];
        for (byte, limb) in bytes.iter_mut().zip(canonical.0.iter()) {
            *byte = *limb as u8;
        }
        bytes
    }

    /// View the raw limbs of this element.
    pub fn as_limbs(&self) -> &[u32; 32] {
        &self.0
    }

    /// Determine if this `FieldElement` is zero.
    pub fn is_zero(&self) -> Choice {
        let zero = [0u8; 32];
        let bytes = Zeroizing::new(self.to_bytes());

        bytes[..].ct_eq(&zero[..])
    }

    /// Carry-normalize this element in place.
    ///
    /// The first pass pushes carries through all limbs, keeps seven bits
    /// of the top limb and folds the overflow back into limb 0 times 19,
    /// since \\(2\^{255} \equiv 19 \pmod p\\).  The second pass absorbs
    /// the folded value.
    pub fn reduce(&mut self) {
        let u = carry_through(&mut self.0, 0);
        self.0[31] = u & 0x7f;
        let u = carry_through(&mut self.0, (u >> 7).wrapping_mul(19));
        self.0[31] = u;
    }

    /// Compute the unique representative of this element in
    /// \\([0, p)\\).
    ///
    /// The input is first carry-normalized, which puts it below
    /// \\(2p\\).  Adding \\(2\^{256} - p\\) then sets bit 7 of the top
    /// limb exactly when the value was below \\(p\\), in which case the
    /// saved value is merged back under a mask.  No branch depends on the
    /// value.
    pub fn freeze(&self) -> FieldElement {
        let mut original = Zeroizing::new(*self);
        original.reduce();
        let mut output = &*original + &constants::MINUS_P;

        let restore = ((output.0[31] >> 7) & 1).wrapping_neg();
        for j in 0..32 {
            output.0[j] ^= restore & (original.0[j] ^ output.0[j]);
        }
        // When the subtraction is kept, the top limb still carries 2^8.
        output.0[31] &= 0xff;

        output
    }

    /// Compute `self^2`.
    ///
    /// Each cross product \\(a\_j a\_{i-j}\\), \\(j < i - j\\), is
    /// accumulated once and the column doubled; the middle terms of even
    /// columns are added once afterwards.  High columns fold by 38 as in
    /// multiplication.
    pub fn square(&self) -> FieldElement {
        let a = &self.0;
        let mut h = [0u32; 32];

        for i in 0..32 {
            let mut u: u32 = 0;
            for j in 0..(i + 1) / 2 {
                u = u.wrapping_add(a[j].wrapping_mul(a[i - j]));
            }
            for j in (i + 1)..(i + 33) / 2 {
                u = u.wrapping_add(38u32.wrapping_mul(a[j]).wrapping_mul(a[i + 32 - j]));
            }
            u = u.wrapping_mul(2);
            if i & 1 == 0 {
                let m = i / 2;
                u = u.wrapping_add(a[m].wrapping_mul(a[m]));
                u = u.wrapping_add(38u32.wrapping_mul(a[m + 16]).wrapping_mul(a[m + 16]));
            }
            h[i] = u;
        }

        let mut output = FieldElement(h);
        output.reduce();
        output
    }

    /// Multiply by \\((A - 2)/4 = 121665\\), the Montgomery ladder
    /// coefficient of Curve25519.
    pub fn mul_121665(&self) -> FieldElement {
        let mut h = [0u32; 32];

        let mut u: u32 = 0;
        for j in 0..31 {
            u = u.wrapping_add(constants::AMINUS2_OVER_FOUR.wrapping_mul(self.0[j]));
            h[j] = u & 0xff;
            u >>= 8;
        }
        u = u.wrapping_add(constants::AMINUS2_OVER_FOUR.wrapping_mul(self.0[31]));
        h[31] = u & 0x7f;
        h[31] = carry_through(&mut h, (u >> 7).wrapping_mul(19));

        FieldElement(h)
    }

    /// Given `k > 0`, return `self^(2^k)`.
    pub fn pow2k(&self, k: u32) -> FieldElement {
        debug_assert!(k > 0);

        let mut z = self.square();
        for _ in 1..k {
            z = z.square();
        }
        z
    }

    /// Compute (self^(2^250-1), self^11), used as a helper function
    /// within invert().
    #[rustfmt::skip] // keep alignment of explanatory comments
    fn pow22501(&self) -> (Zeroizing<FieldElement>, Zeroizing<FieldElement>) {
        // Each temporary variable t_i is of the form (self)^e_i.
        // Squaring t_i corresponds to multiplying e_i by 2,
        // so the pow2k function shifts e_i left by k places.
        // Multiplying t_i and t_j corresponds to adding e_i + e_j.
        //
        // Temporary t_i                                  Nonzero bits of e_i
        //
        let t0  = Zeroizing::new(self.square());          // 1         e_0 = 2^1
        let t1  = Zeroizing::new(t0.square().square());   // 3         e_1 = 2^3
        let t2  = Zeroizing::new(self * &*t1);            // 3,0       e_2 = 2^3 + 2^0
        let t3  = Zeroizing::new(&*t0 * &*t2);            // 3,1,0
        let t4  = Zeroizing::new(t3.square());            // 4,2,1
        let t5  = Zeroizing::new(&*t2 * &*t4);            // 4,3,2,1,0
        let t6  = Zeroizing::new(t5.pow2k(5));            // 9,8,7,6,5
        let t7  = Zeroizing::new(&*t6 * &*t5);            // 9,8,7,6,5,4,3,2,1,0
        let t8  = Zeroizing::new(t7.pow2k(10));           // 19..10
        let t9  = Zeroizing::new(&*t8 * &*t7);            // 19..0
        let t10 = Zeroizing::new(t9.pow2k(20));           // 39..20
        let t11 = Zeroizing::new(&*t10 * &*t9);           // 39..0
        let t12 = Zeroizing::new(t11.pow2k(10));          // 49..10
        let t13 = Zeroizing::new(&*t12 * &*t7);           // 49..0
        let t14 = Zeroizing::new(t13.pow2k(50));          // 99..50
        let t15 = Zeroizing::new(&*t14 * &*t13);          // 99..0
        let t16 = Zeroizing::new(t15.pow2k(100));         // 199..100
        let t17 = Zeroizing::new(&*t16 * &*t15);          // 199..0
        let t18 = Zeroizing::new(t17.pow2k(50));          // 249..50
        let t19 = Zeroizing::new(&*t18 * &*t13);          // 249..0

        (t19, t3)
    }

    /// Given a nonzero field element, compute its inverse.
    ///
    /// The inverse is computed as self^(p-2), since
    /// x^(p-2)x = x^(p-1) = 1 (mod p).  The chain of squarings and
    /// multiplications is the same for every input.
    ///
    /// This function returns zero on input zero.
    #[rustfmt::skip] // keep alignment of explanatory comments
    pub fn invert(&self) -> FieldElement {
        // The bits of p-2 = 2^255 -19 -2 are 11010111111...11.
        //
        //                                              nonzero bits of exponent
        let (t19, t3) = self.pow22501();                // t19: 249..0 ; t3: 3,1,0
        let t20 = Zeroizing::new(t19.pow2k(5));         // 254..5

        &*t20 * &*t3                                    // 254..5,3,1,0
    }
}
