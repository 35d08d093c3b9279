// -*- mode: rust; -*-
//
// This file is part of curve25519-ref.
// See LICENSE for licensing information.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg, doc_cfg_hide))]
#![cfg_attr(docsrs, doc(cfg_hide(docsrs)))]
#![deny(missing_docs)]
#![doc = include_str!("../README.md")]

//------------------------------------------------------------------------
// External dependencies:
//------------------------------------------------------------------------

#[cfg(test)]
extern crate std;

//------------------------------------------------------------------------
// curve25519-ref public modules
//------------------------------------------------------------------------

// Point operations on the Montgomery form of Curve25519
pub mod montgomery;

// Scalar clamping for X25519
pub mod scalar;

// Useful constants, like the X25519 basepoint
pub mod constants;

// External (and internal) traits.
pub mod traits;

// Finite field arithmetic mod p = 2^255 - 19, exposed for testing and
// benchmarking the 32-limb representation directly.
pub mod field;

//------------------------------------------------------------------------
// curve25519-ref public API
//------------------------------------------------------------------------

pub use crate::montgomery::MontgomeryPoint;
pub use crate::scalar::clamp_integer;
