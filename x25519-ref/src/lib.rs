// -*- mode: rust; -*-
//
// This file is part of x25519-ref.
// See LICENSE for licensing information.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg, doc_cfg_hide))]
#![cfg_attr(docsrs, doc(cfg_hide(docsrs)))]
#![deny(missing_docs)]
#![doc = include_str!("../README.md")]

#[cfg(any(test, feature = "std"))]
extern crate std;

//------------------------------------------------------------------------
// x25519-ref public API
//------------------------------------------------------------------------

mod errors;
mod x25519;

pub use crate::errors::Error;
pub use crate::x25519::*;
