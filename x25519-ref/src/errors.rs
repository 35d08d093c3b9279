// -*- mode: rust; -*-
//
// This file is part of x25519-ref.
// See LICENSE for licensing information.

//! Errors which may occur when handing byte slices to the X25519 API.

use core::fmt;
use core::fmt::Display;

/// Errors which may occur when converting byte slices into keys or when
/// calling the slice-based [`scalarmult`](crate::scalarmult) functions.
///
/// The scalar multiplication itself cannot fail: every 32-byte input is
/// accepted.  Only the length of a caller-supplied buffer is checked.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Error {
    /// A buffer did not have the length the operation requires.
    ///
    /// `name` identifies the offending argument, `expected` is the length in
    /// bytes the operation requires, and `actual` is the length it was given.
    InvalidLength {
        /// The argument or type whose length was wrong.
        name: &'static str,
        /// The required length in bytes.
        expected: usize,
        /// The length that was supplied.
        actual: usize,
    },
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::InvalidLength {
                name,
                expected,
                actual,
            } => write!(
                f,
                "{} must be {} bytes in length, got {}",
                name, expected, actual
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Check that `bytes` has exactly `N` bytes and view it as an array.
pub(crate) fn check_length<'a, const N: usize>(
    name: &'static str,
    bytes: &'a [u8],
) -> Result<&'a [u8; N], Error> {
    bytes.try_into().map_err(|_| Error::InvalidLength {
        name,
        expected: N,
        actual: bytes.len(),
    })
}

/// Mutable counterpart of [`check_length`].
pub(crate) fn check_length_mut<'a, const N: usize>(
    name: &'static str,
    bytes: &'a mut [u8],
) -> Result<&'a mut [u8; N], Error> {
    let actual = bytes.len();
    bytes.try_into().map_err(|_| Error::InvalidLength {
        name,
        expected: N,
        actual,
    })
}
