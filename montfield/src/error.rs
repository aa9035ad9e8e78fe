//! Error types.

use core::fmt;

/// Error type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Error {
    /// Input was the wrong length or otherwise could not be decoded.
    MalformedInput,

    /// Input decoded to an integer which is not less than the field modulus.
    OutOfRange,

    /// Element is not a quadratic residue.
    NoSquareRoot,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MalformedInput => write!(f, "malformed field element encoding"),
            Error::OutOfRange => write!(f, "field element out of range"),
            Error::NoSquareRoot => write!(f, "field element has no square root"),
        }
    }
}

impl core::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
