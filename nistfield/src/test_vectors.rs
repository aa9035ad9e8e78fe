//! Known-answer test vectors for the shipped fields.
//!
//! All values are big-endian canonical integers.

#[cfg(feature = "nist256")]
pub mod nist256;
#[cfg(feature = "nist384")]
pub mod nist384;
