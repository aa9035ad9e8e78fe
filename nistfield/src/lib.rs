#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

#[cfg(feature = "nist256")]
pub mod nist256;
#[cfg(feature = "nist384")]
pub mod nist384;

#[cfg(feature = "test-vectors")]
pub mod test_vectors;
#[cfg(not(feature = "test-vectors"))]
mod test_vectors;

mod field_id;
mod self_test;

pub use crate::{
    field_id::{FieldId, UnknownField},
    self_test::{BinaryVector, KnownAnswers, Operation, SelfTestError, UnaryVector, self_test},
};
pub use montfield;
