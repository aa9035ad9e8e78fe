#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

mod descriptor;
mod dev;
mod element;
mod error;
mod limbs;
mod macros;
mod monty;
mod word;

pub use crate::{
    descriptor::Descriptor,
    element::{FieldParams, MontyFieldElement},
    error::{Error, Result},
    limbs::Limbs,
    word::{MAX_LIMB_BITS, Word},
};

/// Big-endian serialized field element of `BYTES` bytes.
pub type FieldBytes<const BYTES: usize> = hybrid_array::ArrayN<u8, BYTES>;

pub use ff;
pub use hybrid_array as array;
pub use rand_core;
pub use subtle;
pub use zeroize;
