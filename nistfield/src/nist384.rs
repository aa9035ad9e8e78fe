//! Field arithmetic modulo p = 2^{384} − 2^{128} − 2^{96} + 2^{32} − 1

use cfg_if::cfg_if;
use montfield::{MontyFieldElement, field_params};

/// Field modulus serialized as hex.
/// p = 2^{384} − 2^{128} − 2^{96} + 2^{32} − 1
pub const MODULUS_HEX: &str = "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000ffffffff";

// P-384 has no dedicated addition chains: inversion and square roots use the generic
// fixed-exponent ladders over `p - 2` and `(p + 1) / 4`.
field_params!(
    name: Nist384Params28,
    field: "NIST384",
    modulus: MODULUS_HEX,
    limb_bits: 28,
    limbs: 14,
    modulus_limbs: [
        0xFFFFFFF, 0xF, 0x0, 0xFFFF000, 0xFFEFFFF, 0xFFFFFFF, 0xFFFFFFF, 0xFFFFFFF, 0xFFFFFFF,
        0xFFFFFFF, 0xFFFFFFF, 0xFFFFFFF, 0xFFFFFFF, 0xFFFFF,
    ],
    r2: [
        0x10000, 0xFE00000, 0xFFFFFF, 0x0, 0x2, 0x0, 0xFFFFE00, 0xFFF, 0x20000, 0x100000, 0x0,
        0x0, 0x0, 0x0,
    ],
    mconst: 0x1,
    multiplicative_generator: 19,
    doc: "P-384 base field in fourteen 28-bit limbs (`R = 2^392`)"
);

#[cfg(target_pointer_width = "64")]
field_params!(
    name: Nist384Params56,
    field: "NIST384",
    modulus: MODULUS_HEX,
    limb_bits: 56,
    limbs: 7,
    modulus_limbs: [
        0xFFFFFFFF,
        0xFFFF0000000000,
        0xFFFFFFFFFEFFFF,
        0xFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFF,
    ],
    r2: [
        0xFE000000010000,
        0xFFFFFF,
        0x2,
        0xFFFFFFFE00,
        0x1000000020000,
        0x0,
        0x0,
    ],
    mconst: 0x100000001,
    multiplicative_generator: 19,
    doc: "P-384 base field in seven 56-bit limbs (`R = 2^392`)"
);

/// P-384 field element using 28-bit limbs.
pub type FieldElement28 = MontyFieldElement<Nist384Params28, 14>;

/// P-384 field element using 56-bit limbs.
#[cfg(target_pointer_width = "64")]
pub type FieldElement56 = MontyFieldElement<Nist384Params56, 7>;

cfg_if! {
    if #[cfg(all(target_pointer_width = "64", not(feature = "force-32-bit")))] {
        /// Limb count of the default [`FieldElement`].
        pub const LIMBS: usize = 7;

        /// Parameters of the default [`FieldElement`].
        pub type Params = Nist384Params56;
    } else {
        /// Limb count of the default [`FieldElement`].
        pub const LIMBS: usize = 14;

        /// Parameters of the default [`FieldElement`].
        pub type Params = Nist384Params28;
    }
}

/// An element in the finite field modulo p = 2^{384} − 2^{128} − 2^{96} + 2^{32} − 1.
pub type FieldElement = MontyFieldElement<Params, LIMBS>;

/// Serialized field element.
pub type FieldBytes = montfield::FieldBytes<48>;
