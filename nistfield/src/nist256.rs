//! Field arithmetic modulo p = 2^{224}(2^{32} − 1) + 2^{192} + 2^{96} − 1

use cfg_if::cfg_if;
use montfield::{FieldParams, MontyFieldElement, field_params};

/// Field modulus serialized as hex.
/// p = 2^{224}(2^{32} − 1) + 2^{192} + 2^{96} − 1
pub const MODULUS_HEX: &str = "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff";

field_params!(
    name: Nist256Params28,
    field: "NIST256",
    modulus: MODULUS_HEX,
    limb_bits: 28,
    limbs: 10,
    modulus_limbs: [
        0xFFFFFFF, 0xFFFFFFF, 0xFFFFFFF, 0xFFF, 0x0, 0x0, 0x1000000, 0x0, 0xFFFFFFF, 0xF,
    ],
    r2: [
        0x50000, 0x300000, 0x0, 0x0, 0xFFFFFFA, 0xFFFFFBF, 0xFFFFEFF, 0xFFFAFFF, 0x2FFFF, 0x0,
    ],
    mconst: 0x1,
    multiplicative_generator: 6,
    invert_chain: invert_chain,
    sqrt_chain: sqrt_chain,
    doc: "P-256 base field in ten 28-bit limbs (`R = 2^280`)"
);

#[cfg(target_pointer_width = "64")]
field_params!(
    name: Nist256Params56,
    field: "NIST256",
    modulus: MODULUS_HEX,
    limb_bits: 56,
    limbs: 5,
    modulus_limbs: [0xFFFFFFFFFFFFFF, 0xFFFFFFFFFF, 0x0, 0x1000000, 0xFFFFFFFF],
    r2: [
        0x3000000050000,
        0x0,
        0xFFFFFBFFFFFFFA,
        0xFFFAFFFFFFFEFF,
        0x2FFFF,
    ],
    mconst: 0x1,
    multiplicative_generator: 6,
    invert_chain: invert_chain,
    sqrt_chain: sqrt_chain,
    doc: "P-256 base field in five 56-bit limbs (`R = 2^280`)"
);

/// P-256 field element using 28-bit limbs.
pub type FieldElement28 = MontyFieldElement<Nist256Params28, 10>;

/// P-256 field element using 56-bit limbs.
#[cfg(target_pointer_width = "64")]
pub type FieldElement56 = MontyFieldElement<Nist256Params56, 5>;

cfg_if! {
    if #[cfg(all(target_pointer_width = "64", not(feature = "force-32-bit")))] {
        /// Limb count of the default [`FieldElement`].
        pub const LIMBS: usize = 5;

        /// Parameters of the default [`FieldElement`].
        pub type Params = Nist256Params56;
    } else {
        /// Limb count of the default [`FieldElement`].
        pub const LIMBS: usize = 10;

        /// Parameters of the default [`FieldElement`].
        pub type Params = Nist256Params28;
    }
}

/// An element in the finite field modulo p = 2^{224}(2^{32} − 1) + 2^{192} + 2^{96} − 1.
///
/// Elements are always in Montgomery form; i.e., FieldElement(a) = aR mod p, with R = 2^280.
pub type FieldElement = MontyFieldElement<Params, LIMBS>;

/// Serialized field element.
pub type FieldBytes = montfield::FieldBytes<32>;

/// Returns `x^(p - 2)`.
///
/// We need to find b such that b * a ≡ 1 mod p. As we are in a prime field, we can apply
/// Fermat's Little Theorem:
///
/// ```text
/// a^p         ≡ a mod p
/// a^(p-1)     ≡ 1 mod p
/// a^(p-2) * a ≡ 1 mod p
/// ```
///
/// Thus inversion can be implemented with a single exponentiation.
fn invert_chain<P, const N: usize>(x: &MontyFieldElement<P, N>) -> MontyFieldElement<P, N>
where
    P: FieldParams<N>,
{
    let t111 = x.multiply(&x.multiply(&x.square()).square());
    let t111111 = t111.multiply(&t111.sqn_vartime(3));
    let x15 = t111111
        .sqn_vartime(6)
        .multiply(&t111111)
        .sqn_vartime(3)
        .multiply(&t111);
    let x16 = x15.square().multiply(x);
    let i53 = x16.sqn_vartime(16).multiply(&x16).sqn_vartime(15);
    let x47 = x15.multiply(&i53);
    x47.multiply(
        &i53.sqn_vartime(17)
            .multiply(x)
            .sqn_vartime(143)
            .multiply(&x47)
            .sqn_vartime(47),
    )
    .sqn_vartime(2)
    .multiply(x)
}

/// Returns `x^((p + 1) / 4)`.
///
/// For p ≡ 3 mod 4, by Euler's Criterion, beta^((p - 1) / 2) ≡ 1 mod p for a square beta, so
/// alpha = ± beta^((p + 1) / 4) mod p satisfies alpha^2 = beta.
fn sqrt_chain<P, const N: usize>(x: &MontyFieldElement<P, N>) -> MontyFieldElement<P, N>
where
    P: FieldParams<N>,
{
    let t11 = x.multiply(&x.square());
    let t1111 = t11.multiply(&t11.sqn_vartime(2));
    let t11111111 = t1111.multiply(&t1111.sqn_vartime(4));
    let x16 = t11111111.sqn_vartime(8).multiply(&t11111111);
    x16.sqn_vartime(16)
        .multiply(&x16)
        .sqn_vartime(32)
        .multiply(x)
        .sqn_vartime(96)
        .multiply(x)
        .sqn_vartime(94)
}
