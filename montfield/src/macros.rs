//! Macros for defining field parameter types.

/// Creates a ZST implementing [`FieldParams`](crate::FieldParams) for a given field modulus.
///
/// Accepts the following parameters:
///
/// - name of the ZST representing the field modulus
/// - short name of the field
/// - big-endian hex serialization of the modulus
/// - limb width in bits and number of limbs
/// - modulus, `R^2 mod p` and `-p^-1 mod 2^limb_bits` limb tables
/// - multiplicative generator
/// - optional `invert_chain` and `sqrt_chain` functions overriding the default exponentiation
/// - documentation string for the field modulus type
///
/// The limb tables are checked at compile time, and must agree with the hex modulus.
///
/// ```
/// montfield::field_params!(
///     name: M31,
///     field: "M31",
///     modulus: "7fffffff",
///     limb_bits: 16,
///     limbs: 4,
///     modulus_limbs: [0xffff, 0x7fff, 0, 0],
///     r2: [0x10, 0, 0, 0],
///     mconst: 0x1,
///     multiplicative_generator: 7,
///     doc: "Mersenne prime 2^31 - 1"
/// );
/// ```
#[macro_export]
macro_rules! field_params {
    (
        name: $name:ident,
        field: $field:expr,
        modulus: $modulus_hex:expr,
        limb_bits: $limb_bits:expr,
        limbs: $limbs:expr,
        modulus_limbs: [$($modulus_limb:expr),+ $(,)?],
        r2: [$($r2_limb:expr),+ $(,)?],
        mconst: $mconst:expr,
        multiplicative_generator: $multiplicative_generator:expr,
        $(invert_chain: $invert_chain:path,)?
        $(sqrt_chain: $sqrt_chain:path,)?
        doc: $doc:expr
    ) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name;

        impl $crate::FieldParams<{ $limbs }> for $name {
            type Repr = $crate::FieldBytes<{ $modulus_hex.len() / 2 }>;

            const NAME: &'static str = $field;
            const MODULUS_HEX: &'static str = $modulus_hex;
            const DESCRIPTOR: $crate::Descriptor<{ $limbs }> = $crate::Descriptor::new(
                $limb_bits,
                [$($modulus_limb),+],
                [$($r2_limb),+],
                $mconst,
            );
            const MULTIPLICATIVE_GENERATOR: u64 = $multiplicative_generator;

            $(
                fn invert_chain(
                    x: &$crate::MontyFieldElement<Self, { $limbs }>,
                ) -> $crate::MontyFieldElement<Self, { $limbs }> {
                    $invert_chain(x)
                }
            )?

            $(
                fn sqrt_chain(
                    x: &$crate::MontyFieldElement<Self, { $limbs }>,
                ) -> $crate::MontyFieldElement<Self, { $limbs }> {
                    $sqrt_chain(x)
                }
            )?
        }

        const _: () = {
            let desc = <$name as $crate::FieldParams<{ $limbs }>>::DESCRIPTOR;
            let modulus = $crate::Limbs::<{ $limbs }>::from_be_hex($modulus_hex, $limb_bits);

            assert!(
                desc.modulus().eq_vartime(&modulus),
                "modulus limbs do not match hex modulus"
            );
            assert!(
                $modulus_hex.len() / 2 == desc.byte_len(),
                "hex modulus is not zero-padded to the field's byte width"
            );
        };
    };
}
