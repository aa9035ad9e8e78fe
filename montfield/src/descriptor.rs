//! Per-field modulus descriptors.

use crate::{
    Limbs,
    word::{MAX_LIMB_BITS, Word, mask},
};

/// Constants describing a prime modulus for Montgomery arithmetic.
///
/// With `b = limb_bits` and `R = 2^(b * N)`, a descriptor holds:
///
/// - `p`: the odd prime modulus
/// - `r2`: `R^2 mod p`
/// - `m`: `-p^-1 mod 2^b`
///
/// Descriptors are built with [`Descriptor::new`], which is a `const fn` that checks every
/// table entry. Declaring a descriptor as a `const` item therefore turns an incorrect table
/// into a compile-time error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Descriptor<const N: usize> {
    pub(crate) modulus: Limbs<N>,
    pub(crate) r2: Limbs<N>,
    pub(crate) mconst: Word,
    pub(crate) limb_bits: u32,
}

impl<const N: usize> Descriptor<N> {
    /// Create a new descriptor from its limb tables.
    ///
    /// # Panics
    ///
    /// If any of the following does not hold:
    ///
    /// - `8 <= limb_bits <= Word::BITS - 2`
    /// - every limb of `modulus` and `r2` is less than `2^limb_bits`
    /// - `modulus` is odd and `4 * modulus < R`
    /// - `mconst * modulus ≡ -1 (mod 2^limb_bits)`
    /// - `r2 < modulus` and `r2 ≡ R^2 (mod modulus)`
    pub const fn new(limb_bits: u32, modulus: [Word; N], r2: [Word; N], mconst: Word) -> Self {
        assert!(N > 0, "descriptor must have at least one limb");
        assert!(
            limb_bits >= 8 && limb_bits <= MAX_LIMB_BITS,
            "limb width out of range"
        );

        let modulus = Limbs::from_words(modulus);
        let r2 = Limbs::from_words(r2);

        assert!(modulus.is_normalized(limb_bits), "modulus limb overflow");
        assert!(r2.is_normalized(limb_bits), "R^2 limb overflow");
        assert!(modulus.0[0] & 1 == 1, "modulus must be odd");
        assert!(
            modulus.bits_vartime(limb_bits) + 2 <= N as u32 * limb_bits,
            "modulus too large for limb vector"
        );
        assert!(mconst <= mask(limb_bits), "Montgomery constant overflow");
        assert!(
            mconst.wrapping_mul(modulus.0[0]) & mask(limb_bits) == mask(limb_bits),
            "Montgomery constant is not -p^-1 mod 2^b"
        );

        let (_, borrow) = r2.borrowing_sub(&modulus, limb_bits);
        assert!(borrow == 1, "R^2 not reduced");

        let desc = Self {
            modulus,
            r2,
            mconst,
            limb_bits,
        };

        // (R^2 * 1 / R) / R == 1 iff r2 ≡ R^2
        let one = desc.from_montgomery(&desc.to_montgomery(&Limbs::ONE));
        assert!(one.eq_vartime(&Limbs::ONE), "R^2 table is incorrect");

        desc
    }

    /// The modulus `p`.
    pub const fn modulus(&self) -> &Limbs<N> {
        &self.modulus
    }

    /// `R^2 mod p`.
    pub const fn r2(&self) -> &Limbs<N> {
        &self.r2
    }

    /// `-p^-1 mod 2^limb_bits`.
    pub const fn mconst(&self) -> Word {
        self.mconst
    }

    /// Width of a limb in bits.
    pub const fn limb_bits(&self) -> u32 {
        self.limb_bits
    }

    /// Number of limbs.
    pub const fn limbs(&self) -> usize {
        N
    }

    /// Bit length of the modulus.
    pub const fn num_bits(&self) -> u32 {
        self.modulus.bits_vartime(self.limb_bits)
    }

    /// Size of a serialized field element in bytes.
    pub const fn byte_len(&self) -> usize {
        self.num_bits().div_ceil(8) as usize
    }

    /// `R mod p`, i.e. the Montgomery form of `1`.
    pub const fn one(&self) -> Limbs<N> {
        self.to_montgomery(&Limbs::ONE)
    }

    /// Fermat inversion exponent `p - 2`.
    pub const fn p_minus_2(&self) -> Limbs<N> {
        self.modulus.wrapping_sub_word(2, self.limb_bits)
    }

    /// Returns `true` if `p ≡ 3 (mod 4)`.
    pub const fn is_3_mod_4(&self) -> bool {
        self.modulus.0[0] & 3 == 3
    }

    /// Square root exponent `(p + 1) / 4`.
    ///
    /// # Panics
    ///
    /// If `p ≢ 3 (mod 4)`.
    pub const fn shanks_exponent(&self) -> Limbs<N> {
        assert!(self.is_3_mod_4(), "square root requires p ≡ 3 mod 4");
        self.modulus
            .wrapping_add_word(1, self.limb_bits)
            .shr_vartime(2, self.limb_bits)
    }

    /// `S = (p - 1).trailing_zeros()`
    pub const fn two_adicity(&self) -> u32 {
        self.modulus
            .wrapping_sub_word(1, self.limb_bits)
            .trailing_zeros_vartime(self.limb_bits)
    }

    /// `T = (p - 1) >> S`
    pub const fn t(&self) -> Limbs<N> {
        self.modulus
            .wrapping_sub_word(1, self.limb_bits)
            .shr_vartime(self.two_adicity(), self.limb_bits)
    }
}
