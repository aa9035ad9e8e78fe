//! Fixed-width integers stored as little-endian vectors of unsaturated limbs.

use crate::{
    Error, Result,
    word::{Word, adc, bit_mask, mask, sbb},
};
use core::fmt;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Unsigned integer of `N` limbs in radix `2^bits`, least significant limb first.
///
/// The limb width is not part of the type: it is supplied by the [`Descriptor`] the value
/// is used with. Every limb must be strictly less than `2^bits`.
///
/// [`Descriptor`]: crate::Descriptor
#[derive(Clone, Copy)]
pub struct Limbs<const N: usize>(pub(crate) [Word; N]);

impl<const N: usize> Limbs<N> {
    /// The value `0`.
    pub const ZERO: Self = Self([0; N]);

    /// The value `1`.
    pub const ONE: Self = {
        let mut words = [0; N];
        words[0] = 1;
        Self(words)
    };

    /// Create from little-endian limbs.
    ///
    /// Each limb must be less than `2^bits` for the limb width it will be used with.
    pub const fn from_words(words: [Word; N]) -> Self {
        Self(words)
    }

    /// Borrow the little-endian limbs.
    pub const fn as_words(&self) -> &[Word; N] {
        &self.0
    }

    /// Split a `u64` into limbs of width `bits`.
    pub const fn from_u64(n: u64, bits: u32) -> Self {
        let mut words = [0; N];
        let mut n = n;
        let mut i = 0;

        while i < N {
            words[i] = (n as Word) & mask(bits);
            n >>= bits;
            i += 1;
        }

        debug_assert!(n == 0, "u64 does not fit in limb vector");
        Self(words)
    }

    /// Decode a big-endian byte string into limbs of width `bits`.
    ///
    /// Inputs shorter than the limb vector are implicitly zero-padded. Only the limb capacity
    /// is checked here: the exact field width is enforced by
    /// [`MontyFieldElement::from_slice`](crate::MontyFieldElement::from_slice) and
    /// [`MontyFieldElement::from_bytes`](crate::MontyFieldElement::from_bytes).
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedInput`] if the input holds more bits than the limb vector.
    pub const fn from_be_slice(bytes: &[u8], bits: u32) -> Result<Self> {
        if bytes.len() * 8 > N * bits as usize {
            return Err(Error::MalformedInput);
        }

        let mut words = [0; N];
        let mut k = 0;

        while k < bytes.len() {
            let byte = bytes[bytes.len() - 1 - k] as Word;
            let pos = (k * 8) as u32;
            let digit = (pos / bits) as usize;
            let shift = pos % bits;

            words[digit] |= (byte << shift) & mask(bits);

            // The byte straddles two limbs
            if shift + 8 > bits {
                words[digit + 1] |= byte >> (bits - shift);
            }

            k += 1;
        }

        Ok(Self(words))
    }

    /// Decode a big-endian hex string into limbs of width `bits`.
    ///
    /// # Panics
    ///
    /// If the string contains a non-hex character or encodes more bits than the limb vector
    /// holds.
    pub const fn from_be_hex(hex: &str, bits: u32) -> Self {
        let hex = hex.as_bytes();
        assert!(hex.len() * 4 <= N * bits as usize, "hex string too long");

        let mut words = [0; N];
        let mut k = 0;

        while k < hex.len() {
            let nibble = match hex[hex.len() - 1 - k] {
                c @ b'0'..=b'9' => c - b'0',
                c @ b'a'..=b'f' => c - b'a' + 10,
                c @ b'A'..=b'F' => c - b'A' + 10,
                _ => panic!("invalid hex digit"),
            };
            let nibble = nibble as Word;
            let pos = (k * 4) as u32;
            let digit = (pos / bits) as usize;
            let shift = pos % bits;

            words[digit] |= (nibble << shift) & mask(bits);
            if shift + 4 > bits {
                words[digit + 1] |= nibble >> (bits - shift);
            }

            k += 1;
        }

        Self(words)
    }

    /// Encode the low `out.len()` bytes of this integer into `out` in big-endian order.
    pub fn write_be_bytes(&self, bits: u32, out: &mut [u8]) {
        let len = out.len();
        debug_assert!(len * 8 <= N * bits as usize);

        for (k, byte) in out.iter_mut().rev().enumerate() {
            let pos = (k * 8) as u32;
            let digit = (pos / bits) as usize;
            let shift = pos % bits;

            let mut w = self.0[digit] >> shift;
            if shift + 8 > bits && digit + 1 < N {
                w |= self.0[digit + 1] << (bits - shift);
            }

            *byte = w as u8;
        }
    }

    /// Computes `self + rhs`, returning the result along with the carry out of the top limb.
    pub(crate) const fn carrying_add(&self, rhs: &Self, bits: u32) -> (Self, Word) {
        let mut words = [0; N];
        let mut carry = 0;
        let mut i = 0;

        while i < N {
            (words[i], carry) = adc(self.0[i], rhs.0[i], carry, bits);
            i += 1;
        }

        (Self(words), carry)
    }

    /// Computes `self - rhs`, returning the result along with the borrow out of the top limb.
    pub(crate) const fn borrowing_sub(&self, rhs: &Self, bits: u32) -> (Self, Word) {
        let mut words = [0; N];
        let mut borrow = 0;
        let mut i = 0;

        while i < N {
            (words[i], borrow) = sbb(self.0[i], rhs.0[i], borrow, bits);
            i += 1;
        }

        (Self(words), borrow)
    }

    /// Bitwise AND of every limb with `mask`.
    pub(crate) const fn and_mask(&self, mask: Word) -> Self {
        let mut words = self.0;
        let mut i = 0;

        while i < N {
            words[i] &= mask;
            i += 1;
        }

        Self(words)
    }

    /// Returns `b` if `bit == 1`, `a` if `bit == 0`, without branching.
    pub(crate) const fn select(a: &Self, b: &Self, bit: Word) -> Self {
        let mask = bit_mask(bit);
        let mut words = [0; N];
        let mut i = 0;

        while i < N {
            words[i] = a.0[i] ^ (mask & (a.0[i] ^ b.0[i]));
            i += 1;
        }

        Self(words)
    }

    /// Determine if `self < rhs` in constant time.
    pub fn ct_lt(&self, rhs: &Self, bits: u32) -> Choice {
        let (_, borrow) = self.borrowing_sub(rhs, bits);
        Choice::from(borrow as u8)
    }

    /// Determine if every limb is zero, in constant time.
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }

    /// Returns `true` if every limb is below `2^bits`.
    pub const fn is_normalized(&self, bits: u32) -> bool {
        let mut acc = 0;
        let mut i = 0;

        while i < N {
            acc |= self.0[i] >> bits;
            i += 1;
        }

        acc == 0
    }

    /// Variable-time equality, for public values and `const` contexts.
    pub const fn eq_vartime(&self, rhs: &Self) -> bool {
        let mut i = 0;

        while i < N {
            if self.0[i] != rhs.0[i] {
                return false;
            }
            i += 1;
        }

        true
    }

    /// Number of significant bits.
    ///
    /// **This operation is variable time.** Only use it with public values.
    pub const fn bits_vartime(&self, bits: u32) -> u32 {
        let mut i = N;

        while i > 0 {
            i -= 1;
            let w = self.0[i];
            if w != 0 {
                return i as u32 * bits + (Word::BITS - w.leading_zeros());
            }
        }

        0
    }

    /// Returns bit `index` of this integer.
    ///
    /// **This operation is variable time.** Only use it with public values.
    pub const fn bit_vartime(&self, index: u32, bits: u32) -> bool {
        let digit = (index / bits) as usize;
        digit < N && (self.0[digit] >> (index % bits)) & 1 == 1
    }

    /// Number of trailing zero bits, or `0` for the value zero.
    ///
    /// **This operation is variable time.** Only use it with public values.
    pub const fn trailing_zeros_vartime(&self, bits: u32) -> u32 {
        let mut i = 0;

        while i < N {
            let w = self.0[i];
            if w != 0 {
                return i as u32 * bits + w.trailing_zeros();
            }
            i += 1;
        }

        0
    }

    /// Computes `self >> shift`.
    ///
    /// **This operation is variable time with respect to `shift`.**
    pub const fn shr_vartime(&self, shift: u32, bits: u32) -> Self {
        let limb_shift = (shift / bits) as usize;
        let bit_shift = shift % bits;
        let mut words = [0; N];
        let mut i = 0;

        while i + limb_shift < N {
            let mut w = self.0[i + limb_shift] >> bit_shift;
            if bit_shift != 0 && i + limb_shift + 1 < N {
                w |= (self.0[i + limb_shift + 1] << (bits - bit_shift)) & mask(bits);
            }
            words[i] = w;
            i += 1;
        }

        Self(words)
    }

    /// Computes `self + w` modulo `2^(bits * N)`, where `w < 2^bits`.
    pub const fn wrapping_add_word(&self, w: Word, bits: u32) -> Self {
        let mut rhs = [0; N];
        rhs[0] = w;
        self.carrying_add(&Self(rhs), bits).0
    }

    /// Computes `self - w` modulo `2^(bits * N)`, where `w < 2^bits`.
    pub const fn wrapping_sub_word(&self, w: Word, bits: u32) -> Self {
        let mut rhs = [0; N];
        rhs[0] = w;
        self.borrowing_sub(&Self(rhs), bits).0
    }
}

impl<const N: usize> ConditionallySelectable for Limbs<N> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut words = [0; N];

        for (i, w) in words.iter_mut().enumerate() {
            *w = Word::conditional_select(&a.0[i], &b.0[i], choice);
        }

        Self(words)
    }
}

impl<const N: usize> ConstantTimeEq for Limbs<N> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl<const N: usize> Default for Limbs<N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> Eq for Limbs<N> {}
impl<const N: usize> PartialEq for Limbs<N> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<const N: usize> fmt::Debug for Limbs<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Limbs([")?;
        for (i, w) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "0x{w:x}")?;
        }
        f.write_str("])")
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::Limbs;
    use crate::{Error, word::Word};
    use hex_literal::hex;
    use proptest::prelude::*;
    use subtle::{Choice, ConditionallySelectable};

    type L = Limbs<10>;

    /// P-256 modulus in 28-bit limbs.
    const P256: [Word; 10] = [
        0xFFFFFFF, 0xFFFFFFF, 0xFFFFFFF, 0xFFF, 0x0, 0x0, 0x1000000, 0x0, 0xFFFFFFF, 0xF,
    ];

    const P256_BYTES: [u8; 32] =
        hex!("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff");

    #[test]
    fn from_be_slice_matches_limb_table() {
        let limbs = L::from_be_slice(&P256_BYTES, 28).unwrap();
        assert_eq!(limbs, L::from_words(P256));
    }

    #[test]
    fn write_be_bytes_matches_limb_table() {
        let mut out = [0u8; 32];
        L::from_words(P256).write_be_bytes(28, &mut out);
        assert_eq!(out, P256_BYTES);
    }

    #[test]
    fn from_be_hex_matches_limb_table() {
        let limbs = L::from_be_hex(
            "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
            28,
        );
        assert_eq!(limbs, L::from_words(P256));
        assert_eq!(L::from_be_hex("0A", 28), L::from_u64(10, 28));
    }

    #[test]
    fn from_be_slice_pads_short_input() {
        assert_eq!(L::from_be_slice(&[1], 28).unwrap(), L::ONE);
        assert_eq!(L::from_be_slice(&[], 28).unwrap(), L::ZERO);
    }

    #[test]
    fn from_be_slice_rejects_oversized_input() {
        assert_eq!(L::from_be_slice(&[0u8; 36], 28), Err(Error::MalformedInput));
    }

    #[test]
    fn from_u64_splits_across_limbs() {
        let limbs = L::from_u64(u64::MAX, 28);
        assert_eq!(limbs.as_words()[..3], [0xFFFFFFF, 0xFFFFFFF, 0xFF]);
        assert_eq!(limbs.bits_vartime(28), 64);
    }

    #[test]
    fn comparisons() {
        let p = L::from_words(P256);
        let p_minus_1 = p.wrapping_sub_word(1, 28);
        assert!(bool::from(p_minus_1.ct_lt(&p, 28)));
        assert!(!bool::from(p.ct_lt(&p, 28)));
        assert!(!bool::from(p.ct_lt(&p_minus_1, 28)));
        assert!(bool::from(L::ZERO.is_zero()));
        assert!(p.is_normalized(28));
        assert!(!L::from_words([1 << 28; 10]).is_normalized(28));
    }

    #[test]
    fn public_exponent_helpers() {
        let p = L::from_words(P256);
        assert_eq!(p.bits_vartime(28), 256);
        assert!(p.bit_vartime(255, 28));
        assert!(!p.bit_vartime(223, 28));
        assert_eq!(p.wrapping_sub_word(1, 28).trailing_zeros_vartime(28), 1);

        // (p + 1) / 4
        let mut out = [0u8; 32];
        p.wrapping_add_word(1, 28).shr_vartime(2, 28).write_be_bytes(28, &mut out);
        assert_eq!(
            out,
            hex!("3fffffffc0000000400000000000000000000000400000000000000000000000")
        );
    }

    #[test]
    fn wrapping_sub_word_borrows_across_limbs() {
        let limbs = L::from_u64(1 << 28, 28).wrapping_sub_word(1, 28);
        assert_eq!(limbs, L::from_u64(0xFFFFFFF, 28));
    }

    #[test]
    fn conditional_select_boundaries() {
        let p_minus_1 = L::from_words(P256).wrapping_sub_word(1, 28);
        for (a, b) in [(L::ZERO, p_minus_1), (p_minus_1, L::ZERO)] {
            assert_eq!(L::conditional_select(&a, &b, Choice::from(0)), a);
            assert_eq!(L::conditional_select(&a, &b, Choice::from(1)), b);
        }
    }

    proptest! {
        #[test]
        fn conditional_select_picks_operand(bytes in any::<[u8; 32]>()) {
            let p_minus_1 = L::from_words(P256).wrapping_sub_word(1, 28);
            let x = L::from_be_slice(&bytes, 28).unwrap();
            for (a, b) in [(x, p_minus_1), (L::ZERO, x)] {
                prop_assert_eq!(L::conditional_select(&a, &b, Choice::from(0)), a);
                prop_assert_eq!(L::conditional_select(&a, &b, Choice::from(1)), b);
            }
        }
    }
}
