//! Native words and digit primitives in radix `2^bits`.
//!
//! Limbs are *unsaturated*: a limb holds `bits` significant bits of a word which is at
//! least two bits wider, so sums of two digits and a carry never overflow a [`Word`], and
//! products of two digits plus two digit-sized addends never overflow a [`WideWord`].

use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(target_pointer_width = "64")] {
        /// Native word used to store a single limb.
        pub type Word = u64;

        /// Double-width accumulator for limb products.
        pub(crate) type WideWord = u128;
    } else {
        /// Native word used to store a single limb.
        pub type Word = u32;

        /// Double-width accumulator for limb products.
        pub(crate) type WideWord = u64;
    }
}

/// Largest supported limb width for the native [`Word`].
pub const MAX_LIMB_BITS: u32 = Word::BITS - 2;

/// Returns `2^bits - 1`.
#[inline(always)]
pub(crate) const fn mask(bits: u32) -> Word {
    (1 << bits) - 1
}

/// Computes `a + b + carry`, returning the low digit along with the new carry.
#[inline(always)]
pub(crate) const fn adc(a: Word, b: Word, carry: Word, bits: u32) -> (Word, Word) {
    let ret = a + b + carry;
    (ret & mask(bits), ret >> bits)
}

/// Computes `a - (b + borrow)`, returning the low digit along with the new borrow (0 or 1).
#[inline(always)]
pub(crate) const fn sbb(a: Word, b: Word, borrow: Word, bits: u32) -> (Word, Word) {
    // Digits are at least two bits narrower than the word, so an underflow always sets the
    // top bit of the wrapped difference.
    let ret = a.wrapping_sub(b).wrapping_sub(borrow);
    (ret & mask(bits), ret >> (Word::BITS - 1))
}

/// Computes `a + (b * c) + carry`, returning the low digit along with the new carry.
#[inline(always)]
pub(crate) const fn mac(a: Word, b: Word, c: Word, carry: Word, bits: u32) -> (Word, Word) {
    let ret = (a as WideWord) + ((b as WideWord) * (c as WideWord)) + (carry as WideWord);
    ((ret as Word) & mask(bits), (ret >> bits) as Word)
}

/// Expands a borrow or carry bit (0 or 1) into an all-zeros or all-ones mask.
#[inline(always)]
pub(crate) const fn bit_mask(bit: Word) -> Word {
    bit.wrapping_neg()
}
