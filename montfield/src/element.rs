//! Field elements stored in Montgomery form, generic over a [`FieldParams`] type.

mod sqrt;

use crate::{Descriptor, Error, Limbs, Result, word::Word};
use core::{
    cmp::Ordering,
    fmt,
    iter::{Product, Sum},
    marker::PhantomData,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use ff::{Field, PrimeField};
use rand_core::RngCore;
use subtle::{
    Choice, ConditionallySelectable, ConstantTimeEq, ConstantTimeGreater, ConstantTimeLess,
    CtOption,
};

/// Parameters of a prime field, associated with a marker type.
///
/// See [`field_params!`](crate::field_params) for declaring an implementation.
pub trait FieldParams<const LIMBS: usize>:
    Copy + Clone + fmt::Debug + Default + Eq + PartialEq + Send + Sync + 'static
{
    /// Big-endian serialization of a field element, usually [`FieldBytes`](crate::FieldBytes).
    type Repr: Copy + Default + Send + Sync + 'static + AsRef<[u8]> + AsMut<[u8]>;

    /// Short human-readable name of the field.
    const NAME: &'static str;

    /// Field modulus as a big-endian hexadecimal string.
    const MODULUS_HEX: &'static str;

    /// Modulus descriptor.
    const DESCRIPTOR: Descriptor<LIMBS>;

    /// A fixed multiplicative generator of `modulus - 1` order.
    ///
    /// This element must also be a quadratic nonresidue.
    const MULTIPLICATIVE_GENERATOR: u64;

    /// Computes `x^(p - 2)`.
    ///
    /// Override with a fixed addition chain where one is known.
    fn invert_chain(x: &MontyFieldElement<Self, LIMBS>) -> MontyFieldElement<Self, LIMBS> {
        x.pow_vartime(&const { Self::DESCRIPTOR.p_minus_2() })
    }

    /// Computes `x^((p + 1) / 4)`.
    ///
    /// Only meaningful when `p ≡ 3 (mod 4)`. Override with a fixed addition chain where one
    /// is known.
    fn sqrt_chain(x: &MontyFieldElement<Self, LIMBS>) -> MontyFieldElement<Self, LIMBS> {
        x.pow_vartime(&const { Self::DESCRIPTOR.shanks_exponent() })
    }
}

/// Field element type which uses an internal Montgomery form representation.
#[derive(Clone, Copy)]
pub struct MontyFieldElement<P, const LIMBS: usize>
where
    P: FieldParams<LIMBS>,
{
    montgomery: Limbs<LIMBS>,
    params: PhantomData<P>,
}

impl<P, const LIMBS: usize> MontyFieldElement<P, LIMBS>
where
    P: FieldParams<LIMBS>,
{
    /// Zero element (additive identity).
    pub const ZERO: Self = Self::from_montgomery_limbs(Limbs::ZERO);

    /// Multiplicative identity.
    pub const ONE: Self = Self::from_montgomery_limbs(P::DESCRIPTOR.one());

    /// Number of limbs used by the internal integer representation.
    pub const LIMBS: usize = LIMBS;

    /// Modulus descriptor of this field.
    pub const DESCRIPTOR: Descriptor<LIMBS> = P::DESCRIPTOR;

    /// Decode field element from a canonical big-endian bytestring representation.
    ///
    /// # Returns
    ///
    /// The `CtOption` equivalent of `None` if the input overflows the modulus.
    #[inline]
    pub fn from_bytes(repr: &P::Repr) -> CtOption<Self> {
        let bytes = repr.as_ref();
        debug_assert_eq!(bytes.len(), P::DESCRIPTOR.byte_len());

        match Limbs::from_be_slice(bytes, P::DESCRIPTOR.limb_bits()) {
            Ok(uint) => Self::from_uint(&uint),
            Err(_) => CtOption::new(Self::ZERO, Choice::from(0)),
        }
    }

    /// Decode field element from a canonical big-endian byte slice.
    ///
    /// # Errors
    ///
    /// - [`Error::MalformedInput`] if the slice is not exactly the field's byte width
    /// - [`Error::OutOfRange`] if the encoded integer is not less than the modulus
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        if slice.len() != P::DESCRIPTOR.byte_len() {
            return Err(Error::MalformedInput);
        }

        let uint = Limbs::from_be_slice(slice, P::DESCRIPTOR.limb_bits())?;
        Option::from(Self::from_uint(&uint)).ok_or(Error::OutOfRange)
    }

    /// Decode a field element from a big-endian hex string.
    ///
    /// This is primarily intended for defining constants.
    ///
    /// # Panics
    ///
    /// - When hex is malformed
    /// - When input is the wrong length
    /// - If input overflows the modulus
    pub const fn from_hex_vartime(hex: &str) -> Self {
        assert!(
            hex.len() == P::DESCRIPTOR.byte_len() * 2,
            "hex encoded field element has the wrong length"
        );

        let desc = P::DESCRIPTOR;
        let uint = Limbs::from_be_hex(hex, desc.limb_bits());
        let (_, borrow) = uint.borrowing_sub(desc.modulus(), desc.limb_bits());
        assert!(borrow == 1, "hex encoded field element overflows modulus");

        Self::from_uint_reduced(&uint)
    }

    /// Convert [`Limbs`] into [`MontyFieldElement`], first converting it into Montgomery form:
    ///
    /// ```text
    /// w * R^2 * R^-1 mod p = wR mod p
    /// ```
    ///
    /// # Returns
    ///
    /// The `CtOption` equivalent of `None` if the input overflows the modulus.
    #[inline]
    pub fn from_uint(uint: &Limbs<LIMBS>) -> CtOption<Self> {
        let desc = P::DESCRIPTOR;
        debug_assert!(uint.is_normalized(desc.limb_bits()));

        let is_some = uint.ct_lt(desc.modulus(), desc.limb_bits());
        CtOption::new(Self::from_uint_reduced(uint), is_some)
    }

    /// Convert [`Limbs`] into [`MontyFieldElement`], reducing the input modulo `p`.
    ///
    /// Every limb must be less than `2^limb_bits`.
    #[inline]
    pub const fn from_uint_reduced(uint: &Limbs<LIMBS>) -> Self {
        Self::from_montgomery_limbs(P::DESCRIPTOR.to_montgomery(uint))
    }

    /// Convert a `u64` into a [`MontyFieldElement`], reducing it modulo `p`.
    ///
    /// # Panics
    ///
    /// If the limb vector is narrower than 64 bits.
    #[inline]
    pub const fn from_u64(w: u64) -> Self {
        let bits = P::DESCRIPTOR.limb_bits();
        assert!(LIMBS as u32 * bits >= u64::BITS, "limb vector too narrow for u64");
        Self::from_uint_reduced(&Limbs::from_u64(w, bits))
    }

    /// Create [`MontyFieldElement`] from [`Limbs`] which are already in Montgomery form.
    ///
    /// # ⚠️ Warning
    ///
    /// This value is expected to be in Montgomery form and reduced. Failure to maintain these
    /// invariants will lead to miscomputation and potential security issues!
    #[inline]
    pub const fn from_montgomery_limbs(limbs: Limbs<LIMBS>) -> Self {
        Self {
            montgomery: limbs,
            params: PhantomData,
        }
    }

    /// Borrow the inner [`Limbs`] which are in Montgomery form.
    ///
    /// # ⚠️ Warning
    ///
    /// Make sure you are actually expecting a value in Montgomery form! This is not the correct
    /// function for converting *out* of Montgomery form: that would be
    /// [`MontyFieldElement::to_canonical`].
    pub const fn as_montgomery(&self) -> &Limbs<LIMBS> {
        &self.montgomery
    }

    /// Returns the big-endian bytestring encoding of this field element.
    #[inline]
    pub fn to_bytes(self) -> P::Repr {
        let mut repr = P::Repr::default();
        debug_assert_eq!(repr.as_ref().len(), P::DESCRIPTOR.byte_len());

        self.to_canonical()
            .write_be_bytes(P::DESCRIPTOR.limb_bits(), repr.as_mut());
        repr
    }

    /// Translate field element out of the Montgomery domain, returning [`Limbs`] in canonical
    /// form.
    #[inline]
    pub const fn to_canonical(self) -> Limbs<LIMBS> {
        P::DESCRIPTOR.from_montgomery(&self.montgomery)
    }

    /// Determine if this field element is odd: `self mod 2 == 1`.
    ///
    /// # Returns
    ///
    /// If odd, return `Choice(1)`.  Otherwise, return `Choice(0)`.
    #[inline]
    pub fn is_odd(&self) -> Choice {
        Choice::from((self.to_canonical().0[0] & 1) as u8)
    }

    /// Determine if this field element is even: `self mod 2 == 0`.
    ///
    /// # Returns
    ///
    /// If even, return `Choice(1)`.  Otherwise, return `Choice(0)`.
    #[inline]
    pub fn is_even(&self) -> Choice {
        !self.is_odd()
    }

    /// Determine if this field element is zero.
    ///
    /// # Returns
    ///
    /// If zero, return `Choice(1)`.  Otherwise, return `Choice(0)`.
    #[inline]
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }

    /// Add elements.
    #[inline]
    pub const fn add(&self, rhs: &Self) -> Self {
        Self::from_montgomery_limbs(P::DESCRIPTOR.add(&self.montgomery, &rhs.montgomery))
    }

    /// Double element (add it to itself).
    #[inline]
    #[must_use]
    pub const fn double(&self) -> Self {
        self.add(self)
    }

    /// Subtract elements.
    #[inline]
    pub const fn sub(&self, rhs: &Self) -> Self {
        Self::from_montgomery_limbs(P::DESCRIPTOR.sub(&self.montgomery, &rhs.montgomery))
    }

    /// Multiply elements.
    #[inline]
    pub const fn multiply(&self, rhs: &Self) -> Self {
        Self::from_montgomery_limbs(P::DESCRIPTOR.mul(&self.montgomery, &rhs.montgomery))
    }

    /// Negate element.
    #[inline]
    pub const fn neg(&self) -> Self {
        Self::from_montgomery_limbs(P::DESCRIPTOR.neg(&self.montgomery))
    }

    /// Negate element if `choice` is set.
    #[inline]
    pub fn conditional_negate(&self, choice: Choice) -> Self {
        Self::from_montgomery_limbs(
            P::DESCRIPTOR.conditional_negate(&self.montgomery, choice.unwrap_u8() as Word),
        )
    }

    /// Compute modular square.
    #[inline]
    #[must_use]
    pub const fn square(&self) -> Self {
        Self::from_montgomery_limbs(P::DESCRIPTOR.square(&self.montgomery))
    }

    /// Compute field inversion: `1 / self`.
    ///
    /// # Returns
    ///
    /// The `CtOption` equivalent of `None` if `self` is zero.
    #[inline]
    pub fn invert(&self) -> CtOption<Self> {
        CtOption::new(self.invert_or_zero(), !self.is_zero())
    }

    /// Compute field inversion, mapping zero to zero.
    #[inline]
    pub fn invert_or_zero(&self) -> Self {
        P::invert_chain(self)
    }

    /// Compute field inversion as a `const fn`. Panics if `self` is zero.
    ///
    /// This is mainly intended for inverting constants at compile time.
    pub const fn const_invert(&self) -> Self {
        assert!(
            !self.montgomery.eq_vartime(&Limbs::ZERO),
            "input to invert should be non-zero"
        );
        self.pow_vartime(&P::DESCRIPTOR.p_minus_2())
    }

    /// Returns `self^exp`, where `exp` is an integer in the field's limb radix.
    ///
    /// **This operation is variable time with respect to the exponent `exp`.**
    ///
    /// If `exp` is fixed, this operation is constant time. Note that `exp` will still be branched
    /// upon and should NOT be a secret.
    pub const fn pow_vartime(&self, exp: &Limbs<LIMBS>) -> Self {
        let bits = P::DESCRIPTOR.limb_bits();
        let mut i = exp.bits_vartime(bits);
        let mut res = Self::ONE;

        while i > 0 {
            i -= 1;
            res = res.square();

            if exp.bit_vartime(i, bits) {
                res = res.multiply(self);
            }
        }

        res
    }

    /// Returns `self^(2^n) mod p`.
    ///
    /// **This operation is variable time with respect to the exponent `n`.**
    ///
    /// If the exponent is fixed, this operation is constant time.
    pub const fn sqn_vartime(&self, n: usize) -> Self {
        let mut x = *self;
        let mut i = 0;
        while i < n {
            x = x.square();
            i += 1;
        }
        x
    }
}

//
// `ff` crate trait impls
//

impl<P, const LIMBS: usize> Field for MontyFieldElement<P, LIMBS>
where
    P: FieldParams<LIMBS>,
{
    const ZERO: Self = Self::ZERO;
    const ONE: Self = Self::ONE;

    fn random(mut rng: impl RngCore) -> Self {
        let mut bytes = P::Repr::default();

        loop {
            rng.fill_bytes(bytes.as_mut());
            if let Some(fe) = Self::from_bytes(&bytes).into() {
                return fe;
            }
        }
    }

    fn is_zero(&self) -> Choice {
        Self::ZERO.ct_eq(self)
    }

    fn square(&self) -> Self {
        self.square()
    }

    fn double(&self) -> Self {
        self.double()
    }

    fn invert(&self) -> CtOption<Self> {
        self.invert()
    }

    fn sqrt(&self) -> CtOption<Self> {
        self.sqrt()
    }

    fn sqrt_ratio(num: &Self, div: &Self) -> (Choice, Self) {
        ff::helpers::sqrt_ratio_generic(num, div)
    }
}

impl<P, const LIMBS: usize> PrimeField for MontyFieldElement<P, LIMBS>
where
    P: FieldParams<LIMBS>,
{
    type Repr = P::Repr;

    const MODULUS: &'static str = P::MODULUS_HEX;
    const NUM_BITS: u32 = P::DESCRIPTOR.num_bits();
    const CAPACITY: u32 = Self::NUM_BITS - 1;
    const TWO_INV: Self = Self::from_u64(2).const_invert();
    const MULTIPLICATIVE_GENERATOR: Self = Self::from_u64(P::MULTIPLICATIVE_GENERATOR);
    const S: u32 = P::DESCRIPTOR.two_adicity();
    const ROOT_OF_UNITY: Self = Self::MULTIPLICATIVE_GENERATOR.pow_vartime(&P::DESCRIPTOR.t());
    const ROOT_OF_UNITY_INV: Self = Self::ROOT_OF_UNITY.const_invert();
    const DELTA: Self = Self::MULTIPLICATIVE_GENERATOR.sqn_vartime(Self::S as usize);

    fn from_repr(bytes: Self::Repr) -> CtOption<Self> {
        Self::from_bytes(&bytes)
    }

    fn to_repr(&self) -> Self::Repr {
        self.to_bytes()
    }

    fn is_odd(&self) -> Choice {
        self.is_odd()
    }
}

//
// Arithmetic trait impls
//

/// Emit a `core::ops` trait wrapper for an inherent method.
macro_rules! monty_field_op {
    ($op:tt, $func:ident, $inner_func:ident) => {
        impl<P, const LIMBS: usize> $op for MontyFieldElement<P, LIMBS>
        where
            P: FieldParams<LIMBS>,
        {
            type Output = MontyFieldElement<P, LIMBS>;

            #[inline]
            fn $func(self, rhs: MontyFieldElement<P, LIMBS>) -> MontyFieldElement<P, LIMBS> {
                <MontyFieldElement<P, LIMBS>>::$inner_func(&self, &rhs)
            }
        }

        impl<P, const LIMBS: usize> $op<&Self> for MontyFieldElement<P, LIMBS>
        where
            P: FieldParams<LIMBS>,
        {
            type Output = MontyFieldElement<P, LIMBS>;

            #[inline]
            fn $func(self, rhs: &MontyFieldElement<P, LIMBS>) -> MontyFieldElement<P, LIMBS> {
                <MontyFieldElement<P, LIMBS>>::$inner_func(&self, rhs)
            }
        }

        impl<P, const LIMBS: usize> $op<Self> for &MontyFieldElement<P, LIMBS>
        where
            P: FieldParams<LIMBS>,
        {
            type Output = MontyFieldElement<P, LIMBS>;

            #[inline]
            fn $func(self, rhs: &MontyFieldElement<P, LIMBS>) -> MontyFieldElement<P, LIMBS> {
                <MontyFieldElement<P, LIMBS>>::$inner_func(self, rhs)
            }
        }
    };
}

/// Emit a `core::ops` assignment trait wrapper for a binary operator.
macro_rules! monty_field_assign_op {
    ($op:tt, $func:ident, $bin_op:tt) => {
        impl<P, const LIMBS: usize> $op<Self> for MontyFieldElement<P, LIMBS>
        where
            P: FieldParams<LIMBS>,
        {
            #[inline]
            fn $func(&mut self, other: MontyFieldElement<P, LIMBS>) {
                *self = *self $bin_op other;
            }
        }

        impl<P, const LIMBS: usize> $op<&Self> for MontyFieldElement<P, LIMBS>
        where
            P: FieldParams<LIMBS>,
        {
            #[inline]
            fn $func(&mut self, other: &MontyFieldElement<P, LIMBS>) {
                *self = *self $bin_op other;
            }
        }
    };
}

monty_field_op!(Add, add, add);
monty_field_op!(Sub, sub, sub);
monty_field_op!(Mul, mul, multiply);

monty_field_assign_op!(AddAssign, add_assign, +);
monty_field_assign_op!(SubAssign, sub_assign, -);
monty_field_assign_op!(MulAssign, mul_assign, *);

impl<P, const LIMBS: usize> Neg for MontyFieldElement<P, LIMBS>
where
    P: FieldParams<LIMBS>,
{
    type Output = MontyFieldElement<P, LIMBS>;

    #[inline]
    fn neg(self) -> MontyFieldElement<P, LIMBS> {
        <MontyFieldElement<P, LIMBS>>::neg(&self)
    }
}

impl<P, const LIMBS: usize> Neg for &MontyFieldElement<P, LIMBS>
where
    P: FieldParams<LIMBS>,
{
    type Output = MontyFieldElement<P, LIMBS>;

    #[inline]
    fn neg(self) -> MontyFieldElement<P, LIMBS> {
        <MontyFieldElement<P, LIMBS>>::neg(self)
    }
}

impl<P, const LIMBS: usize> Sum for MontyFieldElement<P, LIMBS>
where
    P: FieldParams<LIMBS>,
{
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.reduce(Add::add).unwrap_or(Self::ZERO)
    }
}

impl<'a, P, const LIMBS: usize> Sum<&'a Self> for MontyFieldElement<P, LIMBS>
where
    P: FieldParams<LIMBS>,
{
    fn sum<I: Iterator<Item = &'a MontyFieldElement<P, LIMBS>>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl<P, const LIMBS: usize> Product for MontyFieldElement<P, LIMBS>
where
    P: FieldParams<LIMBS>,
{
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.reduce(Mul::mul).unwrap_or(Self::ONE)
    }
}

impl<'a, P, const LIMBS: usize> Product<&'a Self> for MontyFieldElement<P, LIMBS>
where
    P: FieldParams<LIMBS>,
{
    fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().product()
    }
}

//
// `subtle` trait impls
//

impl<P, const LIMBS: usize> ConditionallySelectable for MontyFieldElement<P, LIMBS>
where
    P: FieldParams<LIMBS>,
{
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self::from_montgomery_limbs(Limbs::conditional_select(
            &a.montgomery,
            &b.montgomery,
            choice,
        ))
    }
}

impl<P, const LIMBS: usize> ConstantTimeEq for MontyFieldElement<P, LIMBS>
where
    P: FieldParams<LIMBS>,
{
    fn ct_eq(&self, other: &Self) -> Choice {
        self.montgomery.ct_eq(&other.montgomery)
    }
}

impl<P, const LIMBS: usize> ConstantTimeGreater for MontyFieldElement<P, LIMBS>
where
    P: FieldParams<LIMBS>,
{
    fn ct_gt(&self, other: &Self) -> Choice {
        other
            .to_canonical()
            .ct_lt(&self.to_canonical(), P::DESCRIPTOR.limb_bits())
    }
}

impl<P, const LIMBS: usize> ConstantTimeLess for MontyFieldElement<P, LIMBS>
where
    P: FieldParams<LIMBS>,
{
    fn ct_lt(&self, other: &Self) -> Choice {
        self.to_canonical()
            .ct_lt(&other.to_canonical(), P::DESCRIPTOR.limb_bits())
    }
}

//
// `core::fmt` trait impls
//

impl<P, const LIMBS: usize> fmt::Debug for MontyFieldElement<P, LIMBS>
where
    P: FieldParams<LIMBS>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(0x{:X})", P::NAME, self)
    }
}

impl<P, const LIMBS: usize> fmt::Display for MontyFieldElement<P, LIMBS>
where
    P: FieldParams<LIMBS>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(self, f)
    }
}

impl<P, const LIMBS: usize> fmt::LowerHex for MontyFieldElement<P, LIMBS>
where
    P: FieldParams<LIMBS>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.to_bytes().as_ref() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl<P, const LIMBS: usize> fmt::UpperHex for MontyFieldElement<P, LIMBS>
where
    P: FieldParams<LIMBS>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.to_bytes().as_ref() {
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}

//
// Miscellaneous trait impls
//

impl<P, const LIMBS: usize> Default for MontyFieldElement<P, LIMBS>
where
    P: FieldParams<LIMBS>,
{
    fn default() -> Self {
        Self::ZERO
    }
}

impl<P, const LIMBS: usize> zeroize::DefaultIsZeroes for MontyFieldElement<P, LIMBS> where
    P: FieldParams<LIMBS>
{
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> Eq for MontyFieldElement<P, LIMBS> {}
impl<P: FieldParams<LIMBS>, const LIMBS: usize> PartialEq for MontyFieldElement<P, LIMBS> {
    fn eq(&self, rhs: &Self) -> bool {
        self.ct_eq(rhs).into()
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> Ord for MontyFieldElement<P, LIMBS> {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self.to_canonical(), other.to_canonical());
        a.as_words().iter().rev().cmp(b.as_words().iter().rev())
    }
}

impl<P: FieldParams<LIMBS>, const LIMBS: usize> PartialOrd for MontyFieldElement<P, LIMBS> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P, const LIMBS: usize> From<u32> for MontyFieldElement<P, LIMBS>
where
    P: FieldParams<LIMBS>,
{
    #[inline]
    fn from(n: u32) -> MontyFieldElement<P, LIMBS> {
        Self::from_u64(n.into())
    }
}

impl<P, const LIMBS: usize> From<u64> for MontyFieldElement<P, LIMBS>
where
    P: FieldParams<LIMBS>,
{
    #[inline]
    fn from(n: u64) -> MontyFieldElement<P, LIMBS> {
        Self::from_u64(n)
    }
}

impl<P, const LIMBS: usize> From<MontyFieldElement<P, LIMBS>> for Limbs<LIMBS>
where
    P: FieldParams<LIMBS>,
{
    fn from(fe: MontyFieldElement<P, LIMBS>) -> Limbs<LIMBS> {
        Limbs::from(&fe)
    }
}

impl<P, const LIMBS: usize> From<&MontyFieldElement<P, LIMBS>> for Limbs<LIMBS>
where
    P: FieldParams<LIMBS>,
{
    fn from(fe: &MontyFieldElement<P, LIMBS>) -> Limbs<LIMBS> {
        fe.to_canonical()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use crate::{Error, Limbs, field_params, test_field_descriptor, test_primefield};
    use ff::{Field, PrimeField};
    use proptest::prelude::*;
    use std::format;
    use subtle::{Choice, ConditionallySelectable, ConstantTimeGreater, ConstantTimeLess};

    const P: u64 = (1 << 62) - 57;

    field_params!(
        name: TestParams13,
        field: "F62",
        modulus: "3fffffffffffffc7",
        limb_bits: 13,
        limbs: 5,
        modulus_limbs: [0x1fc7, 0x1fff, 0x1fff, 0x1fff, 0x3ff],
        r2: [0xc40, 0x19, 0, 0, 0],
        mconst: 0xe09,
        multiplicative_generator: 3,
        doc: "`2^62 - 57` in 13-bit limbs"
    );

    field_params!(
        name: TestParams16,
        field: "F62",
        modulus: "3fffffffffffffc7",
        limb_bits: 16,
        limbs: 4,
        modulus_limbs: [0xffc7, 0xffff, 0xffff, 0x3fff],
        r2: [0xcb10, 0, 0, 0],
        mconst: 0xee09,
        multiplicative_generator: 3,
        doc: "`2^62 - 57` in 16-bit limbs"
    );

    type Fe13 = crate::MontyFieldElement<TestParams13, 5>;
    type Fe16 = crate::MontyFieldElement<TestParams16, 4>;

    fn to_u64(fe: &Fe13) -> u64 {
        u64::from_be_bytes(fe.to_bytes().0)
    }

    mod limbs13 {
        use super::*;
        type FieldElement = Fe13;
        test_primefield!(FieldElement);
        test_field_descriptor!(FieldElement);
    }

    mod limbs16 {
        use super::*;
        type FieldElement = Fe16;
        test_primefield!(FieldElement);
        test_field_descriptor!(FieldElement);
    }

    #[test]
    fn constants() {
        assert_eq!(Fe13::NUM_BITS, 62);
        assert_eq!(Fe13::CAPACITY, 61);
        assert_eq!(Fe13::S, 1);
        assert_eq!(Fe13::ROOT_OF_UNITY, -Fe13::ONE);
        assert_eq!(Fe13::DELTA, Fe13::from_u64(9));
        assert_eq!(to_u64(&Fe13::TWO_INV), (P + 1) / 2);
    }

    #[test]
    fn widths_agree() {
        let a = Fe13::from_u64(0x0123_4567_89ab_cdef);
        let b = Fe16::from_u64(0x0123_4567_89ab_cdef);
        assert_eq!(a.to_bytes(), b.to_bytes());
        assert_eq!(a.square().to_bytes(), b.square().to_bytes());
        assert_eq!(a.invert_or_zero().to_bytes(), b.invert_or_zero().to_bytes());
    }

    #[test]
    fn from_slice_errors() {
        assert_eq!(Fe13::from_slice(&[0; 7]), Err(Error::MalformedInput));
        assert_eq!(Fe13::from_slice(&[0; 9]), Err(Error::MalformedInput));
        assert_eq!(Fe13::from_slice(&P.to_be_bytes()), Err(Error::OutOfRange));
        assert_eq!(Fe13::from_slice(&u64::MAX.to_be_bytes()), Err(Error::OutOfRange));
        assert_eq!(Fe13::from_slice(&(P - 1).to_be_bytes()), Ok(-Fe13::ONE));
    }

    #[test]
    fn from_bytes_rejects_modulus() {
        assert!(bool::from(Fe13::from_bytes(&P.to_be_bytes().into()).is_none()));
    }

    #[test]
    fn from_uint_range_check() {
        let p = Limbs::from_u64(P, 13);
        assert!(bool::from(Fe13::from_uint(&p).is_none()));
        assert_eq!(Fe13::from_uint_reduced(&p), Fe13::ZERO);
        assert_eq!(Fe13::from_uint_reduced(&Limbs::from_u64(P + 5, 13)), Fe13::from_u64(5));
    }

    #[test]
    fn from_hex_vartime() {
        assert_eq!(Fe13::from_hex_vartime("0000000000000010"), Fe13::from_u64(16));
        assert_eq!(Fe13::from_hex_vartime("3fffffffffffffc6"), -Fe13::ONE);
    }

    #[test]
    fn invert_zero() {
        assert!(bool::from(Fe13::ZERO.invert().is_none()));
        assert_eq!(Fe13::ZERO.invert_or_zero(), Fe13::ZERO);
    }

    #[test]
    fn try_sqrt_non_residue() {
        assert_eq!(Fe13::from_u64(3).try_sqrt(), Err(Error::NoSquareRoot));
        assert_eq!(Fe13::from_u64(9).try_sqrt().map(|r| r.square()), Ok(Fe13::from_u64(9)));
    }

    #[test]
    fn parity_and_ordering() {
        let two = Fe13::from_u64(2);
        let three = Fe13::from_u64(3);
        assert!(bool::from(two.is_even()));
        assert!(bool::from(three.is_odd()));
        assert!(bool::from(two.ct_lt(&three)));
        assert!(bool::from(three.ct_gt(&two)));
        assert!(two < three);
        assert!(three < -Fe13::ONE);
    }

    #[test]
    fn conditional_negate() {
        let x = Fe13::from_u64(7);
        assert_eq!(x.conditional_negate(0.into()), x);
        assert_eq!(x.conditional_negate(1.into()), -x);
    }

    #[test]
    fn conditional_select_boundaries() {
        let max = -Fe13::ONE;
        for (a, b) in [(Fe13::ZERO, max), (max, Fe13::ZERO), (max, max)] {
            assert_eq!(Fe13::conditional_select(&a, &b, Choice::from(0)), a);
            assert_eq!(Fe13::conditional_select(&a, &b, Choice::from(1)), b);
        }

        let mut x = Fe13::ZERO;
        x.conditional_assign(&max, Choice::from(0));
        assert_eq!(x, Fe13::ZERO);
        x.conditional_assign(&max, Choice::from(1));
        assert_eq!(x, max);
    }

    #[test]
    fn formatting() {
        let x = Fe13::from_u64(0xabc);
        assert_eq!(format!("{x:?}"), "F62(0x0000000000000ABC)");
        assert_eq!(format!("{x:x}"), "0000000000000abc");
        assert_eq!(format!("{x}"), "0000000000000ABC");
    }

    #[test]
    fn sum_and_product() {
        let xs = [1u64, 2, 3, 4].map(Fe13::from_u64);
        assert_eq!(xs.iter().sum::<Fe13>(), Fe13::from_u64(10));
        assert_eq!(xs.iter().product::<Fe13>(), Fe13::from_u64(24));
    }

    #[test]
    fn random_is_reduced() {
        struct Counter(u64);

        impl rand_core::RngCore for Counter {
            fn next_u32(&mut self) -> u32 {
                self.next_u64() as u32
            }

            fn next_u64(&mut self) -> u64 {
                self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
                self.0
            }

            fn fill_bytes(&mut self, dest: &mut [u8]) {
                rand_core::impls::fill_bytes_via_next(self, dest)
            }

            fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
                self.fill_bytes(dest);
                Ok(())
            }
        }

        let mut rng = Counter(42);
        for _ in 0..32 {
            let x = Fe13::random(&mut rng);
            assert!(to_u64(&x) < P);
        }
    }

    proptest! {
        #[test]
        fn multiply_matches_reference(a in 0..P, b in 0..P) {
            let expected = ((a as u128 * b as u128) % P as u128) as u64;
            prop_assert_eq!(to_u64(&(Fe13::from_u64(a) * Fe13::from_u64(b))), expected);
        }

        #[test]
        fn invert_is_inverse(a in 1..P) {
            let x = Fe13::from_u64(a);
            prop_assert_eq!(x * x.invert().unwrap(), Fe13::ONE);
        }

        #[test]
        fn sqrt_squares_back(a in 0..P) {
            let x = Fe13::from_u64(a);
            let sq = x.square();
            let root = sq.sqrt().unwrap();
            prop_assert_eq!(root.square(), sq);
            prop_assert!(root == x || root == -x);
        }

        #[test]
        fn conditional_select_picks_operand(a in 0..P, b in 0..P) {
            let (x, y) = (Fe13::from_u64(a), Fe13::from_u64(b));
            for (lhs, rhs) in [(x, y), (Fe13::ZERO, x), (x, -Fe13::ONE)] {
                prop_assert_eq!(Fe13::conditional_select(&lhs, &rhs, Choice::from(0)), lhs);
                prop_assert_eq!(Fe13::conditional_select(&lhs, &rhs, Choice::from(1)), rhs);
            }

            let mut swapped = (x, y);
            Fe13::conditional_swap(&mut swapped.0, &mut swapped.1, Choice::from(1));
            prop_assert_eq!(swapped, (y, x));
            Fe13::conditional_swap(&mut swapped.0, &mut swapped.1, Choice::from(0));
            prop_assert_eq!(swapped, (y, x));
        }

        #[test]
        fn bytes_round_trip(a in 0..P) {
            let x = Fe13::from_u64(a);
            prop_assert_eq!(Fe13::from_bytes(&x.to_bytes()).unwrap(), x);
            prop_assert_eq!(to_u64(&x), a);
        }
    }
}
