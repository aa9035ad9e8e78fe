//! Modular square root for `p ≡ 3 (mod 4)`.
//!
//! From <https://eprint.iacr.org/2012/685.pdf> (page 12, algorithm 5)

use crate::{Error, FieldParams, MontyFieldElement, Result};
use subtle::{ConstantTimeEq, CtOption};

impl<P, const LIMBS: usize> MontyFieldElement<P, LIMBS>
where
    P: FieldParams<LIMBS>,
{
    /// Returns the square root of self mod p, or `None` if no square root exists.
    ///
    /// For `p ≡ 3 (mod 4)` the candidate root is `self^((p + 1) / 4)`, which is then squared
    /// and compared with `self`. Other moduli are rejected at compile time.
    #[inline]
    pub fn sqrt(&self) -> CtOption<Self> {
        const {
            assert!(
                P::DESCRIPTOR.is_3_mod_4(),
                "square root requires p ≡ 3 mod 4"
            )
        };

        let sqrt = P::sqrt_chain(self);
        CtOption::new(sqrt, sqrt.square().ct_eq(self))
    }

    /// Returns the square root of self mod p.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSquareRoot`] if `self` is a quadratic nonresidue.
    pub fn try_sqrt(&self) -> Result<Self> {
        Option::from(self.sqrt()).ok_or(Error::NoSquareRoot)
    }
}
