//! Montgomery arithmetic core.
//!
//! Every function here is a `const fn` whose loop bounds and memory access pattern depend
//! only on the limb count `N`, never on limb values.
//!
//! Inputs and outputs are reduced (`< p`) unless noted otherwise. Since descriptors guarantee
//! `4p < R`, intermediate values of up to `3p` still fit the `N`-limb vector.

use crate::{
    Descriptor, Limbs,
    word::{Word, adc, bit_mask, mac, mask},
};

/// Double-width product buffer, addressed as `t[k / N][k % N]` for digit `k`.
type Wide<const N: usize> = [[Word; N]; 2];

impl<const N: usize> Descriptor<N> {
    /// Computes `a + b mod p`.
    pub const fn add(&self, a: &Limbs<N>, b: &Limbs<N>) -> Limbs<N> {
        let (sum, carry) = a.carrying_add(b, self.limb_bits);
        debug_assert!(carry == 0);
        self.reduce_once(&sum)
    }

    /// Computes `a - b mod p`.
    pub const fn sub(&self, a: &Limbs<N>, b: &Limbs<N>) -> Limbs<N> {
        let bits = self.limb_bits;
        let (diff, borrow) = a.borrowing_sub(b, bits);

        // Add back `p` if the subtraction wrapped around `R`
        let correction = self.modulus.and_mask(bit_mask(borrow));
        diff.carrying_add(&correction, bits).0
    }

    /// Computes `-a mod p`.
    pub const fn neg(&self, a: &Limbs<N>) -> Limbs<N> {
        self.sub(&Limbs::ZERO, a)
    }

    /// Returns `-a mod p` if `flag == 1`, `a` if `flag == 0`.
    pub const fn conditional_negate(&self, a: &Limbs<N>, flag: Word) -> Limbs<N> {
        Limbs::select(a, &self.neg(a), flag)
    }

    /// Maps `t < 2p` to `t mod p` with a branchless conditional subtraction.
    pub const fn reduce_once(&self, t: &Limbs<N>) -> Limbs<N> {
        let (diff, borrow) = t.borrowing_sub(&self.modulus, self.limb_bits);
        Limbs::select(&diff, t, borrow)
    }

    /// Montgomery multiplication: computes `a * b / R mod p`.
    ///
    /// Uses the coarsely integrated operand scanning (CIOS) method, interleaving one row of
    /// the schoolbook product with one word of Montgomery reduction.
    ///
    /// Requires `a * b < p * R` and `a < 2p`; in particular any `a, b < 2p` or `a < p` and
    /// `b < R` are accepted. The digits of `b` are scanned one at a time.
    pub const fn mul(&self, a: &Limbs<N>, b: &Limbs<N>) -> Limbs<N> {
        let bits = self.limb_bits;
        let p = &self.modulus.0;
        let mut t = [0; N];
        let mut i = 0;

        while i < N {
            // t += a * b[i]
            let mut carry = 0;
            let mut j = 0;
            while j < N {
                (t[j], carry) = mac(t[j], a.0[j], b.0[i], carry, bits);
                j += 1;
            }
            let t_hi = carry;

            // t = (t + q * p) / 2^b, where q makes the low digit vanish
            let q = t[0].wrapping_mul(self.mconst) & mask(bits);
            let (_, mut carry) = mac(t[0], q, p[0], 0, bits);
            j = 1;
            while j < N {
                (t[j - 1], carry) = mac(t[j], q, p[j], carry, bits);
                j += 1;
            }

            let overflow;
            (t[N - 1], overflow) = adc(t_hi, carry, 0, bits);
            debug_assert!(overflow == 0);

            i += 1;
        }

        self.reduce_once(&Limbs(t))
    }

    /// Montgomery squaring: computes `a^2 / R mod p`.
    ///
    /// Each cross product `a[i] * a[j]` with `i < j` is computed once and doubled.
    pub const fn square(&self, a: &Limbs<N>) -> Limbs<N> {
        let bits = self.limb_bits;
        let mut t: Wide<N> = [[0; N]; 2];

        // Off-diagonal products
        let mut i = 0;
        while i < N {
            let mut carry = 0;
            let mut j = i + 1;
            while j < N {
                let k = i + j;
                (t[k / N][k % N], carry) = mac(t[k / N][k % N], a.0[i], a.0[j], carry, bits);
                j += 1;
            }
            let k = i + N;
            t[k / N][k % N] = carry;
            i += 1;
        }

        // Double
        let mut carry = 0;
        let mut k = 0;
        while k < 2 * N {
            let w = (t[k / N][k % N] << 1) | carry;
            t[k / N][k % N] = w & mask(bits);
            carry = w >> bits;
            k += 1;
        }
        debug_assert!(carry == 0);

        // Diagonal squares
        let mut carry = 0;
        let mut i = 0;
        while i < N {
            let k = 2 * i;
            (t[k / N][k % N], carry) = mac(t[k / N][k % N], a.0[i], a.0[i], carry, bits);
            let k = k + 1;
            (t[k / N][k % N], carry) = adc(t[k / N][k % N], carry, 0, bits);
            i += 1;
        }
        debug_assert!(carry == 0);

        self.montgomery_reduce(&Limbs(t[0]), &Limbs(t[1]))
    }

    /// Montgomery reduction: computes `(lo + hi * R) / R mod p`.
    ///
    /// Requires `lo + hi * R < p * R`.
    pub const fn montgomery_reduce(&self, lo: &Limbs<N>, hi: &Limbs<N>) -> Limbs<N> {
        let bits = self.limb_bits;
        let p = &self.modulus.0;
        let mut t: Wide<N> = [lo.0, hi.0];
        let mut i = 0;

        while i < N {
            let q = t[0][i].wrapping_mul(self.mconst) & mask(bits);

            let mut carry = 0;
            let mut j = 0;
            while j < N {
                let k = i + j;
                (t[k / N][k % N], carry) = mac(t[k / N][k % N], q, p[j], carry, bits);
                j += 1;
            }

            let mut k = i + N;
            while k < 2 * N {
                (t[k / N][k % N], carry) = adc(t[k / N][k % N], carry, 0, bits);
                k += 1;
            }
            debug_assert!(carry == 0);

            i += 1;
        }

        self.reduce_once(&Limbs(t[1]))
    }

    /// Converts `a < R` into Montgomery form: `a * R mod p`.
    pub const fn to_montgomery(&self, a: &Limbs<N>) -> Limbs<N> {
        self.mul(&self.r2, a)
    }

    /// Converts `a` out of Montgomery form: `a / R mod p`.
    pub const fn from_montgomery(&self, a: &Limbs<N>) -> Limbs<N> {
        self.mul(a, &Limbs::ONE)
    }
}
