//! Known-answer self-test harness.

use core::fmt;
use montfield::{FieldParams, Limbs, MontyFieldElement};

/// Field operations covered by the self-test.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Multiplication.
    Multiply,

    /// Squaring.
    Square,

    /// Addition.
    Add,

    /// Subtraction.
    Subtract,

    /// Inversion.
    Invert,

    /// Square root.
    Sqrt,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Multiply => "multiply",
            Operation::Square => "square",
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Invert => "invert",
            Operation::Sqrt => "sqrt",
        })
    }
}

/// Self-test failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SelfTestError {
    /// The descriptor modulus does not equal the published modulus.
    Modulus,

    /// `1` did not survive a round trip through Montgomery form.
    MontgomeryRoundTrip,

    /// A known-answer vector could not be decoded as a field element.
    Decode {
        /// Operation the vector belongs to.
        op: Operation,
        /// Index of the vector.
        index: usize,
    },

    /// A known-answer vector produced the wrong result.
    KnownAnswer {
        /// Operation which failed.
        op: Operation,
        /// Index of the vector.
        index: usize,
    },

    /// A known quadratic non-residue was given a square root.
    NonResidueAccepted {
        /// Index of the non-residue.
        index: usize,
    },
}

impl fmt::Display for SelfTestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelfTestError::Modulus => write!(f, "modulus does not match published constant"),
            SelfTestError::MontgomeryRoundTrip => write!(f, "Montgomery form round trip failed"),
            SelfTestError::Decode { op, index } => {
                write!(f, "{op} vector {index} is not a valid field element")
            }
            SelfTestError::KnownAnswer { op, index } => {
                write!(f, "{op} known-answer test {index} failed")
            }
            SelfTestError::NonResidueAccepted { index } => {
                write!(f, "non-residue {index} has a square root")
            }
        }
    }
}

impl core::error::Error for SelfTestError {}

/// Binary operation vector: `(a, b, expected)`.
pub type BinaryVector<const BYTES: usize> = ([u8; BYTES], [u8; BYTES], [u8; BYTES]);

/// Unary operation vector: `(a, expected)`.
pub type UnaryVector<const BYTES: usize> = ([u8; BYTES], [u8; BYTES]);

/// Big-endian known-answer vectors for a single field.
#[derive(Clone, Copy, Debug)]
pub struct KnownAnswers<const BYTES: usize> {
    /// The field modulus.
    pub modulus: [u8; BYTES],

    /// `a * b = expected`
    pub mul: &'static [BinaryVector<BYTES>],

    /// `a + b = expected`
    pub add: &'static [BinaryVector<BYTES>],

    /// `a - b = expected`
    pub sub: &'static [BinaryVector<BYTES>],

    /// `a^-1 = expected`
    pub invert: &'static [UnaryVector<BYTES>],

    /// `a^((p + 1) / 4) = expected`, where `a` is a quadratic residue
    pub sqrt: &'static [UnaryVector<BYTES>],

    /// Quadratic non-residues.
    pub non_residues: &'static [[u8; BYTES]],
}

/// Run the known-answer self-test for the field described by `P`.
///
/// # Errors
///
/// Returns the first failing check.
pub fn self_test<P, const LIMBS: usize, const BYTES: usize>(
    vectors: &KnownAnswers<BYTES>,
) -> Result<(), SelfTestError>
where
    P: FieldParams<LIMBS>,
{
    let desc = P::DESCRIPTOR;
    let bits = desc.limb_bits();

    let published =
        Limbs::from_be_slice(&vectors.modulus, bits).map_err(|_| SelfTestError::Modulus)?;
    if published != *desc.modulus() || Limbs::from_be_hex(P::MODULUS_HEX, bits) != published {
        return Err(SelfTestError::Modulus);
    }

    let one = desc.to_montgomery(&Limbs::ONE);
    if desc.from_montgomery(&one) != Limbs::ONE
        || desc.from_montgomery(&desc.mul(&one, &one)) != Limbs::ONE
    {
        return Err(SelfTestError::MontgomeryRoundTrip);
    }

    let decode = |bytes: &[u8], op, index| {
        MontyFieldElement::<P, LIMBS>::from_slice(bytes)
            .map_err(|_| SelfTestError::Decode { op, index })
    };

    let check = |ok: bool, op, index| {
        if ok {
            Ok(())
        } else {
            Err(SelfTestError::KnownAnswer { op, index })
        }
    };

    for (index, (a, b, expected)) in vectors.mul.iter().enumerate() {
        let op = Operation::Multiply;
        let (a, b) = (decode(a, op, index)?, decode(b, op, index)?);
        let expected = decode(expected, op, index)?;
        check(a * b == expected, op, index)?;
        check(a.square() == a * a, Operation::Square, index)?;
    }

    for (index, (a, b, expected)) in vectors.add.iter().enumerate() {
        let op = Operation::Add;
        let (a, b) = (decode(a, op, index)?, decode(b, op, index)?);
        let expected = decode(expected, op, index)?;
        check(a + b == expected, op, index)?;
    }

    for (index, (a, b, expected)) in vectors.sub.iter().enumerate() {
        let op = Operation::Subtract;
        let (a, b) = (decode(a, op, index)?, decode(b, op, index)?);
        let expected = decode(expected, op, index)?;
        check(a - b == expected, op, index)?;
    }

    for (index, (a, expected)) in vectors.invert.iter().enumerate() {
        let op = Operation::Invert;
        let (a, expected) = (decode(a, op, index)?, decode(expected, op, index)?);
        let inverse: Option<_> = a.invert().into();
        check(inverse == Some(expected), op, index)?;
    }

    for (index, (a, expected)) in vectors.sqrt.iter().enumerate() {
        let op = Operation::Sqrt;
        let (a, expected) = (decode(a, op, index)?, decode(expected, op, index)?);
        let root: Option<_> = a.sqrt().into();
        check(root == Some(expected), op, index)?;
    }

    for (index, bytes) in vectors.non_residues.iter().enumerate() {
        let a = decode(bytes, Operation::Sqrt, index)?;
        if bool::from(a.sqrt().is_some()) {
            return Err(SelfTestError::NonResidueAccepted { index });
        }
    }

    Ok(())
}

#[cfg(all(test, feature = "nist256"))]
mod tests {
    use super::{KnownAnswers, Operation, SelfTestError, self_test};
    use crate::{nist256::Nist256Params28, test_vectors::nist256::KNOWN_ANSWERS};

    fn run(vectors: &KnownAnswers<32>) -> Result<(), SelfTestError> {
        self_test::<Nist256Params28, 10, 32>(vectors)
    }

    #[test]
    fn passes() {
        assert_eq!(run(&KNOWN_ANSWERS), Ok(()));
    }

    #[test]
    fn wrong_modulus() {
        let mut vectors = KNOWN_ANSWERS;
        vectors.modulus[31] ^= 2;
        assert_eq!(run(&vectors), Err(SelfTestError::Modulus));
    }

    #[test]
    fn wrong_product() {
        const MUL: &[([u8; 32], [u8; 32], [u8; 32])] = &[([0; 32], [0; 32], [0; 32]), {
            let mut one = [0; 32];
            one[31] = 1;
            (one, one, [0; 32])
        }];

        let vectors = KnownAnswers {
            mul: MUL,
            ..KNOWN_ANSWERS
        };
        assert_eq!(
            run(&vectors),
            Err(SelfTestError::KnownAnswer {
                op: Operation::Multiply,
                index: 1
            })
        );
    }

    #[test]
    fn out_of_range_vector() {
        const INVERT: &[([u8; 32], [u8; 32])] = &[([0xff; 32], [0; 32])];

        let vectors = KnownAnswers {
            invert: INVERT,
            ..KNOWN_ANSWERS
        };
        assert_eq!(
            run(&vectors),
            Err(SelfTestError::Decode {
                op: Operation::Invert,
                index: 0
            })
        );
    }

    #[test]
    fn residue_listed_as_non_residue() {
        const FOUR: &[[u8; 32]] = &[{
            let mut four = [0; 32];
            four[31] = 4;
            four
        }];

        let vectors = KnownAnswers {
            non_residues: FOUR,
            ..KNOWN_ANSWERS
        };
        assert_eq!(
            run(&vectors),
            Err(SelfTestError::NonResidueAccepted { index: 0 })
        );
    }
}
