//! P-384 base field test vectors.

use crate::self_test::{BinaryVector, KnownAnswers, UnaryVector};
use hex_literal::hex;

/// The modulus `p`.
pub const MODULUS: [u8; 48] = hex!(
    "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000ffffffff"
);

/// `p - 1`
pub const P_MINUS_1: [u8; 48] = hex!(
    "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000fffffffe"
);

const ONE: [u8; 48] = hex!(
    "000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000001"
);

/// `a * b = c`
pub const MUL_TEST_VECTORS: &[BinaryVector<48>] = &[
    (
        hex!(
            "c923752d5083da7a6726f84aa06005c595680290a0094d0eca0f56c580d47336a92e5eeef9a69640506f7b79b481e555"
        ),
        hex!(
            "61bea6fc1c65cfd83733a5be55ecf37db3cffe4a130bf2ebf6d01edf336750519197c51a6c06fce4c193892d437bc8f5"
        ),
        hex!(
            "e485b8e5ec21db40df32159e1186ebe811cc49e82617299fba44f3c8bd36676aa7713dd0753d89636de65fef25fd9791"
        ),
    ),
    (
        hex!(
            "6f3b86a4e5abfba11ee00b7cedd860096453b7a046e5d7cf5eb4d6ab0c4d4197ba9450d4da83412203112f3e19057a38"
        ),
        hex!(
            "e2dd2976fc40eaedd60d132acea88674d407f3d024995fcae35446b7f41b38fe21e429721703957b619280d2f87d922f"
        ),
        hex!(
            "da01c7b26d15e52137c1fc05337549ba9745ed8b837bdbdaa34a591eddd7eb18590ef965a9972a8b115d9b5e42cf16b5"
        ),
    ),
];

/// `a + b = c`
pub const ADD_TEST_VECTORS: &[BinaryVector<48>] = &[
    (
        hex!(
            "c923752d5083da7a6726f84aa06005c595680290a0094d0eca0f56c580d47336a92e5eeef9a69640506f7b79b481e555"
        ),
        hex!(
            "61bea6fc1c65cfd83733a5be55ecf37db3cffe4a130bf2ebf6d01edf336750519197c51a6c06fce4c193892d437bc8f5"
        ),
        hex!(
            "2ae21c296ce9aa529e5a9e08f64cf943493800dab3153ffac0df75a4b43bc3893ac6240a65ad9325120304a5f7fdae4b"
        ),
    ),
    (P_MINUS_1, ONE, [0; 48]),
];

/// `a - b = c`
pub const SUB_TEST_VECTORS: &[BinaryVector<48>] = &[
    (
        hex!(
            "c923752d5083da7a6726f84aa06005c595680290a0094d0eca0f56c580d47336a92e5eeef9a69640506f7b79b481e555"
        ),
        hex!(
            "61bea6fc1c65cfd83733a5be55ecf37db3cffe4a130bf2ebf6d01edf336750519197c51a6c06fce4c193892d437bc8f5"
        ),
        hex!(
            "6764ce31341e0aa22ff3528c4a731247e19804468cfd5a22d33f37e64d6d22e5179699d48d9f995b8edbf24c71061c60"
        ),
    ),
    ([0; 48], ONE, P_MINUS_1),
];

/// `a^-1 = b`
pub const INVERT_TEST_VECTORS: &[UnaryVector<48>] = &[
    (
        hex!(
            "c923752d5083da7a6726f84aa06005c595680290a0094d0eca0f56c580d47336a92e5eeef9a69640506f7b79b481e555"
        ),
        hex!(
            "7ea1563ca4ddb48b8a68325269e519d524675ce9abfc04058d5b91a52156d38c144d4396c088d2515716e5d53c75e320"
        ),
    ),
    (
        hex!(
            "000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000002"
        ),
        hex!(
            "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7fffffff800000000000000080000000"
        ),
    ),
    (P_MINUS_1, P_MINUS_1),
];

/// `a^((p + 1) / 4) = b` for quadratic residues `a`
pub const SQRT_TEST_VECTORS: &[UnaryVector<48>] = &[(
    hex!(
        "788a0b1f3098453d0aa3fbaa02f9c45157ea6dda877c0203b97c66a44fdf281e40ff9e47f8bdce22d2a3928992061d00"
    ),
    hex!(
        "90c4795b1a54045ee11ff48312279ff69bac485fb91a2830a14b2954f3b2be67456baf2a257cbeddfceed0c2e6fa85c7"
    ),
)];

/// Quadratic non-residues.
pub const NON_RESIDUES: &[[u8; 48]] = &[
    P_MINUS_1,
    hex!(
        "0eacc3d92245bc2afa7860a0b0f2dd9dd84325a95fec777e0e97cce45ccab6b445beac07d1a18d7ec2c67726ba8e7270"
    ),
];

/// All P-384 vectors, as consumed by [`self_test`](crate::self_test()).
pub const KNOWN_ANSWERS: KnownAnswers<48> = KnownAnswers {
    modulus: MODULUS,
    mul: MUL_TEST_VECTORS,
    add: ADD_TEST_VECTORS,
    sub: SUB_TEST_VECTORS,
    invert: INVERT_TEST_VECTORS,
    sqrt: SQRT_TEST_VECTORS,
    non_residues: NON_RESIDUES,
};
