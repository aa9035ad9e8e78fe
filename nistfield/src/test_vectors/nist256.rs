//! P-256 base field test vectors.

use crate::self_test::{BinaryVector, KnownAnswers, UnaryVector};
use hex_literal::hex;

/// The modulus `p`.
pub const MODULUS: [u8; 32] =
    hex!("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff");

/// `p - 1`
pub const P_MINUS_1: [u8; 32] =
    hex!("ffffffff00000001000000000000000000000000fffffffffffffffffffffffe");

/// `a * b = c`
pub const MUL_TEST_VECTORS: &[BinaryVector<32>] = &[
    (
        hex!("1ccbe91c075fc7f4f033bfa248db8fccd3565de94bbfb12f3c59ff46c271bf83"),
        hex!("ce4014c68811f9a21a1fdb2c0e6113e06db7ca93b7404e78dc7ccd5ca89a4ca9"),
        hex!("796f8531312e83dcfca78444ff7d3d287d7c688936a379f7de02909ed416c2d7"),
    ),
    (
        hex!("7b48b9a9ceae829026479f2fc4a7ce3aad7140d92cc291348bae6b90ba3dede2"),
        hex!("5ac1100686b7f3a851c972bc5ba1164fa21107d454aba6bd82073a29974e4f8a"),
        hex!("ffd3eefd8b02234ff625ce6df10d259726a04c1becfdcdc0c400c6d36962e028"),
    ),
    (
        hex!("e4ec67bd4f7efe09cf6de88e6fa53cf68b9af76aef24ae2f26ff3d69cbf44650"),
        hex!("7282c160d72e90b4b30d774d0f585d4e3c8b3e5e453454306eb3db347161a1ad"),
        hex!("a891b670a9bcd0760575b335b9aaaf085d5a1f5ff029287abff7e0fc05696879"),
    ),
];

/// `a + b = c`
pub const ADD_TEST_VECTORS: &[BinaryVector<32>] = &[
    (
        hex!("1ccbe91c075fc7f4f033bfa248db8fccd3565de94bbfb12f3c59ff46c271bf83"),
        hex!("ce4014c68811f9a21a1fdb2c0e6113e06db7ca93b7404e78dc7ccd5ca89a4ca9"),
        hex!("eb0bfde28f71c1970a539ace573ca3ad410e287d02ffffa818d6cca36b0c0c2c"),
    ),
    (
        hex!("7b48b9a9ceae829026479f2fc4a7ce3aad7140d92cc291348bae6b90ba3dede2"),
        hex!("5ac1100686b7f3a851c972bc5ba1164fa21107d454aba6bd82073a29974e4f8a"),
        hex!("d609c9b055667638781111ec2048e48a4f8248ad816e37f20db5a5ba518c3d6c"),
    ),
    (
        P_MINUS_1,
        hex!("0000000000000000000000000000000000000000000000000000000000000001"),
        [0; 32],
    ),
];

/// `a - b = c`
pub const SUB_TEST_VECTORS: &[BinaryVector<32>] = &[
    (
        hex!("1ccbe91c075fc7f4f033bfa248db8fccd3565de94bbfb12f3c59ff46c271bf83"),
        hex!("ce4014c68811f9a21a1fdb2c0e6113e06db7ca93b7404e78dc7ccd5ca89a4ca9"),
        hex!("4e8bd4547f4dce53d613e4763a7a7bec659e9356947f62b65fdd31ea19d772d9"),
    ),
    (
        hex!("5ac1100686b7f3a851c972bc5ba1164fa21107d454aba6bd82073a29974e4f8a"),
        hex!("7b48b9a9ceae829026479f2fc4a7ce3aad7140d92cc291348bae6b90ba3dede2"),
        hex!("df78565bb80971192b81d38c96f94814f49fc6fc27e91588f658ce98dd1061a7"),
    ),
    (
        [0; 32],
        hex!("0000000000000000000000000000000000000000000000000000000000000001"),
        P_MINUS_1,
    ),
];

/// `a^-1 = b`
pub const INVERT_TEST_VECTORS: &[UnaryVector<32>] = &[
    (
        hex!("1ccbe91c075fc7f4f033bfa248db8fccd3565de94bbfb12f3c59ff46c271bf83"),
        hex!("b05b0e2b94b2d6e2f4ac1a3e6dabffa349eac7a871936a6b0f1159eac68cb0ce"),
    ),
    (
        hex!("ce4014c68811f9a21a1fdb2c0e6113e06db7ca93b7404e78dc7ccd5ca89a4ca9"),
        hex!("28ddbd3907287a732f5e8a7037a33525f679e793102a4bbe077a175589beee80"),
    ),
    (
        hex!("0000000000000000000000000000000000000000000000000000000000000002"),
        hex!("7fffffff80000000800000000000000000000000800000000000000000000000"),
    ),
    (P_MINUS_1, P_MINUS_1),
];

/// `a^((p + 1) / 4) = b` for quadratic residues `a`
pub const SQRT_TEST_VECTORS: &[UnaryVector<32>] = &[
    (
        hex!("da8f0e971aba0fdbd3b387190f14ad5c2003577a59799520ce0107579da86696"),
        hex!("84b7465531517d70d9b860d03b5831c5528ebf27d33d6ecb7451946f45c2121d"),
    ),
    (
        hex!("8e8f38aedd9c2f0a88091594f776f61ba2dc2d2af72a9d889efd41dda9ea0d02"),
        hex!("a53eeff879480c58ae368d43a45ee9b05deef82cab5459427df8c5d668b1b075"),
    ),
    (
        hex!("0000000000000000000000000000000000000000000000000000000000000010"),
        hex!("0000000000000000000000000000000000000000000000000000000000000004"),
    ),
];

/// Quadratic non-residues.
pub const NON_RESIDUES: &[[u8; 32]] = &[
    P_MINUS_1,
    hex!("e4ec67bd4f7efe09cf6de88e6fa53cf68b9af76aef24ae2f26ff3d69cbf44650"),
    hex!("7282c160d72e90b4b30d774d0f585d4e3c8b3e5e453454306eb3db347161a1ad"),
    hex!("0000000000000000000000000000000000000000000000000000000000000003"),
];

/// All P-256 vectors, as consumed by [`self_test`](crate::self_test()).
pub const KNOWN_ANSWERS: KnownAnswers<32> = KnownAnswers {
    modulus: MODULUS,
    mul: MUL_TEST_VECTORS,
    add: ADD_TEST_VECTORS,
    sub: SUB_TEST_VECTORS,
    invert: INVERT_TEST_VECTORS,
    sqrt: SQRT_TEST_VECTORS,
    non_residues: NON_RESIDUES,
};
