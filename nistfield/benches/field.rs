//! NIST P-256 and P-384 field element benchmarks

use criterion::{criterion_group, criterion_main};
use nistfield::test_vectors;

mod nist256 {
    use super::test_vectors::nist256::MUL_TEST_VECTORS;
    use nistfield::nist256::{FieldElement, FieldElement28};

    montfield::bench_field!(
        bench_default,
        "nist256 field element operations",
        FieldElement::from_bytes(&MUL_TEST_VECTORS[0].0.into()).unwrap(),
        FieldElement::from_bytes(&MUL_TEST_VECTORS[0].1.into()).unwrap()
    );

    pub mod limbs28 {
        use super::{FieldElement28, MUL_TEST_VECTORS};

        montfield::bench_field!(
            bench_limbs28,
            "nist256 field element operations (28-bit limbs)",
            FieldElement28::from_bytes(&MUL_TEST_VECTORS[0].0.into()).unwrap(),
            FieldElement28::from_bytes(&MUL_TEST_VECTORS[0].1.into()).unwrap()
        );
    }
}

mod nist384 {
    use super::test_vectors::nist384::MUL_TEST_VECTORS;
    use nistfield::nist384::FieldElement;

    montfield::bench_field!(
        bench_default,
        "nist384 field element operations",
        FieldElement::from_bytes(&MUL_TEST_VECTORS[0].0.into()).unwrap(),
        FieldElement::from_bytes(&MUL_TEST_VECTORS[0].1.into()).unwrap()
    );
}

criterion_group!(
    benches,
    nist256::bench_default,
    nist256::limbs28::bench_limbs28,
    nist384::bench_default
);
criterion_main!(benches);
