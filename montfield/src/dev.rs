/// Write a series of `criterion`-based benchmarks for a field implementation.
#[macro_export]
macro_rules! bench_field {
    { $name:ident, $desc:expr, $fe_a:expr, $fe_b:expr } => {
        fn bench_add<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            let y = core::hint::black_box($fe_b);
            group.bench_function("add", |b| b.iter(|| x + y));
        }

        fn bench_sub<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            let y = core::hint::black_box($fe_b);
            group.bench_function("sub", |b| b.iter(|| x - y));
        }

        fn bench_mul<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            let y = core::hint::black_box($fe_b);
            group.bench_function("mul", |b| b.iter(|| x * y));
        }

        fn bench_neg<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            group.bench_function("neg", |b| b.iter(|| -x));
        }

        fn bench_invert<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            group.bench_function("invert", |b| b.iter(|| x.invert()));
        }

        fn bench_square<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            group.bench_function("square", |b| b.iter(|| x.square()));
        }

        fn bench_sqrt<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            group.bench_function("sqrt", |b| b.iter(|| x.sqrt()));
        }

        fn bench_to_bytes<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let x = core::hint::black_box($fe_a);
            group.bench_function("to_bytes", |b| b.iter(|| x.to_bytes()));
        }

        pub fn $name(c: &mut ::criterion::Criterion) {
            let mut group = c.benchmark_group($desc);
            bench_add(&mut group);
            bench_sub(&mut group);
            bench_mul(&mut group);
            bench_neg(&mut group);
            bench_invert(&mut group);
            bench_square(&mut group);
            bench_sqrt(&mut group);
            bench_to_bytes(&mut group);
            group.finish();
        }
    };
}

/// Implement all tests for a [`MontyFieldElement`](crate::MontyFieldElement) type.
#[macro_export]
macro_rules! test_primefield {
    ($fe:tt) => {
        $crate::test_primefield_constants!($fe);
        $crate::test_field_identity!($fe);
        $crate::test_field_invert!($fe);
        $crate::test_field_sqrt!($fe);
    };
}

/// Implement tests for constants defined by the `PrimeField` trait.
#[macro_export]
macro_rules! test_primefield_constants {
    ($fe:tt) => {
        use $crate::ff::PrimeField as _;

        #[test]
        fn delta_constant() {
            // DELTA^{t} mod m == 1
            assert_eq!($fe::DELTA.pow_vartime(&$fe::DESCRIPTOR.t()), $fe::ONE);
        }

        #[test]
        fn multiplicative_generator_constant() {
            // Euler's criterion: g^((p - 1) / 2) == -1 for a quadratic non-residue
            let desc = $fe::DESCRIPTOR;
            let exp = desc
                .modulus()
                .wrapping_sub_word(1, desc.limb_bits())
                .shr_vartime(1, desc.limb_bits());

            assert_eq!(
                $fe::MULTIPLICATIVE_GENERATOR.pow_vartime(&exp),
                -$fe::ONE
            );
        }

        #[test]
        fn root_of_unity_constant() {
            // ROOT_OF_UNITY^{2^s} mod m == 1
            assert_eq!($fe::ROOT_OF_UNITY.sqn_vartime($fe::S as usize), $fe::ONE);

            // MULTIPLICATIVE_GENERATOR^{t} mod m == ROOT_OF_UNITY
            assert_eq!(
                $fe::MULTIPLICATIVE_GENERATOR.pow_vartime(&$fe::DESCRIPTOR.t()),
                $fe::ROOT_OF_UNITY
            )
        }

        #[test]
        fn root_of_unity_inv_constant() {
            assert_eq!($fe::ROOT_OF_UNITY * $fe::ROOT_OF_UNITY_INV, $fe::ONE);
        }

        #[test]
        fn two_inv_constant() {
            assert_eq!($fe::from(2u32) * $fe::TWO_INV, $fe::ONE);
        }
    };
}

/// Implement field element identity tests.
#[macro_export]
macro_rules! test_field_identity {
    ($fe:tt) => {
        #[test]
        fn zero_is_additive_identity() {
            let zero = $fe::ZERO;
            let one = $fe::ONE;
            assert_eq!(zero.add(&zero), zero);
            assert_eq!(one.add(&zero), one);
        }

        #[test]
        fn one_is_multiplicative_identity() {
            let one = $fe::ONE;
            assert_eq!(one.multiply(&one), one);
        }

        #[test]
        fn minus_one_boundary() {
            let minus_one = -$fe::ONE;
            assert_eq!(minus_one + $fe::ONE, $fe::ZERO);
            assert_eq!(minus_one * minus_one, $fe::ONE);
            assert_eq!(minus_one.square(), $fe::ONE);
            assert_eq!($fe::ZERO - $fe::ONE, minus_one);
            assert_eq!(-$fe::ZERO, $fe::ZERO);
        }
    };
}

/// Implement field element inversion tests.
#[macro_export]
macro_rules! test_field_invert {
    ($fe:tt) => {
        #[test]
        fn invert() {
            let one = $fe::ONE;
            assert_eq!(one.invert().unwrap(), one);

            let three = one + &one + &one;
            let inv_three = three.invert().unwrap();
            assert_eq!(three * &inv_three, one);

            let minus_three = -three;
            let inv_minus_three = minus_three.invert().unwrap();
            assert_eq!(inv_minus_three, -inv_three);
            assert_eq!(three * &inv_minus_three, -one);
        }

        #[test]
        fn invert_zero() {
            assert!(bool::from($fe::ZERO.invert().is_none()));
            assert_eq!($fe::ZERO.invert_or_zero(), $fe::ZERO);
        }

        #[test]
        fn const_invert_matches_invert() {
            let seven = $fe::from(7u32);
            assert_eq!(seven.const_invert(), seven.invert().unwrap());
        }
    };
}

/// Implement field element square root tests.
#[macro_export]
macro_rules! test_field_sqrt {
    ($fe:tt) => {
        #[test]
        fn sqrt() {
            for &n in &[1u64, 4, 9, 16, 25, 36, 49, 64] {
                let fe = $fe::from(n);
                let sqrt = $crate::ff::Field::sqrt(&fe).unwrap();
                assert_eq!(sqrt.square(), fe);
            }
        }

        #[test]
        fn sqrt_minus_one() {
            // -1 is a non-residue whenever p ≡ 3 (mod 4)
            assert!(bool::from((-$fe::ONE).sqrt().is_none()));
        }
    };
}

/// Implement tests checking a field's modulus descriptor.
#[macro_export]
macro_rules! test_field_descriptor {
    ($fe:tt) => {
        #[test]
        fn descriptor_modulus_matches_hex() {
            let desc = $fe::DESCRIPTOR;
            let hex = <$fe as $crate::ff::PrimeField>::MODULUS;
            assert_eq!(
                *desc.modulus(),
                $crate::Limbs::from_be_hex(hex, desc.limb_bits())
            );
        }

        #[test]
        fn descriptor_one_round_trips() {
            let desc = $fe::DESCRIPTOR;
            let one = desc.to_montgomery(&$crate::Limbs::ONE);
            assert_eq!(one, *$fe::ONE.as_montgomery());
            assert_eq!(desc.from_montgomery(&desc.mul(&one, &one)), $crate::Limbs::ONE);
        }

        #[test]
        fn descriptor_r2_is_r_squared() {
            // R^2 * R^2 / R == R^3, and R^3 / R / R == R == to_montgomery(1)
            let desc = $fe::DESCRIPTOR;
            let r3 = desc.mul(desc.r2(), desc.r2());
            let r = desc.from_montgomery(&desc.from_montgomery(&r3));
            assert_eq!(r, desc.one());
        }

        #[test]
        fn descriptor_mconst() {
            let desc = $fe::DESCRIPTOR;
            let mask = (1 << desc.limb_bits()) - 1;
            let p0 = desc.modulus().as_words()[0];
            assert_eq!(desc.mconst().wrapping_mul(p0) & mask, mask);
        }

        #[test]
        fn repr_width() {
            let repr = $fe::ONE.to_bytes();
            assert_eq!(
                ::core::convert::AsRef::<[u8]>::as_ref(&repr).len(),
                $fe::DESCRIPTOR.byte_len()
            );
        }
    };
}
