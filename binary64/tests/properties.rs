use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use toolshed_binary64::{decode, encode, Binary64Error, MantissaExponent};

const SAMPLES: usize = 20_000;

/// Random normal finite values, spread evenly over all bit patterns
fn normal_values(seed: u64) -> impl Iterator<Item = f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    std::iter::repeat_with(move || f64::from_bits(rng.gen::<u64>()))
        .filter(|v| v.is_normal())
        .take(SAMPLES)
}

#[test]
fn decode_then_encode_is_bit_exact() {
    for v in normal_values(0x1eee_754) {
        let MantissaExponent { mantissa, exponent } = decode(v);
        let back = encode(mantissa, exponent).unwrap();
        assert_eq!(back.to_bits(), v.to_bits(), "{v:e} -> {mantissa} {exponent}");
    }
}

#[test]
fn negative_exponents_come_with_odd_mantissas() {
    for v in normal_values(7) {
        let me = decode(v);
        assert_ne!(me.mantissa, 0);
        if me.exponent < 0 {
            assert_eq!(me.mantissa & 1, 1, "{v:e} -> {me}");
        }
        if me.exponent > 0 {
            assert_eq!(me.mantissa.unsigned_abs() >> 52, 1, "{v:e} -> {me}");
        }
    }
}

#[test]
fn decode_is_symmetric_in_the_sign() {
    for v in normal_values(42) {
        let pos = decode(v.abs());
        let neg = decode(-v.abs());
        assert_eq!(neg, MantissaExponent::new(-pos.mantissa, pos.exponent));
    }
}

#[test]
fn encode_matches_float_arithmetic_for_exact_products() {
    let mut rng = StdRng::seed_from_u64(1075);
    for _ in 0..SAMPLES {
        // 53 bit mantissas are exact, so powi scaling gives the reference value
        let mantissa = rng.gen_range(-(1i64 << 53)..(1i64 << 53));
        let exponent = rng.gen_range(-1000..=900);
        let expected = mantissa as f64 * 2f64.powi(exponent);
        assert_eq!(encode(mantissa, exponent), Ok(expected), "{mantissa} {exponent}");
    }
}

#[test]
fn out_of_range_exponents_saturate() {
    let mut rng = StdRng::seed_from_u64(2047);
    for _ in 0..SAMPLES {
        let mantissa = rng.gen_range(1..i64::MAX);
        let high = rng.gen_range(1024..=i32::MAX);
        let low = rng.gen_range(i32::MIN..=-1138);

        assert_eq!(encode(mantissa, high), Ok(f64::INFINITY));
        assert_eq!(encode(-mantissa, high), Ok(f64::NEG_INFINITY));
        assert_eq!(encode(mantissa, low).map(f64::to_bits), Ok(0));
        assert_eq!(
            encode(-mantissa, low).map(f64::to_bits),
            Ok((-0.0f64).to_bits())
        );
    }
}

#[test]
fn only_the_minimum_mantissa_is_unrepresentable() {
    for exponent in [i32::MIN, -1, 0, 1, i32::MAX] {
        assert_eq!(
            encode(i64::MIN, exponent),
            Err(Binary64Error::UnrepresentableMagnitude(i64::MIN))
        );
        assert!(encode(i64::MIN + 1, exponent).is_ok());
    }
}
