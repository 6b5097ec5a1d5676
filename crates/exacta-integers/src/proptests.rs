//! Property-based tests for the arithmetic engines.
//!
//! These mirror the engine's testable properties against native `i64`
//! arithmetic on a bounded range, where the two must agree exactly.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use proptest::prelude::*;

use crate::{factorial, gcd, gcdext, lcm, BigInt, BigRational, NumError};

// Strategy for generating small integers
fn small_int() -> impl Strategy<Value = i64> {
    -1000i64..1000i64
}

// Strategy for generating non-zero integers
fn non_zero_int() -> impl Strategy<Value = i64> {
    prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
}

/// Native floor division, for comparison against the engine.
fn floor_div(a: i64, b: i64) -> i64 {
    let q = a / b;
    if a % b != 0 && (a < 0) != (b < 0) {
        q - 1
    } else {
        q
    }
}

/// Native floor modulo: zero or the divisor's sign.
fn floor_mod(a: i64, b: i64) -> i64 {
    a - b * floor_div(a, b)
}

fn hash_of(value: &impl Hash) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    // Equivalence with native arithmetic

    #[test]
    fn int_ring_ops_match_native(x in small_int(), y in small_int()) {
        let (mx, my) = (BigInt::new(x), BigInt::new(y));
        prop_assert_eq!(&mx + &my, BigInt::new(x + y));
        prop_assert_eq!(&mx - &my, BigInt::new(x - y));
        prop_assert_eq!(&mx * &my, BigInt::new(x * y));
    }

    #[test]
    fn int_floor_div_mod_match_native(x in small_int(), y in non_zero_int()) {
        let (mx, my) = (BigInt::new(x), BigInt::new(y));
        prop_assert_eq!(&mx / &my, BigInt::new(floor_div(x, y)));
        prop_assert_eq!(&mx % &my, BigInt::new(floor_mod(x, y)));
        // a == q*b + r always holds
        let (q, r) = mx.checked_div_rem_floor(&my).unwrap();
        prop_assert_eq!(q * &my + r, mx);
    }

    #[test]
    fn int_bitwise_match_native(x in small_int(), y in small_int()) {
        let (mx, my) = (BigInt::new(x), BigInt::new(y));
        prop_assert_eq!(&mx & &my, BigInt::new(x & y));
        prop_assert_eq!(&mx | &my, BigInt::new(x | y));
        prop_assert_eq!(&mx ^ &my, BigInt::new(x ^ y));
        prop_assert_eq!(!mx, BigInt::new(!x));
    }

    #[test]
    fn int_mixed_operands_match_native(x in small_int(), y in small_int()) {
        let mx = BigInt::new(x);
        prop_assert_eq!(&mx + y, BigInt::new(x + y));
        prop_assert_eq!(y + &mx, BigInt::new(x + y));
        prop_assert_eq!(&mx - y, BigInt::new(x - y));
        prop_assert_eq!(y - &mx, BigInt::new(y - x));
        prop_assert_eq!(&mx * y, BigInt::new(x * y));
    }

    #[test]
    fn int_comparisons_match_native(x in small_int(), y in small_int()) {
        let (mx, my) = (BigInt::new(x), BigInt::new(y));
        prop_assert_eq!(mx == my, x == y);
        prop_assert_eq!(mx < my, x < y);
        prop_assert_eq!(mx > my, x > y);
        prop_assert_eq!(mx.cmp(&my), x.cmp(&y));
        prop_assert_eq!(mx == y, x == y);
    }

    // Round-trips and hashing

    #[test]
    fn int_string_roundtrip(x in any::<i64>()) {
        let mx = BigInt::new(x);
        prop_assert_eq!(mx.to_string(), x.to_string());
        prop_assert_eq!(x.to_string().parse::<BigInt>().unwrap(), mx.clone());
        prop_assert_eq!(mx.to_i64(), Some(x));
    }

    #[test]
    fn int_wide_string_roundtrip(x in any::<i128>()) {
        // Wider than a limb: parse and re-emit through the limb buffer.
        let parsed: BigInt = x.to_string().parse().unwrap();
        prop_assert_eq!(parsed.to_string(), x.to_string());
    }

    #[test]
    fn int_hash_consistent_with_native(x in any::<i64>()) {
        prop_assert_eq!(hash_of(&BigInt::new(x)), hash_of(&x));
    }

    // Sign and negation laws

    #[test]
    fn int_negation_laws(x in small_int()) {
        let mx = BigInt::new(x);
        prop_assert_eq!(mx.clone(), -BigInt::new(-x));
        prop_assert_eq!(mx.abs(), BigInt::new(x.abs()));
        prop_assert_eq!(mx.pos(), mx.clone());
        prop_assert_eq!(&mx + &(-(&mx)), BigInt::zero());
    }

    // pow

    #[test]
    fn int_pow_matches_native(x in -9i64..9i64, e in 0i64..12i64) {
        let expected = i128::from(x).pow(u32::try_from(e).unwrap());
        let got = BigInt::new(x).checked_pow(&BigInt::new(e)).unwrap();
        prop_assert_eq!(got, expected.to_string().parse::<BigInt>().unwrap());
    }

    #[test]
    fn int_pow_mod_matches_pow(x in small_int(), e in 0i64..24i64, m in non_zero_int()) {
        let full = BigInt::new(x).checked_pow(&BigInt::new(e)).unwrap();
        let reduced = full.checked_rem_floor(&BigInt::new(m.abs())).unwrap();
        let got = BigInt::new(x)
            .checked_pow_mod(&BigInt::new(e), &BigInt::new(m))
            .unwrap();
        prop_assert_eq!(got, reduced);
    }

    // gcd family

    #[test]
    fn gcd_divides_both(x in non_zero_int(), y in non_zero_int()) {
        let (mx, my) = (BigInt::new(x), BigInt::new(y));
        let g = gcd(&mx, &my);
        prop_assert!(!g.is_negative());
        prop_assert!((&mx % &g).is_zero());
        prop_assert!((&my % &g).is_zero());
    }

    #[test]
    fn gcd_lcm_product(x in non_zero_int(), y in non_zero_int()) {
        let (mx, my) = (BigInt::new(x), BigInt::new(y));
        let product = gcd(&mx, &my) * lcm(&mx, &my);
        prop_assert_eq!(product, (mx * my).abs());
    }

    #[test]
    fn gcdext_identity(x in small_int(), y in small_int()) {
        let (mx, my) = (BigInt::new(x), BigInt::new(y));
        let (g, s, t) = gcdext(&mx, &my);
        prop_assert_eq!(&g, &gcd(&mx, &my));
        prop_assert_eq!(s * mx + t * my, g);
    }

    // Rational properties

    #[test]
    fn rational_always_reduced(p in non_zero_int(), q in non_zero_int()) {
        let r = BigRational::from_ratio(p, q).unwrap();
        prop_assert!(r.denominator().is_positive());
        prop_assert_eq!(gcd(r.numerator(), r.denominator()), BigInt::one());
    }

    #[test]
    fn rational_div_mul_roundtrip(
        pa in small_int(),
        qa in non_zero_int(),
        pb in non_zero_int(),
        qb in non_zero_int(),
    ) {
        let a = BigRational::from_ratio(pa, qa).unwrap();
        let b = BigRational::from_ratio(pb, qb).unwrap();
        prop_assert_eq!(a.checked_div(&b).unwrap() * &b, a);
    }

    #[test]
    fn rational_add_commutative(
        pa in small_int(),
        qa in non_zero_int(),
        pb in small_int(),
        qb in non_zero_int(),
    ) {
        let a = BigRational::from_ratio(pa, qa).unwrap();
        let b = BigRational::from_ratio(pb, qb).unwrap();
        prop_assert_eq!(&a + &b, &b + &a);
    }

    #[test]
    fn rational_distributive(
        pa in small_int(),
        qa in non_zero_int(),
        pb in small_int(),
        qb in non_zero_int(),
        pc in small_int(),
        qc in non_zero_int(),
    ) {
        let a = BigRational::from_ratio(pa, qa).unwrap();
        let b = BigRational::from_ratio(pb, qb).unwrap();
        let c = BigRational::from_ratio(pc, qc).unwrap();
        prop_assert_eq!(&a * &(&b + &c), &a * &b + &a * &c);
    }

    #[test]
    fn rational_ordering_matches_floats_on_exact_values(
        pa in -100i64..100i64,
        qa in 1i64..100i64,
        pb in -100i64..100i64,
        qb in 1i64..100i64,
    ) {
        // Denominators this small keep distinct quotients far above f64
        // rounding error, so the two orders must agree.
        let a = BigRational::from_ratio(pa, qa).unwrap();
        let b = BigRational::from_ratio(pb, qb).unwrap();
        #[allow(clippy::cast_precision_loss)]
        let native = (pa as f64 / qa as f64)
            .partial_cmp(&(pb as f64 / qb as f64))
            .unwrap();
        prop_assert_eq!(a.cmp(&b), native);
    }

    #[test]
    fn rational_to_integer_floors(p in small_int(), q in non_zero_int()) {
        let r = BigRational::from_ratio(p, q).unwrap();
        prop_assert_eq!(r.to_integer(), BigInt::new(floor_div(p, q)));
    }

    #[test]
    fn int_equals_integral_rational(x in small_int()) {
        let mx = BigInt::new(x);
        let rx = BigRational::from(x);
        prop_assert_eq!(mx.clone(), rx.clone());
        prop_assert_eq!(rx, mx);
    }
}

#[test]
fn division_by_zero_is_an_error() {
    assert_eq!(
        BigInt::new(1).checked_div_floor(&BigInt::zero()),
        Err(NumError::DivisionByZero)
    );
    let one = BigRational::from(1);
    let zero = BigRational::from(0);
    assert_eq!(one.checked_div(&zero), Err(NumError::DivisionByZero));
}

#[test]
fn worked_examples() {
    assert_eq!(BigInt::new(-7) % BigInt::new(3), BigInt::new(2));
    assert_eq!(BigInt::new(-7) / BigInt::new(3), BigInt::new(-3));
    assert_eq!(gcd(&BigInt::new(12), &BigInt::new(18)), BigInt::new(6));
    assert_eq!(lcm(&BigInt::new(4), &BigInt::new(6)), BigInt::new(12));
    assert_eq!(factorial(&BigInt::new(5)), Ok(BigInt::new(120)));
    let (a, b) = (
        BigRational::from_ratio(1, 2).unwrap(),
        BigRational::from_ratio(1, 3).unwrap(),
    );
    assert_eq!(a + b, BigRational::from_ratio(5, 6).unwrap());
}
