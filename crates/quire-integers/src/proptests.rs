//! Property-based tests for rational arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::{gcd, lcm, Rational};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::new(n, d).unwrap())
    }

    fn non_zero_rational() -> impl Strategy<Value = Rational> {
        (non_zero_int(), non_zero_int()).prop_map(|(n, d)| Rational::new(n, d).unwrap())
    }

    proptest! {
        // gcd / lcm

        #[test]
        fn gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            let g = gcd(a, b);
            prop_assert_eq!(a % g, 0);
            prop_assert_eq!(b % g, 0);
        }

        #[test]
        fn gcd_sign_follows_second_argument(a in non_zero_int(), b in non_zero_int()) {
            prop_assert_eq!(gcd(a, b).signum(), b.signum());
        }

        #[test]
        fn lcm_is_common_multiple(a in non_zero_int(), b in non_zero_int()) {
            let m = lcm(a, b);
            prop_assert_eq!(m % a, 0);
            prop_assert_eq!(m % b, 0);
            prop_assert_eq!(m.abs() * gcd(a, b).abs(), (a * b).abs());
        }

        // Rational laws

        #[test]
        fn recip_round_trips(r in non_zero_rational()) {
            prop_assert_eq!(r.recip().unwrap().recip().unwrap(), r);
        }

        #[test]
        fn add_matches_cross_multiplication(a in rational(), b in rational()) {
            // a/b + c/d == (ad + cb) / bd
            let sum = a + b;
            let expected = Rational::new(
                a.numerator() * b.denominator() + b.numerator() * a.denominator(),
                a.denominator() * b.denominator(),
            )
            .unwrap();
            prop_assert_eq!(sum, expected);
        }

        #[test]
        fn sub_undoes_add(a in rational(), b in rational()) {
            prop_assert_eq!((a + b) - b, a);
        }

        #[test]
        fn simplified_is_idempotent(r in rational()) {
            let once = r.simplified();
            let twice = once.simplified();
            prop_assert_eq!(once.numerator(), twice.numerator());
            prop_assert_eq!(once.denominator(), twice.denominator());
            prop_assert_eq!(once, r);
        }

        #[test]
        fn simplified_has_positive_denominator(r in rational()) {
            prop_assert!(r.simplified().denominator() > 0);
        }

        #[test]
        fn scalar_forms_agree(r in rational(), k in small_int()) {
            prop_assert_eq!(r + k, r + Rational::from(k));
            prop_assert_eq!(r - k, r - Rational::from(k));
            prop_assert_eq!(r * k, r * Rational::from(k));
        }

        #[test]
        fn division_inverts_multiplication(a in rational(), b in non_zero_rational()) {
            prop_assert_eq!((a * b).checked_div(b).unwrap(), a);
        }

        #[test]
        fn display_round_trips(r in rational()) {
            let parsed: Rational = r.to_string().parse().unwrap();
            prop_assert_eq!(parsed, r);
        }

        #[test]
        fn ordering_agrees_with_floats(a in rational(), b in rational()) {
            if a != b {
                prop_assert_eq!(a < b, a.to_f64() < b.to_f64());
            }
        }

        #[test]
        fn additive_inverse(r in rational()) {
            prop_assert!((r + -r).is_zero());
        }
    }
}
