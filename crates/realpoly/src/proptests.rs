//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::dense::DensePoly;
    use crate::precision::Precision;

    // Small integer-valued coefficients keep f64 arithmetic exact
    fn small_coeff() -> impl Strategy<Value = f64> {
        (-100i32..100i32).prop_map(f64::from)
    }

    // Strategy for generating small polynomials (degree 0-5)
    fn small_poly() -> impl Strategy<Value = DensePoly> {
        proptest::collection::vec(small_coeff(), 1..=6)
            .prop_map(|coeffs| DensePoly::new(&coeffs).unwrap())
    }

    // Strategy for generating non-zero polynomials
    fn nonzero_poly() -> impl Strategy<Value = DensePoly> {
        small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    proptest! {
        // Ring axioms

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_add_identity(a in small_poly()) {
            let zero = DensePoly::zero();
            prop_assert_eq!(a.add(&zero), a.clone());
            prop_assert_eq!(zero.add(&a), a);
        }

        #[test]
        fn poly_mul_identity(a in small_poly()) {
            let one = DensePoly::one();
            prop_assert_eq!(a.mul(&one), a.clone());
            prop_assert_eq!(one.mul(&a), a);
        }

        #[test]
        fn poly_mul_zero(a in small_poly()) {
            prop_assert!(a.mul(&DensePoly::zero()).is_zero());
            prop_assert!(a.scale(0.0).is_zero());
        }

        #[test]
        fn poly_additive_inverse(a in small_poly()) {
            prop_assert!(a.add(&a.neg()).is_zero());
            prop_assert!(a.sub(&a).is_zero());
        }

        #[test]
        fn poly_sub_is_add_neg(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.sub(&b), a.add(&b.neg()));
        }

        // Degree properties

        #[test]
        fn poly_mul_degree(a in nonzero_poly(), b in nonzero_poly()) {
            // Integer leading coefficients never cancel in a product
            prop_assert_eq!(a.mul(&b).degree(), a.degree() + b.degree());
        }

        #[test]
        fn poly_add_degree_bound(a in small_poly(), b in small_poly()) {
            let sum = a.add(&b);
            prop_assert!(sum.degree() <= a.degree().max(b.degree()));
        }

        // Canonical form

        #[test]
        fn poly_leading_coeff_not_negligible(a in nonzero_poly()) {
            prop_assert!(!Precision::DEFAULT.is_negligible(a.leading_coeff()));
        }

        #[test]
        fn poly_at_matches_input(coeffs in proptest::collection::vec(1i32..50i32, 1..=6)) {
            let coeffs: Vec<f64> = coeffs.into_iter().map(f64::from).collect();
            let p = DensePoly::new(&coeffs).unwrap();
            for (i, c) in coeffs.iter().rev().enumerate() {
                prop_assert_eq!(p.at(i), Ok(*c));
            }
            prop_assert!(p.at(p.degree() + 1).is_err());
        }

        #[test]
        fn poly_clone_equal(a in small_poly()) {
            prop_assert_eq!(a.clone(), a);
        }

        #[test]
        fn poly_display_has_no_trailing_separator(a in small_poly()) {
            let s = a.to_string();
            prop_assert!(!s.ends_with(" + "));
            prop_assert_eq!(s.matches(" + ").count(), a.degree());
        }

        // Evaluation

        #[test]
        fn poly_eval_add(a in small_poly(), b in small_poly(), x in -5i32..5i32) {
            let x = f64::from(x);
            prop_assert_eq!(a.add(&b).eval(x), a.eval(x) + b.eval(x));
        }

        #[test]
        fn poly_eval_mul(a in small_poly(), b in small_poly(), x in -5i32..5i32) {
            let x = f64::from(x);
            prop_assert_eq!(a.mul(&b).eval(x), a.eval(x) * b.eval(x));
        }
    }
}
