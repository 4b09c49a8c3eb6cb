//! Property Tests for the Course Stdlib
//!
//! Cross-checks between redundant algorithms and definitional properties
//! verified by direct computation.

use introcs_stdlib::*;
use proptest::prelude::*;

fn digits_strategy(len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(0u8..10, len)
        .prop_map(|digits| digits.into_iter().map(|d| char::from(b'0' + d)).collect())
}

fn gcd_operands_strategy() -> impl Strategy<Value = (i64, i64)> {
    (1i64..5_000).prop_flat_map(|a| (Just(a), 1i64..=a))
}

proptest! {
    #[test]
    fn cpf_algorithms_agree(cpf in digits_strategy(11)) {
        prop_assert_eq!(validate_cpf(&cpf).unwrap(), validate_cpf_cumulative(&cpf).unwrap());
    }

    #[test]
    fn cpf_completed_prefix_is_valid(prefix in digits_strategy(9)) {
        let [first, second] = cpf_check_digits(&prefix).unwrap();
        let cpf = format!("{}{}{}", prefix, first, second);
        prop_assert!(validate_cpf(&cpf).unwrap());
        prop_assert!(validate_cpf_cumulative(&cpf).unwrap());
    }

    #[test]
    fn cpf_wrong_length_is_an_error(cpf in "[0-9]{0,10}|[0-9]{12,16}") {
        prop_assert!(validate_cpf(&cpf).is_err());
        prop_assert!(validate_cpf_cumulative(&cpf).is_err());
    }

    #[test]
    fn gcd_methods_agree((a, b) in gcd_operands_strategy()) {
        let euclidean = gcd_euclidean(a, b).unwrap();
        prop_assert_eq!(euclidean, gcd_subtractive(a, b).unwrap());
        prop_assert_eq!(a % euclidean, 0);
        prop_assert_eq!(b % euclidean, 0);
    }

    #[test]
    fn remainder_matches_hardware_modulo(n in 1i64..100_000, d in 1i64..1_000) {
        prop_assert_eq!(integer_remainder(n, d).unwrap(), n % d);
    }

    #[test]
    fn product_and_power_match_native(a in 0i64..3_000, b in 0i64..3_000, e in 0i64..4) {
        prop_assert_eq!(integer_product(a, b).unwrap(), a * b);
        prop_assert_eq!(integer_power(a, e).unwrap(), a.pow(e as u32));
    }

    #[test]
    fn perfect_square_matches_integer_root(n in 1i64..1_000_000) {
        let root = (n as f64).sqrt() as i64;
        let expected = (root - 1..=root + 1).any(|r| r * r == n);
        prop_assert_eq!(is_perfect_square(n).unwrap(), expected);
    }

    #[test]
    fn pure_functions_are_repeatable(n in 2i64..10_000) {
        prop_assert_eq!(is_prime(n).unwrap(), is_prime(n).unwrap());
        prop_assert_eq!(has_property_3025(n % 10_000).unwrap(), has_property_3025(n % 10_000).unwrap());
        prop_assert_eq!(square_root(n as f64, 40).unwrap(), square_root(n as f64, 40).unwrap());
    }
}

#[test]
fn property_3025_matches_definition_everywhere() {
    let mut holders = Vec::new();
    for n in 0..=9999 {
        let expected = n == ((n / 100) + (n % 100)) * ((n / 100) + (n % 100));
        assert_eq!(has_property_3025(n).unwrap(), expected, "n = {}", n);
        if expected {
            holders.push(n);
        }
    }
    assert!(holders.contains(&3025));
    assert!(holders.contains(&0));
    assert!(holders.contains(&1));
    assert!(holders.contains(&9801));
    assert!(!holders.contains(&81));
}

#[test]
fn property_153_matches_definition_everywhere() {
    let mut holders = Vec::new();
    for n in 100..=999i64 {
        let cubes: i64 = n
            .to_string()
            .chars()
            .map(|c| i64::from(c.to_digit(10).unwrap()).pow(3))
            .sum();
        assert_eq!(has_property_153(n).unwrap(), cubes == n, "n = {}", n);
        if cubes == n {
            holders.push(n);
        }
    }
    assert_eq!(holders, vec![153, 370, 371, 407]);
}

#[test]
fn primes_agree_with_sieve() {
    let marks = sieve_of_eratosthenes(&[0; 500]).unwrap();
    for n in 2..500i64 {
        assert_eq!(is_prime(n).unwrap(), marks[n as usize] == 0, "n = {}", n);
    }
}
