//! Floating-point functions for the course stdlib
//!
//! Series approximations and Newton's method. The iteration counts are the
//! caller's precision knob: more terms, closer to the real constant.

use crate::error::{ensure_arg, StdlibResult};

/// Approximate π with the Leibniz series `4 * (1 - 1/3 + 1/5 - ...)`.
///
/// # Test Cases
/// - pi_approximation(1) = 4.0
/// - pi_approximation(2) = 2.666...
pub fn pi_approximation(terms: i64) -> StdlibResult<f64> {
    ensure_arg!(terms >= 1, "terms must be at least 1: {}", terms);

    let mut pi = 0.0;
    let mut sign = -1.0;
    let mut denominator = -1.0;

    for _ in 0..terms {
        denominator += 2.0;
        sign = -sign;
        pi += 4.0 * sign / denominator;
    }

    Ok(pi)
}

/// Approximate `ln(x)` for `x >= 1`.
///
/// Uses the area-hyperbolic-tangent series
/// `ln(x) = 2 * sum(y^(2k+1) / (2k+1))` with `y = (x - 1) / (x + 1)`, which
/// converges for every `x >= 1` because `0 <= y < 1`. `terms` is the number
/// of series terms added.
///
/// # Errors
/// - `x < 1` or not finite
/// - `terms < 2`
pub fn natural_log_approximation(x: f64, terms: i64) -> StdlibResult<f64> {
    ensure_arg!(
        x.is_finite() && x >= 1.0 && terms >= 2,
        "x or terms out of domain: x = {}, terms = {}",
        x,
        terms
    );

    let y = (x - 1.0) / (x + 1.0);
    let y_squared = y * y;

    let mut power = y;
    let mut sum = 0.0;
    let mut k: i64 = 0;
    while k < terms {
        sum += power / (2 * k + 1) as f64;
        power *= y_squared;
        k += 1;
    }

    Ok(2.0 * sum)
}

/// Approximate `e^x` with the Taylor series `1 + x + x²/2! + ... + x^n/n!`,
/// where `n` is `terms`. `exponential_approximation(1.0, n)` approximates e.
///
/// # Errors
/// - `x < 1` or not finite
/// - `terms < 2`
pub fn exponential_approximation(x: f64, terms: i64) -> StdlibResult<f64> {
    ensure_arg!(
        x.is_finite() && x >= 1.0 && terms >= 2,
        "x or terms out of domain: x = {}, terms = {}",
        x,
        terms
    );

    let mut sum = 1.0 + x;
    let mut term = x;
    let mut i: i64 = 2;
    while i <= terms {
        term *= x / i as f64;
        sum += term;
        i += 1;
    }

    Ok(sum)
}

/// Approximate the golden ratio by iterating the Fibonacci-style recurrence
/// `(num, den) <- (num + den, num)` from `(b, a)` and returning `num / den`.
pub fn golden_ratio_approximation(a: f64, b: f64, iterations: i64) -> StdlibResult<f64> {
    ensure_arg!(
        a >= 0.0 && a < b && b.is_finite() && iterations > 0,
        "a, b or iterations out of domain: a = {}, b = {}, iterations = {}",
        a,
        b,
        iterations
    );

    let mut numerator = b;
    let mut denominator = a;
    for _ in 0..iterations {
        let temp = numerator;
        numerator += denominator;
        denominator = temp;
    }

    Ok(numerator / denominator)
}

/// Square root by Newton's method.
///
/// Starts from 1.0 and refines the guess `iterations + 1` times with
/// `r <- (r + radicand / r) / 2`.
///
/// # Test Cases
/// - square_root(4.0, 10) = 2.0
/// - square_root(2.0, 10) = 1.41421356...
pub fn square_root(radicand: f64, iterations: i64) -> StdlibResult<f64> {
    ensure_arg!(
        radicand.is_finite() && radicand > 0.0 && iterations >= 0,
        "radicand or iterations out of domain: radicand = {}, iterations = {}",
        radicand,
        iterations
    );

    let mut root = 1.0;
    for _ in 0..=iterations {
        root = (root + radicand / root) / 2.0;
    }

    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{E, LN_2, PI};

    const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

    #[test]
    fn test_pi_approximation() {
        assert_eq!(pi_approximation(1).unwrap(), 4.0);
        assert!((pi_approximation(2).unwrap() - 8.0 / 3.0).abs() < 1e-12);
        assert!((pi_approximation(100_000).unwrap() - PI).abs() < 1e-4);
        assert!(pi_approximation(0).is_err());
        assert!(pi_approximation(-4).is_err());
    }

    #[test]
    fn test_natural_log_approximation() {
        assert_eq!(natural_log_approximation(1.0, 2).unwrap(), 0.0);
        assert!((natural_log_approximation(2.0, 12).unwrap() - LN_2).abs() < 1e-9);
        assert!((natural_log_approximation(E, 20).unwrap() - 1.0).abs() < 1e-9);
        assert!((natural_log_approximation(10.0, 60).unwrap() - 10f64.ln()).abs() < 1e-9);
    }

    #[test]
    fn test_natural_log_rejects_domain() {
        assert!(natural_log_approximation(0.5, 10).is_err());
        assert!(natural_log_approximation(2.0, 1).is_err());
        assert!(natural_log_approximation(f64::NAN, 10).is_err());
        assert!(natural_log_approximation(f64::INFINITY, 10).is_err());
    }

    #[test]
    fn test_exponential_approximation() {
        assert_eq!(exponential_approximation(1.0, 2).unwrap(), 2.5);
        assert!((exponential_approximation(1.0, 20).unwrap() - E).abs() < 1e-12);
        assert!((exponential_approximation(2.0, 30).unwrap() - 2f64.exp()).abs() < 1e-9);
        assert!(exponential_approximation(0.0, 10).is_err());
        assert!(exponential_approximation(1.0, 1).is_err());
    }

    #[test]
    fn test_golden_ratio_approximation() {
        let phi = golden_ratio_approximation(1.0, 2.0, 40).unwrap();
        assert!((phi - GOLDEN_RATIO).abs() < 1e-12);
        let phi = golden_ratio_approximation(0.0, 1.0, 40).unwrap();
        assert!((phi - GOLDEN_RATIO).abs() < 1e-12);
        assert_eq!(golden_ratio_approximation(1.0, 2.0, 1).unwrap(), 1.5);
    }

    #[test]
    fn test_golden_ratio_rejects_domain() {
        assert!(golden_ratio_approximation(-1.0, 2.0, 10).is_err());
        assert!(golden_ratio_approximation(2.0, 2.0, 10).is_err());
        assert!(golden_ratio_approximation(3.0, 2.0, 10).is_err());
        assert!(golden_ratio_approximation(1.0, 2.0, 0).is_err());
    }

    #[test]
    fn test_square_root() {
        assert_eq!(square_root(4.0, 10).unwrap(), 2.0);
        assert!((square_root(2.0, 10).unwrap() - 2f64.sqrt()).abs() < 1e-12);
        assert!((square_root(1e6, 30).unwrap() - 1000.0).abs() < 1e-9);
        assert_eq!(square_root(9.0, 0).unwrap(), 5.0);
        assert!(square_root(0.0, 10).is_err());
        assert!(square_root(-4.0, 10).is_err());
        assert!(square_root(4.0, -1).is_err());
    }
}
