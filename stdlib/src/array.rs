//! Array functions for the course stdlib
//!
//! These functions take slices and never modify them; anything that produces
//! a sequence returns a freshly allocated `Vec`.

use crate::error::{ensure_arg, StdlibError, StdlibResult};
use crate::float::square_root;

/// Newton iterations used to bound the sieve.
const SIEVE_SQRT_ITERATIONS: i64 = 100;

/// Sieve of Eratosthenes over the indices of `zeros`.
///
/// `zeros` must hold at least two elements, all zero; its length is the
/// size of the sieve. The result has the same length: index `k` holds 1 when
/// `k` is composite and 0 otherwise. Indices 0 and 1 are left at 0.
///
/// # Errors
/// - `zeros.len() < 2`
/// - any element different from 0
///
/// # Test Cases
/// - sieve_of_eratosthenes([0; 10]) = [0, 0, 0, 0, 1, 0, 1, 0, 1, 1]
pub fn sieve_of_eratosthenes(zeros: &[i64]) -> StdlibResult<Vec<i64>> {
    ensure_arg!(zeros.len() >= 2, "sieve needs at least 2 slots: {}", zeros.len());
    if let Some((index, value)) = zeros.iter().enumerate().find(|(_, v)| **v != 0) {
        return Err(StdlibError::InvalidArgument(format!(
            "sieve slot {} must be 0: {}",
            index, value
        )));
    }

    let len = zeros.len();
    let limit = square_root(len as f64, SIEVE_SQRT_ITERATIONS)?.floor() as usize;

    let mut marks = zeros.to_vec();
    for i in 2..=limit {
        if marks[i] == 0 {
            let mut multiple = i * i;
            while multiple < len {
                marks[multiple] = 1;
                multiple += i;
            }
        }
    }

    Ok(marks)
}

/// Evaluate a polynomial at `x` with Horner's method.
///
/// `coefficients` are ordered lowest degree first, so `[c0, c1, c2]` is
/// `c0 + c1*x + c2*x²`.
///
/// # Errors
/// - empty `coefficients`
/// - intermediate value overflowing `i64`
///
/// # Test Cases
/// - evaluate_polynomial(2, [1, 2, 3]) = 17
/// - evaluate_polynomial(5, [7]) = 7
pub fn evaluate_polynomial(x: i64, coefficients: &[i64]) -> StdlibResult<i64> {
    let (last, rest) = match coefficients.split_last() {
        Some(split) => split,
        None => {
            return Err(StdlibError::InvalidArgument(
                "polynomial needs at least one coefficient".to_string(),
            ))
        }
    };

    let mut value = *last;
    for &coefficient in rest.iter().rev() {
        value = value
            .checked_mul(x)
            .and_then(|v| v.checked_add(coefficient))
            .ok_or_else(|| {
                StdlibError::InvalidArgument(format!(
                    "polynomial overflows i64 at x = {}",
                    x
                ))
            })?;
    }

    Ok(value)
}

/// Smallest value in a series of temperature readings.
///
/// # Errors
/// Empty slice.
pub fn min_temperature(temperatures: &[f64]) -> StdlibResult<f64> {
    let (first, rest) = match temperatures.split_first() {
        Some(split) => split,
        None => {
            return Err(StdlibError::InvalidArgument(
                "no temperatures given".to_string(),
            ))
        }
    };

    let mut min = *first;
    for &t in rest {
        if t < min {
            min = t;
        }
    }

    Ok(min)
}

/// Sum of the odd values in `values`. Negative odd values count too.
///
/// # Errors
/// Sum overflowing `i64`.
pub fn sum_odd(values: &[i64]) -> StdlibResult<i64> {
    values
        .iter()
        .filter(|v| **v % 2 != 0)
        .try_fold(0i64, |acc, v| acc.checked_add(*v))
        .ok_or_else(|| StdlibError::InvalidArgument("sum of odd values overflows i64".to_string()))
}

/// Number of elements exactly equal to `target`.
pub fn count_equal(values: &[f64], target: f64) -> usize {
    values.iter().filter(|v| **v == target).count()
}

/// Number of entries in `words` equal to `word` (case-sensitive).
pub fn count_word<S: AsRef<str>>(word: &str, words: &[S]) -> usize {
    words.iter().filter(|w| w.as_ref() == word).count()
}
