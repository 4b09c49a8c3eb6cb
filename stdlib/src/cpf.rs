//! CPF check digit validation
//!
//! A CPF is an 11-digit identifier whose last two digits are check digits
//! computed from the first nine. Two derivations of the same checksum are
//! provided; they accept and reject exactly the same inputs.

use crate::error::{StdlibError, StdlibResult};

/// Number of digits in a CPF.
pub const CPF_LENGTH: usize = 11;

/// Number of leading digits the check digits are computed from.
pub const CPF_BASE_LENGTH: usize = 9;

fn parse_digits<const N: usize>(text: &str) -> StdlibResult<[u32; N]> {
    let length = text.chars().count();
    if length != N {
        return Err(StdlibError::InvalidArgument(format!(
            "expected {} digits, got {}: {:?}",
            N, length, text
        )));
    }

    let mut digits = [0u32; N];
    for (slot, c) in digits.iter_mut().zip(text.chars()) {
        *slot = c.to_digit(10).filter(|_| c.is_ascii_digit()).ok_or_else(|| {
            StdlibError::InvalidArgument(format!("only digits 0 to 9 are allowed: {:?}", text))
        })?;
    }

    Ok(digits)
}

fn check_digit(weighted_sum: u32) -> u32 {
    weighted_sum % 11 % 10
}

/// Compute the two check digits for a 9-digit CPF prefix.
///
/// # Test Cases
/// - cpf_check_digits("111444777") = [3, 5]
pub fn cpf_check_digits(first_nine: &str) -> StdlibResult<[u8; 2]> {
    let digits = parse_digits::<CPF_BASE_LENGTH>(first_nine)?;

    let mut first_sum = 0;
    let mut second_sum = 0;
    for (i, d) in digits.iter().enumerate() {
        first_sum += d * (i as u32 + 1);
        second_sum += d * i as u32;
    }
    let first = check_digit(first_sum);
    second_sum += first * 9;
    let second = check_digit(second_sum);

    Ok([first as u8, second as u8])
}

/// Validate a CPF's check digits with positional weights.
///
/// The tenth digit must equal `(Σ d[i]·(i+1), i = 0..8) % 11 % 10` and the
/// eleventh `(Σ d[i]·i, i = 1..9) % 11 % 10`.
///
/// # Errors
/// Input that is not exactly 11 ASCII digits.
///
/// # Test Cases
/// - validate_cpf("11144477735") = true
/// - validate_cpf("11144477736") = false
pub fn validate_cpf(cpf: &str) -> StdlibResult<bool> {
    let d = parse_digits::<CPF_LENGTH>(cpf)?;

    let mut first_sum = d[0];
    let mut second_sum = d[1];
    for i in 1..9 {
        first_sum += d[i] * (i as u32 + 1);
    }
    for i in 2..10 {
        second_sum += d[i] * i as u32;
    }

    Ok(check_digit(first_sum) == d[9] && check_digit(second_sum) == d[10])
}

/// Validate a CPF's check digits with running sums instead of weights.
///
/// Walking from the ninth digit down to the first, a running digit sum is
/// accumulated into a second sum, which leaves every digit counted as many
/// times as its positional weight. The second check digit is derived from
/// the two sums and the tenth digit.
///
/// # Errors
/// Input that is not exactly 11 ASCII digits.
pub fn validate_cpf_cumulative(cpf: &str) -> StdlibResult<bool> {
    let d = parse_digits::<CPF_LENGTH>(cpf)?;

    let mut digit_sum = d[8];
    let mut weighted_sum = digit_sum;
    for i in (0..8).rev() {
        digit_sum += d[i];
        weighted_sum += digit_sum;
    }

    let first = check_digit(weighted_sum);
    let second = check_digit(weighted_sum - digit_sum + 9 * d[9]);

    Ok(first == d[9] && second == d[10])
}
