//! Integer algorithms for the course stdlib
//!
//! Arithmetic is built from the ground up: remainders by repeated
//! subtraction, products by repeated addition, powers by repeated products.
//! Results that would not fit in an `i64` are rejected at entry together
//! with the other domain violations.

use crate::error::{ensure_arg, StdlibResult};

/// Largest `n` whose triangle number still fits in an `i64`.
pub const MAX_SUM_OF_NATURALS: i64 = u32::MAX as i64;

/// Largest `n` whose factorial still fits in an `i64`.
pub const MAX_FACTORIAL: i64 = 20;

/// Largest `n` whose Fibonacci number still fits in an `i64`.
pub const MAX_FIBONACCI: i64 = 92;

/// Remainder of `numerator / denominator` by repeated subtraction.
///
/// # Errors
/// - `numerator <= 0`
/// - `denominator <= 0` (a zero denominator never stops subtracting)
///
/// # Test Cases
/// - integer_remainder(10, 3) = 1
/// - integer_remainder(3, 10) = 3
/// - integer_remainder(12, 4) = 0
pub fn integer_remainder(numerator: i64, denominator: i64) -> StdlibResult<i64> {
    ensure_arg!(
        numerator > 0 && denominator > 0,
        "numerator or denominator out of domain: numerator = {}, denominator = {}",
        numerator,
        denominator
    );

    let mut remainder = numerator;
    while remainder >= denominator {
        remainder -= denominator;
    }

    Ok(remainder)
}

/// Product of two non-negative integers by repeated addition.
///
/// The larger operand is added the smaller-operand number of times.
///
/// # Test Cases
/// - integer_product(0, 7) = 0
/// - integer_product(3, 4) = 12
/// - integer_product(250, 2) = 500
pub fn integer_product(a: i64, b: i64) -> StdlibResult<i64> {
    ensure_arg!(
        a >= 0 && b >= 0,
        "operands must be non-negative: a = {}, b = {}",
        a,
        b
    );
    ensure_arg!(
        a.checked_mul(b).is_some(),
        "product overflows i64: a = {}, b = {}",
        a,
        b
    );

    let (times, addend) = if a < b { (a, b) } else { (b, a) };

    let mut product: i64 = 0;
    let mut i: i64 = 0;
    while i < times {
        product += addend;
        i += 1;
    }

    Ok(product)
}

/// `base` raised to `exponent` through repeated [`integer_product`] calls.
///
/// # Test Cases
/// - integer_power(2, 0) = 1
/// - integer_power(0, 0) = 1
/// - integer_power(2, 10) = 1024
/// - integer_power(3, 5) = 243
pub fn integer_power(base: i64, exponent: i64) -> StdlibResult<i64> {
    ensure_arg!(
        base >= 0 && exponent >= 0,
        "base and exponent must be non-negative: base = {}, exponent = {}",
        base,
        exponent
    );
    ensure_arg!(
        power_fits(base, exponent),
        "power overflows i64: base = {}, exponent = {}",
        base,
        exponent
    );

    let mut power: i64 = 1;
    let mut i: i64 = 0;
    while i < exponent {
        power = integer_product(power, base)?;
        i += 1;
    }

    Ok(power)
}

fn power_fits(base: i64, exponent: i64) -> bool {
    match u32::try_from(exponent) {
        Ok(e) => base.checked_pow(e).is_some(),
        Err(_) => base <= 1,
    }
}

/// Inclusive range check: `lo <= n <= hi`.
pub fn is_within_range(n: i64, lo: i64, hi: i64) -> bool {
    n >= lo && n <= hi
}

/// Check the 3025 property: splitting `n` into its two-digit halves, summing
/// them and squaring the sum gives `n` back (30 + 25 = 55, 55² = 3025).
///
/// # Errors
/// `n` outside `[0, 9999]`.
pub fn has_property_3025(n: i64) -> StdlibResult<bool> {
    ensure_arg!(is_within_range(n, 0, 9999), "number out of [0, 9999]: {}", n);

    let high = n / 100;
    let low = n % 100;

    Ok(integer_power(high + low, 2)? == n)
}

/// Check the 153 property: the cubes of the three digits sum to `n`
/// (1³ + 5³ + 3³ = 153).
///
/// # Errors
/// `n` outside `[100, 999]`.
pub fn has_property_153(n: i64) -> StdlibResult<bool> {
    ensure_arg!(is_within_range(n, 100, 999), "number out of [100, 999]: {}", n);

    let hundreds = n / 100;
    let tens = (n % 100) / 10;
    let units = n % 10;
    let cubes = integer_power(hundreds, 3)? + integer_power(tens, 3)? + integer_power(units, 3)?;

    Ok(cubes == n)
}

/// Sum of the natural numbers `1 + 2 + ... + n`, accumulated one by one.
///
/// # Test Cases
/// - sum_of_naturals(1) = 1
/// - sum_of_naturals(10) = 55
/// - sum_of_naturals(100) = 5050
pub fn sum_of_naturals(n: i64) -> StdlibResult<i64> {
    ensure_arg!(
        is_within_range(n, 1, MAX_SUM_OF_NATURALS),
        "number out of [1, {}]: {}",
        MAX_SUM_OF_NATURALS,
        n
    );

    let mut sum: i64 = 1;
    let mut i: i64 = 2;
    while i <= n {
        sum += i;
        i += 1;
    }

    Ok(sum)
}

/// Factorial of `n`, computed iteratively.
///
/// # Test Cases
/// - factorial(1) = 1
/// - factorial(5) = 120
/// - factorial(20) = 2432902008176640000
pub fn factorial(n: i64) -> StdlibResult<i64> {
    ensure_arg!(
        is_within_range(n, 1, MAX_FACTORIAL),
        "number out of [1, {}]: {}",
        MAX_FACTORIAL,
        n
    );

    let mut result: i64 = 1;
    let mut i: i64 = 2;
    while i <= n {
        result *= i;
        i += 1;
    }

    Ok(result)
}

/// Check whether `n` is a perfect square.
///
/// Every square is a sum of consecutive odd numbers (1 + 3 + 5 + ...), so
/// the odd numbers are subtracted from `n` until it reaches zero or goes
/// below it.
pub fn is_perfect_square(n: i64) -> StdlibResult<bool> {
    ensure_arg!(n >= 1, "number must be at least 1: {}", n);

    let mut remaining = n - 1;
    let mut odd: i64 = 3;
    while remaining > 0 {
        remaining -= odd;
        odd += 2;
    }

    Ok(remaining == 0)
}

/// Trial-division primality test.
///
/// Divisors are tried up to the square root of `n`; divisibility is decided
/// with [`integer_remainder`].
///
/// # Test Cases
/// - is_prime(2) = true
/// - is_prime(97) = true
/// - is_prime(100) = false
pub fn is_prime(n: i64) -> StdlibResult<bool> {
    ensure_arg!(n > 1, "number must be greater than 1: {}", n);

    let mut divisor: i64 = 2;
    while divisor <= n / divisor {
        if integer_remainder(n, divisor)? == 0 {
            return Ok(false);
        }
        divisor += 1;
    }

    Ok(true)
}

fn check_gcd_operands(a: i64, b: i64) -> StdlibResult<()> {
    ensure_arg!(
        b > 0 && b <= a,
        "operands must satisfy 0 < b <= a: a = {}, b = {}",
        a,
        b
    );
    Ok(())
}

/// Greatest common divisor by Euclid's remainder method.
///
/// # Test Cases
/// - gcd_euclidean(48, 18) = 6
/// - gcd_euclidean(100, 35) = 5
/// - gcd_euclidean(17, 13) = 1
pub fn gcd_euclidean(a: i64, b: i64) -> StdlibResult<i64> {
    check_gcd_operands(a, b)?;

    let mut x = a;
    let mut y = b;
    while y != 0 {
        let temp = integer_remainder(x, y)?;
        x = y;
        y = temp;
    }

    Ok(x)
}

/// Greatest common divisor by repeated subtraction of the smaller operand.
pub fn gcd_subtractive(a: i64, b: i64) -> StdlibResult<i64> {
    check_gcd_operands(a, b)?;

    let mut x = a;
    let mut y = b;
    while x != y {
        if x > y {
            x -= y;
        } else {
            y -= x;
        }
    }

    Ok(x)
}

/// The `n`th Fibonacci number (0-indexed), iteratively in constant space.
///
/// # Test Cases
/// - nth_fibonacci(0) = 0
/// - nth_fibonacci(1) = 1
/// - nth_fibonacci(10) = 55
/// - nth_fibonacci(92) = 7540113804746346429
pub fn nth_fibonacci(n: i64) -> StdlibResult<i64> {
    ensure_arg!(
        is_within_range(n, 0, MAX_FIBONACCI),
        "term out of [0, {}]: {}",
        MAX_FIBONACCI,
        n
    );

    if n < 2 {
        return Ok(n);
    }

    let mut previous: i64 = 0;
    let mut current: i64 = 1;
    let mut i: i64 = 2;
    while i <= n {
        let temp = current;
        current += previous;
        previous = temp;
        i += 1;
    }

    Ok(current)
}
