//! Catalog Runner
//!
//! Calls the stdlib functions on behalf of the CLI, fills in precision
//! defaults from the configuration and wraps each result in an
//! [`Evaluation`].

use chrono::NaiveDate;
use introcs_stdlib as stdlib;
use introcs_stdlib::StdlibError;
use thiserror::Error;

use crate::config::IntroCsConfig;
use crate::date::{resolve_date, DateInput};
use crate::report::{real, Evaluation};

/// Largest sieve the runner will allocate.
pub const MAX_SIEVE_LEN: usize = 100_000_000;

/// Runner errors.
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("{function}: {source}")]
    Stdlib {
        function: &'static str,
        #[source]
        source: StdlibError,
    },

    #[error("sieve_of_eratosthenes: invalid argument: len above {max}: {len}")]
    SieveTooLarge { len: usize, max: usize },
}

/// Result type for runner operations.
pub type RunnerResult<T> = Result<T, RunnerError>;

trait StdlibContext<T> {
    fn within(self, function: &'static str) -> RunnerResult<T>;
}

impl<T> StdlibContext<T> for Result<T, StdlibError> {
    fn within(self, function: &'static str) -> RunnerResult<T> {
        self.map_err(|source| RunnerError::Stdlib { function, source })
    }
}

/// Executes catalog functions with configured defaults.
#[derive(Debug, Clone, Default)]
pub struct Runner {
    config: IntroCsConfig,
}

impl Runner {
    pub fn new(config: IntroCsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IntroCsConfig {
        &self.config
    }

    fn done(evaluation: Evaluation) -> RunnerResult<Evaluation> {
        tracing::debug!(function = evaluation.function, result = %evaluation.result, "evaluated");
        Ok(evaluation)
    }

    // ------------------------------------------------------------------
    // Integer algorithms
    // ------------------------------------------------------------------

    pub fn remainder(&self, numerator: i64, denominator: i64) -> RunnerResult<Evaluation> {
        let result = stdlib::integer_remainder(numerator, denominator).within("integer_remainder")?;
        Self::done(
            Evaluation::new("integer_remainder", result)
                .arg("numerator", numerator)
                .arg("denominator", denominator),
        )
    }

    pub fn product(&self, a: i64, b: i64) -> RunnerResult<Evaluation> {
        let result = stdlib::integer_product(a, b).within("integer_product")?;
        Self::done(Evaluation::new("integer_product", result).arg("a", a).arg("b", b))
    }

    pub fn power(&self, base: i64, exponent: i64) -> RunnerResult<Evaluation> {
        let result = stdlib::integer_power(base, exponent).within("integer_power")?;
        Self::done(
            Evaluation::new("integer_power", result)
                .arg("base", base)
                .arg("exponent", exponent),
        )
    }

    pub fn within_range(&self, n: i64, lo: i64, hi: i64) -> RunnerResult<Evaluation> {
        let result = stdlib::is_within_range(n, lo, hi);
        Self::done(
            Evaluation::new("is_within_range", result)
                .arg("n", n)
                .arg("lo", lo)
                .arg("hi", hi),
        )
    }

    pub fn property_3025(&self, n: i64) -> RunnerResult<Evaluation> {
        let result = stdlib::has_property_3025(n).within("has_property_3025")?;
        Self::done(Evaluation::new("has_property_3025", result).arg("n", n))
    }

    pub fn property_153(&self, n: i64) -> RunnerResult<Evaluation> {
        let result = stdlib::has_property_153(n).within("has_property_153")?;
        Self::done(Evaluation::new("has_property_153", result).arg("n", n))
    }

    pub fn sum_of_naturals(&self, n: i64) -> RunnerResult<Evaluation> {
        let result = stdlib::sum_of_naturals(n).within("sum_of_naturals")?;
        Self::done(Evaluation::new("sum_of_naturals", result).arg("n", n))
    }

    pub fn factorial(&self, n: i64) -> RunnerResult<Evaluation> {
        let result = stdlib::factorial(n).within("factorial")?;
        Self::done(Evaluation::new("factorial", result).arg("n", n))
    }

    pub fn perfect_square(&self, n: i64) -> RunnerResult<Evaluation> {
        let result = stdlib::is_perfect_square(n).within("is_perfect_square")?;
        Self::done(Evaluation::new("is_perfect_square", result).arg("n", n))
    }

    pub fn prime(&self, n: i64) -> RunnerResult<Evaluation> {
        let result = stdlib::is_prime(n).within("is_prime")?;
        Self::done(Evaluation::new("is_prime", result).arg("n", n))
    }

    /// GCD by Euclid's method, or by repeated subtraction when `subtractive`.
    pub fn gcd(&self, a: i64, b: i64, subtractive: bool) -> RunnerResult<Evaluation> {
        let evaluation = if subtractive {
            let result = stdlib::gcd_subtractive(a, b).within("gcd_subtractive")?;
            Evaluation::new("gcd_subtractive", result)
        } else {
            let result = stdlib::gcd_euclidean(a, b).within("gcd_euclidean")?;
            Evaluation::new("gcd_euclidean", result)
        };
        Self::done(evaluation.arg("a", a).arg("b", b))
    }

    pub fn fibonacci(&self, n: i64) -> RunnerResult<Evaluation> {
        let result = stdlib::nth_fibonacci(n).within("nth_fibonacci")?;
        Self::done(Evaluation::new("nth_fibonacci", result).arg("n", n))
    }

    // ------------------------------------------------------------------
    // Real-valued algorithms
    // ------------------------------------------------------------------

    pub fn pi(&self, terms: Option<i64>) -> RunnerResult<Evaluation> {
        let terms = terms.unwrap_or(self.config.series.pi_terms);
        let result = stdlib::pi_approximation(terms).within("pi_approximation")?;
        Self::done(Evaluation::new("pi_approximation", real(result)).arg("terms", terms))
    }

    pub fn ln(&self, x: f64, terms: Option<i64>) -> RunnerResult<Evaluation> {
        let terms = terms.unwrap_or(self.config.series.log_terms);
        let result = stdlib::natural_log_approximation(x, terms).within("natural_log_approximation")?;
        Self::done(
            Evaluation::new("natural_log_approximation", real(result))
                .arg("x", real(x))
                .arg("terms", terms),
        )
    }

    pub fn exp(&self, x: f64, terms: Option<i64>) -> RunnerResult<Evaluation> {
        let terms = terms.unwrap_or(self.config.series.exp_terms);
        let result = stdlib::exponential_approximation(x, terms).within("exponential_approximation")?;
        Self::done(
            Evaluation::new("exponential_approximation", real(result))
                .arg("x", real(x))
                .arg("terms", terms),
        )
    }

    pub fn golden_ratio(&self, a: f64, b: f64, iterations: Option<i64>) -> RunnerResult<Evaluation> {
        let iterations = iterations.unwrap_or(self.config.series.golden_iterations);
        let result =
            stdlib::golden_ratio_approximation(a, b, iterations).within("golden_ratio_approximation")?;
        Self::done(
            Evaluation::new("golden_ratio_approximation", real(result))
                .arg("a", real(a))
                .arg("b", real(b))
                .arg("iterations", iterations),
        )
    }

    pub fn sqrt(&self, radicand: f64, iterations: Option<i64>) -> RunnerResult<Evaluation> {
        let iterations = iterations.unwrap_or(self.config.sqrt.iterations);
        let result = stdlib::square_root(radicand, iterations).within("square_root")?;
        Self::done(
            Evaluation::new("square_root", real(result))
                .arg("radicand", real(radicand))
                .arg("iterations", iterations),
        )
    }

    // ------------------------------------------------------------------
    // Sequences and text
    // ------------------------------------------------------------------

    /// Sieve over a fresh zero array of `len` slots. The result lists the
    /// primes found rather than the raw marks.
    pub fn sieve(&self, len: usize) -> RunnerResult<Evaluation> {
        if len > MAX_SIEVE_LEN {
            return Err(RunnerError::SieveTooLarge {
                len,
                max: MAX_SIEVE_LEN,
            });
        }
        let marks = stdlib::sieve_of_eratosthenes(&vec![0; len]).within("sieve_of_eratosthenes")?;
        let primes: Vec<usize> = marks
            .iter()
            .enumerate()
            .skip(2)
            .filter(|(_, mark)| **mark == 0)
            .map(|(k, _)| k)
            .collect();
        Self::done(Evaluation::new("sieve_of_eratosthenes", primes).arg("len", len))
    }

    pub fn polynomial(&self, x: i64, coefficients: &[i64]) -> RunnerResult<Evaluation> {
        let result = stdlib::evaluate_polynomial(x, coefficients).within("evaluate_polynomial")?;
        Self::done(
            Evaluation::new("evaluate_polynomial", result)
                .arg("x", x)
                .arg("coefficients", coefficients),
        )
    }

    pub fn min_temperature(&self, temperatures: &[f64]) -> RunnerResult<Evaluation> {
        let result = stdlib::min_temperature(temperatures).within("min_temperature")?;
        Self::done(Evaluation::new("min_temperature", real(result)).arg("temperatures", temperatures))
    }

    pub fn sum_odd(&self, values: &[i64]) -> RunnerResult<Evaluation> {
        let result = stdlib::sum_odd(values).within("sum_odd")?;
        Self::done(Evaluation::new("sum_odd", result).arg("values", values))
    }

    pub fn count_equal(&self, target: f64, values: &[f64]) -> RunnerResult<Evaluation> {
        let result = stdlib::count_equal(values, target);
        Self::done(
            Evaluation::new("count_equal", result)
                .arg("target", real(target))
                .arg("values", values),
        )
    }

    pub fn count_letters(&self, text: &str) -> RunnerResult<Evaluation> {
        let result = stdlib::count_letters(text);
        Self::done(Evaluation::new("count_letters", result).arg("text", text))
    }

    pub fn count_word(&self, word: &str, words: &[String]) -> RunnerResult<Evaluation> {
        let result = stdlib::count_word(word, words);
        Self::done(
            Evaluation::new("count_word", result)
                .arg("word", word)
                .arg("words", words),
        )
    }

    pub fn most_frequent_word(&self, text: &str) -> RunnerResult<Evaluation> {
        let result = stdlib::most_frequent_word(text).within("most_frequent_word")?;
        Self::done(Evaluation::new("most_frequent_word", result).arg("text", text))
    }

    // ------------------------------------------------------------------
    // CPF
    // ------------------------------------------------------------------

    /// Validate with the chosen algorithm.
    pub fn cpf(&self, cpf: &str, cumulative: bool) -> RunnerResult<Evaluation> {
        let (function, result) = if cumulative {
            (
                "validate_cpf_cumulative",
                stdlib::validate_cpf_cumulative(cpf).within("validate_cpf_cumulative")?,
            )
        } else {
            ("validate_cpf", stdlib::validate_cpf(cpf).within("validate_cpf")?)
        };
        Self::done(Evaluation::new(function, result).arg("cpf", cpf))
    }

    /// Complete a 9-digit prefix with its check digits.
    pub fn cpf_complete(&self, prefix: &str) -> RunnerResult<Evaluation> {
        let [first, second] = stdlib::cpf_check_digits(prefix).within("cpf_check_digits")?;
        let cpf = format!("{}{}{}", prefix, first, second);
        Self::done(Evaluation::new("cpf_check_digits", cpf).arg("prefix", prefix))
    }

    // ------------------------------------------------------------------
    // Calendar
    // ------------------------------------------------------------------

    /// Weekday of a date string, defaulting to `today` when the string is
    /// missing or invalid. `_until` is accepted and ignored.
    pub fn weekday(
        &self,
        date: Option<&str>,
        _until: Option<&str>,
        today: NaiveDate,
    ) -> RunnerResult<Evaluation> {
        let input: DateInput = resolve_date(date, &self.config.calendar.date_format, today);
        let weekday =
            stdlib::weekday_of(input.day(), input.month(), input.year()).within("weekday")?;
        Self::done(
            Evaluation::new("weekday", weekday.name())
                .arg("date", input.date)
                .arg("defaulted", input.defaulted),
        )
    }
}
