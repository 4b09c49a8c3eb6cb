//! Introcs - Introductory Computer Science Exercises
//!
//! Main CLI entry point for running the exercise catalog.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use introcs::date::today;
use introcs::{Evaluation, IntroCsConfig, OutputFormat, Runner};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "ics")]
#[command(version)]
#[command(about = "Introductory computer science exercises", long_about = None)]
struct Cli {
    /// Config file (default: introcs.toml in this directory or a parent)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Verbose logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    // Commands sorted alphabetically for easier navigation
    /// Count the values equal to a target
    CountEqual {
        #[arg(allow_negative_numbers = true)]
        target: f64,

        #[arg(num_args = 0.., allow_negative_numbers = true)]
        values: Vec<f64>,
    },

    /// Count the letters in a text
    CountLetters { text: String },

    /// Count the occurrences of a word in a word list
    CountWord {
        word: String,

        #[arg(num_args = 0..)]
        words: Vec<String>,
    },

    /// Validate a CPF's check digits
    Cpf {
        /// 11-digit CPF, or a 9-digit prefix with --complete
        cpf: String,

        /// Use the running-sum algorithm
        #[arg(long)]
        cumulative: bool,

        /// Append the check digits to a 9-digit prefix instead of validating
        #[arg(long, conflicts_with = "cumulative")]
        complete: bool,
    },

    /// Approximate e^x with a Taylor series
    Exp {
        #[arg(allow_negative_numbers = true)]
        x: f64,

        /// Number of series terms
        #[arg(short, long, allow_negative_numbers = true)]
        terms: Option<i64>,
    },

    /// Factorial of n
    Factorial {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },

    /// The nth Fibonacci number
    Fib {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },

    /// Greatest common divisor (0 < b <= a)
    Gcd {
        #[arg(allow_negative_numbers = true)]
        a: i64,

        #[arg(allow_negative_numbers = true)]
        b: i64,

        /// Use repeated subtraction instead of Euclid's remainders
        #[arg(long)]
        subtractive: bool,
    },

    /// Approximate the golden ratio starting from a < b
    Golden {
        #[arg(allow_negative_numbers = true)]
        a: f64,

        #[arg(allow_negative_numbers = true)]
        b: f64,

        /// Number of iterations
        #[arg(short, long, allow_negative_numbers = true)]
        iterations: Option<i64>,
    },

    /// Approximate the natural logarithm of x (x >= 1)
    Ln {
        #[arg(allow_negative_numbers = true)]
        x: f64,

        /// Number of series terms
        #[arg(short, long, allow_negative_numbers = true)]
        terms: Option<i64>,
    },

    /// Smallest of a series of temperatures
    MinTemp {
        #[arg(num_args = 0.., allow_negative_numbers = true)]
        temperatures: Vec<f64>,
    },

    /// Most frequent word of a text
    MostFrequent { text: String },

    /// Approximate π with the Leibniz series
    Pi {
        /// Number of series terms
        #[arg(short, long, allow_negative_numbers = true)]
        terms: Option<i64>,
    },

    /// Evaluate a polynomial at x (coefficients lowest degree first)
    Poly {
        #[arg(allow_negative_numbers = true)]
        x: i64,

        #[arg(num_args = 0.., allow_negative_numbers = true)]
        coefficients: Vec<i64>,
    },

    /// base raised to exponent by repeated products
    Power {
        #[arg(allow_negative_numbers = true)]
        base: i64,

        #[arg(allow_negative_numbers = true)]
        exponent: i64,
    },

    /// Check whether n is prime
    Prime {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },

    /// Product by repeated addition
    Product {
        #[arg(allow_negative_numbers = true)]
        a: i64,

        #[arg(allow_negative_numbers = true)]
        b: i64,
    },

    /// Check the 153 property (digit cubes sum to n)
    #[command(name = "property-153")]
    Property153 {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },

    /// Check the 3025 property ((30 + 25)² = 3025)
    #[command(name = "property-3025")]
    Property3025 {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },

    /// Check lo <= n <= hi
    Range {
        #[arg(allow_negative_numbers = true)]
        n: i64,

        #[arg(allow_negative_numbers = true)]
        lo: i64,

        #[arg(allow_negative_numbers = true)]
        hi: i64,
    },

    /// Remainder by repeated subtraction
    Remainder {
        #[arg(allow_negative_numbers = true)]
        numerator: i64,

        #[arg(allow_negative_numbers = true)]
        denominator: i64,
    },

    /// List the primes below len with the Sieve of Eratosthenes
    Sieve { len: usize },

    /// Square root by Newton's method
    Sqrt {
        #[arg(allow_negative_numbers = true)]
        radicand: f64,

        /// Number of refinements
        #[arg(short, long, allow_negative_numbers = true)]
        iterations: Option<i64>,
    },

    /// Check whether n is a perfect square
    Square {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },

    /// Sum of the natural numbers up to n
    SumNaturals {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },

    /// Sum of the odd values
    SumOdd {
        #[arg(num_args = 0.., allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Day of the week of a date (dd-MM-yyyy, default today)
    Weekday {
        /// Date to evaluate; today when absent or invalid
        #[arg(long)]
        date: Option<String>,

        /// Accepted for compatibility, not used
        #[arg(long)]
        date2: Option<String>,
    },
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<IntroCsConfig> {
    match path {
        Some(path) => IntroCsConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => IntroCsConfig::load_from_cwd().context("Failed to load introcs.toml"),
    }
}

fn run(runner: &Runner, command: Commands) -> Result<Evaluation> {
    let evaluation = match command {
        Commands::CountEqual { target, values } => runner.count_equal(target, &values)?,
        Commands::CountLetters { text } => runner.count_letters(&text)?,
        Commands::CountWord { word, words } => runner.count_word(&word, &words)?,
        Commands::Cpf {
            cpf,
            cumulative,
            complete,
        } => {
            if complete {
                runner.cpf_complete(&cpf)?
            } else {
                runner.cpf(&cpf, cumulative)?
            }
        }
        Commands::Exp { x, terms } => runner.exp(x, terms)?,
        Commands::Factorial { n } => runner.factorial(n)?,
        Commands::Fib { n } => runner.fibonacci(n)?,
        Commands::Gcd { a, b, subtractive } => runner.gcd(a, b, subtractive)?,
        Commands::Golden { a, b, iterations } => runner.golden_ratio(a, b, iterations)?,
        Commands::Ln { x, terms } => runner.ln(x, terms)?,
        Commands::MinTemp { temperatures } => runner.min_temperature(&temperatures)?,
        Commands::MostFrequent { text } => runner.most_frequent_word(&text)?,
        Commands::Pi { terms } => runner.pi(terms)?,
        Commands::Poly { x, coefficients } => runner.polynomial(x, &coefficients)?,
        Commands::Power { base, exponent } => runner.power(base, exponent)?,
        Commands::Prime { n } => runner.prime(n)?,
        Commands::Product { a, b } => runner.product(a, b)?,
        Commands::Property153 { n } => runner.property_153(n)?,
        Commands::Property3025 { n } => runner.property_3025(n)?,
        Commands::Range { n, lo, hi } => runner.within_range(n, lo, hi)?,
        Commands::Remainder {
            numerator,
            denominator,
        } => runner.remainder(numerator, denominator)?,
        Commands::Sieve { len } => runner.sieve(len)?,
        Commands::Sqrt {
            radicand,
            iterations,
        } => runner.sqrt(radicand, iterations)?,
        Commands::Square { n } => runner.perfect_square(n)?,
        Commands::SumNaturals { n } => runner.sum_of_naturals(n)?,
        Commands::SumOdd { values } => runner.sum_odd(&values)?,
        Commands::Weekday { date, date2 } => {
            runner.weekday(date.as_deref(), date2.as_deref(), today())?
        }
    };
    Ok(evaluation)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_ref())?;
    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.output.format
    };

    let runner = Runner::new(config);
    let evaluation = run(&runner, cli.command)?;
    println!("{}", evaluation.render(format));

    Ok(())
}
