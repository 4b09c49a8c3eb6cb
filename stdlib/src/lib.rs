//! Introcs Standard Library
//!
//! The exercise catalog of the introductory computer science course, written
//! as plain free functions.
//!
//! # Design Philosophy
//!
//! 1. **Pure functions** - No function reads or writes anything outside its
//!    parameters and return value
//! 2. **Fail fast** - Every precondition is checked at entry and reported as
//!    [`StdlibError::InvalidArgument`]
//! 3. **Course algorithms** - Products are repeated additions, remainders are
//!    repeated subtractions; the point is the algorithm, not the speed
//!
//! # Modules
//!
//! - [`math`] - integer algorithms (remainder, power, primality, GCD, ...)
//! - [`float`] - series approximations and Newton's square root
//! - [`array`] - sieve, polynomial evaluation, vector helpers
//! - [`string`] - letter and word counting
//! - [`cpf`] - CPF check digit validation
//! - [`calendar`] - day of the week for Gregorian dates
//!
//! # Example
//!
//! ```rust
//! use introcs_stdlib::{factorial, validate_cpf, weekday};
//!
//! assert_eq!(factorial(5).unwrap(), 120);
//! assert!(validate_cpf("11144477735").unwrap());
//! assert_eq!(weekday(1, 1, 2000).unwrap(), "sábado");
//! ```

pub mod array;
pub mod calendar;
pub mod cpf;
pub mod error;
pub mod float;
pub mod math;
pub mod string;

// Re-export commonly used functions
pub use array::*;
pub use calendar::*;
pub use cpf::*;
pub use error::{StdlibError, StdlibResult};
pub use float::*;
pub use math::*;
pub use string::*;
