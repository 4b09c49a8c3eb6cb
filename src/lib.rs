//! Introcs - Introductory Computer Science Exercises
//!
//! Command-line front end for the course exercise catalog. The functions
//! themselves live in the [`introcs_stdlib`] crate; this crate adds
//! configuration, date handling and result reporting around them.
//!
//! # Example
//!
//! ```rust
//! use introcs::runner::Runner;
//!
//! let runner = Runner::default();
//! let evaluation = runner.factorial(5).unwrap();
//! assert_eq!(evaluation.to_string(), "factorial(n=5) = 120");
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   ics (clap)    │  Parses arguments, picks a subcommand
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     Runner      │  Fills defaults from introcs.toml, resolves dates
//! └────────┬────────┘
//!          │
//!     ┌────┴────┐
//!     ▼         ▼
//! ┌───────┐  ┌────────────┐
//! │stdlib │  │ Evaluation │  Text or JSON report
//! └───────┘  └────────────┘
//! ```

pub mod config;
pub mod date;
pub mod report;
pub mod runner;

pub use config::{ConfigError, IntroCsConfig, OutputFormat};
pub use introcs_stdlib as stdlib;
pub use report::Evaluation;
pub use runner::{Runner, RunnerError};
