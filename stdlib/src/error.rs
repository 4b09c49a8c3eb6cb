//! Error type shared by every catalog function.

use thiserror::Error;

/// The single failure category of the catalog.
///
/// Raised at function entry, before any work is done, whenever an argument
/// falls outside the documented domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StdlibError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for catalog functions.
pub type StdlibResult<T> = Result<T, StdlibError>;

impl StdlibError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        StdlibError::InvalidArgument(message.into())
    }
}

/// Return early with an invalid-argument error unless `cond` holds.
macro_rules! ensure_arg {
    ($cond:expr, $($fmt:tt)+) => {
        if !$cond {
            return Err($crate::error::StdlibError::invalid(format!($($fmt)+)));
        }
    };
}

pub(crate) use ensure_arg;
