/*!
Specialized `Error` and `Result` types for optional.
*/

use std::prelude::v1::*;
use std::{fmt, result};

#[cfg(feature = "std")]
use std::error;

/// Error reported by optional values and their helpers.
///
/// Errors are plain values and compare by origin and kind, so a caller can
/// test for a specific condition with `==`:
///
/// ```
/// use optional::{Optional, ERR_EMPTY};
///
/// let value = Optional::<u32>::empty();
/// assert_eq!(value.get(), Err(ERR_EMPTY));
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Error(pub ErrorOrigin, pub ErrorKind);

/// Indicates that an optional value was empty when its value was requested.
pub const ERR_EMPTY: Error = Error(ErrorOrigin::Value, ErrorKind::NotPresent);

impl Error {
    /// Returns a static string representing the type of error.
    pub fn as_str(&self) -> &'static str {
        self.1.to_str()
    }

    /// Returns a static string representing the type of error.
    pub fn into_str(self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            // the sentinel reads the same no matter who prints it
            ErrorOrigin::Value => f.write_str(self.1.to_str()),
            origin => write!(f, "{}: {}", origin.to_str(), self.1.to_str()),
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for Error {
    fn description(&self) -> &str {
        self.as_str()
    }
}

#[repr(u16)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ErrorOrigin {
    Value,
    Matcher,
}

impl ErrorOrigin {
    /// Returns a static string representing the type of error.
    pub fn to_str(self) -> &'static str {
        match self {
            ErrorOrigin::Value => "value",
            ErrorOrigin::Matcher => "matcher",
        }
    }
}

#[repr(u16)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    NotPresent,
    TypeMismatch,
}

impl ErrorKind {
    /// Returns a static string representing the type of error.
    pub fn to_str(self) -> &'static str {
        match self {
            ErrorKind::NotPresent => "value not present",
            ErrorKind::TypeMismatch => "type mismatch",
        }
    }
}

/// Specialized `Result` type for optional results.
pub type Result<T> = result::Result<T, Error>;
