use std::fmt;

use crate::error::{Category, Error, ErrorKind};


/// Encapsulation of Errors in rust's std module.
#[derive(Debug)]
pub enum StdError {
    /// Failed I/O call, with the operation or source it concerned.
    Io(std::io::Error, String),
}

impl StdError {
    pub fn io<S: Into<String>>(err: std::io::Error, context: S) -> Error {
        Error::new(Box::new(StdError::Io(err, context.into())))
    }
}

impl ErrorKind for StdError {
    fn category(&self) -> Category {
        Category::Syscall
    }

    fn detail(&self) -> Option<String> {
        match self {
            Self::Io(err, context) => Some(format!("{}: {}", err, context)),
        }
    }
}

impl fmt::Display for StdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err, context) => write!(f, "{}: {}", err, context),
        }
    }
}

/// Allow for io::Errors to be used seamlessly with scm::Errors.
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        StdError::io(err, "<io>")
    }
}
