//! Representation of errors raised while reading and printing values.
//!
//! General error mechanism that can use any ErrorKind. Every kind maps onto
//! one Category of the fixed diagnostic taxonomy, so that a driver can render
//! the same categorized one-line message no matter which module failed.

use std::fmt;
use std::io;

use colored::*;


/// Creates an Error wrapped in Err.
#[macro_export]
macro_rules! err {
    ($($kind:tt)+) => {
        Err($crate::error::Error::new(Box::new($($kind)+)))
    };
}


pub struct Error {
    kind: Box<dyn ErrorKind>,
}

pub trait ErrorKind: fmt::Debug {
    fn category(&self) -> Category;

    /// Text following the category prefix, if any.
    fn detail(&self) -> Option<String>;
}

/// Diagnostic taxonomy. Codes are stable and appear in every message.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Category {
    Syscall,
    Undefined,
    BadEncoding,
    Overflow,
    UnknownType,
    UnknownEscape,
    InternalReader,
    PrematureEof,
}


impl Category {
    pub fn code(&self) -> u8 {
        match self {
            Self::Syscall => 0,
            Self::Undefined => 1,
            Self::BadEncoding => 2,
            Self::Overflow => 3,
            Self::UnknownType => 4,
            Self::UnknownEscape => 5,
            Self::InternalReader => 6,
            Self::PrematureEof => 7,
        }
    }

    /// First part of the one line error message.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Syscall => "error-000: ",
            Self::Undefined => "error-001: undefined error: ",
            Self::BadEncoding => "error-002: bad encoding: ",
            Self::Overflow => "error-003: integer literal overflow: ",
            Self::UnknownType => "error-004: unknown type: ",
            Self::UnknownEscape => "error-005: unknown escape sequence: ",
            Self::InternalReader => "error-006: internal reader error: ",
            Self::PrematureEof => "error-007: premature end-of-file: ",
        }
    }
}

impl Error {
    /// Prefer using err! for convenience.
    pub fn new(kind: Box<dyn ErrorKind>) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> &dyn ErrorKind {
        &*self.kind
    }

    pub fn category(&self) -> Category {
        self.kind.category()
    }

    pub fn consume(self) -> Box<dyn ErrorKind> {
        self.kind
    }

    /// Write the diagnostic line with a highlighted category prefix.
    pub fn report<W: io::Write>(&self, w: &mut W) -> io::Result<()> {
        let prefix = self.category().prefix().trim_end();
        write!(w, "{} ", prefix.red().bold())?;
        if let Some(detail) = self.kind.detail() {
            write!(w, "{}", detail)?;
        }
        writeln!(w)
    }
}

impl PartialEq for Error {
    /// Compare rendered diagnostics.
    fn eq(&self, other: &Self) -> bool {
        self.category() == other.category() && self.kind.detail() == other.kind.detail()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category().prefix())?;
        if let Some(detail) = self.kind.detail() {
            write!(f, "{}", detail)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:?})", self, self.kind)
    }
}

impl std::error::Error for Error {}


#[cfg(test)]
#[path = "./error_test.rs"]
mod error_test;
