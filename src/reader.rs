//! Module for reading values out of a byte source.
//!
//! Recursive descent; every call to `read` consumes exactly one value (or
//! nothing, at end-of-stream) from the underlying ByteSource.

use std::fmt;

use log::trace;

use crate::arena::Arena;
use crate::error::{Category, Error, ErrorKind};
use crate::stream::{ByteSource, Position};
use crate::value::{Value, INT_MAX, INT_MIN};

use self::ReadErrorReason::*;

const MAX_DEPTH: usize = 1024;


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ReaderConfig {
    /// Deepest list nesting accepted before reading fails.
    pub max_depth: usize,
}

#[derive(Debug)]
pub struct Reader {
    source: ByteSource,
    config: ReaderConfig,
}

/// Iterator over the values of a Reader, ending at end-of-stream or after the
/// first error.
pub struct Values<'r, 'a> {
    reader: &'r mut Reader,
    arena: &'a mut Arena,
    done: bool,
}

// Sign consumed ahead of an integer literal.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Sign {
    Plus,
    Minus,
    Unsigned,
}

#[derive(Debug)]
pub enum ReadErrorReason {
    Overflow,
    UnknownEscape(u8),
    UnterminatedString,
    UnterminatedList,
    UnexpectedClose,
    DepthOverflow(usize),
}

#[derive(Debug)]
pub struct ReadError {
    reason: ReadErrorReason,
    source: String,
    position: Position,
}


/// The C locale's isspace set.
fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

fn is_delimiter(byte: u8) -> bool {
    is_space(byte) || byte == b'(' || byte == b')'
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
        }
    }
}

impl Reader {
    pub fn new(source: ByteSource) -> Self {
        Self::with_config(source, ReaderConfig::default())
    }

    pub fn with_config(source: ByteSource, config: ReaderConfig) -> Self {
        Self { source, config }
    }

    pub fn source(&self) -> &ByteSource {
        &self.source
    }

    pub fn into_source(self) -> ByteSource {
        self.source
    }

    pub fn close(self) -> Result<(), Error> {
        self.source.close()
    }

    /// Read the next value; Value::Eof once the source is exhausted.
    pub fn read(&mut self, arena: &mut Arena) -> Result<Value, Error> {
        let value = self.read_value(arena, 0)?;
        trace!("{}: read {:?}", self.source.name(), value);
        Ok(value)
    }

    pub fn values<'r, 'a>(&'r mut self, arena: &'a mut Arena) -> Values<'r, 'a> {
        Values {
            reader: self,
            arena,
            done: false,
        }
    }

    fn read_value(&mut self, arena: &mut Arena, depth: usize) -> Result<Value, Error> {
        self.skip_whitespace()?;
        let start = self.source.position();

        let c = match self.source.peek()? {
            Some(c) => c,
            None => return Ok(Value::Eof),
        };
        match c {
            b'+' | b'-' => {
                self.source.advance()?;
                match self.source.peek()? {
                    Some(digit) if digit.is_ascii_digit() => {
                        let sign = if c == b'-' { Sign::Minus } else { Sign::Plus };
                        self.read_integer(sign, start)
                    }
                    _ => self.read_symbol(arena, vec![c]),
                }
            }
            b'0'..=b'9' => self.read_integer(Sign::Unsigned, start),
            b'"' => {
                self.source.advance()?;
                self.read_string(arena)
            }
            b'(' => {
                self.source.advance()?;
                self.read_list(arena, depth + 1)
            }
            b')' => {
                self.source.advance()?;
                self.fail(UnexpectedClose, start)
            }
            _ => self.read_symbol(arena, Vec::new()),
        }
    }

    fn skip_whitespace(&mut self) -> Result<(), Error> {
        while let Some(byte) = self.source.peek()? {
            if !is_space(byte) {
                break;
            }
            self.source.advance()?;
        }
        Ok(())
    }

    // Sign, if any, has already been consumed; start is its position.
    fn read_integer(&mut self, sign: Sign, start: Position) -> Result<Value, Error> {
        let negative = sign == Sign::Minus;
        let mut num: i64 = 0;

        while let Some(byte) = self.source.peek()? {
            if !byte.is_ascii_digit() {
                break;
            }
            num = 10 * num + i64::from(byte - b'0');
            if (!negative && num > INT_MAX) || (negative && -num < INT_MIN) {
                return self.fail(Overflow, start);
            }
            self.source.advance()?;
        }

        Ok(Value::Integer(if negative { -num } else { num }))
    }

    // Opening quote has already been consumed.
    fn read_string(&mut self, arena: &mut Arena) -> Result<Value, Error> {
        let mut text = Vec::new();
        loop {
            let byte = match self.source.peek()? {
                Some(byte) => byte,
                None => return self.fail_here(UnterminatedString),
            };
            self.source.advance()?;
            match byte {
                b'"' => break,
                b'\\' => {
                    let escaped = match self.source.peek()? {
                        Some(b'\\') => b'\\',
                        Some(b'"') => b'"',
                        Some(b'n') => b'\n',
                        Some(b't') => b'\t',
                        Some(other) => return self.fail_here(UnknownEscape(other)),
                        None => return self.fail_here(UnterminatedString),
                    };
                    self.source.advance()?;
                    text.push(escaped);
                }
                _ => text.push(byte),
            }
        }

        Ok(arena.intern_string(text))
    }

    // Any stashed sign character is already in name.
    fn read_symbol(&mut self, arena: &mut Arena, mut name: Vec<u8>) -> Result<Value, Error> {
        while let Some(byte) = self.source.peek()? {
            if is_delimiter(byte) {
                break;
            }
            name.push(byte);
            self.source.advance()?;
        }

        Ok(arena.intern_symbol(name))
    }

    // Opening paren has already been consumed.
    fn read_list(&mut self, arena: &mut Arena, depth: usize) -> Result<Value, Error> {
        if depth > self.config.max_depth {
            return self.fail_here(DepthOverflow(self.config.max_depth));
        }

        let mut items = Vec::new();
        loop {
            self.skip_whitespace()?;
            match self.source.peek()? {
                None => return self.fail_here(UnterminatedList),
                Some(b')') => {
                    self.source.advance()?;
                    break;
                }
                Some(_) => items.push(self.read_value(arena, depth)?),
            }
        }

        Ok(arena.list(items))
    }

    fn fail<T>(&self, reason: ReadErrorReason, position: Position) -> Result<T, Error> {
        err!(ReadError {
            reason,
            source: self.source.name().to_string(),
            position,
        })
    }

    fn fail_here<T>(&self, reason: ReadErrorReason) -> Result<T, Error> {
        self.fail(reason, self.source.position())
    }
}


impl<'r, 'a> Iterator for Values<'r, 'a> {
    type Item = Result<Value, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.reader.read(self.arena) {
            Ok(Value::Eof) => {
                self.done = true;
                None
            }
            Ok(value) => Some(Ok(value)),
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

impl ReadError {
    pub fn reason(&self) -> &ReadErrorReason {
        &self.reason
    }

    pub fn position(&self) -> Position {
        self.position
    }
}

impl ErrorKind for ReadError {
    fn category(&self) -> Category {
        match self.reason {
            Overflow => Category::Overflow,
            UnknownEscape(_) => Category::UnknownEscape,
            UnterminatedString | UnterminatedList => Category::PrematureEof,
            UnexpectedClose | DepthOverflow(_) => Category::InternalReader,
        }
    }

    fn detail(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.source, self.position)?;
        match self.reason {
            UnexpectedClose => write!(f, ": unexpected ')'"),
            DepthOverflow(max) => write!(f, ": lists nested deeper than {}", max),
            _ => Ok(()),
        }
    }
}


#[cfg(test)]
#[path = "./reader_test.rs"]
mod reader_test;
