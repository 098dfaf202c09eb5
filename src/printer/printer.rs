//! Rendering of values.
//!
//! Two forms are provided: the line-oriented dump the command-line driver
//! prints, and the readable datum form which reads back to the same value.

use std::fmt;
use std::io::Write;

use super::fmt_io_adapter::FmtIoAdapter;
use crate::arena::Arena;
use crate::error::{Category, Error, ErrorKind};
use crate::std_error::StdError;
use crate::value::{Value, Word};


pub struct DisplayValue<'a> {
    arena: &'a Arena,
    value: Value,
}

#[derive(Debug)]
pub enum PrintError {
    UnknownTag(Word),
}


/// Write the dump form of value: one line per atom, lists bracketed by lines
/// holding a lone paren. Eof prints nothing.
pub fn print_value<W: Write>(w: &mut W, arena: &Arena, value: Value) -> Result<(), Error> {
    match value {
        Value::Integer(n) => writeln!(w, "{}", n).map_err(output)?,
        Value::Nil => writeln!(w, "nil ()").map_err(output)?,
        Value::True => writeln!(w, "true #t").map_err(output)?,
        Value::False => writeln!(w, "false #f").map_err(output)?,
        Value::String(id) => {
            let text = arena.string_text(id)?;
            w.write_all(b"\"").map_err(output)?;
            w.write_all(text).map_err(output)?;
            w.write_all(b"\"\n").map_err(output)?;
        }
        Value::Symbol(id) => {
            let text = arena.symbol_text(id)?;
            w.write_all(text).map_err(output)?;
            w.write_all(b"\n").map_err(output)?;
        }
        Value::List(_) => {
            writeln!(w, "(").map_err(output)?;
            let mut current = value;
            while let Value::List(id) = current {
                let pair = arena.pair(id)?;
                print_value(w, arena, pair.data())?;
                current = pair.next();
            }
            writeln!(w, ")").map_err(output)?;
        }
        Value::Eof => {}
    }
    Ok(())
}

/// Like print_value, for a value in its single word form.
pub fn print_word<W: Write>(w: &mut W, arena: &Arena, word: Word) -> Result<(), Error> {
    match word.decode() {
        Some(value) => print_value(w, arena, value),
        None => err!(PrintError::UnknownTag(word)),
    }
}

/// Write the readable form of value, e.g. `(1 "a\nb" sym)`.
pub fn write_datum<W: Write>(w: &mut W, arena: &Arena, value: Value) -> Result<(), Error> {
    match value {
        Value::Integer(n) => write!(w, "{}", n).map_err(output)?,
        Value::Nil => write!(w, "nil").map_err(output)?,
        Value::True => write!(w, "true").map_err(output)?,
        Value::False => write!(w, "false").map_err(output)?,
        Value::String(id) => {
            let text = arena.string_text(id)?;
            w.write_all(&escape(text)).map_err(output)?;
        }
        Value::Symbol(id) => {
            let text = arena.symbol_text(id)?;
            w.write_all(text).map_err(output)?;
        }
        Value::List(_) => {
            write!(w, "(").map_err(output)?;
            let mut current = value;
            let mut first = true;
            while let Value::List(id) = current {
                let pair = arena.pair(id)?;
                if !first {
                    write!(w, " ").map_err(output)?;
                }
                write_datum(w, arena, pair.data())?;
                current = pair.next();
                first = false;
            }
            write!(w, ")").map_err(output)?;
        }
        Value::Eof => {}
    }
    Ok(())
}

// Quoted, with the four escapes the reader understands.
fn escape(text: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len() + 2);
    out.push(b'"');
    for byte in text {
        match byte {
            b'\\' => out.extend_from_slice(b"\\\\"),
            b'"' => out.extend_from_slice(b"\\\""),
            b'\n' => out.extend_from_slice(b"\\n"),
            b'\t' => out.extend_from_slice(b"\\t"),
            _ => out.push(*byte),
        }
    }
    out.push(b'"');
    out
}

fn output(err: std::io::Error) -> Error {
    StdError::io(err, "<output>")
}


impl<'a> DisplayValue<'a> {
    pub fn new(arena: &'a Arena, value: Value) -> Self {
        Self { arena, value }
    }
}

impl<'a> fmt::Display for DisplayValue<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match write_datum(&mut FmtIoAdapter::new(f), self.arena, self.value) {
            Ok(()) => Ok(()),
            Err(_) => Err(fmt::Error),
        }
    }
}

impl ErrorKind for PrintError {
    fn category(&self) -> Category {
        Category::UnknownType
    }

    fn detail(&self) -> Option<String> {
        match self {
            Self::UnknownTag(word) => Some(format!("{:?}", word)),
        }
    }
}


#[cfg(test)]
#[path = "./printer_test.rs"]
mod printer_test;
