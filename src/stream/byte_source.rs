//! Position-tracked byte access with one byte of lookahead.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor};
use std::path::Path;

use derivative::Derivative;
use derive_getters::Getters;
use log::debug;

use crate::error::Error;
use crate::std_error::StdError;


/// Width of a tab stop in columns.
const TAB_WIDTH: usize = 8;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SourceKind {
    Buffer,
    File,
    Stdin,
}

/// Location of the next unread byte. Lines count from 1, columns from 0.
#[derive(Clone, Copy, Debug, Eq, Getters, PartialEq)]
pub struct Position {
    line: usize,
    col: usize,
}

#[derive(Derivative)]
#[derivative(Debug)]
pub struct ByteSource {
    kind: SourceKind,
    name: String,
    peek: Lookahead,
    position: Position,
    #[derivative(Debug = "ignore")]
    stream: Box<dyn BufRead>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Lookahead {
    // A real read must be performed.
    Invalid,
    Byte(u8),
    // Sticky; nothing more is read once the stream is exhausted.
    End,
}


impl Position {
    fn start() -> Self {
        Self { line: 1, col: 0 }
    }

    fn advance(&mut self, byte: u8) {
        match byte {
            b'\n' => {
                self.line += 1;
                self.col = 0;
            }
            b'\t' => self.col += TAB_WIDTH - (self.col % TAB_WIDTH),
            _ => self.col += 1,
        }
    }
}

impl ByteSource {
    pub(crate) fn new(kind: SourceKind, name: String, stream: Box<dyn BufRead>) -> Self {
        debug!("Opening {:?} source {}", kind, name);
        Self {
            kind,
            name,
            peek: Lookahead::Invalid,
            position: Position::start(),
            stream,
        }
    }

    /// Source over an in-memory copy of bytes.
    pub fn open_buffer<B: Into<Vec<u8>>>(bytes: B) -> Self {
        let bytes = bytes.into();
        let name = format!("<mem:{:p}:{}>", bytes.as_ptr(), bytes.len());
        Self::new(SourceKind::Buffer, name, Box::new(Cursor::new(bytes)))
    }

    pub fn open_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let name = path.as_ref().display().to_string();
        match File::open(path.as_ref()) {
            Ok(file) => Ok(Self::new(
                SourceKind::File,
                name,
                Box::new(BufReader::new(file)),
            )),
            Err(err) => Err(StdError::io(err, format!("open_file({:?})", name))),
        }
    }

    pub fn open_stdin() -> Self {
        Self::new(
            SourceKind::Stdin,
            "<stdin>".to_string(),
            Box::new(io::stdin().lock()),
        )
    }

    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    /// Diagnostic label.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Next unread byte, without consuming it. None at end-of-stream.
    pub fn peek(&mut self) -> Result<Option<u8>, Error> {
        if self.peek == Lookahead::Invalid {
            self.peek = match self.getc()? {
                Some(byte) => Lookahead::Byte(byte),
                None => Lookahead::End,
            };
        }
        Ok(match self.peek {
            Lookahead::Byte(byte) => Some(byte),
            _ => None,
        })
    }

    /// Consume the next byte, updating the position.
    pub fn advance(&mut self) -> Result<Option<u8>, Error> {
        let byte = self.peek()?;
        if let Some(byte) = byte {
            self.peek = Lookahead::Invalid;
            self.position.advance(byte);
        }
        Ok(byte)
    }

    /// Release the source. Standard input itself stays open.
    pub fn close(self) -> Result<(), Error> {
        debug!("Closing {:?} source {}", self.kind, self.name);
        Ok(())
    }

    fn getc(&mut self) -> Result<Option<u8>, Error> {
        loop {
            let byte = match self.stream.fill_buf() {
                Ok(buf) => buf.first().copied(),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(StdError::io(err, self.name.clone())),
            };
            if byte.is_some() {
                self.stream.consume(1);
            }
            return Ok(byte);
        }
    }
}


impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}


#[cfg(test)]
#[path = "./byte_source_test.rs"]
mod byte_source_test;
