//! Use a fmt::Write as an io::Write.
//!
//! The printer writes bytes to any io::Write, but fmt::Display hands out a
//! fmt::Formatter. Bytes that are not UTF-8 are replaced rather than
//! rejected, since interned text is not required to be UTF-8.

use std::{fmt, io};


pub struct FmtIoAdapter<'a, F: fmt::Write> {
    fmt_writer: &'a mut F,
}

impl<'a, F: fmt::Write> FmtIoAdapter<'a, F> {
    pub fn new(fmt_writer: &'a mut F) -> Self {
        Self { fmt_writer }
    }
}


impl<'a, F: fmt::Write> io::Write for FmtIoAdapter<'a, F> {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        let text = String::from_utf8_lossy(bytes);
        match self.fmt_writer.write_str(&text) {
            Ok(()) => Ok(bytes.len()),
            Err(err) => Err(io::Error::new(io::ErrorKind::Other, err)),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
