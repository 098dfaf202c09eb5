//! Reader for a small Lisp dialect.
//!
//! Text from a ByteSource is turned into Values by a Reader. Symbols and
//! strings are interned in an Arena, which also holds the pairs that make up
//! lists; a Value is a small copyable handle that is only meaningful
//! alongside the Arena it came from.

#[macro_use]
pub mod error;

pub mod arena;
pub mod printer;
pub mod reader;
pub mod std_error;
pub mod stream;
pub mod value;

pub mod prelude {
    pub use crate::arena::Arena;
    pub use crate::error::{Category, Error, ErrorKind};
    pub use crate::printer::{print_value, write_datum};
    pub use crate::reader::{Reader, ReaderConfig};
    pub use crate::std_error::StdError;
    pub use crate::stream::ByteSource;
    pub use crate::value::{Kind, Value, Word};
    // Macros.
    pub use crate::err;
}
