//! Tagged single-word encoding of Values.
//!
//! ```text
//!  63 ................................................ 5 | 4 3 | 2 1 0
//! +--------------------------------------------------+-----+-------+
//! | 59bit signed integer                             | 0 0 | 0 0 0 |
//! | nil                                              | 0 1 | 0 0 0 |
//! | true                                             | 1 0 | 0 0 0 |
//! | false                                            | 1 1 | 0 0 0 |
//! | symbol handle                                          | 0 0 1 |
//! | string handle                                          | 0 1 0 |
//! | list handle                                            | 0 1 1 |
//! | unused                                                 | 1 0 0 |
//! | unused                                                 | 1 0 1 |
//! | unused                                                 | 1 1 0 |
//! | eof (all ones)                                         | 1 1 1 |
//! +--------------------------------------------------------+-------+
//! ```
//!
//! Handles take the place of the 8-byte aligned pointers the layout was made
//! for: a handle's index is stored shifted left by 3.

use std::fmt;

use super::value::{Kind, PairId, TextId, Value, INT_MAX, INT_MIN};


const PRIMARY_MASK: i64 = 0x07;
const SECONDARY_MASK: i64 = 0x1f;

const TAG_IMMEDIATE: i64 = 0x00;
const TAG_SYMBOL: i64 = 0x01;
const TAG_STRING: i64 = 0x02;
const TAG_LIST: i64 = 0x03;

const INTEGER_SHIFT: u32 = 5;
const HANDLE_SHIFT: u32 = 3;

#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct Word(i64);


impl Word {
    pub const NIL: Word = Word(0x08);
    pub const TRUE: Word = Word(0x10);
    pub const FALSE: Word = Word(0x18);
    pub const EOF: Word = Word(-1);

    pub fn from_raw(raw: i64) -> Self {
        Word(raw)
    }

    pub fn raw(&self) -> i64 {
        self.0
    }

    /// None for the unused primary tags.
    pub fn classify(&self) -> Option<Kind> {
        if *self == Self::EOF {
            return Some(Kind::Eof);
        }
        match self.0 & PRIMARY_MASK {
            TAG_IMMEDIATE => Some(match self.0 & SECONDARY_MASK {
                0x00 => Kind::Integer,
                0x08 => Kind::Nil,
                0x10 => Kind::True,
                _ => Kind::False,
            }),
            TAG_SYMBOL => Some(Kind::Symbol),
            TAG_STRING => Some(Kind::String),
            TAG_LIST => Some(Kind::List),
            _ => None,
        }
    }

    pub fn decode(&self) -> Option<Value> {
        let value = match self.classify()? {
            Kind::Integer => Value::Integer(self.0 >> INTEGER_SHIFT),
            Kind::Nil => Value::Nil,
            Kind::True => Value::True,
            Kind::False => Value::False,
            Kind::Symbol => Value::Symbol(TextId(self.handle())),
            Kind::String => Value::String(TextId(self.handle())),
            Kind::List => Value::List(PairId(self.handle())),
            Kind::Eof => Value::Eof,
        };
        Some(value)
    }

    fn handle(&self) -> usize {
        ((self.0 & !PRIMARY_MASK) as u64 >> HANDLE_SHIFT) as usize
    }

    fn tag_handle(index: usize, tag: i64) -> Self {
        Word(((index as i64) << HANDLE_SHIFT) | tag)
    }
}


impl From<Value> for Word {
    fn from(value: Value) -> Self {
        match value {
            Value::Integer(n) => {
                debug_assert!((INT_MIN..=INT_MAX).contains(&n));
                Word((n << INTEGER_SHIFT) | TAG_IMMEDIATE)
            }
            Value::Nil => Word::NIL,
            Value::True => Word::TRUE,
            Value::False => Word::FALSE,
            Value::Symbol(id) => Word::tag_handle(id.0, TAG_SYMBOL),
            Value::String(id) => Word::tag_handle(id.0, TAG_STRING),
            Value::List(id) => Word::tag_handle(id.0, TAG_LIST),
            Value::Eof => Word::EOF,
        }
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word({:#018x})", self.0)
    }
}
