//! Module for representing read values.
//!
//! Immediates (integers and the sentinels) carry their payload directly.
//! Symbols, strings and lists are handles into an Arena, which owns the text
//! and the pairs for as long as the Arena is not reset.

use std::convert::TryFrom;
use std::fmt;

use super::word::Word;


/// Largest integer a Value can hold (59-bit signed range).
pub const INT_MAX: i64 = 0x03ff_ffff_ffff_ffff;
/// Smallest integer a Value can hold.
pub const INT_MIN: i64 = -INT_MAX - 1;

/// Handle to interned text. Only meaningful together with the Arena and pool
/// (symbol or string) that produced it.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TextId(pub(crate) usize);

/// Handle to a Pair in an Arena.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PairId(pub(crate) usize);

/// Equality is identity: integers compare by value, everything else by
/// handle.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Value {
    Integer(i64),
    Nil,
    True,
    False,
    Symbol(TextId),
    String(TextId),
    List(PairId),
    Eof,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Kind {
    Integer,
    Nil,
    True,
    False,
    Symbol,
    String,
    List,
    Eof,
}


impl TextId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl PairId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl Value {
    /// Integer value, if n fits the 59-bit range.
    pub fn integer(n: i64) -> Option<Value> {
        if (INT_MIN..=INT_MAX).contains(&n) {
            Some(Value::Integer(n))
        } else {
            None
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Integer(_) => Kind::Integer,
            Value::Nil => Kind::Nil,
            Value::True => Kind::True,
            Value::False => Kind::False,
            Value::Symbol(_) => Kind::Symbol,
            Value::String(_) => Kind::String,
            Value::List(_) => Kind::List,
            Value::Eof => Kind::Eof,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    pub fn is_eof(&self) -> bool {
        matches!(self, Value::Eof)
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<TextId> {
        match self {
            Value::Symbol(id) => Some(*id),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<TextId> {
        match self {
            Value::String(id) => Some(*id),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<PairId> {
        match self {
            Value::List(id) => Some(*id),
            _ => None,
        }
    }

    /// Single machine word form of this Value.
    pub fn encode(&self) -> Word {
        Word::from(*self)
    }
}


impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Integer => "integer",
            Kind::Nil => "nil",
            Kind::True => "true",
            Kind::False => "false",
            Kind::Symbol => "symbol",
            Kind::String => "string",
            Kind::List => "list",
            Kind::Eof => "end-of-file",
        };
        write!(f, "{}", name)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        if b {
            Value::True
        } else {
            Value::False
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value.as_integer().ok_or(value)
    }
}

impl TryFrom<Value> for bool {
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::True => Ok(true),
            Value::False => Ok(false),
            _ => Err(value),
        }
    }
}
