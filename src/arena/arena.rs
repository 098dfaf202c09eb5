//! Storage behind every non-immediate Value.
//!
//! An Arena holds the symbol pool, the string pool and every Pair allocated
//! while reading. Nothing is released individually; the whole Arena can be
//! reset (or dropped) as a unit once its values are no longer referenced.

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;
use log::debug;

use super::text_pool::TextPool;
use crate::error::{Category, Error, ErrorKind};
use crate::printer::DisplayValue;
use crate::value::{Pair, PairId, TextId, Value};


lazy_static! {
    /// Symbol names that read as sentinels rather than symbols.
    static ref RESERVED: HashMap<&'static [u8], Value> = {
        let mut m = HashMap::new();
        m.insert(&b"false"[..], Value::False);
        m.insert(&b"true"[..], Value::True);
        m.insert(&b"nil"[..], Value::Nil);
        m
    };
}


#[derive(Debug)]
pub struct Arena {
    symbols: TextPool,
    strings: TextPool,
    pairs: Vec<Pair>,
    // PairId of pairs[0]; advanced on reset so old ids stay dangling.
    pair_base: usize,
}

pub struct ListIter<'a> {
    arena: &'a Arena,
    current: Value,
}

#[derive(Debug)]
pub enum LookupError {
    UnknownSymbol(TextId),
    UnknownString(TextId),
    UnknownPair(PairId),
    NotText(Value),
    NotUtf8(String),
}


impl Arena {
    pub fn new() -> Self {
        Self {
            symbols: TextPool::new("symbol"),
            strings: TextPool::new("string"),
            pairs: Vec::new(),
            pair_base: 0,
        }
    }

    /// Intern a symbol name; `true`, `false` and `nil` yield their sentinels.
    pub fn intern_symbol<T: AsRef<[u8]>>(&mut self, text: T) -> Value {
        let text = text.as_ref();
        if let Some(reserved) = RESERVED.get(text) {
            return *reserved;
        }
        Value::Symbol(self.symbols.intern(text))
    }

    pub fn intern_string<T: AsRef<[u8]>>(&mut self, text: T) -> Value {
        Value::String(self.strings.intern(text.as_ref()))
    }

    /// Symbol for text if it has already been interned.
    pub fn find_symbol<T: AsRef<[u8]>>(&self, text: T) -> Option<Value> {
        self.symbols.lookup(text.as_ref()).map(Value::Symbol)
    }

    pub fn cons(&mut self, data: Value, next: Value) -> Value {
        let id = PairId(self.pair_base + self.pairs.len());
        self.pairs.push(Pair::new(data, next));
        Value::List(id)
    }

    /// List of items in order; Nil if there are none.
    pub fn list<I: IntoIterator<Item = Value>>(&mut self, items: I) -> Value {
        let items = items.into_iter().collect::<Vec<_>>();
        items
            .into_iter()
            .rev()
            .fold(Value::Nil, |next, data| self.cons(data, next))
    }

    pub fn pair(&self, id: PairId) -> Result<&Pair, Error> {
        let slot = id.index().checked_sub(self.pair_base);
        match slot.and_then(|i| self.pairs.get(i)) {
            Some(pair) => Ok(pair),
            None => err!(LookupError::UnknownPair(id)),
        }
    }

    pub fn symbol_text(&self, id: TextId) -> Result<&[u8], Error> {
        match self.symbols.get(id) {
            Some(text) => Ok(text),
            None => err!(LookupError::UnknownSymbol(id)),
        }
    }

    pub fn string_text(&self, id: TextId) -> Result<&[u8], Error> {
        match self.strings.get(id) {
            Some(text) => Ok(text),
            None => err!(LookupError::UnknownString(id)),
        }
    }

    pub fn symbol_str(&self, id: TextId) -> Result<&str, Error> {
        utf8(self.symbol_text(id)?)
    }

    pub fn string_str(&self, id: TextId) -> Result<&str, Error> {
        utf8(self.string_text(id)?)
    }

    /// Text of a Symbol or String value.
    pub fn text(&self, value: Value) -> Result<&[u8], Error> {
        match value {
            Value::Symbol(id) => self.symbol_text(id),
            Value::String(id) => self.string_text(id),
            _ => err!(LookupError::NotText(value)),
        }
    }

    /// Iterate over the elements of a list. Non-list values yield nothing.
    pub fn iter(&self, list: Value) -> ListIter {
        ListIter {
            arena: self,
            current: list,
        }
    }

    /// Number of elements in a list, checking every link.
    pub fn len(&self, list: Value) -> Result<usize, Error> {
        let mut len = 0;
        let mut current = list;
        while let Value::List(id) = current {
            current = self.pair(id)?.next();
            len += 1;
        }
        Ok(len)
    }

    pub fn display(&self, value: Value) -> DisplayValue {
        DisplayValue::new(self, value)
    }

    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    pub fn string_count(&self) -> usize {
        self.strings.len()
    }

    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    /// Release everything at once. Values obtained before the reset must not
    /// be used afterwards.
    pub fn reset(&mut self) {
        debug!(
            "Resetting arena: {} symbols, {} strings, {} pairs.",
            self.symbols.len(),
            self.strings.len(),
            self.pairs.len()
        );
        self.symbols.clear();
        self.strings.clear();
        self.pair_base += self.pairs.len();
        self.pairs.clear();
    }
}

fn utf8(text: &[u8]) -> Result<&str, Error> {
    match std::str::from_utf8(text) {
        Ok(s) => Ok(s),
        Err(_) => err!(LookupError::NotUtf8(
            String::from_utf8_lossy(text).into_owned()
        )),
    }
}


impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Iterator for ListIter<'a> {
    type Item = Value;

    fn next(&mut self) -> Option<Self::Item> {
        if let Value::List(id) = self.current {
            let pair = self.arena.pair(id).ok()?;
            self.current = pair.next();
            Some(pair.data())
        } else {
            None
        }
    }
}

impl ErrorKind for LookupError {
    fn category(&self) -> Category {
        match self {
            Self::NotUtf8(_) => Category::BadEncoding,
            _ => Category::UnknownType,
        }
    }

    fn detail(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSymbol(id) => write!(f, "no symbol #{} in arena", id.index()),
            Self::UnknownString(id) => write!(f, "no string #{} in arena", id.index()),
            Self::UnknownPair(id) => write!(f, "no pair #{} in arena", id.index()),
            Self::NotText(value) => write!(f, "{} has no text", value.kind()),
            Self::NotUtf8(lossy) => write!(f, "{:?} is not utf-8", lossy),
        }
    }
}


#[cfg(test)]
#[path = "./arena_test.rs"]
mod arena_test;
