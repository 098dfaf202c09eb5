use super::value::Value;


/// Sole compound value: a link of a singly linked, Nil-terminated list.
///
/// Pairs are immutable once allocated; `next` is always Nil or a List.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Pair {
    data: Value,
    next: Value,
}

impl Pair {
    pub(crate) fn new(data: Value, next: Value) -> Pair {
        debug_assert!(matches!(next, Value::Nil | Value::List(_)));
        Pair { data, next }
    }

    pub fn data(&self) -> Value {
        self.data
    }

    pub fn next(&self) -> Value {
        self.next
    }
}
