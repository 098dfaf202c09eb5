use std::convert::TryFrom;

use super::*;


#[test]
fn integer_bounds() {
    assert_eq!(INT_MAX, 288230376151711743);
    assert_eq!(INT_MIN, -288230376151711744);

    assert_eq!(Value::integer(INT_MAX), Some(Value::Integer(INT_MAX)));
    assert_eq!(Value::integer(INT_MIN), Some(Value::Integer(INT_MIN)));
    assert_eq!(Value::integer(INT_MAX + 1), None);
    assert_eq!(Value::integer(INT_MIN - 1), None);
}

#[test]
fn sentinel_words() {
    assert_eq!(Value::Nil.encode().raw(), 0x08);
    assert_eq!(Value::True.encode().raw(), 0x10);
    assert_eq!(Value::False.encode().raw(), 0x18);
    assert_eq!(Value::Eof.encode().raw(), -1);
}

#[test]
fn integer_words() {
    for n in &[0, 1, -1, 42, -4096, INT_MAX, INT_MIN] {
        let word = Value::Integer(*n).encode();
        assert_eq!(word.raw() & 0x1f, 0);
        assert_eq!(word.classify(), Some(Kind::Integer));
        assert_eq!(word.decode(), Some(Value::Integer(*n)));
    }
}

#[test]
fn handle_words() {
    let symbol = Value::Symbol(TextId(3)).encode();
    let string = Value::String(TextId(3)).encode();
    let list = Value::List(PairId(7)).encode();

    assert_eq!(symbol.raw(), (3 << 3) | 0x01);
    assert_eq!(string.raw(), (3 << 3) | 0x02);
    assert_eq!(list.raw(), (7 << 3) | 0x03);

    assert_eq!(symbol.classify(), Some(Kind::Symbol));
    assert_eq!(string.classify(), Some(Kind::String));
    assert_eq!(list.classify(), Some(Kind::List));
    assert_eq!(list.decode(), Some(Value::List(PairId(7))));
}

#[test]
fn unused_tags() {
    for tag in 4..7 {
        let word = Word::from_raw((5 << 3) | tag);
        assert_eq!(word.classify(), None);
        assert_eq!(word.decode(), None);
    }
}

#[test]
fn kinds() {
    assert_eq!(Value::Integer(5).kind(), Kind::Integer);
    assert_eq!(Value::Nil.kind(), Kind::Nil);
    assert_eq!(Value::from(true).kind(), Kind::True);
    assert_eq!(Value::from(false).kind(), Kind::False);
    assert_eq!(Value::Symbol(TextId(0)).kind(), Kind::Symbol);
    assert_eq!(Value::String(TextId(0)).kind(), Kind::String);
    assert_eq!(Value::List(PairId(0)).kind(), Kind::List);
    assert_eq!(Value::Eof.kind(), Kind::Eof);
    assert_eq!(Kind::Eof.to_string(), "end-of-file");
}

#[test]
fn checked_extraction() {
    let symbol = Value::Symbol(TextId(1));
    assert_eq!(symbol.as_symbol(), Some(TextId(1)));
    assert_eq!(symbol.as_string(), None);
    assert_eq!(symbol.as_integer(), None);
    assert_eq!(symbol.as_list(), None);

    assert_eq!(i64::try_from(Value::Integer(-3)), Ok(-3));
    assert_eq!(i64::try_from(Value::Nil), Err(Value::Nil));
    assert_eq!(bool::try_from(Value::True), Ok(true));
    assert!(bool::try_from(Value::Integer(0)).is_err());
}
