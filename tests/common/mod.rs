#![allow(dead_code)]

use std::path::PathBuf;
use std::process;

use scm::prelude::*;


pub fn setup() -> Arena {
    // Integration tests will call this method multiple times; ignore the error.
    if let Err(_err) = env_logger::try_init() {}

    Arena::new()
}

pub fn results<S: AsRef<str>>(arena: &mut Arena, s: S) -> Vec<Value> {
    results_with_errors(arena, s)
        .into_iter()
        .map(|e| e.unwrap())
        .collect::<Vec<_>>()
}

pub fn results_with_errors<S: AsRef<str>>(arena: &mut Arena, s: S) -> Vec<Result<Value, Error>> {
    let mut reader = Reader::new(ByteSource::open_buffer(s.as_ref()));
    reader.values(arena).collect::<Vec<_>>()
}

pub fn datum(arena: &Arena, value: Value) -> String {
    let mut out = Vec::new();
    write_datum(&mut out, arena, value).unwrap();
    String::from_utf8(out).unwrap()
}

pub fn dump(arena: &Arena, value: Value) -> String {
    let mut out = Vec::new();
    print_value(&mut out, arena, value).unwrap();
    String::from_utf8(out).unwrap()
}

/// Path in the system temp dir, unique to this process and name.
pub fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("scm-{}-{}", process::id(), name))
}
