use super::*;

use crate::std_error::StdError;


#[derive(Debug)]
struct Bare;

impl ErrorKind for Bare {
    fn category(&self) -> Category {
        Category::UnknownType
    }

    fn detail(&self) -> Option<String> {
        None
    }
}

#[test]
fn codes_follow_prefixes() {
    let all = [
        Category::Syscall,
        Category::Undefined,
        Category::BadEncoding,
        Category::Overflow,
        Category::UnknownType,
        Category::UnknownEscape,
        Category::InternalReader,
        Category::PrematureEof,
    ];
    for (i, category) in all.iter().enumerate() {
        assert_eq!(category.code() as usize, i);
        assert!(category
            .prefix()
            .starts_with(&format!("error-{:03}: ", i)));
    }
}

#[test]
fn display_without_detail() {
    let result: Result<(), Error> = err!(Bare);
    let error = result.unwrap_err();
    assert_eq!(error.category(), Category::UnknownType);
    assert_eq!(error.to_string(), "error-004: unknown type: ");
}

#[test]
fn syscall_leads_with_platform_text() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let error = StdError::io(io, "open_file(\"x\")");
    assert_eq!(error.category(), Category::Syscall);
    assert_eq!(error.to_string(), "error-000: gone: open_file(\"x\")");
}

#[test]
fn report_is_one_line() {
    colored::control::set_override(false);
    let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
    let error = StdError::io(io, "<stdin>");

    let mut out = Vec::new();
    error.report(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text, "error-000: boom: <stdin>\n");
}
