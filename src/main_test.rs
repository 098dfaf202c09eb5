use super::*;


fn parse(args: &[&str]) -> Option<Vec<Source>> {
    parse_args(std::iter::once("scm").chain(args.iter().copied()))
}

#[test]
fn sources_keep_order() {
    assert_eq!(
        parse(&["a.scm", "-c", "(1 2)", "-", "b.scm", "-c", "x"]),
        Some(vec![
            Source::File("a.scm".to_string()),
            Source::Form("(1 2)".to_string()),
            Source::Stdin,
            Source::File("b.scm".to_string()),
            Source::Form("x".to_string()),
        ])
    );
}

#[test]
fn form_may_start_with_hyphen() {
    assert_eq!(
        parse(&["-c", "-5"]),
        Some(vec![Source::Form("-5".to_string())])
    );
}

#[test]
fn usage_errors() {
    assert_eq!(parse(&[]), None);
    assert_eq!(parse(&["-c"]), None);
    assert_eq!(parse(&["-c", "1", "-c"]), None);
    assert_eq!(parse(&["a.scm", "-c", "1", "-c"]), None);
    assert_eq!(parse(&["-x"]), None);
    assert_eq!(parse(&["--help"]), None);
}

#[test]
fn diagnostics_follow_stderr() {
    assert!(diagnostic_color(true, false, false));
    assert!(!diagnostic_color(false, false, false));
    assert!(!diagnostic_color(true, true, false));
    assert!(diagnostic_color(false, true, true));
}
