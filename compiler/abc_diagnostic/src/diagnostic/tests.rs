use super::*;
use abc_ir::TokenKind;
use pretty_assertions::assert_eq;

#[test]
fn test_error_constructor() {
    let diag = Diagnostic::error(ErrorCode::E1001, Position::new(1, 1), "unsupported version");
    assert!(diag.is_error());
    assert!(!diag.is_warning());
    assert_eq!(diag.code, ErrorCode::E1001);
    assert_eq!(diag.message, "unsupported version");
}

#[test]
fn test_warning_constructor() {
    let diag = Diagnostic::warning(ErrorCode::W0001, Position::new(5, 1), "ignored");
    assert!(diag.is_warning());
    assert_eq!(diag.severity, Severity::Warning);
}

#[test]
fn test_to_token() {
    let diag = Diagnostic::error(ErrorCode::E1018, Position::new(6, 1), "missing K:");
    let tok = diag.to_token();
    assert_eq!(tok.kind, TokenKind::Error);
    assert_eq!(tok.value_str(), Some("missing K:"));
    assert_eq!(tok.position, Position::new(6, 1));
}

#[test]
fn test_diagnostic_display() {
    let diag = Diagnostic::error(ErrorCode::E1010, Position::new(9, 1), "stylesheet between tunes");
    assert_eq!(
        diag.to_string(),
        "error[E1010]: stylesheet between tunes at 9:1"
    );
}
