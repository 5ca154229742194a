use super::*;

#[test]
fn default_is_start_of_document() {
    assert_eq!(Position::default(), Position::new(1, 1));
}

#[test]
fn display_is_line_colon_column() {
    assert_eq!(Position::new(12, 4).to_string(), "12:4");
}

#[test]
fn ordering_is_line_major() {
    assert!(Position::new(1, 80) < Position::new(2, 1));
    assert!(Position::new(3, 2) < Position::new(3, 5));
}

#[test]
fn with_column_keeps_line() {
    let pos = Position::line_start(7).with_column(9);
    assert_eq!(pos, Position::new(7, 9));
}
