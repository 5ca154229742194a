use super::*;
use pretty_assertions::assert_eq;

#[test]
fn starts_initial() {
    assert_eq!(FileState::default(), FileState::Initial);
}

#[test]
fn in_tune_only_for_tune_sections() {
    assert!(FileState::TuneHeader { seen_key: false }.is_in_tune());
    assert!(FileState::TuneHeader { seen_key: true }.is_in_tune());
    assert!(FileState::TuneBody.is_in_tune());

    for state in [
        FileState::Initial,
        FileState::FileHeader { opened: false },
        FileState::FileHeader { opened: true },
        FileState::InterTune,
        FileState::FreeText,
        FileState::TypesetText,
    ] {
        assert!(!state.is_in_tune(), "{state:?}");
    }
}

#[test]
fn display_ignores_flags() {
    assert_eq!(FileState::FileHeader { opened: true }.to_string(), "file header");
    assert_eq!(FileState::TuneHeader { seen_key: false }.to_string(), "tune header");
}
