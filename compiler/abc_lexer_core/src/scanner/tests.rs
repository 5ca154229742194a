use super::*;
use abc_diagnostic::{Diagnostic, ErrorCode};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// Scan every token up to and including Eof with a fixed `in_tune` hint.
fn scan_all(source: &str, in_tune: bool) -> (Vec<Token>, Vec<Diagnostic>) {
    scan_with(source, in_tune, ScanConfig::default())
}

fn scan_with(source: &str, in_tune: bool, config: ScanConfig) -> (Vec<Token>, Vec<Diagnostic>) {
    let mut scanner = LineScanner::new(source, config);
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_line_token(in_tune, &mut diagnostics);
        let done = token.is_eof();
        tokens.push(token);
        if done {
            break;
        }
    }
    (tokens, diagnostics)
}

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind).collect()
}

fn single(line: &str, in_tune: bool) -> Token {
    let (mut tokens, _) = scan_all(line, in_tune);
    tokens.remove(0)
}

#[test]
fn empty_source_is_eof_at_line_one() {
    let (tokens, diagnostics) = scan_all("", false);
    assert_eq!(tokens, vec![Token::eof(Position::new(1, 1))]);
    assert!(diagnostics.is_empty());
}

#[test]
fn eof_repeats_forever() {
    let mut scanner = LineScanner::new("X:1\n", ScanConfig::default());
    let mut sink: Vec<Diagnostic> = Vec::new();
    let first = scanner.next_line_token(false, &mut sink);
    assert_eq!(first.kind, TokenKind::InformationField);
    for _ in 0..3 {
        let eof = scanner.next_line_token(false, &mut sink);
        assert_eq!(eof.kind, TokenKind::Eof);
        assert_eq!(eof.position, Position::new(2, 1));
    }
}

#[test]
fn declaration_on_first_line_only() {
    let token = single("%abc-2.1", false);
    assert_eq!(token.kind, TokenKind::AbcDeclaration);
    assert_eq!(token.value_str(), Some("2.1"));
    assert_eq!(token.original_line.as_deref(), Some("%abc-2.1"));

    assert_eq!(single("%abc", false).value_str(), Some(""));
    assert_eq!(single("%abc 2.0 ", false).value_str(), Some("2.0"));

    let (tokens, _) = scan_all("X:1\n%abc-2.1", false);
    assert_eq!(tokens[1].kind, TokenKind::Comment);
}

#[test]
fn information_field() {
    let token = single("T:Paddy's", false);
    assert_eq!(token.kind, TokenKind::InformationField);
    assert_eq!(token.value_str(), Some("T:Paddy's"));

    assert_eq!(single("1:no", false).kind, TokenKind::FreeText);
    assert_eq!(single(" K:C", true).kind, TokenKind::MusicCode);
}

#[test]
fn directive_lines() {
    let text = single("%%text   Some words", false);
    assert_eq!(text.kind, TokenKind::Text(TextKind::Text));
    assert_eq!(text.value_str(), Some("Some words"));

    let center = single("%%center Title", false);
    assert_eq!(center.subkind(), Some(TextKind::Center));
    assert_eq!(center.value_str(), Some("Title"));

    let font = single("%%textfont Times-Roman 12", false);
    assert_eq!(font.kind, TokenKind::StyleSheet);
    assert_eq!(font.value_str(), Some("textfont Times-Roman 12"));

    let bare = single("%%text", false);
    assert_eq!(bare.kind, TokenKind::Text(TextKind::Text));
    assert_eq!(bare.value, None);

    let style = single("%%pagewidth 21cm", false);
    assert_eq!(style.kind, TokenKind::StyleSheet);
    assert_eq!(style.value_str(), Some("pagewidth 21cm"));
}

#[test]
fn comment_and_blank_lines() {
    let comment = single("   %  a remark ", false);
    assert_eq!(comment.kind, TokenKind::Comment);
    assert_eq!(comment.value_str(), Some("a remark"));

    let blank = single("  \t ", false);
    assert_eq!(blank.kind, TokenKind::BlankLine);
    assert_eq!(blank.value, None);
}

#[test]
fn unclassified_line_depends_on_in_tune() {
    assert_eq!(single("abc|def", true).kind, TokenKind::MusicCode);
    let free = single("Some prose", false);
    assert_eq!(free.kind, TokenKind::FreeText);
    assert_eq!(free.value_str(), Some("Some prose"));
}

#[test]
fn trailing_comment_splits_music_code() {
    let (tokens, _) = scan_all("A B % comment", true);
    assert_eq!(
        kinds(&tokens),
        vec![TokenKind::MusicCode, TokenKind::Comment, TokenKind::Eof]
    );
    assert_eq!(tokens[0].value_str(), Some("A B "));
    assert_eq!(tokens[0].position, Position::new(1, 1));
    assert_eq!(tokens[1].value_str(), Some("comment"));
    assert_eq!(tokens[1].position, Position::new(1, 5));
    assert_eq!(tokens[1].original_line.as_deref(), Some("A B % comment"));
    assert_eq!(tokens[2].position, Position::new(2, 1));
}

#[test]
fn trailing_comment_splits_field() {
    let (tokens, _) = scan_all("K:G % key of G\nabc", true);
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::InformationField,
            TokenKind::Comment,
            TokenKind::MusicCode,
            TokenKind::Eof
        ]
    );
    assert_eq!(tokens[0].value_str(), Some("K:G "));
    assert_eq!(tokens[1].position, Position::new(1, 5));
    assert_eq!(tokens[2].position.line, 2);
}

#[test]
fn comment_column_counts_characters() {
    let (tokens, _) = scan_all("T:Café % note", false);
    assert_eq!(tokens[1].position, Position::new(1, 8));
}

#[test]
fn escaped_percent_is_not_a_comment() {
    let (tokens, _) = scan_all(r"T:50\% off", false);
    assert_eq!(kinds(&tokens), vec![TokenKind::InformationField, TokenKind::Eof]);
    assert_eq!(tokens[0].value_str(), Some("T:50% off"));
}

#[test]
fn free_text_never_splits_comments() {
    let token = single("50% of the time", false);
    assert_eq!(token.kind, TokenKind::FreeText);
    assert_eq!(token.value_str(), Some("50% of the time"));
}

#[test]
fn decoding_applies_to_fields_and_text_only() {
    let field = single(r"T:Caf\'e", false);
    assert_eq!(field.value_str(), Some("T:Café"));

    let music = single(r"\'e", true);
    assert_eq!(music.value_str(), Some(r"\'e"));

    let style = single("%%font &amp;", false);
    assert_eq!(style.value_str(), Some("font &amp;"));

    let raw = LineScanner::new(r"T:Caf\'e", ScanConfig::default().with_decode_text(false))
        .next_line_token(false, &mut Vec::<Diagnostic>::new());
    assert_eq!(raw.value_str(), Some(r"T:Caf\'e"));
}

#[test]
fn text_block_lines() {
    let source = "%%begintext\n%%First line\n%%endtext\nT:after";
    let (tokens, diagnostics) = scan_all(source, false);
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Text(TextKind::BeginText),
            TokenKind::Text(TextKind::Text),
            TokenKind::Text(TextKind::EndText),
            TokenKind::InformationField,
            TokenKind::Eof
        ]
    );
    assert_eq!(tokens[1].value_str(), Some("First line"));
    assert!(diagnostics.is_empty());
}

#[test]
fn text_block_line_without_marker_is_error() {
    let (tokens, diagnostics) = scan_all("%%begintext\nplain words\n%%endtext", false);
    assert_eq!(tokens[1].kind, TokenKind::Text(TextKind::Text));
    assert_eq!(tokens[1].value_str(), Some("plain words"));
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, ErrorCode::E0001);
    assert_eq!(diagnostics[0].position, Position::new(2, 1));
    assert_eq!(diagnostics[0].message, "line inside text block must begin with %%");
}

#[test]
fn fields_inside_text_block_are_text() {
    let (tokens, diagnostics) = scan_all("%%begintext\nX:1\n%%endtext", false);
    assert_eq!(tokens[1].kind, TokenKind::Text(TextKind::Text));
    assert_eq!(diagnostics[0].code, ErrorCode::E0001);
}

#[test]
fn trailing_text_after_block_directives_warns() {
    let (tokens, diagnostics) = scan_all("%%begintext obeylines\n%%endtext junk", false);
    assert_eq!(tokens[0].value_str(), Some(" obeylines"));
    assert_eq!(tokens[1].value_str(), Some(" junk"));
    let codes: Vec<_> = diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![ErrorCode::W0002, ErrorCode::W0001]);
    assert!(diagnostics.iter().all(Diagnostic::is_warning));
}

#[test]
fn block_delimiters_match_without_a_word_boundary() {
    let (tokens, diagnostics) = scan_all("%%begintextfoo\n%%bar\n%%endtextX\nX:1", false);
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Text(TextKind::BeginText),
            TokenKind::Text(TextKind::Text),
            TokenKind::Text(TextKind::EndText),
            TokenKind::InformationField,
            TokenKind::Eof,
        ]
    );
    assert_eq!(tokens[0].value_str(), Some("foo"));
    assert_eq!(tokens[2].value_str(), Some("X"));
    let codes: Vec<_> = diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![ErrorCode::W0002, ErrorCode::W0001]);
}

#[test]
fn unterminated_text_block_warns_once_at_eof() {
    let mut scanner = LineScanner::new("%%begintext\n%%words", ScanConfig::default());
    let mut sink: Vec<Diagnostic> = Vec::new();
    scanner.next_line_token(false, &mut sink);
    scanner.next_line_token(false, &mut sink);
    assert!(scanner.in_text_block());
    let eof = scanner.next_line_token(false, &mut sink);
    scanner.next_line_token(false, &mut sink);
    assert_eq!(eof.position, Position::new(3, 1));
    assert_eq!(sink.len(), 1);
    assert_eq!(sink[0].code, ErrorCode::W0003);
    assert_eq!(sink[0].position, Position::new(3, 1));
    assert!(!scanner.in_text_block());
}

#[test]
fn custom_directive_prefix() {
    let config = ScanConfig::default().with_pseudo_comment_prefix('!');
    let (tokens, _) = scan_with("%!pagewidth 21cm\n%%not a directive", false, config);
    assert_eq!(tokens[0].kind, TokenKind::StyleSheet);
    assert_eq!(tokens[0].value_str(), Some("pagewidth 21cm"));
    assert_eq!(tokens[1].kind, TokenKind::Comment);
}

#[test]
fn crlf_terminator() {
    let config = ScanConfig::default().with_line_terminator(crate::LineTerminator::CrLf);
    let (tokens, _) = scan_with("X:1\r\n\r\nabc\r\n", true, config);
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::InformationField,
            TokenKind::BlankLine,
            TokenKind::MusicCode,
            TokenKind::Eof
        ]
    );
    assert_eq!(tokens[0].value_str(), Some("X:1"));
    assert_eq!(tokens[3].position.line, 4);
}

#[test]
fn line_count() {
    let scanner = LineScanner::new("a\nb\n\n", ScanConfig::default());
    assert_eq!(scanner.line_count(), 3);
}

proptest! {
    #[test]
    fn every_line_visited_once(
        lines in prop::collection::vec("[A-Za-z0-9 :%|\\\\]{0,12}", 0..20),
        in_tune in any::<bool>(),
    ) {
        let source = lines.join("\n");
        let (tokens, _) = scan_all(&source, in_tune);
        let line_count = SourceLines::split(&source, crate::LineTerminator::Lf).line_count();

        let eof = tokens.last().map(|t| t.position);
        prop_assert_eq!(eof, Some(Position::line_start(line_number(line_count))));
        prop_assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);

        // Each line yields exactly one token besides split-off comments.
        let visited: Vec<u32> = tokens
            .iter()
            .filter(|t| !t.is_eof())
            .filter(|t| t.kind != TokenKind::Comment || t.position.column == 1)
            .map(|t| t.position.line)
            .collect();
        let expected: Vec<u32> = (1..=line_count).map(|i| line_number(i - 1)).collect();
        prop_assert_eq!(visited, expected);
    }
}
