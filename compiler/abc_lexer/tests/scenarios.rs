//! End-to-end tokenizer scenarios over small but complete documents.
//!
//! Each test feeds a whole file through [`tokenize`] or [`FileTokenizer`] and
//! checks the exact token stream, the way a downstream parser sees it.

use abc_diagnostic::ErrorCode;
use abc_ir::{Position, TextKind, Token, TokenKind};
use abc_lexer::{tokenize, FileTokenizer, TokenizeOutput, TokenizerConfig};
use abc_lexer_core::LineTerminator;
use pretty_assertions::assert_eq;

fn run(source: &str) -> TokenizeOutput {
    run_with(source, &TokenizerConfig::default())
}

fn run_with(source: &str, config: &TokenizerConfig) -> TokenizeOutput {
    match tokenize(source, config) {
        Ok(output) => output,
        Err(fault) => panic!("tokenizer fault: {fault}"),
    }
}

/// `Kind` or `Kind("value")` for compact stream comparisons.
fn summary(tokens: &[Token]) -> Vec<String> {
    tokens
        .iter()
        .map(|t| match t.value_str() {
            Some(value) => format!("{}({value:?})", t.kind),
            None => t.kind.to_string(),
        })
        .collect()
}

#[test]
fn minimal_tune() {
    let output = run("%abc-2.1\nX:1\nT:Test\nK:C\nabc|\n\n");
    assert_eq!(
        summary(&output.tokens),
        vec![
            r#"AbcDeclaration("2.1")"#,
            "TuneHeaderStart",
            r#"InformationField("X:1")"#,
            r#"InformationField("T:Test")"#,
            r#"InformationField("K:C")"#,
            "TuneHeaderEnd",
            "TuneBodyStart",
            r#"MusicCode("abc|")"#,
            "TuneBodyEnd",
            "EOF",
        ]
    );
    assert!(output.diagnostics.is_empty());
}

#[test]
fn trailing_comment_in_tune_body() {
    let output = run("%abc-2.1\nX:1\nK:C\nA B % comment\n");
    let body: Vec<_> = output
        .tokens
        .iter()
        .skip_while(|t| t.kind != TokenKind::MusicCode)
        .take(2)
        .collect();
    assert_eq!(body.len(), 2);
    assert_eq!(body[0].kind, TokenKind::MusicCode);
    assert_eq!(body[0].value_str(), Some("A B "));
    assert_eq!(body[1].kind, TokenKind::Comment);
    assert_eq!(body[1].value_str(), Some("comment"));
    assert_eq!(body[1].position, Position::new(4, 5));
    assert_eq!(body[0].position.line, body[1].position.line);
}

#[test]
fn unsupported_version_is_reported_and_tokenizing_continues() {
    let mut errors = Vec::new();
    let mut tokenizer = FileTokenizer::new("%abc-1.0\nX:1\nK:C\nabc\n");
    tokenizer.register_error_observer(|token| errors.push(token));
    let tokens = tokenizer.by_ref().collect::<Result<Vec<_>, _>>();
    drop(tokenizer);
    let Ok(tokens) = tokens else {
        panic!("unexpected fault");
    };

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, TokenKind::Error);
    assert_eq!(errors[0].position, Position::new(1, 1));
    assert!(errors[0]
        .value_str()
        .is_some_and(|m| m.contains("unsupported version")));

    assert_eq!(tokens[0].kind, TokenKind::AbcDeclaration);
    assert_eq!(tokens[0].value_str(), Some("1.0"));
    assert!(tokens.iter().any(|t| t.kind == TokenKind::MusicCode));
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
}

#[test]
fn empty_document_is_only_eof() {
    let output = run("");
    assert_eq!(output.tokens, vec![Token::eof(Position::new(1, 1))]);
    assert!(output.diagnostics.is_empty());
}

#[test]
fn file_with_header_two_tunes_and_text() {
    let source = "\
%abc-2.1
%%pagewidth 21cm
C:Traditional

A few words before the tunes.

X:1
T:The Kesh
M:6/8
K:G
GAG GAB|ABA ABd|
edd gdd|edB dBA|

%%begintext
%%Played twice through.
%%endtext

X:2
T:Out on the Ocean
K:G
|:GE|D2B BAG|
";
    let output = run(source);
    assert!(output.diagnostics.is_empty(), "{:?}", output.diagnostics);
    assert_eq!(
        summary(&output.tokens),
        vec![
            r#"AbcDeclaration("2.1")"#,
            "FileHeaderStart",
            r#"StyleSheet("pagewidth 21cm")"#,
            r#"InformationField("C:Traditional")"#,
            "FileHeaderEnd",
            r#"FreeText("A few words before the tunes.")"#,
            "TuneHeaderStart",
            r#"InformationField("X:1")"#,
            r#"InformationField("T:The Kesh")"#,
            r#"InformationField("M:6/8")"#,
            r#"InformationField("K:G")"#,
            "TuneHeaderEnd",
            "TuneBodyStart",
            r#"MusicCode("GAG GAB|ABA ABd|")"#,
            r#"MusicCode("edd gdd|edB dBA|")"#,
            "TuneBodyEnd",
            "Text(BeginText)",
            r#"Text(Text)("Played twice through.")"#,
            "Text(EndText)",
            "TuneHeaderStart",
            r#"InformationField("X:2")"#,
            r#"InformationField("T:Out on the Ocean")"#,
            r#"InformationField("K:G")"#,
            "TuneHeaderEnd",
            "TuneBodyStart",
            r#"MusicCode("|:GE|D2B BAG|")"#,
            "TuneBodyEnd",
            "EOF",
        ]
    );
}

#[test]
fn tune_without_music() {
    let output = run("%abc-2.1\n\nX:1\nT:Header only\nK:D\n\nX:2\nK:A\n");
    let kinds: Vec<_> = output.tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::AbcDeclaration,
            TokenKind::TuneHeaderStart,
            TokenKind::InformationField,
            TokenKind::InformationField,
            TokenKind::InformationField,
            TokenKind::TuneHeaderEnd,
            TokenKind::TuneHeaderStart,
            TokenKind::InformationField,
            TokenKind::InformationField,
            TokenKind::TuneHeaderEnd,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn recovery_from_section_errors() {
    let source = "\
%abc-2.1
C:Header
Free text inside the header

T:Missing index
abc
%%newpage
";
    let output = run(source);
    let codes: Vec<_> = output.diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(
        codes,
        vec![ErrorCode::E1006, ErrorCode::E1009, ErrorCode::E1018]
    );
    assert_eq!(output.diagnostics[1].position, Position::new(5, 1));

    let kinds: Vec<_> = output.tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::AbcDeclaration,
            TokenKind::FileHeaderStart,
            TokenKind::InformationField,
            TokenKind::FileHeaderEnd,
            TokenKind::FreeText,
            TokenKind::TuneHeaderStart,
            TokenKind::InformationField,
            TokenKind::TuneHeaderEnd,
            TokenKind::TuneBodyStart,
            TokenKind::MusicCode,
            TokenKind::StyleSheet,
            TokenKind::TuneBodyEnd,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn field_in_free_text_starts_a_tune() {
    let output = run("%abc-2.1\n\nSome prose\nX:1\nK:C\nabc");
    let codes: Vec<_> = output.diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![ErrorCode::E1011]);
    let kinds: Vec<_> = output.tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds[..4],
        [
            TokenKind::AbcDeclaration,
            TokenKind::FreeText,
            TokenKind::TuneHeaderStart,
            TokenKind::InformationField,
        ]
    );
}

#[test]
fn blank_first_line() {
    let output = run("\nX:1\nK:C\nabc");
    let codes: Vec<_> = output.diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![ErrorCode::E1003]);
    assert_eq!(output.tokens[0].kind, TokenKind::TuneHeaderStart);
}

#[test]
fn typeset_text_interrupted() {
    let output = run("%abc-2.1\n\n%%center Title\nSome prose\n%%vskip 1cm\n");
    let codes: Vec<_> = output.diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![ErrorCode::E1016, ErrorCode::E1012]);
    let subkind = output.tokens.iter().find_map(Token::subkind);
    assert_eq!(subkind, Some(TextKind::Center));
}

#[test]
fn crlf_documents() {
    let source = "%abc-2.1\r\nX:1\r\nK:C\r\nabc\r\n";
    let config = TokenizerConfig::default().with_line_terminator(LineTerminator::CrLf);
    let output = run_with(source, &config);
    assert!(output.diagnostics.is_empty());
    assert_eq!(output.tokens[0].value_str(), Some("2.1"));
    assert_eq!(
        output.tokens.last().map(|t| t.position),
        Some(Position::new(5, 1))
    );

    let detected = TokenizerConfig::default().with_line_terminator(LineTerminator::detect(source));
    assert_eq!(run_with(source, &detected).tokens, output.tokens);
}

#[test]
fn decoded_field_values_keep_original_line() {
    let output = run("%abc-2.1\nX:1\nT:Caf\\'e &amp; Bar\nK:C\n");
    let title = output
        .tokens
        .iter()
        .find(|t| t.value_str().is_some_and(|v| v.starts_with("T:")));
    let Some(title) = title else {
        panic!("no title field");
    };
    assert_eq!(title.value_str(), Some("T:Café & Bar"));
    assert_eq!(title.original_line.as_deref(), Some("T:Caf\\'e &amp; Bar"));

    let raw = run_with(
        "%abc-2.1\nX:1\nT:Caf\\'e\nK:C\n",
        &TokenizerConfig::default().with_decode_text(false),
    );
    assert!(raw
        .tokens
        .iter()
        .any(|t| t.value_str() == Some("T:Caf\\'e")));
}

#[test]
fn newer_supported_version() {
    let config = TokenizerConfig::default().with_supported_version("2.2");
    let output = run_with("%abc-2.2\nX:1\nK:C\n", &config);
    assert!(output.diagnostics.is_empty());
    assert_eq!(run("%abc-2.2\nX:1\nK:C\n").error_count(), 1);
}

#[test]
fn suffixed_endtext_still_closes_the_block() {
    let output = run("%abc-2.1\n\n%%begintext\n%%foo\n%%endtextX\n\nX:1\nK:C\nabc|\n");
    let codes: Vec<_> = output.diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![ErrorCode::W0001]);

    let end = output
        .tokens
        .iter()
        .find(|t| t.subkind() == Some(TextKind::EndText))
        .map(|t| t.position);
    assert_eq!(end, Some(Position::new(5, 1)));

    let kinds: Vec<_> = output.tokens.iter().map(|t| t.kind).collect();
    assert!(kinds.contains(&TokenKind::TuneHeaderStart));
    assert!(output
        .tokens
        .iter()
        .any(|t| t.kind == TokenKind::MusicCode && t.value_str() == Some("abc|")));
}
