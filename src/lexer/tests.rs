#[cfg(test)]
use super::*;

fn kinds(input: &str) -> Vec<TokenKind> {
    Lexer::new(input).tokens().iter().map(|t| t.kind).collect()
}

fn values(input: &str) -> Vec<String> {
    Lexer::new(input).tokens().iter().map(|t| t.value.clone()).collect()
}

#[test]
fn test_simple_setting() {
    let input = r#"name = "MyApp";"#;
    let mut lexer = Lexer::new(input);

    let expected_tokens = vec![
        Token::new(TokenKind::Identifier, "name", 1, 1),
        Token::new(TokenKind::Assign, "=", 1, 6),
        Token::new(TokenKind::String, "MyApp", 1, 8),
        Token::new(TokenKind::Semicolon, ";", 1, 15),
        Token::new(TokenKind::Eof, "", 1, 16),
    ];

    for expected in expected_tokens {
        let tok = lexer.next_token();
        assert_eq!(tok, expected);
    }
}

#[test]
fn test_punctuation() {
    assert_eq!(
        kinds("= : ; , { } [ ] ( )"),
        vec![
            TokenKind::Assign,
            TokenKind::Assign,
            TokenKind::Semicolon,
            TokenKind::Comma,
            TokenKind::LeftBrace,
            TokenKind::RightBrace,
            TokenKind::LeftBracket,
            TokenKind::RightBracket,
            TokenKind::LeftParen,
            TokenKind::RightParen,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_positions_across_lines() {
    let input = "a = 1;\n  group = {\n    b = 2;\n  };";
    let lexer = Lexer::new(input);
    let b = lexer
        .tokens()
        .iter()
        .find(|t| t.value == "b")
        .expect("token b");
    assert_eq!((b.line, b.column), (3, 5));

    let group = lexer
        .tokens()
        .iter()
        .find(|t| t.value == "group")
        .expect("token group");
    assert_eq!((group.line, group.column), (2, 3));
}

#[test]
fn test_comments_are_skipped() {
    let input = r#"
// line comment
# script comment
/* block
   comment */ a = 1; // trailing
"#;
    assert_eq!(
        kinds(input),
        vec![
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Integer,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_empty_and_trivia_only_input() {
    for input in ["", "   \t\r\n\x0B ", "// only", "# only", "/* only */"] {
        assert_eq!(kinds(input), vec![TokenKind::Eof], "input {:?}", input);
    }
}

#[test]
fn test_unterminated_block_comment() {
    let lexer = Lexer::new("a = 1;\n/* never closed");
    let err = &lexer.tokens()[4];
    assert_eq!(err.kind, TokenKind::Error);
    assert_eq!(err.value, "/*");
    assert_eq!((err.line, err.column), (2, 1));
    assert_eq!(lexer.tokens()[5].kind, TokenKind::Eof);
}

#[test]
fn test_number_classification() {
    let input = "42 -7 3.14 -0.5 1e10 2.5E-3 0xFF 0b1010 0o755 0Q17 42L 0x10l";
    assert_eq!(
        kinds(input),
        vec![
            TokenKind::Integer,
            TokenKind::Integer,
            TokenKind::Float,
            TokenKind::Float,
            TokenKind::Float,
            TokenKind::Float,
            TokenKind::Integer,
            TokenKind::Integer,
            TokenKind::Integer,
            TokenKind::Integer,
            TokenKind::Integer,
            TokenKind::Integer,
            TokenKind::Eof,
        ]
    );
    assert_eq!(
        values(input)[..12],
        ["42", "-7", "3.14", "-0.5", "1e10", "2.5E-3", "0xFF", "0b1010", "0o755", "0Q17", "42L", "0x10l"]
    );
}

#[test]
fn test_prefixed_number_keeps_invalid_digits() {
    assert_eq!(values("0b102"), vec!["0b102", ""]);
    assert_eq!(values("0o789"), vec!["0o789", ""]);
}

#[test]
fn test_dot_without_digit_is_not_float() {
    assert_eq!(
        kinds("1."),
        vec![TokenKind::Integer, TokenKind::Error, TokenKind::Eof]
    );
}

#[test]
fn test_minus_without_digit_is_error() {
    assert_eq!(
        kinds("- 1"),
        vec![TokenKind::Error, TokenKind::Integer, TokenKind::Eof]
    );
}

#[test]
fn test_string_escapes() {
    let input = r#""a\nb\tc\\d\"e\r\b\f\a\v\x41\q""#;
    let mut lexer = Lexer::new(input);
    let tok = lexer.next_token();
    assert_eq!(tok.kind, TokenKind::String);
    assert_eq!(tok.value, "a\nb\tc\\d\"e\r\u{08}\u{0C}\u{07}\u{0B}Aq");
}

#[test]
fn test_short_hex_escape_is_dropped() {
    let mut lexer = Lexer::new(r#""\x4g""#);
    assert_eq!(lexer.next_token().value, "g");
}

#[test]
fn test_unterminated_string_is_error() {
    let lexer = Lexer::new("name = \"abc");
    let tok = &lexer.tokens()[2];
    assert_eq!(tok.kind, TokenKind::Error);
    assert_eq!(tok.value, "\"abc");
    assert_eq!((tok.line, tok.column), (1, 8));
}

#[test]
fn test_identifiers_and_booleans() {
    let input = "foo-bar _x *wild a1 TRUE False tRuE truey";
    let tokens = Lexer::new(input).tokens().to_vec();
    let pairs: Vec<(TokenKind, &str)> = tokens.iter().map(|t| (t.kind, t.value.as_str())).collect();
    assert_eq!(
        pairs,
        vec![
            (TokenKind::Identifier, "foo-bar"),
            (TokenKind::Identifier, "_x"),
            (TokenKind::Identifier, "*wild"),
            (TokenKind::Identifier, "a1"),
            (TokenKind::Boolean, "true"),
            (TokenKind::Boolean, "false"),
            (TokenKind::Boolean, "true"),
            (TokenKind::Identifier, "truey"),
            (TokenKind::Eof, ""),
        ]
    );
}

#[test]
fn test_include_directive() {
    let tokens = Lexer::new(r#"@include "other.cfg" @import @"#).tokens().to_vec();
    assert_eq!(tokens[0].kind, TokenKind::Include);
    assert_eq!(tokens[0].value, "@include");
    assert_eq!(tokens[1].kind, TokenKind::String);
    assert_eq!(tokens[2].kind, TokenKind::Error);
    assert_eq!(tokens[2].value, "@import");
    assert_eq!(tokens[3].kind, TokenKind::Error);
    assert_eq!(tokens[3].value, "@");
}

#[test]
fn test_unrecognized_character_continues() {
    let tokens = Lexer::new("a = $ 1").tokens().to_vec();
    assert_eq!(tokens[2].kind, TokenKind::Error);
    assert_eq!(tokens[2].value, "$");
    assert_eq!(tokens[3].kind, TokenKind::Integer);
}

#[test]
fn test_cursor_is_idempotent_at_end() {
    let mut lexer = Lexer::new("a");
    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);

    let first_eof = lexer.next_token();
    assert_eq!(first_eof.kind, TokenKind::Eof);
    for _ in 0..3 {
        assert_eq!(lexer.peek_token(), &first_eof);
        assert_eq!(lexer.next_token(), first_eof);
    }
}

#[test]
fn test_reader_error_is_empty_input() {
    struct FailingReader;
    impl std::io::Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("boom"))
        }
    }

    let lexer = Lexer::from_reader(FailingReader);
    assert_eq!(lexer.tokens().len(), 1);
    assert_eq!(lexer.peek_token().kind, TokenKind::Eof);
}

#[test]
fn test_token_display() {
    let token = Token::new(TokenKind::String, "hi", 2, 5);
    assert_eq!(token.to_string(), r#"{STRING: "hi" at 2:5}"#);
    assert_eq!(TokenKind::RightBracket.to_string(), "RIGHT_BRACKET");
    assert_eq!(TokenKind::Eof.to_string(), "EOF");
}
