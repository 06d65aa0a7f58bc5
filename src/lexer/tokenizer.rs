use super::scanner::{Scanner, bump, skip_whitespace_and_comments, take_while};
use super::{Token, TokenKind};

/// Turn the whole input into tokens, ending with exactly one `Eof`.
///
/// Lexing never stops early: anything unrecognised becomes an `Error` token
/// and the parser decides what to do with it.
pub(super) fn tokenize(input: &str) -> Vec<Token> {
    let mut scanner = Scanner::new(input);
    let mut tokens = Vec::new();

    loop {
        if let Some(error) = skip_whitespace_and_comments(&mut scanner) {
            tokens.push(error);
        }

        let (line, column) = scanner.position();
        let Some(ch) = scanner.peek else {
            break;
        };

        let token = match ch {
            '=' | ':' => tokenize_symbol(&mut scanner, TokenKind::Assign),
            ';' => tokenize_symbol(&mut scanner, TokenKind::Semicolon),
            ',' => tokenize_symbol(&mut scanner, TokenKind::Comma),
            '{' => tokenize_symbol(&mut scanner, TokenKind::LeftBrace),
            '}' => tokenize_symbol(&mut scanner, TokenKind::RightBrace),
            '[' => tokenize_symbol(&mut scanner, TokenKind::LeftBracket),
            ']' => tokenize_symbol(&mut scanner, TokenKind::RightBracket),
            '(' => tokenize_symbol(&mut scanner, TokenKind::LeftParen),
            ')' => tokenize_symbol(&mut scanner, TokenKind::RightParen),
            '"' => tokenize_string(&mut scanner),
            '@' => tokenize_directive(&mut scanner),
            c if c.is_ascii_digit() => tokenize_number(&mut scanner),
            '-' if scanner.peek_next().is_some_and(|c| c.is_ascii_digit()) => {
                tokenize_number(&mut scanner)
            }
            c if is_identifier_start(c) => tokenize_identifier_or_boolean(&mut scanner),
            _ => tokenize_symbol(&mut scanner, TokenKind::Error),
        };

        tokens.push(Token { line, column, ..token });
    }

    let (line, column) = scanner.position();
    tokens.push(Token::new(TokenKind::Eof, "", line, column));
    log::trace!("tokenized input into {} tokens", tokens.len());
    tokens
}

/// Positions are filled in by `tokenize`, so the helpers below leave them at zero.
fn token(kind: TokenKind, value: impl Into<String>) -> Token {
    Token::new(kind, value, 0, 0)
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '*'
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-' || c == '*'
}

fn tokenize_symbol(scanner: &mut Scanner, kind: TokenKind) -> Token {
    let value = bump(scanner).map(String::from).unwrap_or_default();
    token(kind, value)
}

fn tokenize_string(scanner: &mut Scanner) -> Token {
    bump(scanner); // opening quote
    let mut content = String::new();

    loop {
        match bump(scanner) {
            // Still open at end of input. The leading quote marks it for the parser.
            None => return token(TokenKind::Error, format!("\"{}", content)),
            Some('"') => break,
            Some('\\') => match bump(scanner) {
                None => return token(TokenKind::Error, format!("\"{}", content)),
                Some('n') => content.push('\n'),
                Some('r') => content.push('\r'),
                Some('t') => content.push('\t'),
                Some('b') => content.push('\u{08}'),
                Some('f') => content.push('\u{0C}'),
                Some('a') => content.push('\u{07}'),
                Some('v') => content.push('\u{0B}'),
                Some('x') => {
                    if let Some(c) = read_hex_escape(scanner) {
                        content.push(c);
                    }
                }
                Some(other) => content.push(other),
            },
            Some(c) => content.push(c),
        }
    }

    token(TokenKind::String, content)
}

/// `\xHH`: exactly two hex digits. A shorter run is dropped.
fn read_hex_escape(scanner: &mut Scanner) -> Option<char> {
    let mut hex = String::with_capacity(2);
    while hex.len() < 2 {
        match scanner.peek {
            Some(c) if c.is_ascii_hexdigit() => {
                hex.push(c);
                bump(scanner);
            }
            _ => break,
        }
    }

    if hex.len() != 2 {
        return None;
    }
    u8::from_str_radix(&hex, 16).ok().map(char::from)
}

fn tokenize_number(scanner: &mut Scanner) -> Token {
    let mut text = String::new();
    let mut kind = TokenKind::Integer;

    if scanner.peek == Some('-') {
        text.push('-');
        bump(scanner);
    }

    if scanner.peek == Some('0') {
        text.push('0');
        bump(scanner);

        match scanner.peek {
            // Base prefix: swallow the whole digit run, valid or not. The
            // parser rejects digits that don't belong to the base.
            Some(c @ ('x' | 'X' | 'b' | 'B' | 'o' | 'O' | 'q' | 'Q')) => {
                text.push(c);
                bump(scanner);
                take_while(scanner, &mut text, |c| c.is_ascii_alphanumeric());
            }
            _ => take_while(scanner, &mut text, |c| c.is_ascii_digit()),
        }
    } else {
        take_while(scanner, &mut text, |c| c.is_ascii_digit());
    }

    if scanner.peek == Some('.') && scanner.peek_next().is_some_and(|c| c.is_ascii_digit()) {
        kind = TokenKind::Float;
        text.push('.');
        bump(scanner);
        take_while(scanner, &mut text, |c| c.is_ascii_digit());
    }

    if let Some(e @ ('e' | 'E')) = scanner.peek {
        kind = TokenKind::Float;
        text.push(e);
        bump(scanner);
        if let Some(sign @ ('+' | '-')) = scanner.peek {
            text.push(sign);
            bump(scanner);
        }
        take_while(scanner, &mut text, |c| c.is_ascii_digit());
    }

    // Forced 64-bit marker, kept in the text for the parser.
    if let Some(suffix @ ('L' | 'l')) = scanner.peek {
        text.push(suffix);
        bump(scanner);
    }

    token(kind, text)
}

fn tokenize_identifier_or_boolean(scanner: &mut Scanner) -> Token {
    let mut ident = String::new();
    take_while(scanner, &mut ident, is_identifier_char);

    let lower = ident.to_lowercase();
    if lower == "true" || lower == "false" {
        token(TokenKind::Boolean, lower)
    } else {
        token(TokenKind::Identifier, ident)
    }
}

fn tokenize_directive(scanner: &mut Scanner) -> Token {
    bump(scanner); // '@'

    let mut word = String::new();
    if scanner.peek.is_some_and(is_identifier_start) {
        take_while(scanner, &mut word, is_identifier_char);
    }

    if word == "include" {
        token(TokenKind::Include, "@include")
    } else {
        token(TokenKind::Error, format!("@{}", word))
    }
}
