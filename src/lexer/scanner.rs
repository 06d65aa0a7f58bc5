use std::str::Chars;

use super::{Token, TokenKind};

/// Character cursor with one character of lookahead and position tracking.
pub(super) struct Scanner<'a> {
    input: Chars<'a>,
    pub(super) peek: Option<char>,
    line: usize,
    column: usize,
}

impl<'a> Scanner<'a> {
    pub(super) fn new(input: &'a str) -> Self {
        let mut input = input.chars();
        let peek = input.next();
        Scanner {
            input,
            peek,
            line: 1,
            column: 1,
        }
    }

    /// Position of the character in `peek`.
    pub(super) fn position(&self) -> (usize, usize) {
        (self.line, self.column)
    }

    /// The character after `peek`, without consuming anything.
    pub(super) fn peek_next(&self) -> Option<char> {
        self.input.clone().next()
    }
}

/// Advance the character iterator and update line/column tracking
pub(super) fn bump(scanner: &mut Scanner) -> Option<char> {
    let curr = scanner.peek;
    if let Some(c) = curr {
        if c == '\n' {
            scanner.line += 1;
            scanner.column = 1;
        } else {
            scanner.column += 1;
        }
    }
    scanner.peek = scanner.input.next();
    curr
}

/// Consume characters matching `pred` into `out`.
pub(super) fn take_while(scanner: &mut Scanner, out: &mut String, pred: impl Fn(char) -> bool) {
    while let Some(c) = scanner.peek {
        if !pred(c) {
            break;
        }
        out.push(c);
        bump(scanner);
    }
}

/// Skip whitespace and comments.
///
/// Returns an error token if a block comment is still open at end of input.
pub(super) fn skip_whitespace_and_comments(scanner: &mut Scanner) -> Option<Token> {
    while let Some(c) = scanner.peek {
        match c {
            c if c.is_whitespace() => {
                bump(scanner);
            }
            '#' => skip_line(scanner),
            '/' if scanner.peek_next() == Some('/') => skip_line(scanner),
            '/' if scanner.peek_next() == Some('*') => {
                let (line, column) = scanner.position();
                bump(scanner);
                bump(scanner);
                if !skip_block_comment(scanner) {
                    return Some(Token::new(TokenKind::Error, "/*", line, column));
                }
            }
            _ => break,
        }
    }
    None
}

fn skip_line(scanner: &mut Scanner) {
    while let Some(c) = scanner.peek {
        if c == '\n' {
            break;
        }
        bump(scanner);
    }
}

/// Returns false when input ends before the closing `*/`.
fn skip_block_comment(scanner: &mut Scanner) -> bool {
    while let Some(c) = bump(scanner) {
        if c == '*' && scanner.peek == Some('/') {
            bump(scanner);
            return true;
        }
    }
    false
}
