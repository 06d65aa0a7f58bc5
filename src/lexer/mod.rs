// Author: Dustin Pilgrim
// License: MIT

use std::fmt;
use std::io::Read;

mod scanner;
mod tokenizer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // --- end ---
    Eof,

    // --- literals ---
    Identifier,
    String,
    Integer,
    Float,
    Boolean,

    // --- punctuation ---
    Assign,
    Semicolon,
    Comma,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    LeftParen,
    RightParen,

    // --- directives ---
    Include,

    Error,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::Integer => "INTEGER",
            TokenKind::Float => "FLOAT",
            TokenKind::Boolean => "BOOLEAN",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Comma => "COMMA",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::LeftBracket => "LEFT_BRACKET",
            TokenKind::RightBracket => "RIGHT_BRACKET",
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::Include => "INCLUDE",
            TokenKind::Error => "ERROR",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One lexical unit. `line` and `column` are 1-based and point at its first character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub value: String,
    pub kind: TokenKind,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, line: usize, column: usize) -> Self {
        Token {
            value: value.into(),
            kind,
            line,
            column,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}: {:?} at {}:{}}}", self.kind, self.value, self.line, self.column)
    }
}

/// Tokenizes the whole input up front and hands tokens out through a cursor.
///
/// The token list always ends with a single `Eof` token; once the cursor
/// reaches it, `next_token` and `peek_token` keep returning it.
#[derive(Debug, Clone)]
pub struct Lexer {
    tokens: Vec<Token>,
    pos: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            tokens: tokenizer::tokenize(input),
            pos: 0,
        }
    }

    /// Reads the reader to the end first. A read error is treated as empty input.
    pub fn from_reader<R: Read>(mut reader: R) -> Self {
        let mut input = String::new();
        if let Err(e) = reader.read_to_string(&mut input) {
            log::debug!("reader failed, lexing empty input instead: {}", e);
            input.clear();
        }
        Self::new(&input)
    }

    pub fn next_token(&mut self) -> Token {
        let token = self.peek_token().clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    pub fn peek_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// All tokens, including the ones already consumed.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

#[cfg(test)]
mod tests;
