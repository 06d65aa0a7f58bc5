// Author: Dustin Pilgrim
// License: MIT

use std::path::PathBuf;

use indexmap::IndexMap;

use crate::config::Config;
use crate::error::{ConfigError, Result};
use crate::fs::{FileSystem, OS_FILE_SYSTEM};
use crate::lexer::{Lexer, Token, TokenKind};

mod document;
mod include;
mod literal;
mod value;

pub(crate) use include::parse_file;
pub use literal::parse_integer_literal;

/// Includes nested deeper than this fail, whether or not they form a cycle.
pub const MAX_INCLUDE_DEPTH: usize = 10;

/// Recursive-descent parser over a [`Lexer`]'s token cursor.
///
/// Each parser handles exactly one document. Included files get their own
/// parser with `include_depth + 1` and their own directory as base.
pub struct Parser<'fs> {
    lexer: Lexer,
    current: Token,
    base_dir: Option<PathBuf>,
    include_depth: usize,
    fs: &'fs dyn FileSystem,
}

impl Parser<'static> {
    /// A parser that resolves includes against the process working directory.
    pub fn new(lexer: Lexer) -> Self {
        let mut lexer = lexer;
        let current = lexer.next_token();
        Parser {
            lexer,
            current,
            base_dir: None,
            include_depth: 0,
            fs: &OS_FILE_SYSTEM,
        }
    }
}

impl<'fs> Parser<'fs> {
    /// Resolve relative `@include` paths against `dir`.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Read included files through `fs` instead of the real file system.
    pub fn with_file_system<'a>(self, fs: &'a dyn FileSystem) -> Parser<'a> {
        Parser {
            lexer: self.lexer,
            current: self.current,
            base_dir: self.base_dir,
            include_depth: self.include_depth,
            fs,
        }
    }

    pub(crate) fn at_depth(mut self, depth: usize) -> Self {
        self.include_depth = depth;
        self
    }

    pub fn include_depth(&self) -> usize {
        self.include_depth
    }

    /// Parse the whole document into a config whose root is a group.
    ///
    /// Stops at the first error; no partial config is returned.
    pub fn parse(&mut self) -> Result<Config> {
        let mut root = IndexMap::new();
        document::parse_settings(self, &mut root, TokenKind::Eof)?;
        Ok(Config::from_group(root))
    }

    pub(crate) fn current(&self) -> &Token {
        &self.current
    }

    pub(crate) fn at(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Move to the next token, returning the one just left behind.
    pub(crate) fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        log::trace!("consume {}", self.current);
        std::mem::replace(&mut self.current, next)
    }

    pub(crate) fn skip(&mut self, kind: TokenKind) {
        if self.at(kind) {
            self.advance();
        }
    }

    pub(crate) fn expect(&mut self, expected: TokenKind) -> Result<Token> {
        if !self.at(expected) {
            return Err(self.unexpected(expected.as_str()));
        }
        Ok(self.advance())
    }

    /// Build the error for the current token not being what the grammar wants.
    ///
    /// `Error` tokens from the lexer are reported as the lexical problem they are.
    pub(crate) fn unexpected(&self, expected: &str) -> ConfigError {
        let token = &self.current;
        if token.kind == TokenKind::Error {
            return lexical_error(token);
        }
        ConfigError::UnexpectedToken {
            expected: expected.to_string(),
            found: token.kind,
            text: token.value.clone(),
            line: token.line,
            column: token.column,
        }
    }
}

fn lexical_error(token: &Token) -> ConfigError {
    let (line, column) = (token.line, token.column);
    if token.value.starts_with('"') {
        ConfigError::UnterminatedString { line, column }
    } else if token.value.starts_with("/*") {
        ConfigError::UnterminatedComment { line, column }
    } else {
        ConfigError::InvalidToken {
            token: token.value.clone(),
            line,
            column,
        }
    }
}
