// Author: Dustin Pilgrim
// License: MIT

use std::path::PathBuf;

use thiserror::Error;

use crate::lexer::TokenKind;
use crate::value::ValueKind;

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Everything that can go wrong while parsing or querying a configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A token appeared where the grammar wanted something else.
    #[error("expected {expected}, got {found} '{text}' at line {line}, column {column}")]
    UnexpectedToken {
        expected: String,
        found: TokenKind,
        text: String,
        line: usize,
        column: usize,
    },

    /// The lexer could not make sense of a character or `@` directive.
    #[error("invalid token '{token}' at line {line}, column {column}")]
    InvalidToken {
        token: String,
        line: usize,
        column: usize,
    },

    #[error("unterminated string starting at line {line}, column {column}")]
    UnterminatedString { line: usize, column: usize },

    #[error("unterminated comment starting at line {line}, column {column}")]
    UnterminatedComment { line: usize, column: usize },

    #[error("expected string after @include, got {found} at line {line}, column {column}")]
    ExpectedIncludePath {
        found: TokenKind,
        line: usize,
        column: usize,
    },

    #[error("invalid integer literal '{literal}' at line {line}, column {column}: {reason}")]
    InvalidInteger {
        literal: String,
        reason: String,
        line: usize,
        column: usize,
    },

    #[error("invalid float literal '{literal}' at line {line}, column {column}: {reason}")]
    InvalidFloat {
        literal: String,
        reason: String,
        line: usize,
        column: usize,
    },

    /// Array elements must all share the kind of the first element.
    #[error("array elements must have the same type, got {expected} and {found} at line {line}, column {column}")]
    ArrayTypeMismatch {
        expected: ValueKind,
        found: ValueKind,
        line: usize,
        column: usize,
    },

    #[error("include file '{path}' not found (tried: {})", display_paths(tried))]
    IncludeNotFound { path: String, tried: Vec<PathBuf> },

    #[error("include depth limit exceeded ({limit}) at line {line}")]
    IncludeDepthExceeded { limit: usize, line: usize },

    /// Wraps an error raised while parsing an included file.
    #[error("error parsing included file '{}': {source}", path.display())]
    IncludeFailed {
        path: PathBuf,
        source: Box<ConfigError>,
    },

    #[error("failed to read '{}': {message}", path.display())]
    FileError { path: PathBuf, message: String },

    #[error("cannot look up '{segment}' in non-group value")]
    NotAGroup { segment: String },

    #[error("setting '{segment}' not found")]
    SettingNotFound { segment: String },

    #[error("value at '{path}' is {found}, expected {expected}")]
    TypeMismatch {
        path: String,
        expected: ValueKind,
        found: ValueKind,
    },

    #[error("integer {value} at '{path}' is out of range for the requested type")]
    IntegerOutOfRange { path: String, value: i64 },
}

impl ConfigError {
    /// Stable numeric code: 1xx lexical, 2xx syntax, 3xx file/include, 4xx lookup.
    pub fn code(&self) -> u32 {
        match self {
            ConfigError::InvalidToken { .. } => 101,
            ConfigError::UnterminatedString { .. } => 102,
            ConfigError::UnterminatedComment { .. } => 103,
            ConfigError::UnexpectedToken { .. } => 201,
            ConfigError::ExpectedIncludePath { .. } => 202,
            ConfigError::InvalidInteger { .. } => 203,
            ConfigError::InvalidFloat { .. } => 204,
            ConfigError::ArrayTypeMismatch { .. } => 205,
            ConfigError::IncludeNotFound { .. } => 301,
            ConfigError::IncludeDepthExceeded { .. } => 302,
            ConfigError::IncludeFailed { .. } => 303,
            ConfigError::FileError { .. } => 304,
            ConfigError::NotAGroup { .. } => 401,
            ConfigError::SettingNotFound { .. } => 402,
            ConfigError::TypeMismatch { .. } => 403,
            ConfigError::IntegerOutOfRange { .. } => 404,
        }
    }

    /// Follows `IncludeFailed` wrappers down to the error that started it.
    pub fn innermost(&self) -> &ConfigError {
        let mut current = self;
        while let ConfigError::IncludeFailed { source, .. } = current {
            current = &**source;
        }
        current
    }

    /// True for errors produced by lookups on an already parsed config.
    pub fn is_lookup_error(&self) -> bool {
        matches!(
            self,
            ConfigError::NotAGroup { .. }
                | ConfigError::SettingNotFound { .. }
                | ConfigError::TypeMismatch { .. }
                | ConfigError::IntegerOutOfRange { .. }
        )
    }

    /// Line and column of the offending input, when the error has one.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self.innermost() {
            ConfigError::UnexpectedToken { line, column, .. }
            | ConfigError::InvalidToken { line, column, .. }
            | ConfigError::UnterminatedString { line, column }
            | ConfigError::UnterminatedComment { line, column }
            | ConfigError::ExpectedIncludePath { line, column, .. }
            | ConfigError::InvalidInteger { line, column, .. }
            | ConfigError::InvalidFloat { line, column, .. }
            | ConfigError::ArrayTypeMismatch { line, column, .. } => Some((*line, *column)),
            ConfigError::IncludeDepthExceeded { line, .. } => Some((*line, 0)),
            _ => None,
        }
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
