// Author: Dustin Pilgrim
// License: MIT

use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::error::{ConfigError, Result};
use crate::fs::{FileSystem, OsFileSystem};
use crate::lexer::Lexer;
use crate::parser::{self, Parser};
use crate::value::{Value, ValueKind};

mod access;
mod conversion;

/// A parsed libconfig document. The root is always a group.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    root: Value,
}

impl Config {
    /// An empty configuration.
    pub fn new() -> Self {
        Config {
            root: Value::empty_group(),
        }
    }

    pub fn from_group(entries: IndexMap<String, Value>) -> Self {
        Config {
            root: Value::Group(entries),
        }
    }

    /// Parse from any reader. The reader is drained first; a read error is
    /// treated as empty input.
    ///
    /// Includes resolve against the working directory.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Parser::new(Lexer::from_reader(reader)).parse()
    }

    /// Load a config file. Includes resolve against the file's directory.
    ///
    /// # Example
    /// ```no_run
    /// # use libconfig::Config;
    /// let config = Config::from_file("app.cfg")?;
    /// let port = config.lookup_int("server.port")?;
    /// # Ok::<(), libconfig::ConfigError>(())
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_file_with(path, &OsFileSystem)
    }

    /// Load a config file, reading it and everything it includes through `fs`.
    pub fn from_file_with<P: AsRef<Path>>(path: P, fs: &dyn FileSystem) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("parsing config file '{}'", path.display());
        parser::parse_file(fs, path, 0)
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Top-level settings in document order.
    pub fn entries(&self) -> &IndexMap<String, Value> {
        match &self.root {
            Value::Group(entries) => entries,
            _ => unreachable!("config root is always a group"),
        }
    }

    pub(crate) fn into_root_entries(self) -> IndexMap<String, Value> {
        match self.root {
            Value::Group(entries) => entries,
            _ => IndexMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    /// Parse from a string. Includes resolve against the working directory.
    fn from_str(content: &str) -> Result<Self> {
        Parser::new(Lexer::new(content)).parse()
    }
}

fn type_mismatch(path: &str, expected: ValueKind, found: &Value) -> ConfigError {
    ConfigError::TypeMismatch {
        path: path.to_string(),
        expected,
        found: found.kind(),
    }
}
