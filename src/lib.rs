//! Parser and typed lookup API for the libconfig configuration format.
//!
//! ```
//! use libconfig::Config;
//! use std::str::FromStr;
//!
//! # fn main() -> Result<(), libconfig::ConfigError> {
//! let config = Config::from_str(r#"
//!     name = "MyApp";
//!     port = 8080;
//!     database = { host = "localhost"; };
//! "#)?;
//!
//! assert_eq!(config.lookup_string("name")?, "MyApp");
//! assert_eq!(config.lookup_int("port")?, 8080);
//! assert_eq!(config.lookup_string("database.host")?, "localhost");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod fs;
pub mod lexer;
pub mod parser;
pub mod value;

pub use config::Config;
pub use error::{ConfigError, Result};
pub use fs::{FileSystem, OsFileSystem};
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::{MAX_INCLUDE_DEPTH, Parser};
pub use value::{Value, ValueKind};
