use std::ffi::OsString;
use std::path::Path;

use super::*;
use crate::value::Value;

/// Suffixes tried, in order, when the literal include path does not exist.
const INCLUDE_EXTENSIONS: [&str; 2] = [".cnf", ".cfg"];

/// `@include "path"`: parse the named file and merge its top-level settings
/// into `target`, replacing same-named entries.
pub(super) fn parse_include(parser: &mut Parser, target: &mut IndexMap<String, Value>) -> Result<()> {
    let directive = parser.advance();

    if parser.include_depth >= MAX_INCLUDE_DEPTH {
        return Err(ConfigError::IncludeDepthExceeded {
            limit: MAX_INCLUDE_DEPTH,
            line: directive.line,
        });
    }

    if !parser.at(TokenKind::String) {
        let token = parser.current();
        if token.kind == TokenKind::Error {
            return Err(parser.unexpected(TokenKind::String.as_str()));
        }
        return Err(ConfigError::ExpectedIncludePath {
            found: token.kind,
            line: token.line,
            column: token.column,
        });
    }
    let requested = parser.advance().value;
    parser.skip(TokenKind::Semicolon);

    let tried = candidate_paths(parser.base_dir.as_deref(), &requested);
    let Some(path) = tried.iter().find(|p| parser.fs.exists(p)).cloned() else {
        log::debug!("include '{}' not found, tried {:?}", requested, tried);
        return Err(ConfigError::IncludeNotFound {
            path: requested,
            tried,
        });
    };

    log::debug!(
        "including '{}' at depth {}",
        path.display(),
        parser.include_depth + 1
    );

    let included = parse_file(parser.fs, &path, parser.include_depth + 1).map_err(|e| {
        ConfigError::IncludeFailed {
            path: path.clone(),
            source: Box::new(e),
        }
    })?;

    merge_group(target, included.into_root_entries());
    Ok(())
}

/// The literal path (joined onto `base_dir`), then the same path with each known extension.
fn candidate_paths(base_dir: Option<&Path>, requested: &str) -> Vec<PathBuf> {
    let full = match base_dir {
        Some(dir) => dir.join(requested),
        None => PathBuf::from(requested),
    };

    let mut candidates = vec![full.clone()];
    for ext in INCLUDE_EXTENSIONS {
        let mut with_ext = OsString::from(full.as_os_str());
        with_ext.push(ext);
        candidates.push(PathBuf::from(with_ext));
    }
    candidates
}

/// Parse a file as an independent document at the given include depth.
///
/// Nested includes inside it resolve against its own directory.
pub(crate) fn parse_file(fs: &dyn FileSystem, path: &Path, depth: usize) -> Result<Config> {
    let content = fs
        .read_to_string(path)
        .map_err(|e| ConfigError::FileError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let mut parser = Parser::new(Lexer::new(&content))
        .with_file_system(fs)
        .at_depth(depth);
    if let Some(dir) = path.parent() {
        parser = parser.with_base_dir(dir);
    }
    parser.parse()
}

/// Shallow union: every entry of `source` overwrites the same key in `target`.
fn merge_group(target: &mut IndexMap<String, Value>, source: IndexMap<String, Value>) {
    for (key, value) in source {
        target.insert(key, value);
    }
}
