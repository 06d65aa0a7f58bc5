// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::io;
use std::path::Path;

/// What the parser needs from the outside world to follow `@include`.
///
/// Path joining and parent-directory computation are done with `std::path`;
/// implementors only answer existence and content questions.
pub trait FileSystem {
    fn exists(&self, path: &Path) -> bool;

    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// The real file system.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}

pub(crate) static OS_FILE_SYSTEM: OsFileSystem = OsFileSystem;
