//! Reading file contents for the report

use std::fs;
use std::io;
use std::path::Path;
use std::str::Utf8Error;

/// Result of reading one file as UTF-8 text.
#[derive(Debug)]
pub enum ReadOutcome {
    Text(String),
    /// The bytes are not valid UTF-8
    Decode(Utf8Error),
    /// The file could not be read at all
    Io(io::Error),
}

/// Read a file byte-for-byte and decode it as UTF-8.
///
/// Line endings are kept as they are on disk.
pub fn read_text(path: &Path) -> ReadOutcome {
    match fs::read(path) {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(text) => ReadOutcome::Text(text),
            Err(e) => ReadOutcome::Decode(e.utf8_error()),
        },
        Err(e) => ReadOutcome::Io(e),
    }
}
