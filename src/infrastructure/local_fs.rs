use crate::domain::ports::FileProbe;
use std::fs::{self, File};
use std::path::Path;

/// Checks paths against the real filesystem.
///
/// Readability is tested by opening the file; the handle is dropped before
/// returning.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileSystem;

impl FileProbe for LocalFileSystem {
    fn is_openable(&self, path: &Path) -> bool {
        match fs::metadata(path) {
            Ok(metadata) if metadata.is_file() => File::open(path).is_ok(),
            _ => false,
        }
    }
}
