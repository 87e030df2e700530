//! Opening the target file and mapping its contents
//!
//! External collaborator to the scan core: everything downstream sees only
//! a read-only byte slice and its length.
use log::debug;
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;

use crate::error::{PargrepError, Result};

/// A read-only view of one file's full contents.
pub struct MappedFile {
    mmap: Mmap,
}

impl MappedFile {
    /// Open `path` and map it read-only. Empty files are rejected here so
    /// the scan core never sees a zero-length buffer.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            PargrepError::Setup(format!("cannot open {}: {e}", path.display()))
        })?;

        let len = file.metadata().map_err(PargrepError::Io)?.len();
        if len == 0 {
            return Err(PargrepError::Setup(format!(
                "{} is empty",
                path.display()
            )));
        }

        debug!("mapping {} ({len} bytes)", path.display());
        let mmap = unsafe { Mmap::map(&file) }.map_err(PargrepError::Io)?;
        Ok(Self { mmap })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.mmap
    }

    pub fn len(&self) -> usize {
        self.mmap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mmap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn maps_file_contents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.txt");
        fs::write(&path, "hello\nworld\n").unwrap();

        let mapped = MappedFile::open(&path).unwrap();
        assert_eq!(mapped.bytes(), b"hello\nworld\n");
        assert_eq!(mapped.len(), 12);
    }

    #[test]
    fn empty_file_is_a_setup_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        fs::write(&path, "").unwrap();

        assert!(matches!(
            MappedFile::open(&path),
            Err(PargrepError::Setup(_))
        ));
    }

    #[test]
    fn missing_file_is_a_setup_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        assert!(matches!(
            MappedFile::open(&path),
            Err(PargrepError::Setup(_))
        ));
    }
}
