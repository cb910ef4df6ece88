use memmap2::Mmap;
use std::fs::File;
use std::ops::Deref;
use std::path::Path;
use tracing::debug;

use crate::error::Result;

/// Read-only, random-access view of a whole measurements file.
pub enum InputBuffer {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

impl InputBuffer {
    /// Memory-map `path`; empty files are not mapped.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let len = file.metadata()?.len();

        if len == 0 {
            debug!(path = %path.display(), "input file is empty");
            return Ok(Self::Owned(Vec::new()));
        }

        // The mapping is only ever read; concurrent truncation of the file by
        // another process is outside what this tool supports.
        let mmap = unsafe { Mmap::map(&file)? };
        debug!(path = %path.display(), bytes = len, "mapped input file");

        Ok(Self::Mapped(mmap))
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self::Owned(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Mapped(mmap) => &mmap[..],
            Self::Owned(bytes) => bytes.as_slice(),
        }
    }
}

impl Deref for InputBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_open_maps_file_contents() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "Hamburg;12.3")?;

        let buffer = InputBuffer::open(temp_file.path())?;

        assert!(matches!(buffer, InputBuffer::Mapped(_)));
        assert_eq!(&buffer[..], b"Hamburg;12.3\n");
        assert_eq!(buffer.len(), 13);

        Ok(())
    }

    #[test]
    fn test_open_empty_file() -> Result<()> {
        let temp_file = NamedTempFile::new()?;

        let buffer = InputBuffer::open(temp_file.path())?;

        assert!(buffer.is_empty());

        Ok(())
    }

    #[test]
    fn test_open_missing_file_is_io_error() {
        let result = InputBuffer::open(Path::new("does/not/exist.txt"));
        assert!(matches!(result, Err(crate::error::ProcessingError::Io(_))));
    }
}
