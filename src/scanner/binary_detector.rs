use crate::config::DEFAULT_SNIFF_BYTES;
use crate::error::{Result, UpdaterError};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Treats a file as binary when a null byte appears in its leading bytes.
pub struct BinaryDetector {
    sniff_bytes: usize,
}

impl BinaryDetector {
    pub fn new(sniff_bytes: usize) -> Self {
        Self {
            sniff_bytes: sniff_bytes.max(1),
        }
    }

    pub fn is_binary(&self, path: &Path) -> Result<bool> {
        let file = fs::File::open(path).map_err(|e| UpdaterError::file_open(path, e))?;

        let mut chunk = Vec::with_capacity(self.sniff_bytes);
        file.take(self.sniff_bytes as u64)
            .read_to_end(&mut chunk)
            .map_err(|e| UpdaterError::file_read(path, e))?;

        Ok(is_binary_content(&chunk))
    }
}

impl Default for BinaryDetector {
    fn default() -> Self {
        Self::new(DEFAULT_SNIFF_BYTES)
    }
}

pub fn is_binary_content(bytes: &[u8]) -> bool {
    bytes.contains(&0)
}

pub fn is_binary(path: &Path) -> Result<bool> {
    BinaryDetector::default().is_binary(path)
}
