use std::path::Path;

use crate::FileReadError;

pub(super) fn exists(path: &str) -> bool {
    Path::new(path).exists()
}

pub(super) fn read_text(path: &str) -> Result<String, FileReadError> {
    std::fs::read_to_string(path).map_err(|e| FileReadError::new(path, e))
}

pub(super) fn read_bytes(path: &str) -> Result<Vec<u8>, FileReadError> {
    std::fs::read(path).map_err(|e| FileReadError::new(path, e))
}
