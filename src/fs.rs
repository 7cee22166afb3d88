//! Server-style reader backed by the host file system.

#[cfg(not(target_arch = "wasm32"))]
mod native;

#[cfg(not(target_arch = "wasm32"))]
use native as host;

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
use web as host;

use crate::{FileReadError, Reader};

/// Reads resources from local storage.
///
/// On native targets this is [`std::fs`]. On WASM running under Node it goes through Node's `fs`
/// module. All calls block until the host completes the read.
#[derive(Clone, Copy, Default, Debug)]
pub struct FsReader;

impl FsReader {
    pub fn new() -> Self {
        Self
    }
}

impl Reader for FsReader {
    fn name(&self) -> &'static str {
        "fs"
    }

    fn exists(&self, path: &str) -> bool {
        host::exists(path)
    }

    fn read_text(&self, path: &str) -> Result<String, FileReadError> {
        log::trace!("reading text from file {}", path);
        host::read_text(path)
    }

    fn read_bytes(&self, path: &str) -> Result<Vec<u8>, FileReadError> {
        log::trace!("reading bytes from file {}", path);
        host::read_bytes(path)
    }
}
