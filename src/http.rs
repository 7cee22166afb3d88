//! Network-style reader: one blocking GET per call.

#[cfg(not(target_arch = "wasm32"))]
mod native;

#[cfg(not(target_arch = "wasm32"))]
use native::Transport;

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
use web::Transport;

#[cfg(not(target_arch = "wasm32"))]
use crate::Config;
use crate::{FileReadError, Reader, Reason};

/// How the response body should be interpreted.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Mode {
    Text,
    Bytes,
}

struct Response {
    status: u16,
    status_text: String,
    body: Vec<u8>,
}

impl Response {
    fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }

    fn into_result(self, path: &str) -> Result<Vec<u8>, FileReadError> {
        if self.is_success() {
            Ok(self.body)
        } else {
            Err(FileReadError::new(
                path,
                Reason::Status {
                    code: self.status,
                    text: self.status_text,
                },
            ))
        }
    }
}

/// Converts text received with the `x-user-defined` charset back into bytes.
///
/// Under that charset every byte `b` of the body is decoded as a single character whose low 8 bits
/// equal `b` (`0x80..=0xFF` land on `U+F780..=U+F7FF`), so masking each character recovers the
/// original body byte for byte.
pub fn bytes_from_user_defined(text: &str) -> Vec<u8> {
    text.chars().map(|c| (c as u32 & 0xFF) as u8).collect()
}

/// Reads resources over HTTP.
///
/// In a browser this is a synchronous `XMLHttpRequest`, so relative paths resolve against the
/// page. Natively it is a blocking `reqwest` request, and relative paths resolve against the
/// configured base URL (see `Config`).
pub struct HttpReader {
    transport: Transport,
}

impl HttpReader {
    pub fn new() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::with_config(Config::global().clone())
        }

        #[cfg(target_arch = "wasm32")]
        {
            Self {
                transport: Transport::new(),
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn with_config(config: Config) -> Self {
        Self {
            transport: Transport::new(config),
        }
    }

    fn get(&self, path: &str, mode: Mode) -> Result<Response, FileReadError> {
        log::trace!("GET {} ({:?})", path, mode);
        let res = self.transport.get(path, mode)?;
        log::trace!("GET {} -> {} {}", path, res.status, res.status_text);
        Ok(res)
    }
}

impl Default for HttpReader {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HttpReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpReader").finish_non_exhaustive()
    }
}

impl Reader for HttpReader {
    fn name(&self) -> &'static str {
        "http"
    }

    fn exists(&self, path: &str) -> bool {
        match self.get(path, Mode::Text) {
            Ok(res) => res.is_success(),
            Err(e) => {
                log::warn!("{}", e);
                false
            }
        }
    }

    fn read_text(&self, path: &str) -> Result<String, FileReadError> {
        let body = self.get(path, Mode::Text)?.into_result(path)?;
        Ok(match String::from_utf8(body) {
            Ok(text) => text,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        })
    }

    fn read_bytes(&self, path: &str) -> Result<Vec<u8>, FileReadError> {
        self.get(path, Mode::Bytes)?.into_result(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_defined_high_bytes() {
        assert_eq!(
            bytes_from_user_defined("\u{0}\u{7f}\u{f780}\u{f7ff}"),
            vec![0x00, 0x7F, 0x80, 0xFF]
        );
    }

    #[test]
    fn user_defined_preserves_length() {
        let text: String = (0u32..256)
            .map(|b| if b < 0x80 { b } else { 0xF700 + b })
            .filter_map(char::from_u32)
            .collect();
        let bytes = bytes_from_user_defined(&text);
        assert_eq!(bytes.len(), 256);
        assert!(bytes.iter().enumerate().all(|(i, b)| *b as usize == i));
    }

    #[test]
    fn status_range_is_inclusive() {
        let res = |status| Response {
            status,
            status_text: String::new(),
            body: vec![],
        };
        assert!(!res(199).is_success());
        assert!(res(200).is_success());
        assert!(res(299).is_success());
        assert!(!res(300).is_success());
        assert!(!res(404).is_success());
    }

    #[test]
    fn failed_response_carries_status_text() {
        let res = Response {
            status: 404,
            status_text: "Not Found".into(),
            body: b"gone".to_vec(),
        };
        let err = res.into_result("/missing/file.txt").unwrap_err();
        assert_eq!(err.path(), "/missing/file.txt");
        assert!(err.to_string().contains("404 Not Found"));
        assert!(err.is_not_found());
    }
}
