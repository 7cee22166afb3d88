use wasm_bindgen::JsValue;
use web_sys::XmlHttpRequest;

use super::{bytes_from_user_defined, Mode, Response};
use crate::error::WasmError;
use crate::FileReadError;

/// Makes the browser hand back one character per body byte.
const BINARY_MIME_TYPE: &str = "text/plain; charset=x-user-defined";

pub(super) struct Transport;

impl Transport {
    pub(super) fn new() -> Self {
        Self
    }

    fn send(path: &str, mode: Mode) -> Result<Response, JsValue> {
        let xhr = XmlHttpRequest::new()?;
        xhr.open_with_async("GET", path, false)?;
        if mode == Mode::Bytes {
            xhr.override_mime_type(BINARY_MIME_TYPE)?;
        }
        xhr.send()?;

        let text = xhr.response_text()?.unwrap_or_default();
        Ok(Response {
            status: xhr.status()?,
            status_text: xhr.status_text()?,
            body: match mode {
                Mode::Text => text.into_bytes(),
                Mode::Bytes => bytes_from_user_defined(&text),
            },
        })
    }

    pub(super) fn get(&self, path: &str, mode: Mode) -> Result<Response, FileReadError> {
        Self::send(path, mode).map_err(|e| FileReadError::new(path, WasmError::from(e)))
    }
}
