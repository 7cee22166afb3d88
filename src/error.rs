use std::io::ErrorKind;

/// Failure to read a [`Resource`](crate::Resource).
///
/// Carries the path that was being read and the reason the host gave for the failure. Missing
/// files and I/O errors are not distinguished at the type level.
#[derive(thiserror::Error, Debug)]
#[error("{path}: read failed: {reason}")]
pub struct FileReadError {
    path: String,
    #[source]
    reason: Reason,
}

/// Why a read failed.
#[derive(thiserror::Error, Debug)]
pub enum Reason {
    /// The local file system refused the read.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The server answered with a non-2xx status.
    ///
    /// `text` is the status text as the host reported it, which may be empty (browsers over
    /// HTTP/2).
    #[error("{}", status_message(.code, .text))]
    Status { code: u16, text: String },

    /// Anything else: transport failures, bad URLs, JavaScript exceptions.
    #[error("{0}")]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

/// A JavaScript exception or rejected value, rendered as text.
#[cfg(target_arch = "wasm32")]
#[derive(thiserror::Error, Debug)]
#[error("{0}")]
pub struct WasmError(String);

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for WasmError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        use wasm_bindgen::JsCast;

        if let Some(s) = value.as_string() {
            return Self(s);
        }
        match value.dyn_into::<web_sys::js_sys::Error>() {
            Ok(err) => Self(String::from(err.message())),
            Err(value) => Self(format!("{:?}", value)),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl From<WasmError> for Reason {
    fn from(value: WasmError) -> Self {
        Reason::Other(Box::new(value))
    }
}

fn status_message(code: &u16, text: &str) -> String {
    if text.is_empty() {
        code.to_string()
    } else {
        format!("{} {}", code, text)
    }
}

impl FileReadError {
    pub fn new(path: impl Into<String>, reason: impl Into<Reason>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn reason(&self) -> &Reason {
        &self.reason
    }

    /// Whether the host reported the target as missing.
    ///
    /// This is a best-effort hint: a 404 status or a `NotFound` I/O error.
    pub fn is_not_found(&self) -> bool {
        match &self.reason {
            Reason::Io(e) => e.kind() == ErrorKind::NotFound,
            Reason::Status { code, .. } => *code == 404,
            Reason::Other(_) => false,
        }
    }
}
