//! Read bundled resources by path, the same way everywhere.
//!
//! A [`Resource`] reads from the local file system when the host has one (native processes, or
//! WASM running under Node) and falls back to synchronous same-origin HTTP requests in the
//! browser.

#[cfg(not(target_arch = "wasm32"))]
mod config;
pub mod environment;
mod error;
mod fs;
mod http;
mod resource;

#[cfg(not(target_arch = "wasm32"))]
pub use config::{Config, BASE_URL_VAR};
pub use environment::{has_server_capability, Environment};
#[cfg(target_arch = "wasm32")]
pub use error::WasmError;
pub use error::{FileReadError, Reason};
pub use fs::FsReader;
pub use http::{bytes_from_user_defined, HttpReader};
pub use resource::{Reader, Resource};
