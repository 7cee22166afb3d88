//! Runtime environment detection.
//!
//! Native builds always have server capability. On WASM we probe the JavaScript global scope for
//! a Node-style `process.versions.node`, since the same `.wasm` may be loaded by Node, Electron or
//! a plain browser page.

#[cfg(not(target_arch = "wasm32"))]
mod native;

#[cfg(not(target_arch = "wasm32"))]
use native::probe;

#[cfg(target_arch = "wasm32")]
pub(crate) mod web;

#[cfg(target_arch = "wasm32")]
use web::probe;

use std::sync::OnceLock;

/// The kind of host the process is running in.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Environment {
    /// A host with direct file access: a native process or Node.
    Server,

    /// A browser (or worker) with only network access.
    Browser,
}

impl Environment {
    /// Probes the host without caching the result.
    pub fn detect() -> Self {
        if probe() {
            Environment::Server
        } else {
            Environment::Browser
        }
    }

    /// Gets the environment of the current process.
    ///
    /// The probe runs on first call only.
    pub fn current() -> Self {
        static CURRENT: OnceLock<Environment> = OnceLock::new();
        *CURRENT.get_or_init(|| {
            let env = Self::detect();
            log::debug!("resolved runtime environment: {:?}", env);
            env
        })
    }

    pub fn has_server_capability(self) -> bool {
        self == Environment::Server
    }
}

/// Whether the current process can read files directly.
pub fn has_server_capability() -> bool {
    Environment::current().has_server_capability()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_is_server() {
        assert_eq!(Environment::detect(), Environment::Server);
        assert!(has_server_capability());
    }

    #[test]
    fn current_is_stable() {
        assert_eq!(Environment::current(), Environment::current());
    }
}
