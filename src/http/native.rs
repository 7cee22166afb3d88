use std::sync::OnceLock;

use reqwest::blocking::Client;

use super::{Mode, Response};
use crate::{Config, FileReadError, Reason};

/// The client every reader shares. Each blocking client runs its own runtime thread.
fn shared_client() -> &'static Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();
    CLIENT.get_or_init(Client::new)
}

pub(super) struct Transport {
    client: &'static Client,
    config: Config,
}

fn other(path: &str, e: impl std::error::Error + Send + Sync + 'static) -> FileReadError {
    FileReadError::new(path, Reason::Other(Box::new(e)))
}

impl Transport {
    pub(super) fn new(config: Config) -> Self {
        Self {
            client: shared_client(),
            config,
        }
    }

    // The body is returned untouched, so `mode` only matters in the browser.
    pub(super) fn get(&self, path: &str, _mode: Mode) -> Result<Response, FileReadError> {
        let url = self.config.resolve(path).map_err(|e| other(path, e))?;
        let res = self.client.get(url).send().map_err(|e| other(path, e))?;
        let status = res.status();
        let body = res.bytes().map_err(|e| other(path, e))?;
        Ok(Response {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body: body.to_vec(),
        })
    }
}
