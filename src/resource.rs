use crate::{Environment, FileReadError, FsReader, HttpReader};

/// A way of reading resources by path.
///
/// Implemented by [`FsReader`] and [`HttpReader`]; hosts with other storage can supply their own
/// through [`Resource::with_reader`].
pub trait Reader: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Whether `path` can currently be read. Never fails.
    fn exists(&self, path: &str) -> bool;

    /// Reads the whole of `path` as UTF-8 text.
    fn read_text(&self, path: &str) -> Result<String, FileReadError>;

    /// Reads the whole of `path` as raw bytes.
    fn read_bytes(&self, path: &str) -> Result<Vec<u8>, FileReadError>;
}

/// A readable resource, identified by a path.
///
/// The reader is picked once, when the resource is created, from the runtime [`Environment`]:
/// [`FsReader`] where the host has file access and [`HttpReader`] otherwise. Every call does fresh
/// blocking I/O; nothing is cached.
///
/// ```no_run
/// let config = resources::Resource::new("config/settings.json");
/// if config.exists() {
///     println!("{}", config.read_text()?);
/// }
/// # Ok::<(), resources::FileReadError>(())
/// ```
pub struct Resource {
    path: String,
    reader: Box<dyn Reader>,
}

impl Resource {
    /// Creates a resource using the reader for the current process.
    pub fn new(path: impl Into<String>) -> Self {
        Self::for_environment(path, Environment::current())
    }

    /// Creates a resource using the reader for `env`, regardless of where we're running.
    pub fn for_environment(path: impl Into<String>, env: Environment) -> Self {
        Self::select(
            path.into(),
            env,
            || Box::new(FsReader::new()),
            || Box::new(HttpReader::new()),
        )
    }

    /// Creates a resource read through a custom reader.
    pub fn with_reader(path: impl Into<String>, reader: impl Reader + 'static) -> Self {
        Self {
            path: path.into(),
            reader: Box::new(reader),
        }
    }

    /// Builds only the reader `env` calls for.
    fn select(
        path: String,
        env: Environment,
        server: impl FnOnce() -> Box<dyn Reader>,
        browser: impl FnOnce() -> Box<dyn Reader>,
    ) -> Self {
        let reader = match env {
            Environment::Server => server(),
            Environment::Browser => browser(),
        };
        log::debug!("{}: reading through {}", path, reader.name());
        Self { path, reader }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.reader.exists(&self.path)
    }

    pub fn read_text(&self) -> Result<String, FileReadError> {
        self.reader.read_text(&self.path)
    }

    pub fn read_bytes(&self) -> Result<Vec<u8>, FileReadError> {
        self.reader.read_bytes(&self.path)
    }
}

impl std::fmt::Debug for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resource")
            .field("path", &self.path)
            .field("reader", &self.reader.name())
            .finish()
    }
}
