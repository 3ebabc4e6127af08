use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use std::sync::Arc;
use store::StringRepository;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// String repository (shared across requests)
    pub repository: Arc<StringRepository>,
}

impl ServerState {
    /// Create new server state, loading the collection from the configured
    /// JSON document.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let repository = StringRepository::open(&config.backend())?;
        Ok(Self::with_repository(config, repository))
    }

    /// Create server state around an already opened repository
    pub fn with_repository(config: ServerConfig, repository: StringRepository) -> Self {
        Self {
            config: Arc::new(config),
            repository: Arc::new(repository),
        }
    }

    /// Run a repository operation on the blocking pool. Mutations write the
    /// whole collection to disk before returning.
    pub async fn with_repo<T, E, F>(&self, op: F) -> ServerResult<T>
    where
        F: FnOnce(&StringRepository) -> Result<T, E> + Send + 'static,
        T: Send + 'static,
        E: Into<ServerError> + Send + 'static,
    {
        let repository = Arc::clone(&self.repository);
        tokio::task::spawn_blocking(move || op(&repository))
            .await?
            .map_err(Into::into)
    }
}
