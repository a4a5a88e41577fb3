//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    config::{EngineConfig, StorageBackend},
    memory::InMemoryPlayerRepo,
    ports::{PlayerRepo, RepoError},
    sqlite::SqlitePlayerRepo,
};
use crate::use_cases::{ManagementUseCases, PlayerManagement};

/// Main application state.
///
/// Holds the storage ports and the use cases built on them. Constructed once
/// by the entry point and shared behind an `Arc`.
pub struct App {
    pub repositories: Repositories,
    pub use_cases: UseCases,
}

/// Container for storage ports.
pub struct Repositories {
    pub player: Arc<dyn PlayerRepo>,
}

/// Container for all use cases.
pub struct UseCases {
    pub management: ManagementUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(player_repo: Arc<dyn PlayerRepo>) -> Self {
        let management = ManagementUseCases::new(PlayerManagement::new(player_repo.clone()));

        Self {
            repositories: Repositories {
                player: player_repo,
            },
            use_cases: UseCases { management },
        }
    }

    /// Build the storage adapter selected by `config` and wire the app on it.
    pub async fn from_config(config: &EngineConfig) -> Result<Self, RepoError> {
        let player_repo: Arc<dyn PlayerRepo> = match config.storage {
            StorageBackend::Memory => {
                tracing::info!("Using in-memory player storage");
                Arc::new(InMemoryPlayerRepo::new())
            }
            StorageBackend::Sqlite => {
                tracing::info!(path = %config.db_path, "Opening SQLite player storage");
                Arc::new(SqlitePlayerRepo::new(&config.db_path).await?)
            }
        };
        Ok(Self::new(player_repo))
    }
}
