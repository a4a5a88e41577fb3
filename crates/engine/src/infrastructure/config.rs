//! Engine configuration loaded from the environment.

use std::path::Path;

const DEFAULT_DB_PATH: &str = "roster.db";

/// Which adapter backs the player store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    Sqlite,
}

impl StorageBackend {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "memory" => Some(Self::Memory),
            "sqlite" => Some(Self::Sqlite),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub storage: StorageBackend,
    pub db_path: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            storage: StorageBackend::Memory,
            db_path: DEFAULT_DB_PATH.to_string(),
        }
    }
}

impl EngineConfig {
    /// Read `ROSTER_STORAGE` and `ROSTER_DB` from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unknown storage values fall back
    /// to the in-memory store.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let storage = match lookup("ROSTER_STORAGE") {
            Some(raw) => StorageBackend::parse(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, "Unknown ROSTER_STORAGE, using in-memory storage");
                defaults.storage
            }),
            None => defaults.storage,
        };

        let db_path = lookup("ROSTER_DB")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.db_path);

        Self { storage, db_path }
    }
}

/// Load `.env.local` then `.env` from the workspace root, if present.
/// Variables already set in the environment win.
pub fn load_dotenv_from_repo_root() {
    let repo_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
