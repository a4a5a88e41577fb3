//! Repository port traits for player storage.

use async_trait::async_trait;
use roster_domain::{Player, PlayerId};

use super::error::RepoError;

/// Storage collaborator for player records.
///
/// Adapters own id assignment: `save` on a record without an id inserts it
/// and returns the stored copy carrying the new id. A record that already
/// has an id is overwritten in place.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlayerRepo: Send + Sync {
    async fn save(&self, player: &Player) -> Result<Player, RepoError>;
    async fn get(&self, id: PlayerId) -> Result<Option<Player>, RepoError>;
    /// All stored records, in no particular order.
    async fn find_all(&self) -> Result<Vec<Player>, RepoError>;
    async fn delete(&self, id: PlayerId) -> Result<(), RepoError>;
}
