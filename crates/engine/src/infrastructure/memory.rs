//! In-memory player storage.
//!
//! Backed by a `DashMap`, so concurrent saves of different records never
//! block each other. Ids come from a monotonically increasing sequence
//! starting at 1 and are never reused.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use roster_domain::{Player, PlayerId};

use crate::infrastructure::ports::{PlayerRepo, RepoError};

pub struct InMemoryPlayerRepo {
    players: DashMap<PlayerId, Player>,
    next_id: AtomicI64,
}

impl InMemoryPlayerRepo {
    pub fn new() -> Self {
        Self {
            players: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    fn allocate_id(&self) -> Result<PlayerId, RepoError> {
        let raw = self.next_id.fetch_add(1, Ordering::Relaxed);
        PlayerId::parse(raw).map_err(|e| RepoError::database("player.allocate_id", e))
    }
}

impl Default for InMemoryPlayerRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlayerRepo for InMemoryPlayerRepo {
    async fn save(&self, player: &Player) -> Result<Player, RepoError> {
        let id = match player.id {
            Some(id) => id,
            None => self.allocate_id()?,
        };
        let stored = player.clone().with_id(id);
        self.players.insert(id, stored.clone());
        Ok(stored)
    }

    async fn get(&self, id: PlayerId) -> Result<Option<Player>, RepoError> {
        Ok(self.players.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_all(&self) -> Result<Vec<Player>, RepoError> {
        Ok(self
            .players
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn delete(&self, id: PlayerId) -> Result<(), RepoError> {
        self.players
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepoError::not_found("Player", id))
    }
}
