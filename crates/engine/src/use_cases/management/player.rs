//! Player management operations.
//!
//! Concurrent updates of the same player are not coordinated here: each
//! update is a single load-merge-save against the repo, and keeping one
//! in-flight update per player is up to the caller.

use std::sync::Arc;

use roster_domain::{
    sort_players, NewPlayer, PageRequest, Player, PlayerFilter, PlayerId, PlayerOrder,
    PlayerUpdate,
};

use crate::infrastructure::ports::PlayerRepo;

use super::ManagementError;

pub struct PlayerManagement {
    players: Arc<dyn PlayerRepo>,
}

impl PlayerManagement {
    pub fn new(players: Arc<dyn PlayerRepo>) -> Self {
        Self { players }
    }

    /// Validate and store a new player. Derived stats are computed from the
    /// payload's experience and `banned` defaults to false.
    pub async fn create(&self, new_player: NewPlayer) -> Result<Player, ManagementError> {
        let player = Player::create(new_player).inspect_err(|e| {
            tracing::debug!(error = %e, "Rejected new player");
        })?;

        let saved = self.players.save(&player).await?;
        tracing::info!(
            player_id = ?saved.id,
            name = %saved.name,
            level = saved.level,
            "Player created"
        );
        Ok(saved)
    }

    pub async fn get(&self, id: PlayerId) -> Result<Player, ManagementError> {
        self.load(id).await
    }

    /// Merge `update` into the stored player and persist the result.
    ///
    /// The merge is all-or-nothing: when any present field is invalid the
    /// stored record is left exactly as it was.
    pub async fn update(
        &self,
        id: PlayerId,
        update: PlayerUpdate,
    ) -> Result<Player, ManagementError> {
        let existing = self.load(id).await?;

        let merged = existing.apply_update(update).inspect_err(|e| {
            tracing::debug!(player_id = %id, error = %e, "Rejected player update");
        })?;

        let saved = self.players.save(&merged).await?;
        tracing::info!(player_id = %id, level = saved.level, "Player updated");
        Ok(saved)
    }

    pub async fn delete(&self, id: PlayerId) -> Result<(), ManagementError> {
        self.load(id).await?;
        self.players.delete(id).await?;
        tracing::info!(player_id = %id, "Player deleted");
        Ok(())
    }

    /// Filter, sort and page the stored players.
    pub async fn list(
        &self,
        filter: &PlayerFilter,
        order: Option<PlayerOrder>,
        page: PageRequest,
    ) -> Result<Vec<Player>, ManagementError> {
        let matching = filter.apply(self.players.find_all().await?);
        let total = matching.len();
        let page_items = page.slice(sort_players(matching, order));

        tracing::debug!(
            matching = total,
            returned = page_items.len(),
            order = ?order,
            page_number = page.page_number(),
            page_size = page.page_size(),
            "Listed players"
        );
        Ok(page_items)
    }

    /// Number of stored players passing `filter`, ignoring paging.
    pub async fn count(&self, filter: &PlayerFilter) -> Result<usize, ManagementError> {
        let all = self.players.find_all().await?;
        Ok(all.iter().filter(|p| filter.matches(p)).count())
    }

    async fn load(&self, id: PlayerId) -> Result<Player, ManagementError> {
        self.players
            .get(id)
            .await?
            .ok_or_else(|| ManagementError::NotFound {
                entity_type: "Player",
                id: id.to_string(),
            })
    }
}
