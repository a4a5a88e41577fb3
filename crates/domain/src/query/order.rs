//! Sort keys for player listings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entities::Player;
use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerOrder {
    Id,
    Name,
    Experience,
    Birthday,
    Level,
}

impl PlayerOrder {
    pub const ALL: [PlayerOrder; 5] = [
        Self::Id,
        Self::Name,
        Self::Experience,
        Self::Birthday,
        Self::Level,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Name => "NAME",
            Self::Experience => "EXPERIENCE",
            Self::Birthday => "BIRTHDAY",
            Self::Level => "LEVEL",
        }
    }
}

impl fmt::Display for PlayerOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayerOrder {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|order| order.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::parse(format!("Unknown player order: {s}")))
    }
}

/// Sort ascending by `order`, keeping the relative order of equal keys.
/// With no order the input comes back unchanged.
pub fn sort_players(mut players: Vec<Player>, order: Option<PlayerOrder>) -> Vec<Player> {
    let Some(order) = order else {
        return players;
    };

    match order {
        PlayerOrder::Id => players.sort_by_key(|p| p.id),
        PlayerOrder::Name => players.sort_by(|a, b| a.name.cmp(&b.name)),
        PlayerOrder::Experience => players.sort_by_key(|p| p.experience),
        PlayerOrder::Birthday => players.sort_by_key(|p| p.birthday),
        PlayerOrder::Level => players.sort_by_key(|p| p.level),
    }
    players
}
