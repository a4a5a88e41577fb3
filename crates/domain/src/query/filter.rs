//! Multi-field player filter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::datetime_from_millis;
use crate::entities::{Player, Profession, Race};
use crate::error::DomainError;

/// Optional predicates combined with AND. An absent predicate always passes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerFilter {
    /// Substring of the name
    pub name: Option<String>,
    /// Substring of the title
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    /// Birthday must not be before this instant
    pub after: Option<DateTime<Utc>>,
    /// Birthday must not be after this instant
    pub before: Option<DateTime<Utc>>,
    pub banned: Option<bool>,
    pub min_experience: Option<i32>,
    pub max_experience: Option<i32>,
    pub min_level: Option<i32>,
    pub max_level: Option<i32>,
}

impl PlayerFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_race(mut self, race: Race) -> Self {
        self.race = Some(race);
        self
    }

    pub fn with_profession(mut self, profession: Profession) -> Self {
        self.profession = Some(profession);
        self
    }

    pub fn with_after(mut self, after: DateTime<Utc>) -> Self {
        self.after = Some(after);
        self
    }

    pub fn with_before(mut self, before: DateTime<Utc>) -> Self {
        self.before = Some(before);
        self
    }

    /// `after` given as epoch milliseconds.
    pub fn after_millis(self, millis: i64) -> Result<Self, DomainError> {
        Ok(self.with_after(datetime_from_millis(millis)?))
    }

    /// `before` given as epoch milliseconds.
    pub fn before_millis(self, millis: i64) -> Result<Self, DomainError> {
        Ok(self.with_before(datetime_from_millis(millis)?))
    }

    pub fn with_banned(mut self, banned: bool) -> Self {
        self.banned = Some(banned);
        self
    }

    pub fn with_experience_range(mut self, min: Option<i32>, max: Option<i32>) -> Self {
        self.min_experience = min;
        self.max_experience = max;
        self
    }

    pub fn with_level_range(mut self, min: Option<i32>, max: Option<i32>) -> Self {
        self.min_level = min;
        self.max_level = max;
        self
    }

    pub fn matches(&self, player: &Player) -> bool {
        if let Some(name) = &self.name {
            if !player.name.contains(name.as_str()) {
                return false;
            }
        }
        if let Some(title) = &self.title {
            if !player.title.contains(title.as_str()) {
                return false;
            }
        }
        if self.race.is_some_and(|race| player.race != race) {
            return false;
        }
        if self
            .profession
            .is_some_and(|profession| player.profession != profession)
        {
            return false;
        }
        if self.after.is_some_and(|after| player.birthday < after) {
            return false;
        }
        if self.before.is_some_and(|before| player.birthday > before) {
            return false;
        }
        if self.banned.is_some_and(|banned| player.banned != banned) {
            return false;
        }
        if self.min_experience.is_some_and(|min| player.experience < min)
            || self.max_experience.is_some_and(|max| player.experience > max)
        {
            return false;
        }
        if self.min_level.is_some_and(|min| player.level < min)
            || self.max_level.is_some_and(|max| player.level > max)
        {
            return false;
        }
        true
    }

    /// Keep the records that pass every active predicate, in input order.
    pub fn apply(&self, players: Vec<Player>) -> Vec<Player> {
        players.into_iter().filter(|p| self.matches(p)).collect()
    }
}
