//! Player payloads: creation and partial update.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{Profession, Race};

/// Partial update for a player record.
///
/// `None` means "leave unchanged". There is no field for the id
/// or for the derived stats.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub race: Option<Race>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profession: Option<Profession>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banned: Option<bool>,
}

impl PlayerUpdate {
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

    pub fn with_experience(mut self, experience: i32) -> Self {
        self.experience = Some(experience);
        self
    }

    pub fn with_birthday(mut self, birthday: DateTime<Utc>) -> Self {
        self.birthday = Some(birthday);
        self
    }

    pub fn with_banned(mut self, banned: bool) -> Self {
        self.banned = Some(banned);
        self
    }

    /// True when no field is present.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Payload for creating a player. Everything but `banned` is required;
/// an absent `banned` means `false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlayer {
    pub name: String,
    pub title: String,
    pub race: Race,
    pub profession: Profession,
    pub experience: i32,
    pub birthday: DateTime<Utc>,
    #[serde(default)]
    pub banned: Option<bool>,
}
