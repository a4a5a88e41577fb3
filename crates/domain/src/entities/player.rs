//! Player entity - a single roster record
//!
//! Records are created through storage (which assigns the id) and mutated
//! only through [`Player::apply_update`], which keeps the derived stats in
//! step with experience.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::truncate_to_millis;
use crate::error::DomainError;
use crate::ids::PlayerId;
use crate::rules::stats::{compute_experience_next_level, compute_level};
use crate::rules::validation::{
    is_birthday_valid, is_experience_valid, is_name_valid, is_player_valid, is_title_valid,
    MAX_EXPERIENCE, MAX_NAME_LENGTH, MAX_TITLE_LENGTH,
};
use crate::value_objects::{NewPlayer, PlayerUpdate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Race {
    Human,
    Dwarf,
    Elf,
    Giant,
    Orc,
    Troll,
    Hobbit,
}

impl Race {
    pub const ALL: [Race; 7] = [
        Self::Human,
        Self::Dwarf,
        Self::Elf,
        Self::Giant,
        Self::Orc,
        Self::Troll,
        Self::Hobbit,
    ];

    /// Wire name, also used as the storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Human => "HUMAN",
            Self::Dwarf => "DWARF",
            Self::Elf => "ELF",
            Self::Giant => "GIANT",
            Self::Orc => "ORC",
            Self::Troll => "TROLL",
            Self::Hobbit => "HOBBIT",
        }
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Race {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|race| race.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::parse(format!("Unknown race: {s}")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Profession {
    Warrior,
    Rogue,
    Sorcerer,
    Cleric,
    Paladin,
    Nazgul,
    Warlock,
    Druid,
}

impl Profession {
    pub const ALL: [Profession; 8] = [
        Self::Warrior,
        Self::Rogue,
        Self::Sorcerer,
        Self::Cleric,
        Self::Paladin,
        Self::Nazgul,
        Self::Warlock,
        Self::Druid,
    ];

    /// Wire name, also used as the storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warrior => "WARRIOR",
            Self::Rogue => "ROGUE",
            Self::Sorcerer => "SORCERER",
            Self::Cleric => "CLERIC",
            Self::Paladin => "PALADIN",
            Self::Nazgul => "NAZGUL",
            Self::Warlock => "WARLOCK",
            Self::Druid => "DRUID",
        }
    }
}

impl fmt::Display for Profession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profession {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|profession| profession.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::parse(format!("Unknown profession: {s}")))
    }
}

/// A player record.
///
/// `level` and `until_next_level` are derived from `experience`; callers
/// read them but have no way to set them except by changing experience.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// `None` until storage assigns an id on insert
    pub id: Option<PlayerId>,
    pub name: String,
    pub title: String,
    pub race: Race,
    pub profession: Profession,
    pub experience: i32,
    pub level: i32,
    pub until_next_level: i32,
    pub birthday: DateTime<Utc>,
    pub banned: bool,
}

impl Player {
    /// Build an unsaved, unbanned record with stats derived from `experience`.
    /// The birthday is truncated to whole milliseconds. No validation happens
    /// here; see [`Player::create`].
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        race: Race,
        profession: Profession,
        experience: i32,
        birthday: DateTime<Utc>,
    ) -> Self {
        let level = compute_level(experience);
        Self {
            id: None,
            name: name.into(),
            title: title.into(),
            race,
            profession,
            experience,
            level,
            until_next_level: compute_experience_next_level(level, experience),
            birthday: truncate_to_millis(birthday),
            banned: false,
        }
    }

    /// Validate a creation payload and build the unsaved record.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` naming every field that fails.
    pub fn create(new_player: NewPlayer) -> Result<Self, DomainError> {
        let mut player = Self::new(
            new_player.name,
            new_player.title,
            new_player.race,
            new_player.profession,
            new_player.experience,
            new_player.birthday,
        );
        player.banned = new_player.banned.unwrap_or(false);

        if !is_player_valid(Some(&player)) {
            return Err(DomainError::validation(format!(
                "invalid player fields: {}",
                invalid_fields(&player).join(", ")
            )));
        }
        Ok(player)
    }

    pub fn with_id(mut self, id: PlayerId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_banned(mut self, banned: bool) -> Self {
        self.banned = banned;
        self
    }

    /// Merge a partial update into this record.
    ///
    /// Fields are applied in a fixed order: name, title, race, profession,
    /// experience (recomputing level and until-next-level), birthday, banned.
    /// Absent fields are left alone and `id` is never touched.
    ///
    /// The merge consumes the record: on error the caller gets nothing back,
    /// so a half-merged record can never reach storage.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for the first present field that
    /// fails its predicate.
    pub fn apply_update(mut self, update: PlayerUpdate) -> Result<Self, DomainError> {
        if let Some(name) = update.name {
            check_name(&name)?;
            self.name = name;
        }
        if let Some(title) = update.title {
            check_title(&title)?;
            self.title = title;
        }
        if let Some(race) = update.race {
            self.race = race;
        }
        if let Some(profession) = update.profession {
            self.profession = profession;
        }
        if let Some(experience) = update.experience {
            check_experience(experience)?;
            self.set_experience(experience);
        }
        if let Some(birthday) = update.birthday {
            let birthday = truncate_to_millis(birthday);
            check_birthday(birthday)?;
            self.birthday = birthday;
        }
        if let Some(banned) = update.banned {
            self.banned = banned;
        }
        Ok(self)
    }

    fn set_experience(&mut self, experience: i32) {
        self.experience = experience;
        self.level = compute_level(experience);
        self.until_next_level = compute_experience_next_level(self.level, experience);
    }
}

fn invalid_fields(player: &Player) -> Vec<&'static str> {
    [
        ("name", is_name_valid(Some(&player.name))),
        ("title", is_title_valid(Some(&player.title))),
        ("experience", is_experience_valid(Some(player.experience))),
        ("birthday", is_birthday_valid(Some(player.birthday))),
    ]
    .into_iter()
    .filter_map(|(field, valid)| (!valid).then_some(field))
    .collect()
}

fn check_name(name: &str) -> Result<(), DomainError> {
    if is_name_valid(Some(name)) {
        Ok(())
    } else {
        Err(DomainError::validation(format!(
            "name must be 1-{MAX_NAME_LENGTH} characters"
        )))
    }
}

fn check_title(title: &str) -> Result<(), DomainError> {
    if is_title_valid(Some(title)) {
        Ok(())
    } else {
        Err(DomainError::validation(format!(
            "title must be at most {MAX_TITLE_LENGTH} characters"
        )))
    }
}

fn check_experience(experience: i32) -> Result<(), DomainError> {
    if is_experience_valid(Some(experience)) {
        Ok(())
    } else {
        Err(DomainError::validation(format!(
            "experience must be between 1 and {}, got {experience}",
            MAX_EXPERIENCE - 1
        )))
    }
}

fn check_birthday(birthday: DateTime<Utc>) -> Result<(), DomainError> {
    if is_birthday_valid(Some(birthday)) {
        Ok(())
    } else {
        Err(DomainError::validation(format!(
            "birthday must fall between years 2000 and 3000, got {birthday}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    fn birthday(year: i32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, 5, 20, 12, 0, 0).unwrap()
    }

    fn test_player(experience: i32) -> Player {
        Player::new(
            "Legolas",
            "Prince",
            Race::Elf,
            Profession::Rogue,
            experience,
            birthday(2600),
        )
        .with_id(PlayerId::parse(1).unwrap())
    }

    #[test]
    fn new_player_derives_stats() {
        let player = test_player(100);
        assert_eq!(player.level, 1);
        assert_eq!(player.until_next_level, 200);
        assert!(!player.banned);
    }

    #[test]
    fn experience_update_recomputes_level_and_next_level() {
        let updated = test_player(100)
            .apply_update(PlayerUpdate::new().with_experience(5000))
            .unwrap();

        assert_eq!(updated.experience, 5000);
        assert_eq!(updated.level, 9);
        assert_eq!(updated.until_next_level, 500);
    }

    #[test]
    fn absent_fields_are_left_untouched() {
        let original = test_player(100);
        let updated = original
            .clone()
            .apply_update(PlayerUpdate::new().with_banned(true))
            .unwrap();

        assert!(updated.banned);
        assert_eq!(updated.name, original.name);
        assert_eq!(updated.title, original.title);
        assert_eq!(updated.race, original.race);
        assert_eq!(updated.profession, original.profession);
        assert_eq!(updated.experience, original.experience);
        assert_eq!(updated.level, original.level);
        assert_eq!(updated.birthday, original.birthday);
        assert_eq!(updated.id, original.id);
    }

    #[test]
    fn empty_update_is_identity() {
        let original = test_player(4321);
        let updated = original.clone().apply_update(PlayerUpdate::new()).unwrap();
        assert_eq!(updated, original);
    }

    #[test]
    fn race_and_profession_are_assigned_unconditionally() {
        let updated = test_player(100)
            .apply_update(
                PlayerUpdate::new()
                    .with_race(Race::Troll)
                    .with_profession(Profession::Nazgul),
            )
            .unwrap();
        assert_eq!(updated.race, Race::Troll);
        assert_eq!(updated.profession, Profession::Nazgul);
    }

    #[test]
    fn empty_name_is_rejected() {
        let result = test_player(100).apply_update(PlayerUpdate::new().with_name(""));
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn each_invalid_field_is_rejected() {
        let cases = [
            PlayerUpdate::new().with_name("ThirteenChars"),
            PlayerUpdate::new().with_title("t".repeat(31)),
            PlayerUpdate::new().with_experience(0),
            PlayerUpdate::new().with_experience(10_000_000),
            PlayerUpdate::new().with_birthday(birthday(1999)),
            PlayerUpdate::new().with_birthday(birthday(3001)),
        ];
        for update in cases {
            let result = test_player(100).apply_update(update.clone());
            assert!(
                matches!(result, Err(DomainError::Validation(_))),
                "expected rejection for {update:?}"
            );
        }
    }

    #[test]
    fn create_validates_and_defaults_banned() {
        let player = Player::create(NewPlayer {
            name: "Gimli".into(),
            title: String::new(),
            race: Race::Dwarf,
            profession: Profession::Warrior,
            experience: 5000,
            birthday: birthday(2100),
            banned: None,
        })
        .unwrap();

        assert_eq!(player.id, None);
        assert_eq!(player.level, 9);
        assert_eq!(player.until_next_level, 500);
        assert!(!player.banned);
    }

    #[test]
    fn create_rejects_invalid_payload() {
        let result = Player::create(NewPlayer {
            name: "Gimli".into(),
            title: String::new(),
            race: Race::Dwarf,
            profession: Profession::Warrior,
            experience: 0,
            birthday: birthday(2100),
            banned: Some(true),
        });
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn create_reports_every_invalid_field() {
        let err = Player::create(NewPlayer {
            name: String::new(),
            title: String::new(),
            race: Race::Dwarf,
            profession: Profession::Warrior,
            experience: 0,
            birthday: birthday(2100),
            banned: None,
        })
        .unwrap_err();
        assert_eq!(err, DomainError::validation("invalid player fields: name, experience"));
    }

    #[test]
    fn max_experience_record_does_not_panic() {
        let player = Player::new("X", "", Race::Orc, Profession::Rogue, i32::MAX, birthday(2500));
        assert_eq!(player.level, 6553);
        assert_eq!(player.until_next_level, 589_853);
    }

    #[test]
    fn birthday_is_kept_to_whole_milliseconds() {
        let precise = birthday(2300).with_nanosecond(1_500_000).unwrap();

        let created = Player::new("Sam", "", Race::Hobbit, Profession::Cleric, 10, precise);
        assert_eq!(created.birthday.nanosecond(), 1_000_000);

        let updated = test_player(100)
            .apply_update(PlayerUpdate::new().with_birthday(precise))
            .unwrap();
        assert_eq!(updated.birthday, created.birthday);
    }

    #[test]
    fn sub_millisecond_birthday_at_lower_bound_is_rejected() {
        let just_after_bound = Utc
            .with_ymd_and_hms(2000, 1, 1, 0, 0, 0)
            .unwrap()
            .with_nanosecond(500_000)
            .unwrap();
        let result =
            test_player(100).apply_update(PlayerUpdate::new().with_birthday(just_after_bound));
        assert!(matches!(result, Err(DomainError::Validation(_))));

        let one_milli_after = just_after_bound.with_nanosecond(1_000_000).unwrap();
        let updated = test_player(100)
            .apply_update(PlayerUpdate::new().with_birthday(one_milli_after))
            .unwrap();
        assert_eq!(updated.birthday, one_milli_after);
    }

    #[test]
    fn race_and_profession_wire_names() {
        assert_eq!("HOBBIT".parse::<Race>().unwrap(), Race::Hobbit);
        assert_eq!("druid".parse::<Profession>().unwrap(), Profession::Druid);
        assert!("GOBLIN".parse::<Race>().is_err());
        assert_eq!(Profession::Nazgul.to_string(), "NAZGUL");
        assert_eq!(serde_json::to_string(&Race::Giant).unwrap(), "\"GIANT\"");
    }
}
