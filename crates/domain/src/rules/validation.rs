//! Field predicates for player attributes.
//!
//! Every predicate takes the candidate as an `Option` so that a missing
//! value is reported as invalid rather than treated as a crash. None of them
//! have side effects.

use chrono::{DateTime, Utc};

use crate::entities::Player;

/// Maximum name length in characters.
pub const MAX_NAME_LENGTH: usize = 12;

/// Maximum title length in characters.
pub const MAX_TITLE_LENGTH: usize = 30;

/// Exclusive upper bound on experience.
pub const MAX_EXPERIENCE: i32 = 10_000_000;

/// 2000-01-01T00:00:00Z, exclusive lower bound for birthdays.
const BIRTHDAY_LOWER_BOUND_MILLIS: i64 = 946_684_800_000;

/// 3000-01-01T00:00:00Z, exclusive upper bound for birthdays.
const BIRTHDAY_UPPER_BOUND_MILLIS: i64 = 32_503_680_000_000;

pub fn is_name_valid(name: Option<&str>) -> bool {
    name.is_some_and(|name| !name.is_empty() && name.chars().count() <= MAX_NAME_LENGTH)
}

/// Empty titles are allowed; a missing title is not.
pub fn is_title_valid(title: Option<&str>) -> bool {
    title.is_some_and(|title| title.chars().count() <= MAX_TITLE_LENGTH)
}

pub fn is_experience_valid(experience: Option<i32>) -> bool {
    experience.is_some_and(|experience| experience > 0 && experience < MAX_EXPERIENCE)
}

/// Birthday must be a positive timestamp strictly inside the years 2000..3000.
pub fn is_birthday_valid(birthday: Option<DateTime<Utc>>) -> bool {
    birthday.is_some_and(|birthday| {
        let millis = birthday.timestamp_millis();
        millis > 0 && millis > BIRTHDAY_LOWER_BOUND_MILLIS && millis < BIRTHDAY_UPPER_BOUND_MILLIS
    })
}

/// Checks the validated fields of a whole record. Race, profession and the
/// banned flag carry no constraints at this layer.
pub fn is_player_valid(player: Option<&Player>) -> bool {
    player.is_some_and(|player| {
        is_name_valid(Some(&player.name))
            && is_title_valid(Some(&player.title))
            && is_experience_valid(Some(player.experience))
            && is_birthday_valid(Some(player.birthday))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Profession, Race};
    use chrono::TimeZone;

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
    }

    fn valid_player() -> Player {
        Player::new(
            "Aragorn",
            "Heir of Isildur",
            Race::Human,
            Profession::Warrior,
            1000,
            at(2500, 3, 1),
        )
    }

    #[test]
    fn name_bounds() {
        assert!(!is_name_valid(Some("")));
        assert!(is_name_valid(Some("A")));
        assert!(is_name_valid(Some("ABCDEFGHIJKL")));
        assert!(!is_name_valid(Some("ABCDEFGHIJKLM")));
        assert!(!is_name_valid(None));
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        assert!(is_name_valid(Some("Ёжиков-Ёжик1")));
    }

    #[test]
    fn title_bounds() {
        assert!(is_title_valid(Some("")));
        assert!(is_title_valid(Some(&"t".repeat(30))));
        assert!(!is_title_valid(Some(&"t".repeat(31))));
        assert!(!is_title_valid(None));
    }

    #[test]
    fn experience_bounds() {
        assert!(!is_experience_valid(Some(0)));
        assert!(!is_experience_valid(Some(-5)));
        assert!(is_experience_valid(Some(1)));
        assert!(is_experience_valid(Some(9_999_999)));
        assert!(!is_experience_valid(Some(10_000_000)));
        assert!(!is_experience_valid(None));
    }

    #[test]
    fn birthday_bounds() {
        assert!(!is_birthday_valid(Utc.timestamp_millis_opt(0).single()));
        assert!(is_birthday_valid(Some(at(2500, 6, 15))));
        assert!(!is_birthday_valid(Some(at(1999, 12, 31))));
        assert!(!is_birthday_valid(Some(at(3001, 1, 1))));
        assert!(!is_birthday_valid(None));
    }

    #[test]
    fn birthday_bounds_are_exclusive() {
        assert!(!is_birthday_valid(Some(at(2000, 1, 1))));
        assert!(!is_birthday_valid(Some(at(3000, 1, 1))));
        assert!(is_birthday_valid(Some(
            at(2000, 1, 1) + chrono::Duration::milliseconds(1)
        )));
    }

    #[test]
    fn player_validity_combines_field_checks() {
        let player = valid_player();
        assert!(is_player_valid(Some(&player)));
        assert!(!is_player_valid(None));

        let mut bad_name = player.clone();
        bad_name.name = String::new();
        assert!(!is_player_valid(Some(&bad_name)));

        let mut bad_experience = player.clone();
        bad_experience.experience = 0;
        assert!(!is_player_valid(Some(&bad_experience)));

        let mut bad_birthday = player;
        bad_birthday.birthday = at(1990, 1, 1);
        assert!(!is_player_valid(Some(&bad_birthday)));
    }
}
