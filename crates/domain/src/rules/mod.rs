//! Player business rules: field validation and derived stats.

pub mod stats;
pub mod validation;

pub use stats::{compute_experience_next_level, compute_level};
pub use validation::{
    is_birthday_valid, is_experience_valid, is_name_valid, is_player_valid, is_title_valid,
};
