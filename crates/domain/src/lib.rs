pub mod common;
pub mod entities;
pub mod error;
pub mod ids;
pub mod query;
pub mod rules;
pub mod value_objects;

pub use entities::{Player, Profession, Race};

pub use error::DomainError;

pub use ids::PlayerId;

pub use query::{sort_players, PageRequest, PlayerFilter, PlayerOrder};

pub use value_objects::{NewPlayer, PlayerUpdate};
