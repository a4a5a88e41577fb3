//! Port traits for infrastructure boundaries.
//!
//! Storage is the only abstraction the engine needs: the rule layer is pure,
//! and the player use cases reach persistence through `PlayerRepo`.

mod error;
mod repos;

pub use error::RepoError;
pub use repos::PlayerRepo;

#[cfg(test)]
pub use repos::MockPlayerRepo;
