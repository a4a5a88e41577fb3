//! Value objects carried into the domain by callers.

mod player_update;

pub use player_update::{NewPlayer, PlayerUpdate};
