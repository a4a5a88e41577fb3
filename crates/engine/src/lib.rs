//! Roster Engine library.
//!
//! Player management on top of the rules in `roster-domain`.
//!
//! ## Structure
//!
//! - `use_cases/` - Player create/read/update/delete and listing
//! - `infrastructure/` - Storage port, adapters and configuration
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
