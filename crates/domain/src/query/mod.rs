//! Listing pipeline: filter, then sort, then page.

mod filter;
mod order;
mod page;

pub use filter::PlayerFilter;
pub use order::{sort_players, PlayerOrder};
pub use page::{PageRequest, DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};
