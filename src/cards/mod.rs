//! Card reference data consumed by the generator.
//!
//! Cards are loaded once from the card database JSON and then only read:
//! selection rules pick the subset each achievement family is built from.

pub mod loader;
pub mod select;
pub mod types;

pub use loader::{load_cards, parse_cards};
pub use select::{require, IdPattern, Passive, Selector};
pub use types::{Card, CardType, DUNGEON_PASSIVE_BUFF};
