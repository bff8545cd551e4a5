//! Achievement catalog generator.
//!
//! Reads a card database and produces the achievement definitions a
//! tracking engine evaluates against live games: rank-tiered feats,
//! deckbuilding archetypes, and per-run-mode progression, boss, treasure
//! and passive records. Generation is a pure batch transform; the same
//! cards always produce the same catalog.

pub mod achievements;
pub mod build_info;
pub mod cards;
pub mod config;
pub mod error;
pub mod families;

pub use achievements::Achievement;
pub use cards::Card;
pub use config::CatalogConfig;
pub use error::CatalogError;
pub use families::{build_catalog, Family};
