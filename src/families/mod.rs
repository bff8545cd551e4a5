//! Achievement families and catalog assembly.
//!
//! Each family selects its cards (if it depends on cards at all), expands
//! its templates and checks the number of records it produced against the
//! configured expectation. The catalog is the concatenation of the
//! configured families, with ids unique across all of them.

pub mod amazing_plays;
pub mod deckbuilding;
pub mod dungeon_run;
pub mod monster_hunt;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::achievements::{Achievement, GameEvent};
use crate::cards::{Card, CardType};
use crate::config::{CatalogConfig, Expectations};
use crate::error::CatalogError;

/// Card types a treasure can have.
pub(crate) const TREASURE_TYPES: &[CardType] =
    &[CardType::Minion, CardType::Spell, CardType::Weapon];
/// Reset events of per-card "played" achievements.
pub(crate) const PLAY_RESETS: &[GameEvent] = &[GameEvent::GameStart, GameEvent::GameEnd];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum Family {
    AmazingPlays,
    Deckbuilding,
    DungeonRun,
    MonsterHunt,
}

impl Family {
    /// All families in catalog order.
    pub const ALL: [Family; 4] = [
        Family::AmazingPlays,
        Family::Deckbuilding,
        Family::DungeonRun,
        Family::MonsterHunt,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Family::AmazingPlays => "amazing_plays",
            Family::Deckbuilding => "deckbuilding",
            Family::DungeonRun => "dungeon_run",
            Family::MonsterHunt => "monster_hunt",
        }
    }

    /// Build this family's slice of the catalog.
    pub fn assemble(
        &self,
        cards: &[Card],
        expectations: &Expectations,
    ) -> Result<Vec<Achievement>, CatalogError> {
        match self {
            Family::AmazingPlays => amazing_plays::assemble(expectations.amazing_plays),
            Family::Deckbuilding => deckbuilding::assemble(expectations.deckbuilding),
            Family::DungeonRun => dungeon_run::assemble(cards, &expectations.dungeon_run),
            Family::MonsterHunt => monster_hunt::assemble(cards, &expectations.monster_hunt),
        }
    }
}

/// Assemble the configured families into one catalog.
pub fn build_catalog(
    cards: &[Card],
    config: &CatalogConfig,
) -> Result<Vec<Achievement>, CatalogError> {
    let mut catalog = Vec::new();
    for family in &config.families {
        let records = family.assemble(cards, &config.expectations)?;
        info!(family = family.name(), records = records.len(), "assembled family");
        catalog.extend(records);
    }
    ensure_unique_ids(&catalog)?;
    Ok(catalog)
}

pub fn ensure_unique_ids(catalog: &[Achievement]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(catalog.len());
    for achievement in catalog {
        if !seen.insert(achievement.id.as_str()) {
            return Err(CatalogError::DuplicateId {
                id: achievement.id.clone(),
            });
        }
    }
    Ok(())
}

/// Fail unless `records` holds exactly `expected` entries.
pub(crate) fn expect_count(
    check: &str,
    expected: usize,
    records: Vec<Achievement>,
) -> Result<Vec<Achievement>, CatalogError> {
    if records.len() != expected {
        return Err(CatalogError::Cardinality {
            check: check.to_string(),
            expected,
            actual: records.len(),
        });
    }
    Ok(records)
}
