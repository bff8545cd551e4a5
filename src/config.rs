//! Generation configuration.
//!
//! The expected record counts are a snapshot of the card database the
//! catalog is generated from. When the database changes they are
//! re-derived into a config file instead of being edited here.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::families::Family;

/// Expected record counts for one run mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeExpectations {
    /// Progression steps (plus any final-boss record).
    pub progression: usize,
    /// Boss encounters and victories together.
    pub bosses: usize,
    pub treasures: usize,
    pub passives: usize,
}

/// Record counts asserted after each family is assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Expectations {
    pub amazing_plays: usize,
    pub deckbuilding: usize,
    pub dungeon_run: ModeExpectations,
    pub monster_hunt: ModeExpectations,
}

impl Default for Expectations {
    fn default() -> Self {
        Self {
            amazing_plays: 11 * 6,
            deckbuilding: 11 * 6,
            dungeon_run: ModeExpectations {
                progression: 8 * 9,
                bosses: 48 * 2,
                treasures: 32,
                passives: 14,
            },
            monster_hunt: ModeExpectations {
                progression: 8 * 4 + 1,
                bosses: 47 * 2,
                treasures: 63,
                passives: 21,
            },
        }
    }
}

/// Configuration for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Families to assemble, in output order.
    pub families: Vec<Family>,
    pub expectations: Expectations,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            families: Family::ALL.to_vec(),
            expectations: Expectations::default(),
        }
    }
}

impl CatalogConfig {
    /// Generate a single family.
    pub fn only(family: Family) -> Self {
        Self {
            families: vec![family],
            ..Default::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}
