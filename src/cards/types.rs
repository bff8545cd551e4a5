//! Card reference records as read from the card database.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Mechanic tag carried by passive abilities in the roguelike modes.
pub const DUNGEON_PASSIVE_BUFF: &str = "DUNGEON_PASSIVE_BUFF";

/// Card types the selection rules distinguish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardType {
    Minion,
    Spell,
    Weapon,
    Hero,
    Enchantment,
}

impl CardType {
    /// The spelling used by the card database.
    pub fn as_str(&self) -> &'static str {
        match self {
            CardType::Minion => "Minion",
            CardType::Spell => "Spell",
            CardType::Weapon => "Weapon",
            CardType::Hero => "Hero",
            CardType::Enchantment => "Enchantment",
        }
    }
}

/// One card record. Read-only input to the generator.
///
/// Only `id` is required at parse time. `name`, `type` and `playerClass`
/// are checked when a record actually needs them, so a malformed card
/// only fails the run if a family selects it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    #[serde(default)]
    pub dbf_id: u32,
    #[serde(default)]
    pub cost: i32,
    pub name: Option<String>,
    #[serde(default)]
    pub attack: i32,
    #[serde(default)]
    pub health: i32,
    pub player_class: Option<String>,
    /// Newer exports carry the class here, upper-cased.
    pub card_class: Option<String>,
    #[serde(rename = "type")]
    pub card_type: Option<String>,
    pub rarity: Option<String>,
    pub set: Option<String>,
    pub text: Option<String>,
    #[serde(default)]
    pub collectible: bool,
    pub mechanics: Option<Vec<String>>,
}

impl Card {
    pub fn name(&self) -> Result<&str, CatalogError> {
        self.name
            .as_deref()
            .ok_or_else(|| CatalogError::malformed(&self.id, "name"))
    }

    /// Name with stray quote characters removed, for use in generated text.
    pub fn safe_name(&self) -> Result<String, CatalogError> {
        Ok(self.name()?.replace('"', ""))
    }

    pub fn player_class(&self) -> Result<&str, CatalogError> {
        self.player_class
            .as_deref()
            .or(self.card_class.as_deref())
            .ok_or_else(|| CatalogError::malformed(&self.id, "playerClass"))
    }

    pub fn card_type(&self) -> Result<&str, CatalogError> {
        self.card_type
            .as_deref()
            .ok_or_else(|| CatalogError::malformed(&self.id, "type"))
    }

    /// Lower-cased type, as shown next to the display card.
    pub fn display_card_type(&self) -> Result<String, CatalogError> {
        Ok(self.card_type()?.to_lowercase())
    }

    pub fn is_type(&self, card_type: CardType) -> bool {
        self.card_type.as_deref() == Some(card_type.as_str())
    }

    pub fn has_mechanic(&self, mechanic: &str) -> bool {
        self.mechanics
            .as_ref()
            .is_some_and(|mechanics| mechanics.iter().any(|m| m == mechanic))
    }

    pub fn text_contains(&self, needle: &str) -> bool {
        self.text.as_deref().is_some_and(|text| text.contains(needle))
    }
}
