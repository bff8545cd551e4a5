//! Achievement record and requirement types, in their wire shape.

use serde::{Deserialize, Serialize};

/// Game type value for ranked play.
pub const GAME_TYPE_RANKED: &str = "7";
/// Format type value for the Standard format.
pub const FORMAT_TYPE_STANDARD: &str = "2";

/// Difficulty bands, from cheapest to rarest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Free,
    Rare,
    Epic,
    Legendary,
}

/// Events at which the tracking engine zeroes per-game counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameEvent {
    GameStart,
    GameEnd,
}

/// Requirement kinds understood by the tracking engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequirementType {
    // Game context
    GameType,
    RankedMinRank,
    RankedFormatType,
    ScenarioIds,
    SceneChangedToGame,
    CorrectOpponent,
    PlayerHero,
    // Outcome
    GameWon,
    GameTie,
    GameMinTurns,
    HealthAtEnd,
    ArmorAtEnd,
    DamageAtEnd,
    // Per-game totals
    TotalDamageTaken,
    TotalDamageDealt,
    TotalHeroHeal,
    TotalArmorGained,
    TotalDiscard,
    // Board
    MinionSummoned,
    MinionsControlledDuringTurn,
    ResummonedRecurringVillain,
    CardPlayedOrChangedOnBoard,
    PassiveBuff,
    // Deck composition
    DeckClassic,
    DeckRarity,
    DeckMechanic,
    DeckNoCardWithLetterInName,
    DeckNumberOfMinions,
    DeckCardAttributeValue,
    DeckType,
    DeckCardTextValue,
    DeckCardTextNumberOfWords,
    // Run progression
    DungeonRunStep,
    MonsterHuntStep,
}

/// Comparison qualifiers carried as requirement values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Qualifier {
    AtLeast,
    AtMost,
    Contains,
}

impl Qualifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Qualifier::AtLeast => "AT_LEAST",
            Qualifier::AtMost => "AT_MOST",
            Qualifier::Contains => "CONTAINS",
        }
    }
}

impl From<Qualifier> for String {
    fn from(qualifier: Qualifier) -> Self {
        qualifier.as_str().to_string()
    }
}

/// Scenarios of the single-player run modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScenarioId {
    DungeonRun,
    MonsterHunt,
    MonsterHuntFinal,
}

impl ScenarioId {
    pub fn value(&self) -> u32 {
        match self {
            ScenarioId::DungeonRun => 2663,
            ScenarioId::MonsterHunt => 2706,
            ScenarioId::MonsterHuntFinal => 2781,
        }
    }
}

/// One atomic condition. All requirements of a record must hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    #[serde(rename = "type")]
    pub kind: RequirementType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

impl Requirement {
    /// A requirement without parameters (e.g. `GAME_WON`).
    pub fn flag(kind: RequirementType) -> Self {
        Self {
            kind,
            values: Vec::new(),
        }
    }

    pub fn with<I, V>(kind: RequirementType, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self {
            kind,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn scenarios(scenarios: &[ScenarioId]) -> Self {
        Self::with(
            RequirementType::ScenarioIds,
            scenarios.iter().map(|s| s.value().to_string()),
        )
    }
}

/// A generated achievement definition.
///
/// Built once through a struct literal naming only the fields that are set
/// (`..Default::default()` for the rest); unset optional fields are left
/// out of the serialized object entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_card_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_card_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_number_of_records: Option<u32>,
    pub requirements: Vec<Requirement>,
    pub reset_events: Vec<GameEvent>,
}

impl Achievement {
    pub fn is_root(&self) -> bool {
        self.root == Some(true)
    }

    pub fn requirement_kinds(&self) -> Vec<RequirementType> {
        self.requirements.iter().map(|r| r.kind).collect()
    }
}
