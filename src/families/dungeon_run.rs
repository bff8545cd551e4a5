//! Dungeon Run: hero progression, bosses, treasures and passives.

use super::{expect_count, PLAY_RESETS, TREASURE_TYPES};
use crate::achievements::{
    Achievement, CardTemplate, GameEvent, RequirementType, ScenarioId, StepTemplate,
};
use crate::cards::{Card, CardType, IdPattern, Passive, Selector};
use crate::config::ModeExpectations;
use crate::error::CatalogError;

const SCENARIOS: &[ScenarioId] = &[ScenarioId::DungeonRun];

const HERO_SHAPE: &str = r"HERO_\d{2}";
const CARD_SHAPE: &str = r"LOOTA_\d{3}[a-z]?";

const BOSS_EXCLUSIONS: &[&str] = &[
    "LOOTA_BOSS_53h2", // Inara the Mage, second form
    "LOOTA_BOSS_32h",  // Karl and George
];

const TREASURE_EXTRAS: &[&str] = &[
    "LOOT_998l", // Wondrous Wand
    "LOOT_998k", // Golden Kobold
];

const TREASURE_EXCLUSIONS: &[&str] = &[
    "LOOTA_842t", // Forging of Quel'Delar
    // summoned by bosses
    "LOOTA_102",
    "LOOTA_103",
    "LOOTA_104",
    "LOOTA_105",
    "LOOTA_107",
    "LOOTA_109",
];

pub const PROGRESSION: StepTemplate = StepTemplate {
    key: "dungeon_run_progression",
    step_requirement: RequirementType::DungeonRunStep,
    scenarios: SCENARIOS,
};

pub const BOSS_ENCOUNTER: CardTemplate = CardTemplate {
    key: "dungeon_run_boss_encounter",
    label: "Boss met",
    points: 2,
    trigger: RequirementType::CorrectOpponent,
    condition: Some(RequirementType::SceneChangedToGame),
    scenarios: SCENARIOS,
    reset_events: &[GameEvent::GameEnd],
    strip_passive_marker: false,
};

pub const BOSS_VICTORY: CardTemplate = CardTemplate {
    key: "dungeon_run_boss_victory",
    label: "Boss defeated",
    points: 3,
    trigger: RequirementType::CorrectOpponent,
    condition: Some(RequirementType::GameWon),
    scenarios: SCENARIOS,
    reset_events: &[GameEvent::GameStart],
    strip_passive_marker: false,
};

pub const TREASURE: CardTemplate = CardTemplate {
    key: "dungeon_run_treasure_play",
    label: "Treasure played",
    points: 3,
    trigger: RequirementType::CardPlayedOrChangedOnBoard,
    condition: None,
    scenarios: SCENARIOS,
    reset_events: PLAY_RESETS,
    strip_passive_marker: false,
};

pub const PASSIVE: CardTemplate = CardTemplate {
    key: "dungeon_run_passive_play",
    label: "Passive ability triggered",
    points: 3,
    trigger: RequirementType::PassiveBuff,
    condition: None,
    scenarios: SCENARIOS,
    reset_events: PLAY_RESETS,
    strip_passive_marker: true,
};

pub fn heroes() -> Result<Selector, CatalogError> {
    Ok(Selector::new().include(IdPattern::shape(HERO_SHAPE)?))
}

pub fn bosses() -> Selector {
    Selector::new()
        .include(IdPattern::Prefix("LOOTA_BOSS"))
        .exclude(BOSS_EXCLUSIONS)
        .of_types(&[CardType::Hero])
}

pub fn treasures() -> Result<Selector, CatalogError> {
    Ok(Selector::new()
        .include(IdPattern::shape(CARD_SHAPE)?)
        .include_ids(TREASURE_EXTRAS)
        .exclude(TREASURE_EXCLUSIONS)
        .passive(Passive::Without)
        .of_types(TREASURE_TYPES))
}

pub fn passives() -> Result<Selector, CatalogError> {
    Ok(Selector::new()
        .include(IdPattern::shape(CARD_SHAPE)?)
        .passive(Passive::Only))
}

pub fn assemble(
    cards: &[Card],
    expected: &ModeExpectations,
) -> Result<Vec<Achievement>, CatalogError> {
    let mut catalog = Vec::new();

    let mut progression = Vec::new();
    for hero in heroes()?.select(cards) {
        progression.extend(PROGRESSION.expand(hero)?);
    }
    catalog.extend(expect_count(
        "dungeon_run.progression",
        expected.progression,
        progression,
    )?);

    let bosses = bosses().select(cards);
    let mut boss_records = BOSS_ENCOUNTER.build_all(&bosses)?;
    boss_records.extend(BOSS_VICTORY.build_all(&bosses)?);
    catalog.extend(expect_count("dungeon_run.bosses", expected.bosses, boss_records)?);

    let treasures = TREASURE.build_all(&treasures()?.select(cards))?;
    catalog.extend(expect_count(
        "dungeon_run.treasures",
        expected.treasures,
        treasures,
    )?);

    let passives = PASSIVE.build_all(&passives()?.select(cards))?;
    catalog.extend(expect_count("dungeon_run.passives", expected.passives, passives)?);

    Ok(catalog)
}
