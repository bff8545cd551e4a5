//! Monster Hunt: four hunters, the final boss, bosses, treasures and
//! passives. Passive abilities are only offered in the regular hunt, every
//! other record also counts in the final encounter.

use super::{expect_count, PLAY_RESETS, TREASURE_TYPES};
use crate::achievements::{
    Achievement, CardTemplate, Difficulty, GameEvent, Requirement, RequirementType, ScenarioId,
    StepTemplate,
};
use crate::cards::{require, Card, CardType, IdPattern, Passive, Selector};
use crate::config::ModeExpectations;
use crate::error::CatalogError;

const SCENARIOS: &[ScenarioId] = &[ScenarioId::MonsterHunt, ScenarioId::MonsterHuntFinal];
const PASSIVE_SCENARIOS: &[ScenarioId] = &[ScenarioId::MonsterHunt];

const HUNTERS: &[&str] = &["GILA_400h", "GILA_500h3", "GILA_600h", "GILA_900h"];

/// Hagatha the Witch.
pub const FINAL_BOSS: &str = "GILA_BOSS_61h";
const FINAL_BOSS_ID: &str = "monster_hunt_final_boss";
const FINAL_BOSS_NAME: &str = "Defeated Hagatha the Witch!";
const FINAL_BOSS_POINTS: u32 = 15;

const CARD_SHAPE: &str = r"GILA_\d{3}[a-z]?";

const BOSS_EXCLUSIONS: &[&str] = &[
    "GILA_BOSS_52h2", // Beastly Pete
];

const TREASURE_EXTRAS: &[&str] = &[
    "GILA_BOSS_23t",
    "GILA_BOSS_29t",
    "GILA_BOSS_43t",
    "GILA_BOSS_37t",
    "GILA_BOSS_26t2",
    "GILA_BOSS_33t",
    "GILA_BOSS_57t",
    "GILA_BOSS_27t", // Amalgamate
];

const TREASURE_EXCLUSIONS: &[&str] = &[
    "GILA_400t",
    "GILA_500t",
    "GILA_601",
    "GILA_604",
    "GILA_817t",
    "GILA_818t",
    "GILA_819t",
    "GILA_825d",
];

/// Dungeon Run passives that came back in the hunt.
const PASSIVE_EXTRAS: &[&str] = &[
    "LOOTA_825",
    "LOOTA_803",
    "LOOTA_804",
    "LOOTA_800",
    "LOOTA_824",
    "LOOTA_831",
    "LOOTA_801",
];

const DECK_ADDITION: &str = "Add to your deck";

pub const PROGRESSION: StepTemplate = StepTemplate {
    key: "monster_hunt_progression",
    step_requirement: RequirementType::MonsterHuntStep,
    scenarios: SCENARIOS,
};

pub const BOSS_ENCOUNTER: CardTemplate = CardTemplate {
    key: "monster_hunt_boss_encounter",
    label: "Boss met",
    points: 2,
    trigger: RequirementType::CorrectOpponent,
    condition: Some(RequirementType::SceneChangedToGame),
    scenarios: SCENARIOS,
    reset_events: &[GameEvent::GameEnd],
    strip_passive_marker: false,
};

pub const BOSS_VICTORY: CardTemplate = CardTemplate {
    key: "monster_hunt_boss_victory",
    label: "Boss defeated",
    points: 3,
    trigger: RequirementType::CorrectOpponent,
    condition: Some(RequirementType::GameWon),
    scenarios: SCENARIOS,
    reset_events: &[GameEvent::GameStart],
    strip_passive_marker: false,
};

pub const TREASURE: CardTemplate = CardTemplate {
    key: "monster_hunt_treasure_play",
    label: "Treasure played",
    points: 3,
    trigger: RequirementType::CardPlayedOrChangedOnBoard,
    condition: None,
    scenarios: SCENARIOS,
    reset_events: PLAY_RESETS,
    strip_passive_marker: false,
};

pub const PASSIVE: CardTemplate = CardTemplate {
    key: "monster_hunt_passive_play",
    label: "Passive ability triggered",
    points: 3,
    trigger: RequirementType::PassiveBuff,
    condition: None,
    scenarios: PASSIVE_SCENARIOS,
    reset_events: PLAY_RESETS,
    strip_passive_marker: true,
};

pub fn hunters() -> Selector {
    Selector::new().include_ids(HUNTERS)
}

pub fn bosses() -> Selector {
    Selector::new()
        .include(IdPattern::Prefix("GILA_BOSS"))
        .exclude(BOSS_EXCLUSIONS)
        .of_types(&[CardType::Hero])
}

pub fn treasures() -> Result<Selector, CatalogError> {
    Ok(Selector::new()
        .include(IdPattern::shape(CARD_SHAPE)?)
        .include_ids(TREASURE_EXTRAS)
        .passive(Passive::Without)
        .of_types(TREASURE_TYPES)
        .text_excludes(DECK_ADDITION)
        .exclude(TREASURE_EXCLUSIONS))
}

pub fn passives() -> Result<Selector, CatalogError> {
    Ok(Selector::new()
        .include(IdPattern::shape(CARD_SHAPE)?)
        .include_ids(PASSIVE_EXTRAS)
        .passive(Passive::Only)
        .not_type(CardType::Enchantment))
}

/// Beating Hagatha closes the hunt. Counted with the progression records
/// but not tied to a hunter, so it has no step and no root.
pub fn final_boss(cards: &[Card]) -> Result<Achievement, CatalogError> {
    let boss = require(cards, FINAL_BOSS)?;
    Ok(Achievement {
        id: FINAL_BOSS_ID.to_string(),
        kind: PROGRESSION.key.to_string(),
        name: Some(FINAL_BOSS_NAME.to_string()),
        display_name: Some(FINAL_BOSS_NAME.to_string()),
        display_card_id: Some(boss.id.clone()),
        display_card_type: Some(boss.display_card_type()?),
        difficulty: Some(Difficulty::Legendary),
        points: Some(FINAL_BOSS_POINTS),
        requirements: vec![
            Requirement::with(RequirementType::CorrectOpponent, [boss.id.as_str()]),
            Requirement::flag(RequirementType::GameWon),
            Requirement::scenarios(SCENARIOS),
        ],
        reset_events: vec![GameEvent::GameStart],
        ..Default::default()
    })
}

pub fn assemble(
    cards: &[Card],
    expected: &ModeExpectations,
) -> Result<Vec<Achievement>, CatalogError> {
    let mut catalog = Vec::new();

    let mut progression = Vec::new();
    for hunter in hunters().select(cards) {
        progression.extend(PROGRESSION.expand(hunter)?);
    }
    progression.push(final_boss(cards)?);
    catalog.extend(expect_count(
        "monster_hunt.progression",
        expected.progression,
        progression,
    )?);

    let bosses = bosses().select(cards);
    let mut boss_records = BOSS_ENCOUNTER.build_all(&bosses)?;
    boss_records.extend(BOSS_VICTORY.build_all(&bosses)?);
    catalog.extend(expect_count("monster_hunt.bosses", expected.bosses, boss_records)?);

    let treasures = TREASURE.build_all(&treasures()?.select(cards))?;
    catalog.extend(expect_count(
        "monster_hunt.treasures",
        expected.treasures,
        treasures,
    )?);

    let passives = PASSIVE.build_all(&passives()?.select(cards))?;
    catalog.extend(expect_count("monster_hunt.passives", expected.passives, passives)?);

    Ok(catalog)
}
