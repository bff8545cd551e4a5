//! "Amazing plays": rank-tiered feats pulled off in Ranked Standard.

use super::expect_count;
use crate::achievements::{
    Achievement, Difficulty, Points, Qualifier, RankedTemplate, Requirement, RequirementType,
};
use crate::error::CatalogError;

const MIN_TURNS: &str = "4";
const DISCARDED_CARDS: u32 = 8;
const HERO_HEAL: u32 = 30;
const DAMAGE_DEALT: u32 = 120;
const ARMOR_GAINED: u32 = 60;
const DESERT_OBELISK: &str = "ULD_703";
const OBELISKS_CONTROLLED: u32 = 3;
const HIGHKEEPER_RA: &str = "ULD_705t";
const VILLAIN_RESUMMONS: u32 = 3;

/// Feat templates, in catalog order.
pub fn templates() -> Vec<RankedTemplate> {
    use RequirementType::*;

    vec![
        RankedTemplate {
            key: "amazing_plays_win_with_one_hp",
            name: "One HP matters",
            title: "One HP matters",
            display_card_id: "GILA_BOSS_49p",
            display_card_type: "minion",
            difficulty: Difficulty::Rare,
            empty_text: "Win one game with one HP left and no armor remaining in Ranked Standard"
                .to_string(),
            completed_text: "You won with one HP left".to_string(),
            points: Points::Flat(5),
            max_number_of_records: None,
            requirements: vec![
                Requirement::flag(GameWon),
                Requirement::with(HealthAtEnd, ["1"]),
                Requirement::with(ArmorAtEnd, ["0"]),
            ],
        },
        RankedTemplate {
            key: "amazing_plays_win_with_full_hp",
            name: "Don't Hit Me!",
            title: "Don't Hit Me!",
            display_card_id: "BRMA10_4",
            display_card_type: "minion",
            difficulty: Difficulty::Rare,
            empty_text: "Win one game with your full HP left in Ranked Standard".to_string(),
            completed_text: "You won with your full HP left".to_string(),
            points: Points::Flat(5),
            max_number_of_records: None,
            requirements: vec![
                Requirement::flag(GameWon),
                Requirement::with(DamageAtEnd, ["0"]),
                Requirement::with(GameMinTurns, [MIN_TURNS]),
            ],
        },
        RankedTemplate {
            key: "amazing_plays_game_tie",
            name: "That's A Nice Tie",
            title: "That's A Nice Tie",
            // Moroes' steward
            display_card_id: "KAR_044a",
            display_card_type: "minion",
            difficulty: Difficulty::Legendary,
            empty_text: "End the game with a tie in Ranked Standard".to_string(),
            completed_text: "You tied a game".to_string(),
            points: Points::PerRank { base: 15 },
            max_number_of_records: None,
            requirements: vec![Requirement::flag(GameTie)],
        },
        RankedTemplate {
            key: "amazing_plays_win_without_taking_damage",
            name: "Immune",
            title: "Immune",
            display_card_id: "CRED_69",
            display_card_type: "minion",
            difficulty: Difficulty::Epic,
            empty_text: "Win the game without taking any damage in Ranked Standard".to_string(),
            completed_text: "You won a game without taking any damage".to_string(),
            points: Points::PerRank { base: 10 },
            max_number_of_records: None,
            requirements: vec![
                Requirement::flag(GameWon),
                Requirement::with(TotalDamageTaken, ["0"]),
                Requirement::with(GameMinTurns, [MIN_TURNS]),
            ],
        },
        RankedTemplate {
            key: "amazing_plays_summon_highkeeper_ra",
            name: "Highkeeper Ra",
            title: "Highkeeper Ra is among us!",
            display_card_id: HIGHKEEPER_RA,
            display_card_type: "minion",
            difficulty: Difficulty::Legendary,
            empty_text: "Summon Highkeeper Ra in Ranked Standard".to_string(),
            completed_text: "You summoned Highkeeper Ra".to_string(),
            points: Points::Flat(40),
            max_number_of_records: None,
            requirements: vec![Requirement::with(MinionSummoned, [HIGHKEEPER_RA])],
        },
        RankedTemplate {
            key: "amazing_plays_discard_cards",
            name: "Put it Away",
            title: "Put it Away",
            display_card_id: "TRL_252",
            display_card_type: "minion",
            difficulty: Difficulty::Epic,
            empty_text: format!(
                "Discard {} cards in a single game in Ranked Standard",
                DISCARDED_CARDS
            ),
            completed_text: format!("You discarded {} cards in a single game", DISCARDED_CARDS),
            points: Points::PerRank { base: 5 },
            max_number_of_records: None,
            requirements: vec![Requirement::with(TotalDiscard, [DISCARDED_CARDS.to_string()])],
        },
        RankedTemplate {
            key: "amazing_plays_hero_heal",
            name: "Healed!",
            title: "Healed!",
            display_card_id: "CS1h_001_H2_AT_132",
            display_card_type: "minion",
            difficulty: Difficulty::Rare,
            empty_text: format!("Heal your hero for {} health in Ranked Standard", HERO_HEAL),
            completed_text: format!("You healed your hero for {} health", HERO_HEAL),
            points: Points::PerTwoRanks { base: 5 },
            max_number_of_records: None,
            requirements: vec![at_least(TotalHeroHeal, HERO_HEAL)],
        },
        RankedTemplate {
            key: "amazing_plays_deal_damage",
            name: "Burn Them All!",
            title: "Burn Them All!",
            display_card_id: "BRM_027p",
            display_card_type: "minion",
            difficulty: Difficulty::Rare,
            empty_text: format!(
                "Deal at least {} damage during one Ranked Standard game",
                DAMAGE_DEALT
            ),
            completed_text: format!("You dealt {} damage", DAMAGE_DEALT),
            points: Points::PerTwoRanks { base: 5 },
            max_number_of_records: None,
            requirements: vec![at_least(TotalDamageDealt, DAMAGE_DEALT)],
        },
        RankedTemplate {
            key: "amazing_plays_gain_armor",
            name: "Iron Defense",
            title: "Iron Defense",
            display_card_id: "EX1_606",
            display_card_type: "spell",
            difficulty: Difficulty::Rare,
            empty_text: format!(
                "Gain at least {} armor during one Ranked Standard game",
                ARMOR_GAINED
            ),
            completed_text: format!("You gained {} armor", ARMOR_GAINED),
            points: Points::PerTwoRanks { base: 5 },
            max_number_of_records: None,
            requirements: vec![at_least(TotalArmorGained, ARMOR_GAINED)],
        },
        RankedTemplate {
            key: "amazing_plays_desert_obelisk",
            name: "Desert Obelisks",
            title: "Desert Obelisks",
            display_card_id: DESERT_OBELISK,
            display_card_type: "minion",
            difficulty: Difficulty::Epic,
            empty_text: format!(
                "Control {} Desert Obelisks during your turn in Ranked Standard",
                OBELISKS_CONTROLLED
            ),
            completed_text: format!("You controlled {} Desert Obelisks", OBELISKS_CONTROLLED),
            points: Points::PerTwoRanks { base: 5 },
            max_number_of_records: None,
            requirements: vec![Requirement::with(
                MinionsControlledDuringTurn,
                [
                    DESERT_OBELISK.to_string(),
                    OBELISKS_CONTROLLED.to_string(),
                    Qualifier::AtLeast.into(),
                ],
            )],
        },
        RankedTemplate {
            key: "amazing_plays_recurring_villains",
            name: "Recurring Villains",
            title: "Recurring Villains",
            display_card_id: "DAL_749",
            display_card_type: "minion",
            difficulty: Difficulty::Rare,
            empty_text: format!(
                "Resummon a Recurring Villain at least {} times in Ranked Standard",
                VILLAIN_RESUMMONS
            ),
            completed_text: format!("You resummoned {} Recurring Villains", VILLAIN_RESUMMONS),
            points: Points::PerTwoRanks { base: 5 },
            max_number_of_records: None,
            requirements: vec![at_least(ResummonedRecurringVillain, VILLAIN_RESUMMONS)],
        },
    ]
}

fn at_least(kind: RequirementType, amount: u32) -> Requirement {
    Requirement::with(kind, [amount.to_string(), Qualifier::AtLeast.into()])
}

pub fn assemble(expected: usize) -> Result<Vec<Achievement>, CatalogError> {
    let records = templates()
        .iter()
        .flat_map(RankedTemplate::expand)
        .collect();
    expect_count("amazing_plays", expected, records)
}
