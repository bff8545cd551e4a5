//! Template expansion: rank tiers, progression steps and per-card records.
//!
//! Every family is written as one of three template shapes and expanded
//! here, so a family only supplies its constants (texts, points formula,
//! family-specific requirements) and never repeats the expansion logic.

use super::types::{
    Achievement, Difficulty, GameEvent, Requirement, RequirementType, ScenarioId,
    FORMAT_TYPE_STANDARD, GAME_TYPE_RANKED,
};
use crate::cards::Card;
use crate::error::CatalogError;

/// Ranked ladder thresholds, from most lenient to strictest.
pub const RANK_TIERS: [u32; 6] = [25, 20, 15, 10, 5, 1];
/// The most lenient rank; its tier is the root variant.
pub const MOST_LENIENT_RANK: u32 = 25;
/// Number of rounds in a single-player run.
pub const PROGRESSION_STEPS: u32 = 8;
/// Icon shared by all rank-tiered achievements.
pub const RANKED_ICON: &str = "boss_victory";

const PASSIVE_MARKER: &str = "<b>Passive</b>";

/// Points awarded at a given rank.
///
/// Integer arithmetic throughout: `(25 - R) / 2` truncates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Points {
    Flat(u32),
    /// `base + (25 - R)`
    PerRank { base: u32 },
    /// `base + (25 - R) / 2`
    PerTwoRanks { base: u32 },
}

impl Points {
    pub fn at_rank(&self, rank: u32) -> u32 {
        let climbed = MOST_LENIENT_RANK.saturating_sub(rank);
        match *self {
            Points::Flat(points) => points,
            Points::PerRank { base } => base + climbed,
            Points::PerTwoRanks { base } => base + climbed / 2,
        }
    }
}

/// The three requirements every ranked variant starts with.
pub fn ranked_context(rank: u32) -> [Requirement; 3] {
    [
        Requirement::with(RequirementType::GameType, [GAME_TYPE_RANKED]),
        Requirement::with(RequirementType::RankedMinRank, [rank.to_string()]),
        Requirement::with(RequirementType::RankedFormatType, [FORMAT_TYPE_STANDARD]),
    ]
}

/// A feat played on the ranked ladder, duplicated once per rank tier.
#[derive(Debug, Clone)]
pub struct RankedTemplate {
    /// Shared `type`; variant ids are `<key>_<rank>`.
    pub key: &'static str,
    pub name: &'static str,
    /// Title used in the "Achievement completed" banner.
    pub title: &'static str,
    pub display_card_id: &'static str,
    pub display_card_type: &'static str,
    pub difficulty: Difficulty,
    pub empty_text: String,
    /// Completion text, followed by " at rank R or better".
    pub completed_text: String,
    pub points: Points,
    pub max_number_of_records: Option<u32>,
    /// Requirements appended after the ranked context.
    pub requirements: Vec<Requirement>,
}

impl RankedTemplate {
    pub fn at_rank(&self, rank: u32) -> Achievement {
        let mut requirements = ranked_context(rank).to_vec();
        requirements.extend(self.requirements.iter().cloned());

        Achievement {
            id: format!("{}_{}", self.key, rank),
            kind: self.key.to_string(),
            icon: Some(RANKED_ICON.to_string()),
            root: Some(rank == MOST_LENIENT_RANK),
            priority: Some(-(rank as i32)),
            name: Some(self.name.to_string()),
            display_name: Some(format!(
                "Achievement completed: {} (rank {})",
                self.title, rank
            )),
            display_card_id: Some(self.display_card_id.to_string()),
            display_card_type: Some(self.display_card_type.to_string()),
            difficulty: Some(self.difficulty),
            empty_text: Some(self.empty_text.clone()),
            completed_text: Some(format!("{} at rank {} or better", self.completed_text, rank)),
            points: Some(self.points.at_rank(rank)),
            max_number_of_records: self.max_number_of_records,
            requirements,
            reset_events: vec![GameEvent::GameStart],
            ..Default::default()
        }
    }

    /// One variant per entry of [`RANK_TIERS`], in that order.
    pub fn expand(&self) -> Vec<Achievement> {
        RANK_TIERS.iter().map(|&rank| self.at_rank(rank)).collect()
    }
}

/// Round-by-round progression with one hero in a run mode.
#[derive(Debug, Clone, Copy)]
pub struct StepTemplate {
    /// Shared `type`; variant ids are `<key>_<hero id>_<step>`.
    pub key: &'static str,
    pub step_requirement: RequirementType,
    pub scenarios: &'static [ScenarioId],
}

impl StepTemplate {
    pub fn at_step(&self, hero: &Card, step: u32) -> Result<Achievement, CatalogError> {
        let class = hero.player_class()?;
        let name = format!(
            "{} ({}) - Cleared round {}",
            hero.safe_name()?,
            class,
            step + 1
        );
        let difficulty = if step == PROGRESSION_STEPS - 1 {
            Difficulty::Epic
        } else {
            Difficulty::Free
        };

        Ok(Achievement {
            id: format!("{}_{}_{}", self.key, hero.id, step),
            kind: self.key.to_string(),
            root: Some(step == 0),
            name: Some(name.clone()),
            display_name: Some(name),
            display_card_id: Some(hero.id.clone()),
            display_card_type: Some(hero.display_card_type()?),
            difficulty: Some(difficulty),
            empty_text: Some(format!("Clear the first round with {} to get started", class)),
            text: Some(format!("Cleared round {}", step + 1)),
            points: Some(1 + 2 * step),
            requirements: vec![
                Requirement::with(self.step_requirement, [step.to_string()]),
                Requirement::flag(RequirementType::GameWon),
                Requirement::with(RequirementType::PlayerHero, [hero.id.as_str()]),
                Requirement::scenarios(self.scenarios),
            ],
            reset_events: vec![GameEvent::GameStart],
            ..Default::default()
        })
    }

    /// Steps `0..PROGRESSION_STEPS` for one hero.
    pub fn expand(&self, hero: &Card) -> Result<Vec<Achievement>, CatalogError> {
        (0..PROGRESSION_STEPS)
            .map(|step| self.at_step(hero, step))
            .collect()
    }
}

/// One record per selected card: bosses met or beaten, treasures and
/// passives played.
#[derive(Debug, Clone, Copy)]
pub struct CardTemplate {
    /// Shared `type`; ids are `<key>_<card id>`.
    pub key: &'static str,
    /// Banner prefix, e.g. "Boss met".
    pub label: &'static str,
    pub points: u32,
    /// Requirement parameterised by the card id.
    pub trigger: RequirementType,
    /// Optional parameterless requirement between trigger and scenarios.
    pub condition: Option<RequirementType>,
    pub scenarios: &'static [ScenarioId],
    pub reset_events: &'static [GameEvent],
    /// Passive cards carry a bold "Passive" marker that is dropped from the text.
    pub strip_passive_marker: bool,
}

impl CardTemplate {
    pub fn build(&self, card: &Card) -> Result<Achievement, CatalogError> {
        let name = card.safe_name()?;
        let text = if self.strip_passive_marker {
            let text = card
                .text
                .as_deref()
                .ok_or_else(|| CatalogError::malformed(&card.id, "text"))?;
            Some(text.replace(PASSIVE_MARKER, ""))
        } else {
            card.text.clone()
        };

        let mut requirements = vec![Requirement::with(self.trigger, [card.id.as_str()])];
        requirements.extend(self.condition.map(Requirement::flag));
        requirements.push(Requirement::scenarios(self.scenarios));

        Ok(Achievement {
            id: format!("{}_{}", self.key, card.id),
            kind: self.key.to_string(),
            display_name: Some(format!("{}: {}", self.label, name)),
            name: Some(name),
            text,
            display_card_id: Some(card.id.clone()),
            display_card_type: Some(card.display_card_type()?),
            difficulty: Some(Difficulty::Rare),
            points: Some(self.points),
            requirements,
            reset_events: self.reset_events.to_vec(),
            ..Default::default()
        })
    }

    pub fn build_all(&self, cards: &[&Card]) -> Result<Vec<Achievement>, CatalogError> {
        cards.iter().map(|card| self.build(card)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero(id: &str) -> Card {
        Card {
            id: id.to_string(),
            name: Some("Rakanishu".to_string()),
            player_class: Some("Mage".to_string()),
            card_type: Some("Hero".to_string()),
            ..Default::default()
        }
    }

    fn no_damage() -> RankedTemplate {
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
            requirements: vec![Requirement::flag(RequirementType::GameWon)],
        }
    }

    const DUNGEON: StepTemplate = StepTemplate {
        key: "dungeon_run_progression",
        step_requirement: RequirementType::DungeonRunStep,
        scenarios: &[ScenarioId::DungeonRun],
    };

    #[test]
    fn test_points_formulas_truncate() {
        assert_eq!(Points::Flat(5).at_rank(1), 5);
        assert_eq!(Points::PerRank { base: 15 }.at_rank(20), 20);
        let halved: Vec<u32> = RANK_TIERS
            .iter()
            .map(|&r| Points::PerTwoRanks { base: 5 }.at_rank(r))
            .collect();
        assert_eq!(halved, vec![5, 7, 10, 12, 15, 17]);
    }

    #[test]
    fn test_ranked_expansion_points_and_root() {
        let variants = no_damage().expand();
        let points: Vec<u32> = variants.iter().map(|a| a.points.unwrap()).collect();
        assert_eq!(points, vec![10, 15, 20, 25, 30, 34]);

        let roots: Vec<&str> = variants
            .iter()
            .filter(|a| a.is_root())
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(roots, vec!["amazing_plays_win_without_taking_damage_25"]);
    }

    #[test]
    fn test_ranked_priority_and_text() {
        let variants = no_damage().expand();
        let priorities: Vec<i32> = variants.iter().map(|a| a.priority.unwrap()).collect();
        assert_eq!(priorities, vec![-25, -20, -15, -10, -5, -1]);
        assert_eq!(
            variants[3].completed_text.as_deref(),
            Some("You won a game without taking any damage at rank 10 or better")
        );
        assert_eq!(
            variants[3].display_name.as_deref(),
            Some("Achievement completed: Immune (rank 10)")
        );
        assert!(variants.iter().all(|a| a.kind == "amazing_plays_win_without_taking_damage"));
    }

    #[test]
    fn test_ranked_context_prefix() {
        let achievement = no_damage().at_rank(5);
        assert_eq!(&achievement.requirements[..3], &ranked_context(5));
        assert_eq!(achievement.requirements[1].values, vec!["5"]);
        assert_eq!(achievement.requirements[3].kind, RequirementType::GameWon);
    }

    #[test]
    fn test_step_expansion() {
        let steps = DUNGEON.expand(&hero("HERO_07")).unwrap();
        let ids: Vec<&str> = steps.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids[0], "dungeon_run_progression_HERO_07_0");
        assert_eq!(ids[7], "dungeon_run_progression_HERO_07_7");

        let points: Vec<u32> = steps.iter().map(|a| a.points.unwrap()).collect();
        assert_eq!(points, vec![1, 3, 5, 7, 9, 11, 13, 15]);

        assert!(steps[..7].iter().all(|a| a.difficulty == Some(Difficulty::Free)));
        assert_eq!(steps[7].difficulty, Some(Difficulty::Epic));
        assert_eq!(steps.iter().filter(|a| a.is_root()).count(), 1);
        assert!(steps[0].is_root());
    }

    #[test]
    fn test_step_texts_and_requirements() {
        let step = DUNGEON.at_step(&hero("HERO_08"), 2).unwrap();
        assert_eq!(step.name.as_deref(), Some("Rakanishu (Mage) - Cleared round 3"));
        assert_eq!(step.text.as_deref(), Some("Cleared round 3"));
        assert_eq!(
            step.empty_text.as_deref(),
            Some("Clear the first round with Mage to get started")
        );
        assert_eq!(step.display_card_type.as_deref(), Some("hero"));
        assert_eq!(
            step.requirement_kinds(),
            vec![
                RequirementType::DungeonRunStep,
                RequirementType::GameWon,
                RequirementType::PlayerHero,
                RequirementType::ScenarioIds,
            ]
        );
        assert_eq!(step.requirements[0].values, vec!["2"]);
    }

    #[test]
    fn test_step_requires_player_class() {
        let mut classless = hero("HERO_09");
        classless.player_class = None;
        assert!(matches!(
            DUNGEON.expand(&classless),
            Err(CatalogError::MalformedCard { field: "playerClass", .. })
        ));
    }

    #[test]
    fn test_card_template_shape() {
        let template = CardTemplate {
            key: "dungeon_run_boss_encounter",
            label: "Boss met",
            points: 2,
            trigger: RequirementType::CorrectOpponent,
            condition: Some(RequirementType::SceneChangedToGame),
            scenarios: &[ScenarioId::DungeonRun],
            reset_events: &[GameEvent::GameEnd],
            strip_passive_marker: false,
        };
        let boss = hero("LOOTA_BOSS_01h");
        let achievement = template.build(&boss).unwrap();
        assert_eq!(achievement.id, "dungeon_run_boss_encounter_LOOTA_BOSS_01h");
        assert_eq!(achievement.display_name.as_deref(), Some("Boss met: Rakanishu"));
        assert_eq!(achievement.points, Some(2));
        assert_eq!(achievement.root, None);
        assert_eq!(achievement.text, None);
        assert_eq!(achievement.reset_events, vec![GameEvent::GameEnd]);
        assert_eq!(
            achievement.requirement_kinds(),
            vec![
                RequirementType::CorrectOpponent,
                RequirementType::SceneChangedToGame,
                RequirementType::ScenarioIds,
            ]
        );
    }

    #[test]
    fn test_generated_names_strip_quotes() {
        let template = CardTemplate {
            key: "monster_hunt_treasure_play",
            label: "Treasure played",
            points: 3,
            trigger: RequirementType::CardPlayedOrChangedOnBoard,
            condition: None,
            scenarios: &[ScenarioId::MonsterHunt, ScenarioId::MonsterHuntFinal],
            reset_events: &[GameEvent::GameStart, GameEvent::GameEnd],
            strip_passive_marker: false,
        };
        let mut poster = hero("GILA_BOSS_23t");
        poster.name = Some("\"Wanted!\" Poster".to_string());
        poster.card_type = Some("Spell".to_string());
        let achievement = template.build(&poster).unwrap();
        assert_eq!(achievement.name.as_deref(), Some("Wanted! Poster"));
        assert_eq!(
            achievement.display_name.as_deref(),
            Some("Treasure played: Wanted! Poster")
        );

        let mut quoted = hero("HERO_04");
        quoted.name = Some("Uther \"the Lightbringer\"".to_string());
        let step = DUNGEON.at_step(&quoted, 0).unwrap();
        assert_eq!(
            step.name.as_deref(),
            Some("Uther the Lightbringer (Mage) - Cleared round 1")
        );
    }

    #[test]
    fn test_passive_marker_is_stripped() {
        let template = CardTemplate {
            key: "dungeon_run_passive_play",
            label: "Passive ability triggered",
            points: 3,
            trigger: RequirementType::PassiveBuff,
            condition: None,
            scenarios: &[ScenarioId::DungeonRun],
            reset_events: &[GameEvent::GameStart, GameEvent::GameEnd],
            strip_passive_marker: true,
        };
        let mut passive = hero("LOOTA_801");
        passive.card_type = Some("Spell".to_string());
        passive.text = Some("<b>Passive</b> Your minions have +1 Attack.".to_string());
        let achievement = template.build(&passive).unwrap();
        assert_eq!(achievement.text.as_deref(), Some(" Your minions have +1 Attack."));
        assert_eq!(achievement.requirements.len(), 2);

        passive.text = None;
        assert!(matches!(
            template.build(&passive),
            Err(CatalogError::MalformedCard { field: "text", .. })
        ));
    }
}
