//! Deckbuilding archetypes: win a ranked game with a deck built around a
//! constraint. Emitted sorted by id.

use super::expect_count;
use crate::achievements::{
    Achievement, Difficulty, Points, Qualifier, RankedTemplate, Requirement, RequirementType,
};
use crate::error::CatalogError;

const DECK_SIZE: u32 = 30;
const MIN_LIFESTEAL_CARDS: u32 = 12;
const MIN_MINIONS: u32 = 15;
/// Stored completions kept per archetype.
const MAX_RECORDS: u32 = 3;

/// Shared shape of every archetype: rare, 5 points, requires a win.
fn archetype(
    key: &'static str,
    name: &'static str,
    title: &'static str,
    display_card_id: &'static str,
    display_card_type: &'static str,
    deck: String,
    constraints: Vec<Requirement>,
) -> RankedTemplate {
    let mut requirements = vec![Requirement::flag(RequirementType::GameWon)];
    requirements.extend(constraints);

    RankedTemplate {
        key,
        name,
        title,
        display_card_id,
        display_card_type,
        difficulty: Difficulty::Rare,
        empty_text: format!("Win one game with a deck containing {} in Ranked Standard", deck),
        completed_text: "Completed".to_string(),
        points: Points::Flat(5),
        max_number_of_records: Some(MAX_RECORDS),
        requirements,
    }
}

fn values<const N: usize>(values: [&str; N]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// "At least `count` cards ..." followed by the rest of the parameters.
fn count_then(count: u32, qualifier: Qualifier, rest: &[&str]) -> Vec<String> {
    let mut out = vec![count.to_string(), qualifier.into()];
    out.extend(rest.iter().map(|v| v.to_string()));
    out
}

pub fn templates() -> Vec<RankedTemplate> {
    use Qualifier::{AtLeast, AtMost};
    use RequirementType::*;

    let at_most = AtMost.as_str();
    let at_least = AtLeast.as_str();

    vec![
        archetype(
            "deckbuilding_win_classic",
            "Classic",
            "Classic",
            "CS2_127",
            "minion",
            "only Classic and Basic cards".to_string(),
            vec![Requirement::flag(DeckClassic)],
        ),
        archetype(
            "deckbuilding_win_epic",
            "Epic",
            "Epic",
            "TB_KTRAF_HP_RAF4",
            "minion",
            "only epic cards".to_string(),
            vec![Requirement::with(DeckRarity, count_then(DECK_SIZE, AtLeast, &["epic"]))],
        ),
        archetype(
            "deckbuilding_win_lifesteal",
            "Lifesteal",
            "Lifesteal",
            "DAL_047",
            "minion",
            format!("at least {} cards with lifesteal", MIN_LIFESTEAL_CARDS),
            vec![Requirement::with(
                DeckMechanic,
                [MIN_LIFESTEAL_CARDS.to_string(), "LIFESTEAL".into(), AtLeast.into()],
            )],
        ),
        archetype(
            "deckbuilding_win_the_void",
            "The Void",
            "The Void",
            "ULD_134",
            "minion",
            "no cards with the letter \"e\" in its (English) name".to_string(),
            vec![Requirement::with(DeckNoCardWithLetterInName, ["e"])],
        ),
        archetype(
            "deckbuilding_win_so_quiet",
            "So quiet",
            "So Quiet",
            "LOE_077",
            "minion",
            format!(
                "at least {} minions and no battlecry or deathrattle card",
                MIN_MINIONS
            ),
            vec![
                Requirement::with(DeckNumberOfMinions, count_then(MIN_MINIONS, AtLeast, &[])),
                Requirement::with(DeckMechanic, values(["0", "BATTLECRY", at_most])),
                Requirement::with(DeckMechanic, values(["0", "DEATHRATTLE", at_most])),
            ],
        ),
        archetype(
            "deckbuilding_win_thousand_cuts",
            "Death by a Thousand Cuts",
            "Death by a Thousand Cuts",
            "DAL_773",
            "minion",
            format!(
                "at least {} minions with 1 attack or less and no spell",
                MIN_MINIONS
            ),
            vec![
                Requirement::with(
                    DeckCardAttributeValue,
                    count_then(MIN_MINIONS, AtLeast, &["attack", "1", at_most]),
                ),
                Requirement::with(DeckType, values(["0", "SPELL", at_most])),
            ],
        ),
        archetype(
            "deckbuilding_win_fragile_nature",
            "Fragile Nature",
            "Fragile Nature",
            "GIL_665",
            "minion",
            format!("at least {} minions with 1 health and no spell", MIN_MINIONS),
            vec![
                Requirement::with(
                    DeckCardAttributeValue,
                    count_then(MIN_MINIONS, AtLeast, &["health", "1", at_most]),
                ),
                Requirement::with(DeckType, values(["0", "SPELL", at_most])),
            ],
        ),
        archetype(
            "deckbuilding_win_summoner",
            "Summoner",
            "Summoner",
            "DAL_575",
            "minion",
            "only cards with the word \"Summon\" in their text or name".to_string(),
            vec![Requirement::with(
                DeckCardTextValue,
                count_then(DECK_SIZE, AtLeast, &["summon", Qualifier::Contains.as_str()]),
            )],
        ),
        archetype(
            "deckbuilding_win_random",
            "My Own Casino",
            "My Own Casino",
            "KAR_009",
            "minion",
            "only cards with the word \"random\" in their text or name".to_string(),
            vec![Requirement::with(
                DeckCardTextValue,
                count_then(DECK_SIZE, AtLeast, &["random", Qualifier::Contains.as_str()]),
            )],
        ),
        archetype(
            "deckbuilding_win_simple",
            "Keeping it Simple",
            "Keeping it Simple",
            "CS2_182",
            "minion",
            "only cards with at most 3 words in their text".to_string(),
            vec![Requirement::with(
                DeckCardTextNumberOfWords,
                count_then(DECK_SIZE, AtLeast, &["3", at_most]),
            )],
        ),
        archetype(
            "deckbuilding_win_complex",
            "Complexity",
            "Complexity",
            "CS2_233",
            "spell",
            // "leat" matches the published catalog text
            "only cards with at leat 8 words in their text".to_string(),
            vec![Requirement::with(
                DeckCardTextNumberOfWords,
                count_then(DECK_SIZE, AtLeast, &["8", at_least]),
            )],
        ),
    ]
}

pub fn assemble(expected: usize) -> Result<Vec<Achievement>, CatalogError> {
    let mut records: Vec<Achievement> = templates()
        .iter()
        .flat_map(RankedTemplate::expand)
        .collect();
    records.sort_by(|a, b| a.id.cmp(&b.id));
    expect_count("deckbuilding", expected, records)
}
