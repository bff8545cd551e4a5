//! Shared test fixtures: a synthetic card database shaped like the
//! reference one, so the default expectations hold exactly.
//!
//! Every card on an exclusion list is present (and would otherwise be
//! selected), alongside decoys for each filter.

#![allow(dead_code)]

use achievement_catalog::cards::DUNGEON_PASSIVE_BUFF;
use achievement_catalog::Card;

const CLASSES: [&str; 9] = [
    "Warrior", "Shaman", "Rogue", "Paladin", "Hunter", "Druid", "Warlock", "Mage", "Priest",
];
const TREASURE_TYPES: [&str; 3] = ["Minion", "Spell", "Weapon"];

pub fn card(id: &str, name: &str, card_type: &str) -> Card {
    Card {
        id: id.to_string(),
        name: Some(name.to_string()),
        player_class: Some("Neutral".to_string()),
        card_type: Some(card_type.to_string()),
        ..Default::default()
    }
}

pub fn hero(id: &str, name: &str, class: &str) -> Card {
    Card {
        player_class: Some(class.to_string()),
        ..card(id, name, "Hero")
    }
}

pub fn with_text(mut card: Card, text: &str) -> Card {
    card.text = Some(text.to_string());
    card
}

pub fn passive(id: &str, card_type: &str) -> Card {
    let mut card = with_text(
        card(id, &format!("Passive {}", id), card_type),
        "<b>Passive</b> Your minions cost (1) less.",
    );
    card.mechanics = Some(vec![DUNGEON_PASSIVE_BUFF.to_string()]);
    card
}

fn treasure(id: &str, index: usize) -> Card {
    with_text(
        card(id, &format!("Treasure {}", id), TREASURE_TYPES[index % 3]),
        "Deal 3 damage.",
    )
}

fn dungeon_run_cards() -> Vec<Card> {
    let mut cards = Vec::new();

    // 9 heroes, plus shapes that must not match
    for (i, class) in CLASSES.iter().enumerate() {
        cards.push(hero(&format!("HERO_{:02}", i + 1), &format!("Hero of the {}", class), class));
    }
    cards.push(hero("HERO_01a", "Alternate Garrosh", "Warrior"));
    cards.push(hero("HERO_100", "Not A Hero", "Mage"));

    // 48 bosses once LOOTA_BOSS_32h and LOOTA_BOSS_53h2 are dropped
    for n in 1..=49 {
        cards.push(hero(&format!("LOOTA_BOSS_{:02}h", n), &format!("Boss {}", n), "Neutral"));
        cards.push(card(&format!("LOOTA_BOSS_{:02}p", n), "Boss Power", "Hero_power"));
    }
    cards.push(hero("LOOTA_BOSS_53h2", "Inara the Mage", "Neutral"));

    // 30 shaped treasures and the two Kobold extras
    for (i, n) in (840..870).enumerate() {
        cards.push(treasure(&format!("LOOTA_{}", n), i));
    }
    cards.push(treasure("LOOT_998l", 1));
    cards.push(treasure("LOOT_998k", 0));
    cards.push(treasure("LOOT_998j", 0));
    cards.push(treasure("LOOTA_842t", 1));
    for n in [102, 103, 104, 105, 107, 109] {
        cards.push(treasure(&format!("LOOTA_{}", n), 0));
    }
    cards.push(card("LOOTA_845e", "Treasure Enchantment", "Enchantment"));

    // 14 passives; the first seven come back in the Monster Hunt
    for n in [800, 801, 803, 804, 824, 825, 831, 832, 833, 834, 835, 836, 837, 838] {
        cards.push(passive(&format!("LOOTA_{}", n), "Spell"));
    }

    cards
}

fn monster_hunt_cards() -> Vec<Card> {
    let mut cards = Vec::new();

    cards.push(hero("GILA_400h", "Houndmaster Shaw", "Hunter"));
    cards.push(hero("GILA_500h3", "Tess Greymane", "Rogue"));
    cards.push(hero("GILA_600h", "Darius Crowley", "Warrior"));
    cards.push(hero("GILA_900h", "Toki, Time-Tinker", "Mage"));

    // 46 regular bosses, Hagatha, and Beastly Pete (excluded)
    for n in 1..=46 {
        cards.push(hero(&format!("GILA_BOSS_{:02}h", n), &format!("Witchwood Boss {}", n), "Neutral"));
    }
    cards.push(hero("GILA_BOSS_61h", "Hagatha the Witch", "Shaman"));
    cards.push(hero("GILA_BOSS_52h2", "Beastly Pete", "Neutral"));

    // 55 shaped treasures and 8 granted by bosses
    for (i, n) in (700..755).enumerate() {
        cards.push(treasure(&format!("GILA_{}", n), i));
    }
    for id in [
        "GILA_BOSS_23t",
        "GILA_BOSS_29t",
        "GILA_BOSS_43t",
        "GILA_BOSS_37t",
        "GILA_BOSS_26t2",
        "GILA_BOSS_33t",
        "GILA_BOSS_57t",
        "GILA_BOSS_27t",
    ] {
        cards.push(treasure(id, 0));
    }
    cards.push(with_text(
        card("GILA_BOSS_23u", "\"Wanted!\" Poster", "Spell"),
        "Not in the extras list.",
    ));
    for id in [
        "GILA_400t",
        "GILA_500t",
        "GILA_601",
        "GILA_604",
        "GILA_817t",
        "GILA_818t",
        "GILA_819t",
        "GILA_825d",
    ] {
        cards.push(treasure(id, 1));
    }
    cards.push(with_text(
        card("GILA_602", "Cursed Castaway", "Spell"),
        "Add to your deck 3 random Curses.",
    ));

    // 14 hunt passives plus the returning Dungeon Run ones
    for n in 506..520 {
        cards.push(passive(&format!("GILA_{}", n), "Spell"));
    }
    cards.push(passive("GILA_506e", "Enchantment"));

    cards
}

/// Card database matching every default expectation.
pub fn reference_cards() -> Vec<Card> {
    let mut cards = dungeon_run_cards();
    cards.extend(monster_hunt_cards());
    cards
}

/// Total records the default configuration assembles from [`reference_cards`].
pub const REFERENCE_CATALOG_SIZE: usize = 66 + 66 + (72 + 96 + 32 + 14) + (33 + 94 + 63 + 21);
