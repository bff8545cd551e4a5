//! Card database loading (JSON array of card records).

use std::fs;
use std::path::Path;

use tracing::debug;

use super::types::Card;
use crate::error::CatalogError;

/// Parse a card database from its JSON text. Unknown fields are ignored.
pub fn parse_cards(json: &str) -> Result<Vec<Card>, CatalogError> {
    let cards: Vec<Card> = serde_json::from_str(json)?;
    Ok(cards)
}

/// Load the card database from a file on disk.
pub fn load_cards(path: &Path) -> Result<Vec<Card>, CatalogError> {
    let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cards = parse_cards(&json)?;
    debug!(path = %path.display(), cards = cards.len(), "loaded card database");
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let json = r#"[
            {"id": "HERO_01", "dbfId": 274, "name": "Garrosh Hellscream",
             "playerClass": "Warrior", "type": "Hero", "flavor": "ignored",
             "artist": "ignored too", "collectible": true}
        ]"#;
        let cards = parse_cards(json).unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].dbf_id, 274);
        assert_eq!(cards[0].player_class.as_deref(), Some("Warrior"));
        assert!(cards[0].collectible);
    }

    #[test]
    fn test_parse_defaults_missing_numbers_and_nullables() {
        let cards = parse_cards(r#"[{"id": "LOOTA_816", "type": "Spell"}]"#).unwrap();
        let card = &cards[0];
        assert_eq!(card.cost, 0);
        assert_eq!(card.attack, 0);
        assert!(card.text.is_none());
        assert!(card.mechanics.is_none());
        assert!(!card.collectible);
    }

    #[test]
    fn test_card_class_fallback() {
        let cards = parse_cards(r#"[{"id": "HERO_02", "cardClass": "SHAMAN"}]"#).unwrap();
        assert_eq!(cards[0].player_class().unwrap(), "SHAMAN");
    }

    #[test]
    fn test_both_class_fields_are_accepted() {
        let json = r#"[{"id": "HERO_01", "name": "Garrosh Hellscream",
            "playerClass": "Warrior", "cardClass": "WARRIOR", "type": "Hero"}]"#;
        let cards = parse_cards(json).unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].player_class().unwrap(), "Warrior");
        assert_eq!(cards[0].card_class.as_deref(), Some("WARRIOR"));
    }

    #[test]
    fn test_card_without_id_is_rejected() {
        let err = parse_cards(r#"[{"name": "Nameless"}]"#).unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cards.json");
        match load_cards(&path) {
            Err(CatalogError::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cards.json");
        fs::write(&path, r#"[{"id": "GILA_BOSS_61h", "name": "Hagatha the Witch", "type": "Hero"}]"#)
            .unwrap();
        let cards = load_cards(&path).unwrap();
        assert_eq!(cards[0].name().unwrap(), "Hagatha the Witch");
    }
}
