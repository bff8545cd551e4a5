//! Declarative card selection rules.
//!
//! A [`Selector`] is a predicate chain over card records: identifier
//! patterns (any of which admits a card), an explicit exclusion list,
//! type constraints, the passive-mechanic partition and free-text
//! exclusions. Selection is pure and order-preserving.

use regex::Regex;
use tracing::debug;

use super::types::{Card, CardType, DUNGEON_PASSIVE_BUFF};
use crate::error::CatalogError;

/// How a card identifier is matched.
#[derive(Debug, Clone)]
pub enum IdPattern {
    Prefix(&'static str),
    Exact(&'static str),
    /// Whole-identifier regular expression.
    Shape(Regex),
}

impl IdPattern {
    /// Compile a pattern that must match the entire identifier.
    pub fn shape(pattern: &str) -> Result<Self, CatalogError> {
        Ok(IdPattern::Shape(Regex::new(&format!("^(?:{})$", pattern))?))
    }

    pub fn matches(&self, id: &str) -> bool {
        match self {
            IdPattern::Prefix(prefix) => id.starts_with(prefix),
            IdPattern::Exact(exact) => id == *exact,
            IdPattern::Shape(re) => re.is_match(id),
        }
    }
}

/// Partition on the `DUNGEON_PASSIVE_BUFF` mechanic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Passive {
    #[default]
    Any,
    Only,
    Without,
}

#[derive(Debug, Clone, Default)]
pub struct Selector {
    include: Vec<IdPattern>,
    exclude: Vec<&'static str>,
    types: Vec<CardType>,
    not_types: Vec<CardType>,
    passive: Passive,
    text_excludes: Vec<&'static str>,
}

impl Selector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include(mut self, pattern: IdPattern) -> Self {
        self.include.push(pattern);
        self
    }

    /// Admit each of these identifiers verbatim.
    pub fn include_ids(mut self, ids: &[&'static str]) -> Self {
        self.include.extend(ids.iter().copied().map(IdPattern::Exact));
        self
    }

    /// Remove these identifiers even when a pattern admits them.
    pub fn exclude(mut self, ids: &[&'static str]) -> Self {
        self.exclude.extend_from_slice(ids);
        self
    }

    /// Keep only cards whose type is one of these.
    pub fn of_types(mut self, types: &[CardType]) -> Self {
        self.types.extend_from_slice(types);
        self
    }

    pub fn not_type(mut self, card_type: CardType) -> Self {
        self.not_types.push(card_type);
        self
    }

    pub fn passive(mut self, passive: Passive) -> Self {
        self.passive = passive;
        self
    }

    /// Drop cards whose text contains `needle`. Cards without text are kept.
    pub fn text_excludes(mut self, needle: &'static str) -> Self {
        self.text_excludes.push(needle);
        self
    }

    pub fn matches(&self, card: &Card) -> bool {
        if !self.include.iter().any(|p| p.matches(&card.id)) {
            return false;
        }
        if self.exclude.contains(&card.id.as_str()) {
            return false;
        }
        if !self.types.is_empty() && !self.types.iter().any(|t| card.is_type(*t)) {
            return false;
        }
        if self.not_types.iter().any(|t| card.is_type(*t)) {
            return false;
        }
        let passive = card.has_mechanic(DUNGEON_PASSIVE_BUFF);
        match self.passive {
            Passive::Only if !passive => return false,
            Passive::Without if passive => return false,
            _ => {}
        }
        !self
            .text_excludes
            .iter()
            .any(|needle| card.text_contains(needle))
    }

    /// Cards admitted by every rule, in input order.
    pub fn select<'a, I>(&self, cards: I) -> Vec<&'a Card>
    where
        I: IntoIterator<Item = &'a Card>,
    {
        let selected: Vec<&Card> = cards.into_iter().filter(|c| self.matches(c)).collect();
        debug!(selected = selected.len(), "card selection");
        selected
    }
}

/// Look up a card that must exist exactly by id.
pub fn require<'a>(cards: &'a [Card], id: &str) -> Result<&'a Card, CatalogError> {
    cards
        .iter()
        .find(|card| card.id == id)
        .ok_or_else(|| CatalogError::MissingCard { id: id.to_string() })
}
