//! Achievement definitions and the rules that expand them.
//!
//! Records are plain values in their wire shape. `tiers` turns a family's
//! templates into concrete records and `catalog` writes them out for the
//! tracking engine.

pub mod catalog;
pub mod tiers;
pub mod types;

pub use tiers::{
    ranked_context, CardTemplate, Points, RankedTemplate, StepTemplate, MOST_LENIENT_RANK,
    PROGRESSION_STEPS, RANK_TIERS,
};
pub use types::{
    Achievement, Difficulty, GameEvent, Qualifier, Requirement, RequirementType, ScenarioId,
};
