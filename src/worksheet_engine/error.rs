use thiserror::Error;

use crate::worksheet_engine::models::{Category, DifficultyTier, Subcategory};

/// Failure raised while generating a single problem.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// Difficulty string is not one of the three tiers.
    #[error("unsupported difficulty level: {0}")]
    UnsupportedDifficulty(String),

    /// The subcategory exists but belongs to a different topic.
    #[error("unsupported {category} subcategory: {subcategory}")]
    UnsupportedSubcategory { category: Category, subcategory: Subcategory },

    /// The string names no topic or subcategory at all.
    #[error("unknown concept: {0}")]
    UnknownConcept(String),

    /// A topic has no subcategory configured for a tier. Static tables make this
    /// unreachable; it signals a configuration defect.
    #[error("no {category} subcategories configured at {tier} level")]
    EmptySubcategorySet { category: Category, tier: DifficultyTier },

    /// A recipe could not produce a valid instance.
    #[error("could not build a {subcategory} problem: {reason}")]
    Recipe { subcategory: Subcategory, reason: String },
}

/// Request-level rejection, raised before any generation is attempted.
///
/// This is the only error class a transport should report as a client error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid worksheet type: {0}")]
    InvalidWorksheetType(String),

    #[error("Invalid difficulty: {0}")]
    InvalidDifficulty(String),

    #[error("No concepts selected")]
    NoConcepts,

    #[error("Fluency worksheets can only target one concept (got {0})")]
    TooManyFluencyConcepts(usize),

    #[error("Question count {requested} exceeds the maximum of {max}")]
    QuestionCountTooLarge { requested: usize, max: usize },
}
