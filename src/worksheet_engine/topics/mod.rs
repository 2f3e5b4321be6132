//! Topic generators, one module per worksheet topic.
//!
//! Every topic is a unit struct implementing [`TopicGenerator`]. A topic only
//! declares which subcategories each tier offers and how to build one problem
//! for a resolved subcategory; validation and subcategory selection are shared
//! by the provided [`TopicGenerator::generate_problem`].
//!
//! Recipes are written against `R: Rng + ?Sized` so they accept both a concrete
//! seeded generator and the `&mut dyn RngCore` handed through the trait.

use rand::RngCore;

use crate::worksheet_engine::{
    error::GenerationError,
    helpers::{select_subcategory, unsupported},
    models::{Category, DifficultyTier, Problem, Subcategory},
};

pub mod addition;
pub mod fractions;
pub mod graphing;
pub mod measurement;
pub mod money_counting;
pub mod number_sense;
pub mod odd_even;
pub mod patterns;
pub mod place_value;
pub mod shapes;
pub mod skip_counting;
pub mod subtraction;
pub mod time_telling;
pub mod word_problems;

pub trait TopicGenerator: Send + Sync {
    /// The topic this generator serves.
    fn category(&self) -> Category;

    /// Subcategories offered at `tier`. Fixed configuration, never empty.
    fn available_subcategories(&self, tier: DifficultyTier) -> &'static [Subcategory];

    /// Build one problem for an already-resolved subcategory.
    fn build(
        &self,
        rng: &mut dyn RngCore,
        tier: DifficultyTier,
        subcategory: Subcategory,
    ) -> Result<Problem, GenerationError>;

    /// Pick the subcategory to generate; see [`select_subcategory`].
    fn select_subcategory(
        &self,
        rng: &mut dyn RngCore,
        tier: DifficultyTier,
        requested: Option<Subcategory>,
    ) -> Result<Subcategory, GenerationError> {
        select_subcategory(rng, self.category(), tier, self.available_subcategories(tier), requested)
    }

    /// Generate one problem.
    ///
    /// A requested subcategory owned by another topic is rejected; one owned by
    /// this topic but unavailable at `tier` falls back to a random available one.
    fn generate_problem(
        &self,
        rng: &mut dyn RngCore,
        tier: DifficultyTier,
        requested: Option<Subcategory>,
    ) -> Result<Problem, GenerationError> {
        if let Some(sub) = requested {
            if sub.category() != self.category() {
                return Err(unsupported(self.category(), sub));
            }
        }
        let sub = self.select_subcategory(rng, tier, requested)?;
        self.build(rng, tier, sub)
    }
}

/// The standard generator for every topic, in catalog order.
pub fn all() -> Vec<Box<dyn TopicGenerator>> {
    vec![
        Box::new(number_sense::NumberSense),
        Box::new(addition::Addition),
        Box::new(subtraction::Subtraction),
        Box::new(time_telling::TimeTelling),
        Box::new(money_counting::MoneyCounting),
        Box::new(place_value::PlaceValue),
        Box::new(word_problems::WordProblems),
        Box::new(shapes::Shapes),
        Box::new(skip_counting::SkipCounting),
        Box::new(fractions::Fractions),
        Box::new(measurement::Measurement),
        Box::new(patterns::Patterns),
        Box::new(graphing::Graphing),
        Box::new(odd_even::OddEven),
    ]
}
