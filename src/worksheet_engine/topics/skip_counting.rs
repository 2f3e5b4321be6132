use rand::{Rng, RngCore};

use crate::worksheet_engine::{
    error::GenerationError,
    helpers::{arithmetic_run, blank_one, pick, problem, unsupported},
    models::{Category, DifficultyTier, DisplayType, Problem, ProblemBody, Subcategory},
    topics::TopicGenerator,
};

pub struct SkipCounting;

impl TopicGenerator for SkipCounting {
    fn category(&self) -> Category {
        Category::SkipCounting
    }

    fn available_subcategories(&self, tier: DifficultyTier) -> &'static [Subcategory] {
        use Subcategory::*;
        match tier {
            DifficultyTier::Beginner     => &[ByOnesTwos],
            DifficultyTier::Intermediate => &[ByOnesTwos, ByFivesTens],
            DifficultyTier::Advanced     => &[ByFivesTens, ByHundreds],
        }
    }

    fn build(
        &self,
        rng: &mut dyn RngCore,
        _tier: DifficultyTier,
        subcategory: Subcategory,
    ) -> Result<Problem, GenerationError> {
        let (start, step, length) = match subcategory {
            Subcategory::ByOnesTwos  => (rng.gen_range(1..=10), pick(rng, &[1, 2]), 6),
            Subcategory::ByFivesTens => (rng.gen_range(0..=50), pick(rng, &[5, 10]), 6),
            Subcategory::ByHundreds  => (rng.gen_range(0..=500), 100, 5),
            other => return Err(unsupported(Category::SkipCounting, other)),
        };
        let run = arithmetic_run(start, step, length);
        // The first term always stays visible so the start is known.
        let (sequence, missing, blank_index) = blank_one(rng, &run, 1);
        Ok(problem(
            subcategory,
            DisplayType::Sequence,
            missing.to_string(),
            ProblemBody::Sequence { sequence, step, blank_index },
        ))
    }
}
