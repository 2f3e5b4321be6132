use rand::{Rng, RngCore};

use crate::worksheet_engine::{
    error::GenerationError,
    helpers::{number_range, problem, random_in_tier, unsupported},
    models::{Category, DifficultyTier, DisplayType, Operator, Problem, ProblemBody, Subcategory},
    topics::TopicGenerator,
};

const ALL: &[Subcategory] = &[
    Subcategory::AddZero,
    Subcategory::AddOne,
    Subcategory::SameNumberAddition,
    Subcategory::NearDoubles,
    Subcategory::AddRandomNumbers,
];

pub struct Addition;

impl TopicGenerator for Addition {
    fn category(&self) -> Category {
        Category::Addition
    }

    fn available_subcategories(&self, _tier: DifficultyTier) -> &'static [Subcategory] {
        ALL
    }

    fn build(
        &self,
        rng: &mut dyn RngCore,
        tier: DifficultyTier,
        subcategory: Subcategory,
    ) -> Result<Problem, GenerationError> {
        let (first, second) = match subcategory {
            Subcategory::AddZero => (random_in_tier(rng, tier), 0),
            Subcategory::AddOne => (random_in_tier(rng, tier), 1),
            Subcategory::SameNumberAddition => {
                let n = random_in_tier(rng, tier);
                (n, n)
            }
            Subcategory::NearDoubles => {
                let (min, max) = number_range(tier);
                let base = rng.gen_range(min..max);
                (base, base + 1)
            }
            Subcategory::AddRandomNumbers => (random_in_tier(rng, tier), random_in_tier(rng, tier)),
            other => return Err(unsupported(Category::Addition, other)),
        };
        Ok(sum(subcategory, first, second))
    }
}

fn sum(kind: Subcategory, first: u32, second: u32) -> Problem {
    problem(
        kind,
        DisplayType::Vertical,
        (first + second).to_string(),
        ProblemBody::Arithmetic { first_number: first, second_number: second, operator: Operator::Plus },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn operands(p: &Problem) -> (u32, u32) {
        match p.body {
            ProblemBody::Arithmetic { first_number, second_number, .. } => (first_number, second_number),
            ref other => panic!("expected arithmetic body, got {other:?}"),
        }
    }

    #[test]
    fn add_zero_keeps_first_number() {
        let mut rng = StdRng::seed_from_u64(11);
        for tier in DifficultyTier::ALL {
            let p = Addition.build(&mut rng, tier, Subcategory::AddZero).unwrap();
            let (a, b) = operands(&p);
            assert_eq!(b, 0);
            assert_eq!(p.answer.to_string(), a.to_string());
        }
    }

    #[test]
    fn near_doubles_stay_inside_tier_range() {
        for tier in DifficultyTier::ALL {
            let (min, max) = number_range(tier);
            for seed in 0..200 {
                let mut rng = StdRng::seed_from_u64(seed);
                let p = Addition.build(&mut rng, tier, Subcategory::NearDoubles).unwrap();
                let (a, b) = operands(&p);
                assert_eq!(b, a + 1);
                assert!(a >= min && b <= max, "{a}+{b} outside {min}..={max}");
                assert_eq!(p.answer.to_string(), (2 * a + 1).to_string());
            }
        }
    }

    #[test]
    fn foreign_subcategory_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = Addition
            .build(&mut rng, DifficultyTier::Beginner, Subcategory::SubtractOne)
            .unwrap_err();
        assert_eq!(err, unsupported(Category::Addition, Subcategory::SubtractOne));
    }
}
