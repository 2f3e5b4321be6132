use rand::{Rng, RngCore};

use crate::worksheet_engine::{
    error::GenerationError,
    helpers::{number_range, problem, random_in_tier, unsupported},
    models::{Category, DifficultyTier, DisplayType, Operator, Problem, ProblemBody, Subcategory},
    topics::TopicGenerator,
};

const ALL: &[Subcategory] = &[
    Subcategory::SubtractZero,
    Subcategory::SubtractOne,
    Subcategory::SameNumberSubtraction,
    Subcategory::NearDoublesSubtraction,
    Subcategory::SubtractRandomNumbers,
];

pub struct Subtraction;

impl TopicGenerator for Subtraction {
    fn category(&self) -> Category {
        Category::Subtraction
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
        let (min, max) = number_range(tier);
        let (first, second) = match subcategory {
            Subcategory::SubtractZero => (random_in_tier(rng, tier), 0),
            // Result stays >= 1.
            Subcategory::SubtractOne => (rng.gen_range((min + 1).max(2)..=max), 1),
            Subcategory::SameNumberSubtraction => {
                let n = random_in_tier(rng, tier);
                (n, n)
            }
            // a - (a - 1); both operands inside the tier range.
            Subcategory::NearDoublesSubtraction => {
                let base = rng.gen_range((min + 1).max(2)..=max);
                (base, base - 1)
            }
            Subcategory::SubtractRandomNumbers => {
                let first = random_in_tier(rng, tier);
                (first, rng.gen_range(min..=first))
            }
            other => return Err(unsupported(Category::Subtraction, other)),
        };
        Ok(problem(
            subcategory,
            DisplayType::Vertical,
            (first - second).to_string(),
            ProblemBody::Arithmetic { first_number: first, second_number: second, operator: Operator::Minus },
        ))
    }
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
    fn same_number_subtraction_answers_zero() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let p = Subtraction
                .build(&mut rng, DifficultyTier::Beginner, Subcategory::SameNumberSubtraction)
                .unwrap();
            let (a, b) = operands(&p);
            assert_eq!(a, b);
            assert!(a <= 9);
            assert_eq!(p.answer.to_string(), "0");
        }
    }

    #[test]
    fn subtract_one_never_reaches_zero() {
        for tier in DifficultyTier::ALL {
            for seed in 0..200 {
                let mut rng = StdRng::seed_from_u64(seed);
                let p = Subtraction.build(&mut rng, tier, Subcategory::SubtractOne).unwrap();
                let (a, b) = operands(&p);
                assert_eq!(b, 1);
                assert!(a >= 2);
                assert_eq!(p.answer.to_string(), (a - 1).to_string());
            }
        }
    }

    #[test]
    fn random_subtraction_is_never_negative() {
        for tier in DifficultyTier::ALL {
            let (min, _) = number_range(tier);
            for seed in 0..200 {
                let mut rng = StdRng::seed_from_u64(seed);
                let p = Subtraction.build(&mut rng, tier, Subcategory::SubtractRandomNumbers).unwrap();
                let (a, b) = operands(&p);
                assert!(b >= min && b <= a, "{a} - {b} at {tier:?}");
            }
        }
    }

    #[test]
    fn near_doubles_subtraction_answers_one() {
        for tier in DifficultyTier::ALL {
            let mut rng = StdRng::seed_from_u64(5);
            let p = Subtraction.build(&mut rng, tier, Subcategory::NearDoublesSubtraction).unwrap();
            let (a, b) = operands(&p);
            assert_eq!(a - b, 1);
            assert_eq!(p.answer.to_string(), "1");
        }
    }
}
