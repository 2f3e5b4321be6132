use std::cmp::Ordering;

use rand::{Rng, RngCore};

use crate::worksheet_engine::{
    error::GenerationError,
    helpers::{arithmetic_run, blank_one, pick, problem, random_in_tier, unsupported},
    models::{join, BeforeAfter, Category, DifficultyTier, DisplayType, Problem, ProblemBody, Subcategory},
    topics::TopicGenerator,
};

const ALL: &[Subcategory] = &[
    Subcategory::Comparison,
    Subcategory::Ordering,
    Subcategory::BeforeAfter,
    Subcategory::MissingNumbers,
];

pub struct NumberSense;

impl TopicGenerator for NumberSense {
    fn category(&self) -> Category {
        Category::NumberSense
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
        match subcategory {
            Subcategory::Comparison => {
                let first = random_in_tier(rng, tier);
                let second = random_in_tier(rng, tier);
                Ok(comparison(first, second))
            }
            Subcategory::Ordering => Ok(ordering(rng, tier)),
            Subcategory::BeforeAfter => Ok(before_after(rng, tier)),
            Subcategory::MissingNumbers => Ok(missing_numbers(rng, tier)),
            other => Err(unsupported(Category::NumberSense, other)),
        }
    }
}

/// Relation symbol between two numbers. Ties are a legal outcome.
pub fn relation(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less    => "<",
        Ordering::Greater => ">",
        Ordering::Equal   => "=",
    }
}

/// Comparison problem for a fixed pair of numbers.
pub fn comparison(first: u32, second: u32) -> Problem {
    problem(
        Subcategory::Comparison,
        DisplayType::Horizontal,
        relation(first.cmp(&second)),
        ProblemBody::Comparison { first_number: first, second_number: second },
    )
}

fn ordering<R: Rng + ?Sized>(rng: &mut R, tier: DifficultyTier) -> Problem {
    let count = match tier {
        DifficultyTier::Beginner     => 3,
        DifficultyTier::Intermediate => 4,
        DifficultyTier::Advanced     => 5,
    };
    let numbers: Vec<u32> = (0..count).map(|_| random_in_tier(rng, tier)).collect();
    let mut sorted = numbers.clone();
    sorted.sort_unstable();
    problem(
        Subcategory::Ordering,
        DisplayType::List,
        join(&sorted),
        ProblemBody::Ordering { numbers },
    )
}

fn before_after<R: Rng + ?Sized>(rng: &mut R, tier: DifficultyTier) -> Problem {
    // Narrowed so that both neighbours exist.
    let number = match tier {
        DifficultyTier::Beginner     => rng.gen_range(1..=19),
        DifficultyTier::Intermediate => rng.gen_range(11..=99),
        DifficultyTier::Advanced     => rng.gen_range(101..=998),
    };
    let question_type = if rng.gen_bool(0.5) { BeforeAfter::Before } else { BeforeAfter::After };
    let answer = match question_type {
        BeforeAfter::Before => number - 1,
        BeforeAfter::After  => number + 1,
    };
    problem(
        Subcategory::BeforeAfter,
        DisplayType::NumberLine,
        answer.to_string(),
        ProblemBody::BeforeAfter { number, question_type },
    )
}

fn missing_numbers<R: Rng + ?Sized>(rng: &mut R, tier: DifficultyTier) -> Problem {
    let (start, step, length) = match tier {
        DifficultyTier::Beginner     => (rng.gen_range(0..=10), 1, 5),
        DifficultyTier::Intermediate => (rng.gen_range(10..=50), pick(rng, &[2, 5, 10]), 5),
        DifficultyTier::Advanced     => (rng.gen_range(100..=500), pick(rng, &[5, 10, 25, 50, 100]), 6),
    };
    let run = arithmetic_run(start, step, length);
    let (sequence, missing, blank_index) = blank_one(rng, &run, 0);
    problem(
        Subcategory::MissingNumbers,
        DisplayType::Sequence,
        missing.to_string(),
        ProblemBody::Sequence { sequence, step, blank_index },
    )
}
