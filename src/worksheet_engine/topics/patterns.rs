use rand::seq::{index, SliceRandom};
use rand::{Rng, RngCore};

use crate::worksheet_engine::{
    error::GenerationError,
    helpers::{pick, problem, unsupported},
    models::{
        Answer, Category, DifficultyTier, DisplayType, PatternElement, PatternOp, Problem,
        ProblemBody, Subcategory,
    },
    topics::TopicGenerator,
};

const ELEMENT_SETS: &[(PatternElement, &[&str])] = &[
    (PatternElement::Shapes, &["circle", "square", "triangle", "star", "heart"]),
    (PatternElement::Colors, &["red", "blue", "green", "yellow", "purple"]),
    (PatternElement::Letters, &["A", "B", "C", "D", "E"]),
    (PatternElement::Numbers, &["1", "2", "3", "4", "5"]),
];

pub struct Patterns;

impl TopicGenerator for Patterns {
    fn category(&self) -> Category {
        Category::Patterns
    }

    fn available_subcategories(&self, tier: DifficultyTier) -> &'static [Subcategory] {
        use Subcategory::*;
        match tier {
            DifficultyTier::Beginner     => &[AbabPatterns],
            DifficultyTier::Intermediate => &[AbabPatterns, ExtendingPatterns],
            DifficultyTier::Advanced     => &[ExtendingPatterns, CreatingPatterns],
        }
    }

    fn build(
        &self,
        rng: &mut dyn RngCore,
        tier: DifficultyTier,
        subcategory: Subcategory,
    ) -> Result<Problem, GenerationError> {
        match subcategory {
            Subcategory::AbabPatterns      => Ok(repeating(rng, tier)),
            Subcategory::ExtendingPatterns => Ok(extending(rng, tier)),
            Subcategory::CreatingPatterns  => Ok(with_gaps(rng)),
            other => Err(unsupported(Category::Patterns, other)),
        }
    }
}

/// `length` terms, each produced from the previous by `op`.
///
/// A subtracting run starts high enough that every shown term and the next
/// one stay non-negative.
pub fn number_run(start: i64, op: PatternOp, step: i64, length: usize) -> Vec<i64> {
    let first = match op {
        PatternOp::Subtract => start + step * length as i64,
        _ => start,
    };
    let mut run = Vec::with_capacity(length);
    let mut value = first;
    for _ in 0..length {
        run.push(value);
        value = op.apply(value, step);
    }
    run
}

fn repeating<R: Rng + ?Sized>(rng: &mut R, tier: DifficultyTier) -> Problem {
    let (element_type, set) = pick(rng, ELEMENT_SETS);
    let chosen: Vec<&str> = set.choose_multiple(rng, 3).copied().collect();
    let (unit, length) = match tier {
        DifficultyTier::Beginner => (vec![chosen[0], chosen[1]], 6),
        _ if rng.gen_bool(0.5) => (vec![chosen[0], chosen[1], chosen[2]], 6),
        _ => (vec![chosen[0], chosen[0], chosen[1], chosen[1]], 8),
    };
    let mut pattern: Vec<String> = (0..length).map(|i| unit[i % unit.len()].to_string()).collect();
    // The last term is what the student supplies.
    let answer = pattern.pop().unwrap_or_default();
    problem(
        Subcategory::AbabPatterns,
        DisplayType::Pattern,
        answer,
        ProblemBody::Pattern { pattern, element_type },
    )
}

fn extending<R: Rng + ?Sized>(rng: &mut R, tier: DifficultyTier) -> Problem {
    let (start, step, operation) = match tier {
        DifficultyTier::Advanced => (
            rng.gen_range(1..=50),
            pick(rng, &[2, 3, 5, 10, 25]),
            pick(rng, &[PatternOp::Add, PatternOp::Subtract, PatternOp::Multiply]),
        ),
        _ => (
            rng.gen_range(1..=20),
            pick(rng, &[1, 2, 5, 10]),
            pick(rng, &[PatternOp::Add, PatternOp::Subtract]),
        ),
    };
    let pattern = number_run(start, operation, step, 5);
    let next = pattern.last().map_or(start, |&last| operation.apply(last, step));
    problem(
        Subcategory::ExtendingPatterns,
        DisplayType::NumberPattern,
        next.to_string(),
        ProblemBody::NumberPattern { pattern, operation, step },
    )
}

fn with_gaps<R: Rng + ?Sized>(rng: &mut R) -> Problem {
    let start = rng.gen_range(1..=50);
    let step = pick(rng, &[2, 3, 5, 10]);
    let operation = pick(rng, &[PatternOp::Add, PatternOp::Subtract]);
    let run = number_run(start, operation, step, 8);

    let gaps = rng.gen_range(2..=3);
    // Index 0 is never blanked.
    let mut blank_indices: Vec<usize> =
        index::sample(rng, run.len() - 1, gaps).into_iter().map(|i| i + 1).collect();
    blank_indices.sort_unstable();

    let mut pattern: Vec<Option<i64>> = run.iter().copied().map(Some).collect();
    let mut missing = Vec::with_capacity(gaps);
    for &i in &blank_indices {
        pattern[i] = None;
        missing.push(run[i]);
    }
    problem(
        Subcategory::CreatingPatterns,
        DisplayType::NumberPatternGaps,
        Answer::Values(missing),
        ProblemBody::PatternGaps { pattern, operation, step, blank_indices },
    )
}
