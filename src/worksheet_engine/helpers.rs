//! Shared, stateless building blocks for the topic generators.
//!
//! Every topic needs the same few things: the numeric range of a tier, a way to
//! pick the subcategory to generate, arithmetic runs with blanks, and the final
//! [`Problem`] record. Keeping them here lets topic files hold only their recipes.

use rand::Rng;

use crate::worksheet_engine::{
    error::GenerationError,
    models::{Answer, Category, DifficultyTier, DisplayType, Problem, ProblemBody, Subcategory},
};

/// Canonical inclusive number range of a tier.
///
/// Beginner is single-digit, intermediate double-digit, advanced triple-digit.
pub fn number_range(tier: DifficultyTier) -> (u32, u32) {
    match tier {
        DifficultyTier::Beginner     => (0, 9),
        DifficultyTier::Intermediate => (10, 99),
        DifficultyTier::Advanced     => (100, 999),
    }
}

/// Uniform draw from the tier's canonical range.
pub fn random_in_tier<R: Rng + ?Sized>(rng: &mut R, tier: DifficultyTier) -> u32 {
    let (min, max) = number_range(tier);
    rng.gen_range(min..=max)
}

/// Uniform pick from a non-empty constant table.
pub fn pick<T: Copy, R: Rng + ?Sized>(rng: &mut R, items: &[T]) -> T {
    items[rng.gen_range(0..items.len())]
}

/// Resolve which subcategory to generate.
///
/// A requested subcategory is honoured only when it is available at this tier;
/// otherwise one is drawn uniformly from `available`.
pub fn select_subcategory<R: Rng + ?Sized>(
    rng: &mut R,
    category: Category,
    tier: DifficultyTier,
    available: &[Subcategory],
    requested: Option<Subcategory>,
) -> Result<Subcategory, GenerationError> {
    if let Some(sub) = requested {
        if available.contains(&sub) {
            return Ok(sub);
        }
    }
    if available.is_empty() {
        return Err(GenerationError::EmptySubcategorySet { category, tier });
    }
    Ok(pick(rng, available))
}

/// `length` terms starting at `start`, each `step` apart.
pub fn arithmetic_run(start: i64, step: i64, length: usize) -> Vec<i64> {
    (0..length as i64).map(|i| start + i * step).collect()
}

/// Blank out one position of `run`, chosen uniformly from `first_blank..len`.
///
/// Returns the displayed sequence, the removed value and its index.
pub fn blank_one<R: Rng + ?Sized>(
    rng: &mut R,
    run: &[i64],
    first_blank: usize,
) -> (Vec<Option<i64>>, i64, usize) {
    let idx = rng.gen_range(first_blank..run.len());
    let mut shown: Vec<Option<i64>> = run.iter().copied().map(Some).collect();
    shown[idx] = None;
    (shown, run[idx], idx)
}

/// Assemble a [`Problem`] tagged with the recipe that built it.
pub fn problem(
    kind: Subcategory,
    display_type: DisplayType,
    answer: impl Into<Answer>,
    body: ProblemBody,
) -> Problem {
    Problem {
        category: kind.category(),
        subcategory: kind,
        kind,
        display_type,
        answer: answer.into(),
        body,
    }
}

/// Error for a subcategory handed to a topic that does not own it.
pub fn unsupported(category: Category, subcategory: Subcategory) -> GenerationError {
    GenerationError::UnsupportedSubcategory { category, subcategory }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn tier_ranges_are_canonical() {
        assert_eq!(number_range(DifficultyTier::Beginner), (0, 9));
        assert_eq!(number_range(DifficultyTier::Intermediate), (10, 99));
        assert_eq!(number_range(DifficultyTier::Advanced), (100, 999));
    }

    #[test]
    fn requested_subcategory_is_returned_verbatim_when_available() {
        let mut rng = StdRng::seed_from_u64(3);
        let available = [Subcategory::WholeHours, Subcategory::HalfHours];
        for _ in 0..50 {
            let got = select_subcategory(
                &mut rng,
                Category::TimeTelling,
                DifficultyTier::Intermediate,
                &available,
                Some(Subcategory::HalfHours),
            );
            assert_eq!(got, Ok(Subcategory::HalfHours));
        }
    }

    #[test]
    fn unavailable_request_falls_back_to_available_set() {
        let mut rng = StdRng::seed_from_u64(9);
        let available = [Subcategory::WholeHours];
        let got = select_subcategory(
            &mut rng,
            Category::TimeTelling,
            DifficultyTier::Beginner,
            &available,
            Some(Subcategory::QuarterHours),
        );
        assert_eq!(got, Ok(Subcategory::WholeHours));
    }

    #[test]
    fn empty_available_set_is_a_configuration_error() {
        let mut rng = StdRng::seed_from_u64(1);
        let got = select_subcategory(&mut rng, Category::Shapes, DifficultyTier::Advanced, &[], None);
        assert_eq!(
            got,
            Err(GenerationError::EmptySubcategorySet {
                category: Category::Shapes,
                tier: DifficultyTier::Advanced,
            })
        );
    }

    #[test]
    fn blank_one_respects_first_blank() {
        let run = arithmetic_run(5, 5, 6);
        assert_eq!(run, vec![5, 10, 15, 20, 25, 30]);
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let (shown, value, idx) = blank_one(&mut rng, &run, 1);
            assert!(idx >= 1);
            assert_eq!(shown[idx], None);
            assert_eq!(value, run[idx]);
            assert_eq!(shown.iter().filter(|v| v.is_none()).count(), 1);
        }
    }
}
