use rand::seq::index;
use rand::{Rng, RngCore};

use crate::worksheet_engine::{
    error::GenerationError,
    helpers::{pick, problem, unsupported},
    models::{Category, DifficultyTier, DisplayType, Fraction, Problem, ProblemBody, Subcategory},
    topics::{number_sense::relation, TopicGenerator},
};

/// Denominators that leave room for two distinct proper numerators.
const SHARED_DENOMINATORS: &[u32] = &[3, 4, 5, 6, 8, 10];
const UNIT_DENOMINATORS: &[u32] = &[2, 3, 4, 5, 6];
/// Denominators that admit a non-unit proper fraction.
const NON_UNIT_DENOMINATORS: &[u32] = &[3, 4, 5, 6];

pub struct Fractions;

impl TopicGenerator for Fractions {
    fn category(&self) -> Category {
        Category::Fractions
    }

    fn available_subcategories(&self, tier: DifficultyTier) -> &'static [Subcategory] {
        use Subcategory::*;
        match tier {
            DifficultyTier::Beginner     => &[HalvesWholes],
            DifficultyTier::Intermediate => &[HalvesWholes, ThirdsFourths],
            DifficultyTier::Advanced     => &[ThirdsFourths, ComparingFractions],
        }
    }

    fn build(
        &self,
        rng: &mut dyn RngCore,
        _tier: DifficultyTier,
        subcategory: Subcategory,
    ) -> Result<Problem, GenerationError> {
        let (shape, fraction) = match subcategory {
            Subcategory::HalvesWholes => {
                let shape = pick(rng, &["circle", "rectangle", "square"]);
                let fraction = if rng.gen_bool(0.5) { Fraction::new(1, 2) } else { Fraction::new(1, 1) };
                (shape, fraction)
            }
            Subcategory::ThirdsFourths => {
                let shape = pick(rng, &["circle", "square"]);
                let fraction = if rng.gen_bool(0.5) {
                    Fraction::new(rng.gen_range(1..=2), 3)
                } else {
                    Fraction::new(rng.gen_range(1..=3), 4)
                };
                (shape, fraction)
            }
            Subcategory::ComparingFractions => return Ok(comparing(rng)),
            other => return Err(unsupported(Category::Fractions, other)),
        };
        Ok(problem(
            subcategory,
            DisplayType::Fraction,
            fraction.to_string(),
            ProblemBody::FractionShading {
                shape: shape.to_string(),
                fraction,
                shaded_parts: fraction.numerator,
                total_parts: fraction.denominator,
            },
        ))
    }
}

/// Two distinct values from `items`, in random order.
fn distinct_pair<R: Rng + ?Sized>(rng: &mut R, items: &[u32]) -> (u32, u32) {
    let picked = index::sample(rng, items.len(), 2);
    (items[picked.index(0)], items[picked.index(1)])
}

fn comparing<R: Rng + ?Sized>(rng: &mut R) -> Problem {
    let (fraction1, fraction2) = match rng.gen_range(0..3) {
        0 => {
            let d = pick(rng, SHARED_DENOMINATORS);
            let numerators: Vec<u32> = (1..d).collect();
            let (a, b) = distinct_pair(rng, &numerators);
            (Fraction::new(a, d), Fraction::new(b, d))
        }
        1 => {
            let n = rng.gen_range(1..=3);
            let (a, b) = distinct_pair(rng, UNIT_DENOMINATORS);
            (Fraction::new(n, a), Fraction::new(n, b))
        }
        _ => {
            let d = pick(rng, NON_UNIT_DENOMINATORS);
            let unit = Fraction::new(1, d);
            let other = Fraction::new(rng.gen_range(2..d), d);
            if rng.gen_bool(0.5) { (unit, other) } else { (other, unit) }
        }
    };
    problem(
        Subcategory::ComparingFractions,
        DisplayType::Comparison,
        relation(fraction1.compare(fraction2)),
        ProblemBody::FractionComparison { fraction1, fraction2 },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn comparison_answer_matches_cross_multiplication() {
        for seed in 0..500 {
            let mut rng = StdRng::seed_from_u64(seed);
            let p = Fractions
                .build(&mut rng, DifficultyTier::Advanced, Subcategory::ComparingFractions)
                .unwrap();
            let ProblemBody::FractionComparison { fraction1: f1, fraction2: f2 } = p.body else {
                panic!("wrong body")
            };
            assert_ne!(f1, f2);
            let lhs = f1.numerator * f2.denominator;
            let rhs = f2.numerator * f1.denominator;
            let expected = if lhs < rhs { "<" } else if lhs > rhs { ">" } else { "=" };
            assert_eq!(p.answer.to_string(), expected, "{f1} vs {f2}");
        }
    }

    #[test]
    fn shading_matches_the_fraction() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let p = Fractions
                .build(&mut rng, DifficultyTier::Intermediate, Subcategory::ThirdsFourths)
                .unwrap();
            let ProblemBody::FractionShading { fraction, shaded_parts, total_parts, .. } = p.body else {
                panic!("wrong body")
            };
            assert!(shaded_parts < total_parts);
            assert!(total_parts == 3 || total_parts == 4);
            assert_eq!(p.answer.to_string(), format!("{}/{}", fraction.numerator, fraction.denominator));
        }
    }

    #[test]
    fn whole_is_written_as_one() {
        assert_eq!(Fraction::new(1, 1).to_string(), "1");
        assert_eq!(Fraction::new(1, 2).to_string(), "1/2");
    }
}
