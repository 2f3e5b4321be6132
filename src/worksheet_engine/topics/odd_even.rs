use rand::{Rng, RngCore};

use crate::worksheet_engine::{
    error::GenerationError,
    helpers::{pick, problem, unsupported},
    models::{
        join, Category, DifficultyTier, DisplayType, Parity, ParityQuestion, Problem, ProblemBody,
        Subcategory,
    },
    topics::TopicGenerator,
};

const REASONING: [ParityQuestion; 4] = [
    ParityQuestion::NextEven,
    ParityQuestion::NextOdd,
    ParityQuestion::SumProperty,
    ParityQuestion::ProductProperty,
];

pub struct OddEven;

impl TopicGenerator for OddEven {
    fn category(&self) -> Category {
        Category::OddEven
    }

    fn available_subcategories(&self, tier: DifficultyTier) -> &'static [Subcategory] {
        use Subcategory::*;
        match tier {
            DifficultyTier::Beginner     => &[Identifying],
            DifficultyTier::Intermediate => &[Identifying, Sorting],
            DifficultyTier::Advanced     => &[Sorting, ProblemSolving],
        }
    }

    fn build(
        &self,
        rng: &mut dyn RngCore,
        tier: DifficultyTier,
        subcategory: Subcategory,
    ) -> Result<Problem, GenerationError> {
        match subcategory {
            Subcategory::Identifying    => Ok(identifying(rng, tier)),
            Subcategory::Sorting        => Ok(sorting(rng, tier)),
            Subcategory::ProblemSolving => Ok(reasoning(rng)),
            other => Err(unsupported(Category::OddEven, other)),
        }
    }
}

fn identifying<R: Rng + ?Sized>(rng: &mut R, tier: DifficultyTier) -> Problem {
    let number = match tier {
        DifficultyTier::Beginner => rng.gen_range(1..=20),
        _ => rng.gen_range(11..=99),
    };
    let parity = Parity::of(number);
    problem(
        Subcategory::Identifying,
        DisplayType::Text,
        parity.to_string(),
        ProblemBody::Parity {
            number,
            is_even: parity == Parity::Even,
            question: format!("Is {number} odd or even?"),
        },
    )
}

fn sorting<R: Rng + ?Sized>(rng: &mut R, tier: DifficultyTier) -> Problem {
    let (count, max) = match tier {
        DifficultyTier::Advanced => (rng.gen_range(6..=10), 100),
        _ => (rng.gen_range(5..=8), 50),
    };
    let numbers: Vec<u32> = (0..count).map(|_| rng.gen_range(1..=max)).collect();
    let (even_numbers, odd_numbers): (Vec<u32>, Vec<u32>) =
        numbers.iter().partition(|&&n| Parity::of(n) == Parity::Even);
    problem(
        Subcategory::Sorting,
        DisplayType::Text,
        format!("Odd: {}; Even: {}", join(&odd_numbers), join(&even_numbers)),
        ProblemBody::ParitySort {
            question: format!("Sort these numbers into odd and even: {}", join(&numbers)),
            numbers,
            odd_numbers,
            even_numbers,
        },
    )
}

fn reasoning<R: Rng + ?Sized>(rng: &mut R) -> Problem {
    let question_type = pick(rng, &REASONING);
    let (question, answer, numbers) = match question_type {
        ParityQuestion::NextEven | ParityQuestion::NextOdd => {
            let drawn: u32 = rng.gen_range(50..=998);
            // Start on the opposite parity so the answer is always start + 1.
            let wanted_start = if question_type == ParityQuestion::NextEven { Parity::Odd } else { Parity::Even };
            let start = if Parity::of(drawn) == wanted_start { drawn } else { drawn + 1 };
            let word = if question_type == ParityQuestion::NextEven { "even" } else { "odd" };
            (
                format!("What is the next {word} number after {start}?"),
                (start + 1).to_string(),
                vec![start],
            )
        }
        ParityQuestion::SumProperty => {
            let (a, b) = (rng.gen_range(50..=999), rng.gen_range(50..=999));
            (
                format!("Will the sum of {a} and {b} be odd or even?"),
                sum_parity(Parity::of(a), Parity::of(b)).to_string(),
                vec![a, b],
            )
        }
        ParityQuestion::ProductProperty => {
            let (a, b) = (rng.gen_range(50..=999), rng.gen_range(50..=999));
            (
                format!("Will the product of {a} and {b} be odd or even?"),
                product_parity(Parity::of(a), Parity::of(b)).to_string(),
                vec![a, b],
            )
        }
    };
    problem(
        Subcategory::ProblemSolving,
        DisplayType::Text,
        answer,
        ProblemBody::ParityReasoning { question, question_type, numbers },
    )
}

/// Even exactly when both addends share a parity.
pub fn sum_parity(a: Parity, b: Parity) -> Parity {
    if a == b { Parity::Even } else { Parity::Odd }
}

/// Even when either factor is even.
pub fn product_parity(a: Parity, b: Parity) -> Parity {
    if a == Parity::Even || b == Parity::Even { Parity::Even } else { Parity::Odd }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn parity_rules_agree_with_arithmetic() {
        for a in 1..40u32 {
            for b in 1..40u32 {
                assert_eq!(sum_parity(Parity::of(a), Parity::of(b)), Parity::of(a + b));
                assert_eq!(product_parity(Parity::of(a), Parity::of(b)), Parity::of(a * b));
            }
        }
    }

    #[test]
    fn sorting_splits_every_number() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let p = OddEven.build(&mut rng, DifficultyTier::Advanced, Subcategory::Sorting).unwrap();
            let ProblemBody::ParitySort { numbers, odd_numbers, even_numbers, .. } = &p.body else {
                panic!("wrong body")
            };
            assert!((6..=10).contains(&numbers.len()));
            assert_eq!(odd_numbers.len() + even_numbers.len(), numbers.len());
            assert!(odd_numbers.iter().all(|n| n % 2 == 1));
            assert!(even_numbers.iter().all(|n| n % 2 == 0));
            assert!(p.answer.to_string().starts_with("Odd: "));
        }
    }

    #[test]
    fn next_number_has_requested_parity() {
        for seed in 0..300 {
            let mut rng = StdRng::seed_from_u64(seed);
            let p = OddEven
                .build(&mut rng, DifficultyTier::Advanced, Subcategory::ProblemSolving)
                .unwrap();
            let ProblemBody::ParityReasoning { question_type, numbers, .. } = &p.body else {
                panic!("wrong body")
            };
            let answer = p.answer.to_string();
            match question_type {
                ParityQuestion::NextEven => assert_eq!(answer, (numbers[0] + 1).to_string()),
                ParityQuestion::NextOdd => {
                    assert_eq!(numbers[0] % 2, 0);
                    assert_eq!(answer, (numbers[0] + 1).to_string());
                }
                ParityQuestion::SumProperty => {
                    assert_eq!(answer, Parity::of(numbers[0] + numbers[1]).to_string())
                }
                ParityQuestion::ProductProperty => {
                    assert_eq!(answer, Parity::of(numbers[0] * numbers[1]).to_string())
                }
            }
        }
    }
}
