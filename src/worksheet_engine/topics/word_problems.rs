use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::worksheet_engine::{
    error::GenerationError,
    helpers::{pick, problem, unsupported},
    models::{Category, DifficultyTier, DisplayType, Problem, ProblemBody, Subcategory},
    topics::TopicGenerator,
};

const OBJECTS: &[&str] = &[
    "apples", "oranges", "toys", "books", "pencils",
    "stickers", "marbles", "balloons", "cookies", "flowers",
];

const NAMES: &[&str] = &[
    "Sam", "Alex", "Jordan", "Taylor", "Casey",
    "Riley", "Morgan", "Avery", "Jamie", "Quinn",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Gain,
    Lose,
}

pub struct WordProblems;

impl TopicGenerator for WordProblems {
    fn category(&self) -> Category {
        Category::WordProblems
    }

    fn available_subcategories(&self, tier: DifficultyTier) -> &'static [Subcategory] {
        use Subcategory::*;
        match tier {
            DifficultyTier::Beginner     => &[OneStep],
            DifficultyTier::Intermediate => &[OneStep, TwoStep],
            DifficultyTier::Advanced     => &[TwoStep, MultiStep],
        }
    }

    fn build(
        &self,
        rng: &mut dyn RngCore,
        tier: DifficultyTier,
        subcategory: Subcategory,
    ) -> Result<Problem, GenerationError> {
        let cast = Cast::draw(rng);
        let terms = match subcategory {
            Subcategory::OneStep   => one_step(rng, tier),
            Subcategory::TwoStep   => two_step(rng, tier),
            Subcategory::MultiStep => multi_step(rng),
            other => return Err(unsupported(Category::WordProblems, other)),
        };
        let text = cast.narrate(&terms);
        let answer: i64 = terms.iter().sum();
        if answer < 0 {
            return Err(GenerationError::Recipe {
                subcategory,
                reason: format!("negative total {answer}"),
            });
        }
        Ok(problem(
            subcategory,
            DisplayType::Text,
            answer.to_string(),
            ProblemBody::WordProblem { text, terms },
        ))
    }
}

/// Object and four distinct people for one story. `names[0]` is the protagonist.
struct Cast {
    object: &'static str,
    names: Vec<&'static str>,
}

impl Cast {
    fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Cast {
            object: pick(rng, OBJECTS),
            names: NAMES.choose_multiple(rng, 4).copied().collect(),
        }
    }

    /// Story for `terms`: the first is the starting amount, each later term a
    /// signed change. Other people are introduced in order.
    fn narrate(&self, terms: &[i64]) -> String {
        let hero = self.names[0];
        let obj = self.object;
        let last = terms.len() - 1;
        let mut out = Vec::with_capacity(terms.len() + 1);

        match terms.len() {
            4 => out.push(format!("{hero} starts with {} {obj}.", terms[0])),
            _ => out.push(format!("{hero} has {} {obj}.", terms[0])),
        }
        for (i, &t) in terms.iter().enumerate().skip(1) {
            let other = self.names[i];
            let lead = match i {
                1 => "",
                _ if i == last && terms.len() == 4 => "Finally, ",
                _ => "Then ",
            };
            let sentence = match step_of(t) {
                Step::Gain => format!("{other} gives {hero} {} more {obj}.", t),
                Step::Lose => format!("{hero} gives {} {obj} to {other}.", -t),
            };
            out.push(format!("{lead}{sentence}"));
        }
        let ends_in_loss = terms.len() == 2 && step_of(terms[1]) == Step::Lose;
        if ends_in_loss {
            out.push(format!("How many {obj} does {hero} have left?"));
        } else {
            out.push(format!("How many {obj} does {hero} have now?"));
        }
        out.join(" ")
    }
}

fn step_of(term: i64) -> Step {
    if term < 0 { Step::Lose } else { Step::Gain }
}

fn one_step<R: Rng + ?Sized>(rng: &mut R, tier: DifficultyTier) -> Vec<i64> {
    let gain = rng.gen_bool(0.5);
    match (tier, gain) {
        (DifficultyTier::Beginner, true) => {
            let a = rng.gen_range(1..=5);
            vec![a, rng.gen_range(1..=9 - a)]
        }
        (DifficultyTier::Beginner, false) => {
            let total = rng.gen_range(5..=9);
            vec![total, -rng.gen_range(1..total)]
        }
        (DifficultyTier::Intermediate, true) => vec![rng.gen_range(10..=50), rng.gen_range(10..=40)],
        (DifficultyTier::Intermediate, false) => {
            let total = rng.gen_range(30..=90);
            vec![total, -rng.gen_range(10..=total - 10)]
        }
        (DifficultyTier::Advanced, true) => vec![rng.gen_range(100..=500), rng.gen_range(100..=400)],
        (DifficultyTier::Advanced, false) => {
            let total = rng.gen_range(300..=900);
            vec![total, -rng.gen_range(100..=total - 100)]
        }
    }
}

fn two_step<R: Rng + ?Sized>(rng: &mut R, tier: DifficultyTier) -> Vec<i64> {
    let pair = pick(rng, &[(Step::Gain, Step::Gain), (Step::Gain, Step::Lose), (Step::Lose, Step::Gain)]);
    // Below advanced the double-digit table applies.
    let big = tier == DifficultyTier::Advanced;
    match (pair, big) {
        ((Step::Gain, Step::Gain), false) => {
            vec![rng.gen_range(10..=30), rng.gen_range(10..=30), rng.gen_range(10..=30)]
        }
        ((Step::Gain, Step::Lose), false) => {
            vec![rng.gen_range(10..=30), rng.gen_range(10..=30), -rng.gen_range(5..=20)]
        }
        (_, false) => vec![rng.gen_range(30..=50), -rng.gen_range(5..=20), rng.gen_range(10..=30)],
        ((Step::Gain, Step::Gain), true) => {
            vec![rng.gen_range(100..=300), rng.gen_range(100..=300), rng.gen_range(100..=300)]
        }
        ((Step::Gain, Step::Lose), true) => {
            vec![rng.gen_range(100..=300), rng.gen_range(100..=300), -rng.gen_range(50..=200)]
        }
        (_, true) => vec![rng.gen_range(300..=500), -rng.gen_range(50..=200), rng.gen_range(100..=300)],
    }
}

fn multi_step<R: Rng + ?Sized>(rng: &mut R) -> Vec<i64> {
    let start = rng.gen_range(100..=300);
    // Keeps at least 50 after the first give-away.
    let given = rng.gen_range(50..=(start - 50).min(150));
    let received = rng.gen_range(20..=80);
    let given_again = rng.gen_range(10..=50);
    vec![start, -given, received, -given_again]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn terms(p: &Problem) -> &[i64] {
        match &p.body {
            ProblemBody::WordProblem { terms, .. } => terms,
            other => panic!("expected word problem, got {other:?}"),
        }
    }

    #[test]
    fn beginner_one_step_stays_single_digit() {
        for seed in 0..300 {
            let mut rng = StdRng::seed_from_u64(seed);
            let p = WordProblems
                .build(&mut rng, DifficultyTier::Beginner, Subcategory::OneStep)
                .unwrap();
            let answer: i64 = p.answer.to_string().parse().unwrap();
            assert!((1..=9).contains(&answer), "seed {seed}: {answer}");
        }
    }

    #[test]
    fn every_recipe_ends_positive_and_matches_terms() {
        let cases = [
            (DifficultyTier::Intermediate, Subcategory::OneStep),
            (DifficultyTier::Advanced, Subcategory::OneStep),
            (DifficultyTier::Intermediate, Subcategory::TwoStep),
            (DifficultyTier::Advanced, Subcategory::TwoStep),
            (DifficultyTier::Advanced, Subcategory::MultiStep),
        ];
        for (tier, sub) in cases {
            for seed in 0..300 {
                let mut rng = StdRng::seed_from_u64(seed);
                let p = WordProblems.build(&mut rng, tier, sub).unwrap();
                let sum: i64 = terms(&p).iter().sum();
                assert!(sum > 0);
                assert_eq!(p.answer.to_string(), sum.to_string());
            }
        }
    }

    #[test]
    fn multi_step_never_draws_from_an_empty_range() {
        for seed in 0..1000 {
            let mut rng = StdRng::seed_from_u64(seed);
            let t = multi_step(&mut rng);
            assert_eq!(t.len(), 4);
            assert!(t[0] + t[1] >= 50);
        }
    }

    #[test]
    fn story_mentions_each_quantity() {
        let mut rng = StdRng::seed_from_u64(4);
        let p = WordProblems
            .build(&mut rng, DifficultyTier::Advanced, Subcategory::MultiStep)
            .unwrap();
        let ProblemBody::WordProblem { text, terms } = &p.body else { panic!("wrong body") };
        assert!(text.contains("starts with"));
        assert!(text.contains("Finally, "));
        for t in terms {
            assert!(text.contains(&t.abs().to_string()));
        }
    }
}
