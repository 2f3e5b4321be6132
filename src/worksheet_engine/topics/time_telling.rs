use rand::{Rng, RngCore};

use crate::worksheet_engine::{
    error::GenerationError,
    helpers::{pick, problem, unsupported},
    models::{Category, DifficultyTier, DisplayType, Problem, ProblemBody, Subcategory},
    topics::TopicGenerator,
};

const FIVE_MINUTE_MARKS: &[u8] = &[5, 10, 15, 20, 25, 30, 35, 40, 45, 50, 55];

pub struct TimeTelling;

impl TopicGenerator for TimeTelling {
    fn category(&self) -> Category {
        Category::TimeTelling
    }

    fn available_subcategories(&self, tier: DifficultyTier) -> &'static [Subcategory] {
        use Subcategory::*;
        match tier {
            DifficultyTier::Beginner     => &[WholeHours],
            DifficultyTier::Intermediate => &[WholeHours, HalfHours],
            DifficultyTier::Advanced     => &[WholeHours, HalfHours, QuarterHours, FiveMinuteIncrements],
        }
    }

    fn build(
        &self,
        rng: &mut dyn RngCore,
        _tier: DifficultyTier,
        subcategory: Subcategory,
    ) -> Result<Problem, GenerationError> {
        let hour: u8 = rng.gen_range(1..=12);
        let minute = match subcategory {
            Subcategory::WholeHours           => 0,
            Subcategory::HalfHours            => 30,
            Subcategory::QuarterHours         => pick(rng, &[15, 45]),
            Subcategory::FiveMinuteIncrements => pick(rng, FIVE_MINUTE_MARKS),
            other => return Err(unsupported(Category::TimeTelling, other)),
        };
        Ok(problem(
            subcategory,
            DisplayType::Clock,
            format!("{hour}:{minute:02}"),
            ProblemBody::Clock { hour, minute },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn minutes_follow_the_subcategory() {
        let cases: [(Subcategory, &[u8]); 4] = [
            (Subcategory::WholeHours, &[0]),
            (Subcategory::HalfHours, &[30]),
            (Subcategory::QuarterHours, &[15, 45]),
            (Subcategory::FiveMinuteIncrements, FIVE_MINUTE_MARKS),
        ];
        for (sub, allowed) in cases {
            for seed in 0..60 {
                let mut rng = StdRng::seed_from_u64(seed);
                let p = TimeTelling.build(&mut rng, DifficultyTier::Advanced, sub).unwrap();
                let ProblemBody::Clock { hour, minute } = p.body else { panic!("wrong body") };
                assert!((1..=12).contains(&hour));
                assert!(allowed.contains(&minute), "{sub}: minute {minute}");
                assert_eq!(p.answer.to_string(), format!("{hour}:{minute:02}"));
            }
        }
    }

    #[test]
    fn beginner_only_offers_whole_hours() {
        assert_eq!(
            TimeTelling.available_subcategories(DifficultyTier::Beginner),
            &[Subcategory::WholeHours]
        );
    }
}
