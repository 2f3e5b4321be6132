use rand::{Rng, RngCore};

use crate::worksheet_engine::{
    error::GenerationError,
    helpers::{pick, problem, unsupported},
    models::{
        Category, DifficultyTier, DisplayType, ExpandedDirection, Place, Problem, ProblemBody,
        Subcategory,
    },
    topics::TopicGenerator,
};

pub struct PlaceValue;

impl TopicGenerator for PlaceValue {
    fn category(&self) -> Category {
        Category::PlaceValue
    }

    fn available_subcategories(&self, tier: DifficultyTier) -> &'static [Subcategory] {
        use Subcategory::*;
        match tier {
            DifficultyTier::Beginner     => &[OnesTens],
            DifficultyTier::Intermediate => &[OnesTens, OnesTensHundreds],
            DifficultyTier::Advanced     => &[OnesTensHundreds, ExpandedForm],
        }
    }

    fn build(
        &self,
        rng: &mut dyn RngCore,
        _tier: DifficultyTier,
        subcategory: Subcategory,
    ) -> Result<Problem, GenerationError> {
        let (number, place) = match subcategory {
            Subcategory::OnesTens => (rng.gen_range(10..=99), pick(rng, &[Place::Ones, Place::Tens])),
            Subcategory::OnesTensHundreds => (
                rng.gen_range(100..=999),
                pick(rng, &[Place::Ones, Place::Tens, Place::Hundreds]),
            ),
            Subcategory::ExpandedForm => return Ok(expanded_form(rng)),
            other => return Err(unsupported(Category::PlaceValue, other)),
        };
        Ok(problem(
            subcategory,
            DisplayType::PlaceValueBlocks,
            place.digit_of(number).to_string(),
            ProblemBody::PlaceValue { number, place },
        ))
    }
}

/// `"3 hundreds + 4 tens + 7 ones"` for 347.
pub fn expanded(number: u32) -> String {
    format!(
        "{} hundreds + {} tens + {} ones",
        Place::Hundreds.digit_of(number),
        Place::Tens.digit_of(number),
        Place::Ones.digit_of(number),
    )
}

fn expanded_form<R: Rng + ?Sized>(rng: &mut R) -> Problem {
    let number = rng.gen_range(100..=999);
    let expanded_form = expanded(number);
    let (direction, question, answer) = if rng.gen_bool(0.5) {
        (
            ExpandedDirection::ToExpanded,
            format!("Write {number} in expanded form"),
            expanded_form.clone(),
        )
    } else {
        (
            ExpandedDirection::ToStandard,
            format!("Write this number in standard form: {expanded_form}"),
            number.to_string(),
        )
    };
    problem(
        Subcategory::ExpandedForm,
        DisplayType::Text,
        answer,
        ProblemBody::ExpandedForm { number, expanded_form, question, direction },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn expanded_spells_every_digit() {
        assert_eq!(expanded(347), "3 hundreds + 4 tens + 7 ones");
        assert_eq!(expanded(400), "4 hundreds + 0 tens + 0 ones");
    }

    #[test]
    fn answer_is_digit_at_asked_place() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let p = PlaceValue
                .build(&mut rng, DifficultyTier::Intermediate, Subcategory::OnesTensHundreds)
                .unwrap();
            let ProblemBody::PlaceValue { number, place } = p.body else { panic!("wrong body") };
            assert!((100..=999).contains(&number));
            let digit = match place {
                Place::Ones => number % 10,
                Place::Tens => number / 10 % 10,
                Place::Hundreds => number / 100,
            };
            assert_eq!(p.answer.to_string(), digit.to_string());
        }
    }

    #[test]
    fn expanded_form_answers_the_other_direction() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let p = PlaceValue
                .build(&mut rng, DifficultyTier::Advanced, Subcategory::ExpandedForm)
                .unwrap();
            let ProblemBody::ExpandedForm { number, expanded_form, direction, .. } = &p.body else {
                panic!("wrong body")
            };
            let expected = match direction {
                ExpandedDirection::ToExpanded => expanded_form.clone(),
                ExpandedDirection::ToStandard => number.to_string(),
            };
            assert_eq!(p.answer.to_string(), expected);
        }
    }
}
