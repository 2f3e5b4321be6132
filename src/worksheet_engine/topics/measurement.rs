use rand::{Rng, RngCore};

use crate::worksheet_engine::{
    error::GenerationError,
    helpers::{pick, problem, unsupported},
    models::{
        Category, DifficultyTier, DisplayType, LengthUnit, MeasureProperty, Problem, ProblemBody,
        Subcategory,
    },
    topics::TopicGenerator,
};

/// Primary object, the property compared, and what it can be compared with.
const COMPARISONS: &[(&str, MeasureProperty, &[&str])] = &[
    ("pencil", MeasureProperty::Length, &["eraser", "book", "ruler"]),
    ("tree", MeasureProperty::Height, &["flower", "bush", "house"]),
    ("elephant", MeasureProperty::Size, &["dog", "cat", "mouse"]),
    ("book", MeasureProperty::Weight, &["paper", "backpack", "desk"]),
];

const MEASURING_OBJECTS: &[&str] = &["paperclip", "crayon", "pencil", "hand", "foot", "block"];
const SMALL_UNITS: &[&str] = &["paperclip", "crayon", "block"];
const ITEMS_TO_MEASURE: &[&str] = &["book", "desk", "door", "window", "whiteboard", "notebook", "tablet"];

pub struct Measurement;

impl TopicGenerator for Measurement {
    fn category(&self) -> Category {
        Category::Measurement
    }

    fn available_subcategories(&self, tier: DifficultyTier) -> &'static [Subcategory] {
        use Subcategory::*;
        match tier {
            DifficultyTier::Beginner     => &[ComparingObjects],
            DifficultyTier::Intermediate => &[ComparingObjects, NonStandardUnits],
            DifficultyTier::Advanced     => &[NonStandardUnits, RulersInchesCm],
        }
    }

    fn build(
        &self,
        rng: &mut dyn RngCore,
        _tier: DifficultyTier,
        subcategory: Subcategory,
    ) -> Result<Problem, GenerationError> {
        match subcategory {
            Subcategory::ComparingObjects => Ok(comparing_objects(rng)),
            Subcategory::NonStandardUnits => Ok(non_standard(rng)),
            Subcategory::RulersInchesCm   => Ok(ruler(rng)),
            other => Err(unsupported(Category::Measurement, other)),
        }
    }
}

fn comparing_objects<R: Rng + ?Sized>(rng: &mut R) -> Problem {
    let (object1, property, candidates) = pick(rng, COMPARISONS);
    let object2 = pick(rng, candidates);
    let larger = if rng.gen_bool(0.5) { object1 } else { object2 };
    problem(
        Subcategory::ComparingObjects,
        DisplayType::Comparison,
        format!("{larger} is {}", property.comparative()),
        ProblemBody::ObjectComparison {
            object1: object1.to_string(),
            object2: object2.to_string(),
            property,
            larger: larger.to_string(),
        },
    )
}

fn non_standard<R: Rng + ?Sized>(rng: &mut R) -> Problem {
    let measuring_object = pick(rng, MEASURING_OBJECTS);
    let item = pick(rng, ITEMS_TO_MEASURE);
    // Smaller units take more of them to span the same item.
    let measurement = if SMALL_UNITS.contains(&measuring_object) {
        rng.gen_range(5..=15)
    } else {
        rng.gen_range(2..=8)
    };
    problem(
        Subcategory::NonStandardUnits,
        DisplayType::Measurement,
        measurement.to_string(),
        ProblemBody::NonStandardMeasure {
            measuring_object: measuring_object.to_string(),
            item_to_measure: item.to_string(),
            measurement,
        },
    )
}

fn ruler<R: Rng + ?Sized>(rng: &mut R) -> Problem {
    let (unit, whole, quarters) = if rng.gen_bool(0.5) {
        (LengthUnit::Inches, rng.gen_range(1..=11), rng.gen_range(0..=3))
    } else {
        (LengthUnit::Centimeters, rng.gen_range(1..=30), 0)
    };
    problem(
        Subcategory::RulersInchesCm,
        DisplayType::Ruler,
        ruler_reading(unit, whole, quarters),
        ProblemBody::Ruler { unit, whole, quarters },
    )
}

/// `"5 1/4 inches"`, `"7 inches"`, `"12 centimeters"`.
pub fn ruler_reading(unit: LengthUnit, whole: u32, quarters: u8) -> String {
    match unit {
        LengthUnit::Centimeters => format!("{whole} centimeters"),
        LengthUnit::Inches => match quarters {
            1 => format!("{whole} 1/4 inches"),
            2 => format!("{whole} 1/2 inches"),
            3 => format!("{whole} 3/4 inches"),
            _ => format!("{whole} inches"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn comparative_wording_reads_naturally() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let p = Measurement
                .build(&mut rng, DifficultyTier::Beginner, Subcategory::ComparingObjects)
                .unwrap();
            let answer = p.answer.to_string();
            assert!(!answer.ends_with("lengther") && !answer.ends_with("sizeer"), "{answer}");
            let ProblemBody::ObjectComparison { object1, object2, larger, .. } = &p.body else {
                panic!("wrong body")
            };
            assert!(larger == object1 || larger == object2);
            assert!(answer.starts_with(larger.as_str()));
        }
    }

    #[test]
    fn ruler_readings() {
        assert_eq!(ruler_reading(LengthUnit::Inches, 5, 1), "5 1/4 inches");
        assert_eq!(ruler_reading(LengthUnit::Inches, 7, 0), "7 inches");
        assert_eq!(ruler_reading(LengthUnit::Centimeters, 12, 0), "12 centimeters");
    }

    #[test]
    fn small_units_need_more_of_them() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let p = Measurement
                .build(&mut rng, DifficultyTier::Advanced, Subcategory::NonStandardUnits)
                .unwrap();
            let ProblemBody::NonStandardMeasure { measuring_object, measurement, .. } = &p.body else {
                panic!("wrong body")
            };
            let range = if SMALL_UNITS.contains(&measuring_object.as_str()) { 5..=15 } else { 2..=8 };
            assert!(range.contains(measurement));
        }
    }
}
