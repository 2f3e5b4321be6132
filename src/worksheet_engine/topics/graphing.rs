use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::worksheet_engine::{
    error::GenerationError,
    helpers::{pick, problem, unsupported},
    models::{
        join, Category, DataPoint, DifficultyTier, DisplayType, GraphQuestion, Problem, ProblemBody,
        Subcategory,
    },
    topics::TopicGenerator,
};

pub const DATA_SETS: &[(&str, [&str; 5])] = &[
    ("Favorite Fruits", ["Apple", "Banana", "Orange", "Grapes", "Strawberry"]),
    ("Pets", ["Dog", "Cat", "Fish", "Bird", "Hamster"]),
    ("Sports", ["Soccer", "Basketball", "Swimming", "Running", "Baseball"]),
    ("Weather", ["Sunny", "Rainy", "Cloudy", "Snowy", "Windy"]),
    ("Colors", ["Red", "Blue", "Green", "Yellow", "Purple"]),
];

pub struct Graphing;

impl TopicGenerator for Graphing {
    fn category(&self) -> Category {
        Category::Graphing
    }

    fn available_subcategories(&self, tier: DifficultyTier) -> &'static [Subcategory] {
        use Subcategory::*;
        match tier {
            DifficultyTier::Beginner     => &[Pictographs],
            DifficultyTier::Intermediate => &[Pictographs, BarGraphs],
            DifficultyTier::Advanced     => &[BarGraphs, AnalyzingData],
        }
    }

    fn build(
        &self,
        rng: &mut dyn RngCore,
        tier: DifficultyTier,
        subcategory: Subcategory,
    ) -> Result<Problem, GenerationError> {
        let beginner = tier == DifficultyTier::Beginner;
        let advanced = tier == DifficultyTier::Advanced;
        let (items, max_value, questions, display_type): (usize, u32, &[GraphQuestion], DisplayType) =
            match subcategory {
                Subcategory::Pictographs => (
                    if beginner { 3 } else { 4 },
                    if beginner { 5 } else { 10 },
                    &[GraphQuestion::ReadValue, GraphQuestion::MaxValue, GraphQuestion::MinValue],
                    DisplayType::Pictograph,
                ),
                Subcategory::BarGraphs => (
                    if advanced { 5 } else { 4 },
                    if advanced { 50 } else { 15 },
                    &[
                        GraphQuestion::ReadValue,
                        GraphQuestion::MaxValue,
                        GraphQuestion::MinValue,
                        GraphQuestion::Difference,
                        GraphQuestion::Total,
                    ],
                    DisplayType::BarGraph,
                ),
                Subcategory::AnalyzingData => (
                    5,
                    50,
                    &[
                        GraphQuestion::Comparison,
                        GraphQuestion::MoreThan,
                        GraphQuestion::LessThan,
                        GraphQuestion::Average,
                    ],
                    DisplayType::BarGraph,
                ),
                other => return Err(unsupported(Category::Graphing, other)),
            };

        let (title, labels) = pick(rng, DATA_SETS);
        let data: Vec<DataPoint> = labels
            .choose_multiple(rng, items)
            .map(|&label| DataPoint { label: label.to_string(), value: rng.gen_range(1..=max_value) })
            .collect();
        let question_type = pick(rng, questions);
        let asked = ask(rng, &data, question_type);

        Ok(problem(
            subcategory,
            display_type,
            asked.answer,
            ProblemBody::Graph {
                title: title.to_string(),
                data,
                question: asked.question,
                question_type,
                focus: asked.focus,
                threshold: asked.threshold,
            },
        ))
    }
}

struct Asked {
    question: String,
    answer: String,
    focus: Vec<String>,
    threshold: Option<u32>,
}

impl Asked {
    fn new(question: String, answer: String) -> Self {
        Asked { question, answer, focus: Vec::new(), threshold: None }
    }
}

fn ask<R: Rng + ?Sized>(rng: &mut R, data: &[DataPoint], question_type: GraphQuestion) -> Asked {
    match question_type {
        GraphQuestion::ReadValue => {
            let point = &data[rng.gen_range(0..data.len())];
            Asked {
                focus: vec![point.label.clone()],
                ..Asked::new(read_question(&point.label), point.value.to_string())
            }
        }
        GraphQuestion::MaxValue => Asked::new("Which item has the most?".into(), most(data).label.clone()),
        GraphQuestion::MinValue => Asked::new("Which item has the least?".into(), least(data).label.clone()),
        GraphQuestion::Difference => {
            let pair: Vec<&DataPoint> = data.choose_multiple(rng, 2).collect();
            let (a, b) = (pair[0], pair[1]);
            Asked {
                focus: vec![a.label.clone(), b.label.clone()],
                ..Asked::new(
                    format!("What is the difference between {} and {}?", a.label, b.label),
                    a.value.abs_diff(b.value).to_string(),
                )
            }
        }
        GraphQuestion::Total => Asked::new(
            "What is the total of all items?".into(),
            data.iter().map(|d| d.value).sum::<u32>().to_string(),
        ),
        GraphQuestion::Comparison => {
            let subset: Vec<&DataPoint> = data.choose_multiple(rng, 3).collect();
            let mut ranked = subset.clone();
            // Stable: equal values keep their question order.
            ranked.sort_by(|a, b| b.value.cmp(&a.value));
            let focus: Vec<String> = subset.iter().map(|d| d.label.clone()).collect();
            let ranked: Vec<&str> = ranked.iter().map(|d| d.label.as_str()).collect();
            Asked {
                question: format!("Order these from most to least: {}", join(&focus)),
                answer: join(&ranked),
                focus,
                threshold: None,
            }
        }
        GraphQuestion::MoreThan | GraphQuestion::LessThan => {
            let threshold = rng.gen_range(10..=40);
            let (word, count) = if question_type == GraphQuestion::MoreThan {
                ("more", data.iter().filter(|d| d.value > threshold).count())
            } else {
                ("less", data.iter().filter(|d| d.value < threshold).count())
            };
            Asked {
                threshold: Some(threshold),
                ..Asked::new(
                    format!("How many items have {word} than {threshold}?"),
                    count.to_string(),
                )
            }
        }
        GraphQuestion::Average => {
            let total: u32 = data.iter().map(|d| d.value).sum();
            let mean = total as f64 / data.len() as f64;
            Asked::new("What is the average (mean) of all items?".into(), format!("{mean:.1}"))
        }
    }
}

/// Largest value; the first such item wins a tie.
fn most(data: &[DataPoint]) -> &DataPoint {
    data.iter().fold(&data[0], |best, d| if d.value > best.value { d } else { best })
}

/// Smallest value; the first such item wins a tie.
fn least(data: &[DataPoint]) -> &DataPoint {
    data.iter().fold(&data[0], |best, d| if d.value < best.value { d } else { best })
}

/// Labels whose plural is the label itself.
const SAME_PLURAL: &[&str] = &["fish"];

/// Labels that name a choice rather than a countable thing.
const UNCOUNTABLE: &[&str] = &[
    "soccer", "basketball", "swimming", "running", "baseball",
    "sunny", "rainy", "cloudy", "snowy", "windy",
    "red", "blue", "green", "yellow", "purple",
];

fn read_question(label: &str) -> String {
    let noun = label.to_lowercase();
    if UNCOUNTABLE.contains(&noun.as_str()) {
        format!("How many votes did {label} get?")
    } else if SAME_PLURAL.contains(&noun.as_str()) {
        format!("How many {noun} are there?")
    } else {
        format!("How many {} are there?", plural(&noun))
    }
}

fn plural(noun: &str) -> String {
    if noun.ends_with('s') {
        return noun.to_string();
    }
    match noun.strip_suffix('y') {
        Some(stem) if !stem.ends_with(['a', 'e', 'i', 'o', 'u']) => format!("{stem}ies"),
        _ => format!("{noun}s"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn points(values: &[(&str, u32)]) -> Vec<DataPoint> {
        values.iter().map(|&(l, v)| DataPoint { label: l.into(), value: v }).collect()
    }

    #[test]
    fn ties_go_to_the_first_item() {
        let data = points(&[("Dog", 4), ("Cat", 9), ("Fish", 9), ("Bird", 1), ("Hamster", 1)]);
        assert_eq!(most(&data).label, "Cat");
        assert_eq!(least(&data).label, "Bird");
    }

    #[test]
    fn plurals() {
        assert_eq!(plural("dog"), "dogs");
        assert_eq!(plural("grapes"), "grapes");
        assert_eq!(plural("strawberry"), "strawberries");
        assert_eq!(plural("day"), "days");
    }

    #[test]
    fn read_questions_follow_the_label() {
        assert_eq!(read_question("Dog"), "How many dogs are there?");
        assert_eq!(read_question("Fish"), "How many fish are there?");
        assert_eq!(read_question("Soccer"), "How many votes did Soccer get?");
        assert_eq!(read_question("Sunny"), "How many votes did Sunny get?");
        assert_eq!(read_question("Red"), "How many votes did Red get?");
    }

    #[test]
    fn every_data_label_reads_naturally() {
        for (_, labels) in DATA_SETS {
            for label in labels {
                let q = read_question(label);
                assert!(!q.contains("fishs") && !q.contains("soccers") && !q.contains("sunnies"), "{q}");
            }
        }
    }

    #[test]
    fn beginner_pictographs_are_small() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let p = Graphing.build(&mut rng, DifficultyTier::Beginner, Subcategory::Pictographs).unwrap();
            let ProblemBody::Graph { title, data, .. } = &p.body else { panic!("wrong body") };
            assert!(DATA_SETS.iter().any(|(t, _)| t == title));
            assert_eq!(data.len(), 3);
            assert!(data.iter().all(|d| (1..=5).contains(&d.value)));
            assert_eq!(p.display_type, DisplayType::Pictograph);
        }
    }

    #[test]
    fn analysis_answers_agree_with_data() {
        for seed in 0..300 {
            let mut rng = StdRng::seed_from_u64(seed);
            let p = Graphing
                .build(&mut rng, DifficultyTier::Advanced, Subcategory::AnalyzingData)
                .unwrap();
            let ProblemBody::Graph { data, question_type, threshold, focus, .. } = &p.body else {
                panic!("wrong body")
            };
            assert_eq!(data.len(), 5);
            let answer = p.answer.to_string();
            match question_type {
                GraphQuestion::MoreThan => {
                    let t = threshold.unwrap();
                    assert_eq!(answer, data.iter().filter(|d| d.value > t).count().to_string());
                }
                GraphQuestion::LessThan => {
                    let t = threshold.unwrap();
                    assert_eq!(answer, data.iter().filter(|d| d.value < t).count().to_string());
                }
                GraphQuestion::Average => {
                    let total: u32 = data.iter().map(|d| d.value).sum();
                    assert_eq!(answer, format!("{:.1}", total as f64 / 5.0));
                }
                GraphQuestion::Comparison => {
                    assert_eq!(focus.len(), 3);
                    let value = |label: &str| data.iter().find(|d| d.label == label).unwrap().value;
                    let ordered: Vec<u32> = answer.split(", ").map(value).collect();
                    assert!(ordered.windows(2).all(|w| w[0] >= w[1]));
                }
                other => panic!("unexpected question {other:?}"),
            }
        }
    }

    #[test]
    fn difference_is_absolute() {
        for seed in 0..300 {
            let mut rng = StdRng::seed_from_u64(seed);
            let p = Graphing.build(&mut rng, DifficultyTier::Advanced, Subcategory::BarGraphs).unwrap();
            let ProblemBody::Graph { data, question_type, focus, .. } = &p.body else { panic!("wrong body") };
            if *question_type != GraphQuestion::Difference {
                continue;
            }
            let value = |label: &String| data.iter().find(|d| &d.label == label).unwrap().value;
            let (a, b) = (value(&focus[0]), value(&focus[1]));
            assert_eq!(p.answer.to_string(), a.abs_diff(b).to_string());
        }
    }
}
