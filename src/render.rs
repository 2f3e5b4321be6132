use serde_json::{json, Value};

use crate::worksheet_engine::{
    models::{
        join, BeforeAfter, Coin, LengthUnit, Problem, ProblemBody, Worksheet, WorksheetType,
    },
    visualization::visualize,
};

/// Heading printed at the top of a worksheet, e.g. `"Beginner Spiral Review Worksheet"`.
pub fn title(worksheet: &Worksheet) -> String {
    let kind = match worksheet.worksheet_type {
        WorksheetType::Spiral  => "Spiral Review",
        WorksheetType::Fluency => "Fluency Practice",
    };
    format!("{} {} Worksheet", worksheet.difficulty, kind)
}

fn coin_list(coins: &[Coin]) -> String {
    join(&coins.iter().map(|c| c.name()).collect::<Vec<_>>())
}

fn blanks(sequence: &[Option<i64>]) -> String {
    let cells: Vec<String> = sequence
        .iter()
        .map(|v| v.map_or_else(|| "___".to_string(), |n| n.to_string()))
        .collect();
    join(&cells)
}

/// Question text a student reads for `problem`.
///
/// Layout-heavy problems (clocks, coins, graphs) still get a sentence so the
/// payload is usable without pictures.
pub fn prompt(problem: &Problem) -> String {
    match &problem.body {
        ProblemBody::Arithmetic { first_number, second_number, operator } => {
            format!("{first_number} {} {second_number} = ___", operator.symbol())
        }
        ProblemBody::Comparison { first_number, second_number } => {
            format!("{first_number} ___ {second_number}  (write <, > or =)")
        }
        ProblemBody::Ordering { numbers } => {
            format!("Put these numbers in order from least to greatest: {}", join(numbers))
        }
        ProblemBody::BeforeAfter { number, question_type } => match question_type {
            BeforeAfter::Before => format!("What number comes just before {number}?"),
            BeforeAfter::After  => format!("What number comes just after {number}?"),
        },
        ProblemBody::Sequence { sequence, .. } => {
            format!("Fill in the missing number: {}", blanks(sequence))
        }
        ProblemBody::Clock { .. } => "What time does the clock show?".to_string(),
        ProblemBody::Coin { .. } => "What is the name of this coin?".to_string(),
        ProblemBody::CoinCount { coin_type, count, .. } => {
            let name = if *count == 1 { coin_type.name().to_string() } else { plural_coin(*coin_type) };
            format!("How many cents are {count} {name}?")
        }
        ProblemBody::CoinMix { coins, .. } => {
            format!("How many cents in all? {}", coin_list(coins))
        }
        ProblemBody::Change { cost, payment, .. } => {
            format!("A toy costs {cost} cents. You pay {payment} cents. How much change do you get?")
        }
        ProblemBody::PlaceValue { number, place } => {
            format!("What digit is in the {} place of {number}?", place.name())
        }
        ProblemBody::ExpandedForm { question, .. } => question.clone(),
        ProblemBody::WordProblem { text, .. } => text.clone(),
        ProblemBody::Shape { .. } => "What is the name of this shape?".to_string(),
        ProblemBody::SolidCount { shape_name, question_type, .. } => {
            format!("How many {} does a {shape_name} have?", question_type.name())
        }
        ProblemBody::FractionShading { shape, .. } => {
            format!("What fraction of the {shape} is shaded?")
        }
        ProblemBody::FractionComparison { fraction1, fraction2 } => {
            format!("{fraction1} ___ {fraction2}  (write <, > or =)")
        }
        ProblemBody::ObjectComparison { object1, object2, property, .. } => {
            format!("Which is {}: the {object1} or the {object2}?", property.comparative())
        }
        ProblemBody::NonStandardMeasure { measuring_object, item_to_measure, .. } => {
            format!("How many {measuring_object}s long is the {item_to_measure}?")
        }
        ProblemBody::Ruler { unit, .. } => {
            let unit = match unit {
                LengthUnit::Inches      => "inches",
                LengthUnit::Centimeters => "centimeters",
            };
            format!("How long is the line, in {unit}?")
        }
        ProblemBody::Pattern { pattern, .. } => {
            format!("What comes next? {}, ___", join(pattern))
        }
        ProblemBody::NumberPattern { pattern, .. } => {
            format!("What number comes next? {}, ___", join(pattern))
        }
        ProblemBody::PatternGaps { pattern, .. } => {
            format!("Fill in the missing numbers: {}", blanks(pattern))
        }
        ProblemBody::Graph { title, question, .. } => format!("{title}: {question}"),
        ProblemBody::Parity { question, .. }
        | ProblemBody::ParitySort { question, .. }
        | ProblemBody::ParityReasoning { question, .. } => question.clone(),
    }
}

fn plural_coin(coin: Coin) -> String {
    match coin {
        Coin::Penny => "pennies".to_string(),
        other => format!("{}s", other.name()),
    }
}

/// Answer text as it appears in the key; gap answers are comma-joined.
pub fn answer_key(problem: &Problem) -> String {
    problem.answer.to_string()
}

/// Build the payload handed to a worksheet renderer.
///
/// Problems are numbered from 1 in worksheet order. The answer key is present
/// only when the worksheet asked for one.
pub fn to_render_payload(worksheet: &Worksheet) -> Value {
    let problems: Vec<Value> = worksheet
        .problems
        .iter()
        .enumerate()
        .map(|(i, p)| {
            json!({
                "number": i + 1,
                "category": p.category,
                "subcategory": p.subcategory,
                "display_type": p.display_type,
                "prompt": prompt(p),
                "visualization": visualize(p),
                "problem": p,
            })
        })
        .collect();

    let mut payload = json!({
        "title": title(worksheet),
        "worksheet_type": worksheet.worksheet_type,
        "difficulty": worksheet.difficulty,
        "concepts": worksheet.concepts,
        "problem_count": problems.len(),
        "problems": problems,
    });

    if worksheet.include_answer_key {
        let key: Vec<Value> = worksheet
            .problems
            .iter()
            .enumerate()
            .map(|(i, p)| json!({ "number": i + 1, "answer": answer_key(p) }))
            .collect();
        payload["answer_key"] = Value::Array(key);
    }
    payload
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::worksheet_engine::{generate_worksheet, models::WorksheetRequest, DifficultyTier};

    #[test]
    fn payload_numbers_problems_and_adds_key_on_request() {
        let request = WorksheetRequest::fluency("making_change", DifficultyTier::Advanced)
            .with_question_count(4)
            .with_seed(12)
            .with_answer_key();
        let sheet = generate_worksheet(&request).unwrap();
        let payload = to_render_payload(&sheet);

        assert_eq!(payload["title"], "Advanced Fluency Practice Worksheet");
        assert_eq!(payload["problem_count"], 4);
        assert_eq!(payload["problems"][3]["number"], 4);
        assert_eq!(payload["problems"][0]["subcategory"], "making_change");
        assert_eq!(payload["answer_key"].as_array().unwrap().len(), 4);
        assert!(payload["answer_key"][0]["answer"].as_str().unwrap().ends_with(" cents"));
    }

    #[test]
    fn key_is_omitted_unless_requested() {
        let request = WorksheetRequest::spiral(["addition"], DifficultyTier::Beginner).with_seed(3);
        let payload = to_render_payload(&generate_worksheet(&request).unwrap());
        assert!(payload.get("answer_key").is_none());
        assert_eq!(payload["problems"][0]["visualization"]["kind"], "blocks");
    }

    #[test]
    fn sequence_prompt_shows_the_blank() {
        let request = WorksheetRequest::fluency("by_hundreds", DifficultyTier::Advanced)
            .with_question_count(1)
            .with_seed(5);
        let sheet = generate_worksheet(&request).unwrap();
        let text = prompt(&sheet.problems[0]);
        assert!(text.starts_with("Fill in the missing number: "));
        assert_eq!(text.matches("___").count(), 1);
    }
}
