//! Renderer-neutral picture descriptors.
//!
//! Addition and shape problems can be illustrated. A descriptor says *what* to
//! draw and is computed from the [`Problem`] alone; sizing, colour and layout
//! belong to the renderer.

use serde::Serialize;

use crate::worksheet_engine::models::{
    Category, Operator, Problem, ProblemBody, ShapeDimension, SolidProperty,
};

/// Operands up to this size are drawn as countable blocks.
pub const BLOCK_LIMIT: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Visualization {
    /// One row of unit blocks per operand, joined by the operator.
    Blocks { rows: Vec<u32>, operator: Operator },
    /// One bar per operand.
    BarChart { bars: Vec<Bar> },
    /// Outline of a named shape, optionally marking the counted feature.
    ShapeOutline {
        shape_name: String,
        dimension: ShapeDimension,
        #[serde(skip_serializing_if = "Option::is_none")]
        highlight: Option<SolidProperty>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: u32,
}

/// Descriptor for `problem`, or `None` when its topic has no picture.
pub fn visualize(problem: &Problem) -> Option<Visualization> {
    match (problem.category, &problem.body) {
        (
            Category::Addition,
            ProblemBody::Arithmetic { first_number, second_number, operator },
        ) => Some(arithmetic(*first_number, *second_number, *operator)),
        (Category::Shapes, ProblemBody::Shape { shape_name, shape_type, .. }) => {
            Some(Visualization::ShapeOutline {
                shape_name: shape_name.clone(),
                dimension: *shape_type,
                highlight: None,
            })
        }
        (Category::Shapes, ProblemBody::SolidCount { shape_name, shape_type, question_type, .. }) => {
            Some(Visualization::ShapeOutline {
                shape_name: shape_name.clone(),
                dimension: *shape_type,
                highlight: Some(*question_type),
            })
        }
        _ => None,
    }
}

fn arithmetic(first: u32, second: u32, operator: Operator) -> Visualization {
    if first <= BLOCK_LIMIT && second <= BLOCK_LIMIT {
        Visualization::Blocks { rows: vec![first, second], operator }
    } else {
        Visualization::BarChart {
            bars: vec![
                Bar { label: "First number".into(), value: first },
                Bar { label: "Second number".into(), value: second },
            ],
        }
    }
}
