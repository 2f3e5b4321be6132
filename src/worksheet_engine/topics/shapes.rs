use rand::{Rng, RngCore};

use crate::worksheet_engine::{
    error::GenerationError,
    helpers::{pick, problem, unsupported},
    models::{
        Category, DifficultyTier, DisplayType, Problem, ProblemBody, ShapeDimension, ShapeProperties,
        SolidProperty, Subcategory,
    },
    topics::TopicGenerator,
};

const fn flat(sides: u32) -> ShapeProperties {
    ShapeProperties { sides: Some(sides), faces: None, edges: None, vertices: sides }
}

const fn solid(faces: u32, edges: u32, vertices: u32) -> ShapeProperties {
    ShapeProperties { sides: None, faces: Some(faces), edges: Some(edges), vertices }
}

// A circle has no corners, so sides and vertices are both zero.
pub const FLAT_SHAPES: &[(&str, ShapeProperties)] = &[
    ("circle", flat(0)),
    ("triangle", flat(3)),
    ("square", flat(4)),
    ("rectangle", flat(4)),
    ("pentagon", flat(5)),
    ("hexagon", flat(6)),
    ("octagon", flat(8)),
];

/// Counts follow the classroom convention: curved surfaces count as faces.
pub const SOLID_SHAPES: &[(&str, ShapeProperties)] = &[
    ("cube", solid(6, 12, 8)),
    ("rectangular prism", solid(6, 12, 8)),
    ("sphere", solid(1, 0, 0)),
    ("cone", solid(2, 1, 1)),
    ("cylinder", solid(3, 2, 0)),
    ("pyramid", solid(5, 8, 5)),
];

const SOLID_PROPERTIES: [SolidProperty; 3] =
    [SolidProperty::Faces, SolidProperty::Edges, SolidProperty::Vertices];

pub struct Shapes;

impl TopicGenerator for Shapes {
    fn category(&self) -> Category {
        Category::Shapes
    }

    fn available_subcategories(&self, tier: DifficultyTier) -> &'static [Subcategory] {
        use Subcategory::*;
        match tier {
            DifficultyTier::Beginner     => &[Basic2d3d],
            DifficultyTier::Intermediate => &[Basic2d3d, EdgesFacesVertices],
            DifficultyTier::Advanced     => &[EdgesFacesVertices],
        }
    }

    fn build(
        &self,
        rng: &mut dyn RngCore,
        tier: DifficultyTier,
        subcategory: Subcategory,
    ) -> Result<Problem, GenerationError> {
        match subcategory {
            Subcategory::Basic2d3d => Ok(identify(rng, tier)),
            Subcategory::EdgesFacesVertices => count_property(rng),
            other => Err(unsupported(Category::Shapes, other)),
        }
    }
}

fn identify<R: Rng + ?Sized>(rng: &mut R, tier: DifficultyTier) -> Problem {
    let flat_weight = if tier == DifficultyTier::Beginner { 0.7 } else { 0.1 };
    let (shape_type, table) = if rng.gen_bool(flat_weight) {
        (ShapeDimension::Flat, FLAT_SHAPES)
    } else {
        (ShapeDimension::Solid, SOLID_SHAPES)
    };
    let (name, properties) = pick(rng, table);
    problem(
        Subcategory::Basic2d3d,
        DisplayType::Shape,
        name,
        ProblemBody::Shape { shape_name: name.to_string(), shape_type, properties },
    )
}

fn count_property<R: Rng + ?Sized>(rng: &mut R) -> Result<Problem, GenerationError> {
    let (name, properties) = pick(rng, SOLID_SHAPES);
    let question_type = pick(rng, &SOLID_PROPERTIES);
    let count = properties.count(question_type).ok_or_else(|| GenerationError::Recipe {
        subcategory: Subcategory::EdgesFacesVertices,
        reason: format!("{name} has no {} count", question_type.name()),
    })?;
    Ok(problem(
        Subcategory::EdgesFacesVertices,
        DisplayType::Shape,
        count.to_string(),
        ProblemBody::SolidCount {
            shape_name: name.to_string(),
            shape_type: ShapeDimension::Solid,
            question_type,
            properties,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn every_solid_has_all_three_counts() {
        for (name, props) in SOLID_SHAPES {
            for prop in SOLID_PROPERTIES {
                assert!(props.count(prop).is_some(), "{name} missing {prop:?}");
            }
        }
    }

    #[test]
    fn identify_answers_with_shape_name() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let p = Shapes.build(&mut rng, DifficultyTier::Beginner, Subcategory::Basic2d3d).unwrap();
            let ProblemBody::Shape { shape_name, shape_type, properties } = &p.body else {
                panic!("wrong body")
            };
            assert_eq!(p.answer.to_string(), *shape_name);
            let table = match shape_type {
                ShapeDimension::Flat => FLAT_SHAPES,
                ShapeDimension::Solid => SOLID_SHAPES,
            };
            assert!(table.iter().any(|(n, pr)| n == shape_name && pr == properties));
        }
    }

    #[test]
    fn cube_edges_are_twelve() {
        let cube = SOLID_SHAPES.iter().find(|(n, _)| *n == "cube").unwrap().1;
        assert_eq!(cube.count(SolidProperty::Edges), Some(12));
        assert_eq!(cube.count(SolidProperty::Vertices), Some(8));
    }

    #[test]
    fn property_count_matches_table() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let p = Shapes
                .build(&mut rng, DifficultyTier::Advanced, Subcategory::EdgesFacesVertices)
                .unwrap();
            let ProblemBody::SolidCount { question_type, properties, .. } = &p.body else {
                panic!("wrong body")
            };
            assert_eq!(p.answer.to_string(), properties.count(*question_type).unwrap().to_string());
        }
    }
}
