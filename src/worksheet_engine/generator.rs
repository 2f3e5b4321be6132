use std::collections::HashSet;

use rand::{rngs::StdRng, RngCore, SeedableRng};
use tracing::{debug, warn};

use crate::worksheet_engine::{
    error::ValidationError,
    models::{
        Concept, DifficultyTier, Problem, QuestionLimits, Subcategory, Worksheet, WorksheetPlan,
        WorksheetRequest, WorksheetType,
    },
    registry::Registry,
    topics::TopicGenerator,
};

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

impl WorksheetRequest {
    /// Validate against the default question-count limits.
    pub fn validate(&self) -> Result<WorksheetPlan, ValidationError> {
        self.validate_with(QuestionLimits::default())
    }

    /// Reject a malformed request before any generation happens.
    ///
    /// Checks run in a fixed order: worksheet type, difficulty, empty concept
    /// list, fluency concept count, fluency question count.
    pub fn validate_with(&self, limits: QuestionLimits) -> Result<WorksheetPlan, ValidationError> {
        let worksheet_type: WorksheetType = self.worksheet_type.parse()?;
        let difficulty: DifficultyTier = self
            .difficulty
            .parse()
            .map_err(|_| ValidationError::InvalidDifficulty(self.difficulty.clone()))?;
        if self.concepts.is_empty() {
            return Err(ValidationError::NoConcepts);
        }
        if worksheet_type == WorksheetType::Fluency && self.concepts.len() > 1 {
            return Err(ValidationError::TooManyFluencyConcepts(self.concepts.len()));
        }
        // Spiral worksheets size themselves from the concepts; the count is ignored.
        let question_count = match worksheet_type {
            WorksheetType::Fluency => {
                let count = self.question_count.unwrap_or(limits.default_question_count);
                if count > limits.max_question_count {
                    return Err(ValidationError::QuestionCountTooLarge {
                        requested: count,
                        max: limits.max_question_count,
                    });
                }
                count
            }
            WorksheetType::Spiral => limits.default_question_count,
        };
        Ok(WorksheetPlan {
            worksheet_type,
            difficulty,
            concepts: self.concepts.clone(),
            question_count,
            include_answer_key: self.include_answer_key,
        })
    }
}

// ---------------------------------------------------------------------------
// Assembler
// ---------------------------------------------------------------------------

/// Turns a validated plan into an ordered problem list.
///
/// Holds no state between calls; every invocation is a pure function of the
/// plan and the random source it is handed.
pub struct WorksheetAssembler<'r> {
    registry: &'r Registry,
}

impl<'r> WorksheetAssembler<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        WorksheetAssembler { registry }
    }

    pub fn assemble(&self, rng: &mut dyn RngCore, plan: &WorksheetPlan) -> Vec<Problem> {
        let problems = match plan.worksheet_type {
            WorksheetType::Fluency => self.fluency(rng, plan),
            WorksheetType::Spiral  => self.spiral(rng, plan),
        };
        debug!(
            mode = %plan.worksheet_type,
            tier = %plan.difficulty,
            problems = problems.len(),
            "worksheet assembled"
        );
        problems
    }

    /// One skill, `question_count` times. Only a skill identifier resolves
    /// here; a bare topic or unknown concept yields an empty list.
    fn fluency(&self, rng: &mut dyn RngCore, plan: &WorksheetPlan) -> Vec<Problem> {
        let Some(concept) = plan.concepts.first() else {
            return Vec::new();
        };
        let Some(Concept::Skill(sub)) = self.registry.resolve(concept) else {
            debug!(concept = %concept, "fluency concept is not a skill");
            return Vec::new();
        };
        let Some(generator) = self.registry.generator(sub.category()) else {
            debug!(concept = %concept, "no generator registered");
            return Vec::new();
        };

        let mut problems = Vec::with_capacity(plan.question_count);
        for _ in 0..plan.question_count {
            if let Some(problem) = attempt(generator, &mut *rng, plan.difficulty, sub) {
                problems.push(problem);
            }
        }
        problems
    }

    /// One problem per skill, in first-seen order. A skill reached twice, via
    /// its topic and by name, is generated once.
    fn spiral(&self, rng: &mut dyn RngCore, plan: &WorksheetPlan) -> Vec<Problem> {
        let mut used: HashSet<Subcategory> = HashSet::new();
        let mut problems = Vec::new();

        for concept in &plan.concepts {
            let skills: Vec<Subcategory> = match self.registry.resolve(concept) {
                Some(Concept::Topic(category)) => category.subcategories().to_vec(),
                Some(Concept::Skill(sub)) => vec![sub],
                None => {
                    debug!(concept = %concept, "skipping unknown concept");
                    continue;
                }
            };

            for sub in skills {
                if used.contains(&sub) {
                    continue;
                }
                let Some(generator) = self.registry.generator(sub.category()) else {
                    debug!(concept = %concept, "no generator registered");
                    continue;
                };
                if let Some(problem) = attempt(generator, rng, plan.difficulty, sub) {
                    used.insert(sub);
                    problems.push(problem);
                }
            }
        }
        problems
    }
}

/// Generate one problem for `sub` and stamp the assembler's tags on it.
/// Failures are logged and absorbed.
fn attempt(
    generator: &dyn TopicGenerator,
    rng: &mut dyn RngCore,
    tier: DifficultyTier,
    sub: Subcategory,
) -> Option<Problem> {
    match generator.generate_problem(rng, tier, Some(sub)) {
        Ok(mut problem) => {
            problem.category = sub.category();
            problem.subcategory = sub;
            Some(problem)
        }
        Err(error) => {
            warn!(
                category = %sub.category().as_str(),
                subcategory = %sub,
                %error,
                "problem generation failed; skipping"
            );
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Validate `request` and build its worksheet with the standard registry.
pub fn generate_worksheet(request: &WorksheetRequest) -> Result<Worksheet, ValidationError> {
    generate_worksheet_with(&Registry::standard(), request, QuestionLimits::default())
}

/// Validate `request` and build its worksheet from `registry`.
///
/// `rng_seed` makes the output reproducible; without it the generator is
/// seeded from entropy.
pub fn generate_worksheet_with(
    registry: &Registry,
    request: &WorksheetRequest,
    limits: QuestionLimits,
) -> Result<Worksheet, ValidationError> {
    let plan = request.validate_with(limits)?;
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    let problems = WorksheetAssembler::new(registry).assemble(&mut rng, &plan);
    Ok(Worksheet {
        worksheet_type: plan.worksheet_type,
        difficulty: plan.difficulty,
        concepts: plan.concepts,
        include_answer_key: plan.include_answer_key,
        problems,
    })
}
