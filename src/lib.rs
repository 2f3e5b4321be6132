//! # math_worksheet_gen
//!
//! Randomised K-2 math worksheet problems across 14 topics, from number sense
//! and single-digit facts to money, fractions, graphs and parity.
//!
//! Every problem carries the concrete values a renderer needs (operands,
//! clock hands, coins, data points, ...) together with its answer, so the
//! answer key can always be re-derived from the problem itself.
//!
//! ## How it works
//!
//! 1. Build a [`WorksheetRequest`]: `"spiral"` or `"fluency"`, a difficulty
//!    tier, and the concepts (topic or skill identifiers) to cover.
//! 2. Call [`generate_worksheet`]. The request is validated, concepts are
//!    resolved through the [`Registry`], and the assembler asks each topic
//!    generator for problems.
//! 3. Hand the returned [`Worksheet`] to a renderer, or turn it into a
//!    JSON payload with numbered prompts via [`to_render_payload`].
//!
//! ## Worksheet modes
//!
//! - **Spiral**: one problem per distinct skill. A topic concept expands to
//!   every one of its skills; unknown concepts are skipped.
//! - **Fluency**: `question_count` problems (default 15) for a single skill.
//!   Problems that fail to generate are dropped, so the list may be shorter.
//!
//! Pass `rng_seed: Some(u64)` to reproduce a worksheet exactly.
//!
//! ## Quick start
//!
//! ```rust
//! use math_worksheet_gen::{generate_worksheet, to_render_payload, DifficultyTier, WorksheetRequest};
//!
//! let request = WorksheetRequest::spiral(["addition", "making_change"], DifficultyTier::Intermediate)
//!     .with_seed(7);
//! let sheet = generate_worksheet(&request).expect("valid request");
//! for p in &sheet.problems {
//!     println!("{} / {}: {}", p.category, p.subcategory, p.answer);
//! }
//!
//! let drill = WorksheetRequest::fluency("near_doubles", DifficultyTier::Beginner)
//!     .with_question_count(10)
//!     .with_answer_key();
//! let payload = to_render_payload(&generate_worksheet(&drill).expect("valid request"));
//! println!("{}", payload["title"]);
//! ```

pub mod config;
pub mod render;
pub mod routes;
pub mod telemetry;
pub mod worksheet_engine;

// Convenience re-exports so callers can use `math_worksheet_gen::generate_worksheet`
// directly without reaching into `worksheet_engine::`.
pub use render::to_render_payload;
pub use worksheet_engine::{
    generate_worksheet, generate_worksheet_with, Answer, Category, Concept, DifficultyTier,
    DisplayType, GenerationError, Problem, ProblemBody, QuestionLimits, Registry, Subcategory,
    TopicGenerator, ValidationError, Worksheet, WorksheetRequest, WorksheetType,
};
