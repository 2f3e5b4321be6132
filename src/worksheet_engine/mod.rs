//! Core worksheet engine: problem generation and worksheet assembly.
//!
//! ## Module overview
//!
//! | Module          | Purpose |
//! |-----------------|---------|
//! | `models`        | Shared types: tiers, topic/skill identifiers, problems, requests, worksheets |
//! | `error`         | `GenerationError` (per problem) and `ValidationError` (per request) |
//! | `helpers`       | Stateless building blocks shared by every topic |
//! | `topics`        | The `TopicGenerator` trait and one generator per topic |
//! | `registry`      | Immutable category → generator table and concept resolution |
//! | `generator`     | Request validation, the worksheet assembler, `generate_worksheet()` |
//! | `visualization` | Picture descriptors for addition and shape problems |

pub mod error;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod registry;
pub mod topics;
pub mod visualization;

pub use error::{GenerationError, ValidationError};
pub use generator::{generate_worksheet, generate_worksheet_with, WorksheetAssembler};
pub use models::{
    Answer, Category, Concept, DifficultyTier, DisplayType, Problem, ProblemBody, QuestionLimits,
    Subcategory, Worksheet, WorksheetPlan, WorksheetRequest, WorksheetType,
};
pub use registry::{CatalogEntry, Registry};
pub use topics::TopicGenerator;
pub use visualization::{visualize, Visualization};
