//! Immutable topic registry.
//!
//! Built once at startup and shared read-only by every request. It owns one
//! [`TopicGenerator`] per [`Category`] and resolves the raw concept strings a
//! client sends into typed [`Concept`]s.

use rand::RngCore;
use serde::Serialize;

use crate::worksheet_engine::{
    error::GenerationError,
    models::{Category, Concept, DifficultyTier, Problem, Subcategory},
    topics::{self, TopicGenerator},
};

pub struct Registry {
    generators: Vec<Box<dyn TopicGenerator>>,
}

/// One topic and its skills, as listed by the concept catalog.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    pub id: Category,
    pub name: String,
    pub subcategories: Vec<Subcategory>,
}

impl Registry {
    /// Every built-in topic generator.
    pub fn standard() -> Self {
        Registry { generators: topics::all() }
    }

    /// A registry over an explicit generator set. When two generators claim
    /// the same category, the first one wins.
    pub fn with_generators(generators: Vec<Box<dyn TopicGenerator>>) -> Self {
        Registry { generators }
    }

    pub fn generator(&self, category: Category) -> Option<&dyn TopicGenerator> {
        self.generators
            .iter()
            .find(|g| g.category() == category)
            .map(|g| g.as_ref())
    }

    /// Topic names win over skill names; no identifier is both.
    pub fn resolve(&self, concept: &str) -> Option<Concept> {
        if let Ok(category) = concept.parse::<Category>() {
            return Some(Concept::Topic(category));
        }
        concept.parse::<Subcategory>().ok().map(Concept::Skill)
    }

    /// Generate one problem from raw identifiers.
    ///
    /// This is the string boundary of the generator contract: an unknown tier is
    /// `UnsupportedDifficulty`, an unknown skill is `UnknownConcept`.
    pub fn generate_named(
        &self,
        rng: &mut dyn RngCore,
        difficulty: &str,
        subcategory: &str,
    ) -> Result<Problem, GenerationError> {
        let tier: DifficultyTier = difficulty.parse()?;
        let sub: Subcategory = subcategory.parse()?;
        let generator = self
            .generator(sub.category())
            .ok_or_else(|| GenerationError::UnknownConcept(subcategory.to_string()))?;
        generator.generate_problem(rng, tier, Some(sub))
    }

    /// Topics this registry can serve, in catalog order.
    pub fn catalog(&self) -> Vec<CatalogEntry> {
        Category::ALL
            .into_iter()
            .filter(|&c| self.generator(c).is_some())
            .map(|c| CatalogEntry {
                id: c,
                name: c.to_string(),
                subcategories: c.subcategories().to_vec(),
            })
            .collect()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn standard_registry_serves_every_category() {
        let registry = Registry::standard();
        for category in Category::ALL {
            let g = registry.generator(category).expect("missing generator");
            assert_eq!(g.category(), category);
        }
        assert_eq!(registry.catalog().len(), 14);
    }

    #[test]
    fn resolves_topics_and_skills() {
        let registry = Registry::standard();
        assert_eq!(registry.resolve("addition"), Some(Concept::Topic(Category::Addition)));
        assert_eq!(registry.resolve("add_zero"), Some(Concept::Skill(Subcategory::AddZero)));
        assert_eq!(registry.resolve("basic_2d_3d"), Some(Concept::Skill(Subcategory::Basic2d3d)));
        assert_eq!(registry.resolve("subitizing"), None);
    }

    #[test]
    fn named_generation_checks_the_tier_string() {
        let registry = Registry::standard();
        let mut rng = StdRng::seed_from_u64(2);
        let err = registry.generate_named(&mut rng, "expert", "add_one").unwrap_err();
        assert_eq!(err, GenerationError::UnsupportedDifficulty("expert".into()));

        let p = registry.generate_named(&mut rng, "Beginner", "same_number_subtraction").unwrap();
        assert_eq!(p.subcategory, Subcategory::SameNumberSubtraction);
        assert_eq!(p.answer.to_string(), "0");
    }

    #[test]
    fn partial_registry_hides_missing_topics() {
        let registry = Registry::with_generators(vec![Box::new(topics::addition::Addition)]);
        assert!(registry.generator(Category::Shapes).is_none());
        let catalog = registry.catalog();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].id, Category::Addition);
    }
}
