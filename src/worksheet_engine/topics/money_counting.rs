use rand::{Rng, RngCore};

use crate::worksheet_engine::{
    error::GenerationError,
    helpers::{pick, problem, unsupported},
    models::{Category, Coin, DifficultyTier, DisplayType, Problem, ProblemBody, Subcategory},
    topics::TopicGenerator,
};

/// Price paid for every making-change problem, in cents.
pub const PAYMENT: u32 = 100;

pub struct MoneyCounting;

impl TopicGenerator for MoneyCounting {
    fn category(&self) -> Category {
        Category::MoneyCounting
    }

    fn available_subcategories(&self, tier: DifficultyTier) -> &'static [Subcategory] {
        use Subcategory::*;
        match tier {
            DifficultyTier::Beginner     => &[IdentifyingCoins, CountingPenniesNickels],
            DifficultyTier::Intermediate => &[CountingPenniesNickels, MixedCoins],
            DifficultyTier::Advanced     => &[MixedCoins, MakingChange],
        }
    }

    fn build(
        &self,
        rng: &mut dyn RngCore,
        _tier: DifficultyTier,
        subcategory: Subcategory,
    ) -> Result<Problem, GenerationError> {
        let p = match subcategory {
            Subcategory::IdentifyingCoins => {
                let coin_type = pick(rng, &Coin::ALL);
                problem(subcategory, DisplayType::Image, coin_type.name(), ProblemBody::Coin { coin_type })
            }
            Subcategory::CountingPenniesNickels => {
                let coin_type = pick(rng, &[Coin::Penny, Coin::Nickel]);
                let count = rng.gen_range(1..=10);
                let total_value = count * coin_type.cents();
                problem(
                    subcategory,
                    DisplayType::Coins,
                    cents(total_value),
                    ProblemBody::CoinCount { coin_type, count, total_value },
                )
            }
            Subcategory::MixedCoins => {
                // Quarters appear in about half of the mixes.
                let pool: &[Coin] = if rng.gen_bool(0.5) { &Coin::ALL[..3] } else { &Coin::ALL };
                let n = rng.gen_range(3..=8);
                let coins: Vec<Coin> = (0..n).map(|_| pick(rng, pool)).collect();
                let total_value = coins.iter().map(|c| c.cents()).sum();
                problem(
                    subcategory,
                    DisplayType::Coins,
                    cents(total_value),
                    ProblemBody::CoinMix { coins, total_value },
                )
            }
            Subcategory::MakingChange => {
                let cost = rng.gen_range(5..=95);
                let change = PAYMENT - cost;
                problem(
                    subcategory,
                    DisplayType::Text,
                    cents(change),
                    ProblemBody::Change { cost, payment: PAYMENT, change },
                )
            }
            other => return Err(unsupported(Category::MoneyCounting, other)),
        };
        Ok(p)
    }
}

fn cents(value: u32) -> String {
    format!("{value} cents")
}
