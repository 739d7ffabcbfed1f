//! Sponsored-post price estimation.
//!
//! [`compute_price`] is a rules engine: a baseline price scaled by follower
//! count and a chain of table-driven multipliers. It never fails and never
//! draws randomness, so identical profiles always price identically.

mod insights;
mod profile;
pub mod tables;

use serde::{Deserialize, Serialize};

use crate::user::UserRole;

pub use insights::{
    currency_symbol, insights, ContentComparisonRow, GrowthPotential, PricingInsights,
    RadarScores,
};
pub use profile::{CreatorProfile, CreatorProfileForm};
pub use tables::{content_types, niches, RegionalTier};

use tables::{
    content_multiplier, engagement_factor, niche_multiplier, BASELINE_FOLLOWERS, BASELINE_PRICE,
};

const CONFIDENCE_COMPLETE: f64 = 99.2;
const CONFIDENCE_CORE: f64 = 85.0;
const CONFIDENCE_BASE: f64 = 70.0;
const CONFIDENCE_LOW_ENGAGEMENT_CAP: f64 = 75.0;

const PREMIUM_PRICE_THRESHOLD: f64 = 1000.0;
const LOW_PRICE_THRESHOLD: f64 = 50.0;
const LOW_ENGAGEMENT_TIP_THRESHOLD: f64 = 3.0;

pub const TIP_IMPROVE_ENGAGEMENT: &str = "Focus on improving engagement rate for higher pricing.";
pub const TIP_BUNDLE: &str =
    "Explore bundling multiple content types for a better value proposition.";
pub const TIP_CREATOR_PREMIUM: &str =
    "Highlight unique value propositions to justify premium pricing.";
pub const TIP_BRAND_PREMIUM: &str = "Negotiate usage rights carefully to optimize budget.";
pub const TIP_OPTIMAL: &str =
    "Your current profile and inputs suggest optimal pricing. Keep up the great work!";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub base_rate: f64,
    pub engagement_bonus: f64,
    pub niche_multiplier: f64,
    pub regional_multiplier: f64,
    pub follower_scaling_factor: f64,
    pub engagement_factor: f64,
    pub content_multiplier: f64,
}

/// A `{min, avg, max}` price band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkBand {
    pub min: f64,
    pub avg: f64,
    pub max: f64,
}

impl BenchmarkBand {
    fn scaled(price: f64, min: f64, avg: f64, max: f64) -> Self {
        Self {
            min: price * min,
            avg: price * avg,
            max: price * max,
        }
    }
}

/// Fixed-ratio comparison bands around the suggested price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketBenchmarks {
    #[serde(rename = "similar creators")]
    pub similar_creators: BenchmarkBand,
    #[serde(rename = "niche average")]
    pub niche_average: BenchmarkBand,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    pub suggested_price: f64,
    pub breakdown: PriceBreakdown,
    pub market_benchmarks: MarketBenchmarks,
    /// Input-completeness heuristic in `[0, 100]`, not a statistical interval.
    pub confidence_score: f64,
    /// Advisory strings, never empty.
    pub tips: Vec<String>,
}

/// Everything the paid report shows: the price, its insights, and display currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingReport {
    pub result: PricingResult,
    pub insights: PricingInsights,
    pub currency_symbol: String,
    pub country: Option<String>,
}

/// Computes the suggested price for a creator profile.
///
/// Missing inputs degrade to zero/default multipliers rather than erroring;
/// callers should check [`CreatorProfile::missing_required_fields`] first.
#[must_use]
pub fn compute_price(profile: &CreatorProfile) -> PricingResult {
    #[allow(clippy::cast_precision_loss)]
    let followers = profile.followers() as f64;
    let engagement = profile.engagement();

    let follower_scaling_factor = followers / BASELINE_FOLLOWERS;
    let engagement_factor = engagement_factor(engagement);
    let content_multiplier = content_multiplier(profile.content_type.as_deref());
    let niche_multiplier = niche_multiplier(profile.niche.as_deref());
    let regional_multiplier = RegionalTier::classify(profile.country.as_deref()).multiplier();

    let suggested_price = BASELINE_PRICE
        * follower_scaling_factor
        * engagement_factor
        * content_multiplier
        * niche_multiplier
        * regional_multiplier;

    let base_rate = BASELINE_PRICE * follower_scaling_factor;

    tracing::debug!(
        followers = profile.followers(),
        engagement,
        suggested_price,
        "computed creator price"
    );

    PricingResult {
        suggested_price,
        breakdown: PriceBreakdown {
            base_rate,
            engagement_bonus: base_rate * (engagement_factor - 1.0),
            niche_multiplier,
            regional_multiplier,
            follower_scaling_factor,
            engagement_factor,
            content_multiplier,
        },
        market_benchmarks: MarketBenchmarks {
            similar_creators: BenchmarkBand::scaled(suggested_price, 0.8, 1.0, 1.2),
            niche_average: BenchmarkBand::scaled(suggested_price, 0.7, 0.9, 1.1),
        },
        confidence_score: confidence_score(profile),
        tips: tips(engagement, suggested_price, profile.role),
    }
}

/// Computes the price and bundles it with insights for the paid report.
#[must_use]
pub fn build_report(profile: &CreatorProfile) -> PricingReport {
    let result = compute_price(profile);
    let insights = insights(profile, &result);
    PricingReport {
        currency_symbol: currency_symbol(profile.country.as_deref()).to_string(),
        country: profile.country.clone(),
        result,
        insights,
    }
}

fn confidence_score(profile: &CreatorProfile) -> f64 {
    let score = if profile.is_complete() {
        CONFIDENCE_COMPLETE
    } else if profile.has_core_inputs() {
        CONFIDENCE_CORE
    } else {
        CONFIDENCE_BASE
    };

    if profile.engagement() < 1.0 {
        score.min(CONFIDENCE_LOW_ENGAGEMENT_CAP)
    } else {
        score
    }
}

fn tips(engagement: f64, price: f64, role: Option<UserRole>) -> Vec<String> {
    let mut tips = Vec::new();

    if engagement < LOW_ENGAGEMENT_TIP_THRESHOLD {
        tips.push(TIP_IMPROVE_ENGAGEMENT);
    }
    if price < LOW_PRICE_THRESHOLD {
        tips.push(TIP_BUNDLE);
    }
    if price > PREMIUM_PRICE_THRESHOLD {
        match role {
            Some(UserRole::Creator) => tips.push(TIP_CREATOR_PREMIUM),
            Some(UserRole::Brand) => tips.push(TIP_BRAND_PREMIUM),
            Some(UserRole::Agency) | None => {}
        }
    }
    if tips.is_empty() {
        tips.push(TIP_OPTIMAL);
    }

    tips.into_iter().map(String::from).collect()
}

#[cfg(test)]
#[path = "pricing_test.rs"]
mod tests;
