use serde::{Deserialize, Serialize};

use super::tables::niche_multiplier;
use super::{CreatorProfile, PricingResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthPotential {
    #[serde(rename = "Very High")]
    VeryHigh,
    High,
    Medium,
}

impl GrowthPotential {
    #[must_use]
    pub fn from_followers(followers: u64) -> Self {
        if followers > 500_000 {
            GrowthPotential::VeryHigh
        } else if followers > 100_000 {
            GrowthPotential::High
        } else {
            GrowthPotential::Medium
        }
    }
}

impl std::fmt::Display for GrowthPotential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GrowthPotential::VeryHigh => write!(f, "Very High"),
            GrowthPotential::High => write!(f, "High"),
            GrowthPotential::Medium => write!(f, "Medium"),
        }
    }
}

/// Per-format price for this creator against an industry reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentComparisonRow {
    pub name: String,
    pub user_value: f64,
    pub industry_average: f64,
}

/// Five 0 to 100 axes for the profile radar chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadarScores {
    pub reach: f64,
    pub engagement: f64,
    pub consistency: f64,
    pub growth: f64,
    pub niche_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingInsights {
    /// Engagement rate halved and clamped to `[0, 10]`.
    pub engagement_score: f64,
    pub growth_potential: GrowthPotential,
    pub content_comparison: Vec<ContentComparisonRow>,
    pub radar: RadarScores,
}

// (format, user ratio, industry ratio)
const CONTENT_COMPARISON: [(&str, f64, f64); 4] = [
    ("Post", 0.7, 0.6),
    ("Story", 0.4, 0.35),
    ("Reel", 1.0, 0.9),
    ("Bundle", 2.0, 1.8),
];

const RADAR_CONSISTENCY: f64 = 75.0;
const RADAR_GROWTH: f64 = 80.0;

/// Derives the report's chart and score data from a computed price.
#[must_use]
pub fn insights(profile: &CreatorProfile, result: &PricingResult) -> PricingInsights {
    let followers = profile.followers();
    let engagement = profile.engagement();
    let price = result.suggested_price;

    let content_comparison = CONTENT_COMPARISON
        .iter()
        .map(|(name, user, industry)| ContentComparisonRow {
            name: (*name).to_string(),
            user_value: price * user,
            industry_average: price * industry,
        })
        .collect();

    #[allow(clippy::cast_precision_loss)]
    let reach = (followers as f64 / 10_000.0).min(100.0);

    PricingInsights {
        engagement_score: (engagement / 2.0).clamp(0.0, 10.0),
        growth_potential: GrowthPotential::from_followers(followers),
        content_comparison,
        radar: RadarScores {
            reach,
            engagement: (engagement * 10.0).min(100.0),
            consistency: RADAR_CONSISTENCY,
            growth: RADAR_GROWTH,
            niche_value: niche_multiplier(profile.niche.as_deref()) * 50.0,
        },
    }
}

/// Display currency for a country key; everything unlisted renders in rupees.
#[must_use]
pub fn currency_symbol(country: Option<&str>) -> &'static str {
    match country.map(|c| c.trim().to_lowercase()).as_deref() {
        Some("usa" | "canada" | "australia") => "$",
        Some("uk") => "£",
        _ => "₹",
    }
}
