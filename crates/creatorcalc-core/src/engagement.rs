//! Engagement-rate calculation from raw per-post interaction counts.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::EngagementInputError;
use crate::numeric::parse_f64_strict_or_zero;
use crate::platform::Platform;

const LOW_TIER_MAX: f64 = 1.0;
const AVERAGE_TIER_MAX: f64 = 3.0;
const TREND_JITTER: f64 = 0.25;

// (label, user multiplier, industry multiplier); `None` pins the user value to the rate.
const WEEKLY_TREND: [(&str, Option<f64>, f64); 5] = [
    ("Week 1", Some(0.8), 0.7),
    ("Week 2", None, 0.9),
    ("Week 3", Some(1.1), 1.0),
    ("Week 4", Some(0.95), 0.85),
    ("Week 5", Some(1.05), 0.9),
];

/// Average per-post interaction counts plus the audience-size denominator.
///
/// Only the fields relevant to the chosen platform are read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngagementCounts {
    pub followers: f64,
    pub subscribers: f64,
    pub likes: f64,
    pub comments: f64,
    pub shares: f64,
    pub saves: f64,
    pub engagements: f64,
    pub reactions: f64,
    pub reach: f64,
    pub views: f64,
}

impl EngagementCounts {
    /// Builds counts from `(field, raw text)` pairs.
    ///
    /// The whole trimmed value must parse as a number, so `"1,000"` and
    /// `"12k"` count as zero. Unknown field names are ignored.
    pub fn from_fields<'a, I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut counts = Self::default();
        for (name, raw) in fields {
            let value = parse_f64_strict_or_zero(raw);
            match name {
                "followers" => counts.followers = value,
                "subscribers" => counts.subscribers = value,
                "likes" => counts.likes = value,
                "comments" => counts.comments = value,
                "shares" => counts.shares = value,
                "saves" => counts.saves = value,
                "engagements" => counts.engagements = value,
                "reactions" => counts.reactions = value,
                "reach" => counts.reach = value,
                "views" => counts.views = value,
                other => tracing::debug!(field = other, "ignoring unknown engagement field"),
            }
        }
        counts
    }

    /// The denominator of `platform`'s formula; 0 for platforms without one.
    #[must_use]
    pub fn audience(&self, platform: Platform) -> f64 {
        match platform {
            Platform::Youtube => self.subscribers,
            Platform::Instagram | Platform::X | Platform::Tiktok | Platform::Facebook => {
                self.followers
            }
            Platform::Linkedin | Platform::Other => 0.0,
        }
    }

    #[must_use]
    pub fn has_audience(&self, platform: Platform) -> bool {
        self.audience(platform) > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngagementTier {
    Low,
    Average,
    High,
}

impl EngagementTier {
    /// `≤ 1` is Low, `(1, 3]` is Average, `> 3` is High.
    #[must_use]
    pub fn from_rate(rate_percent: f64) -> Self {
        if rate_percent <= LOW_TIER_MAX {
            EngagementTier::Low
        } else if rate_percent <= AVERAGE_TIER_MAX {
            EngagementTier::Average
        } else {
            EngagementTier::High
        }
    }
}

impl std::fmt::Display for EngagementTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngagementTier::Low => write!(f, "Low"),
            EngagementTier::Average => write!(f, "Average"),
            EngagementTier::High => write!(f, "High"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngagementResult {
    pub rate_percent: f64,
    pub tier: EngagementTier,
}

/// One chart point of the weekly engagement trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub name: String,
    pub user_value: f64,
    pub industry_average: f64,
}

/// Form fields a caller should collect for each platform, in display order.
#[must_use]
pub fn required_fields(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::Youtube => &["subscribers", "views", "likes", "comments", "shares"],
        Platform::Instagram => &["followers", "likes", "comments", "saves", "shares"],
        Platform::X => &["followers", "engagements"],
        Platform::Tiktok => &["followers", "views", "likes", "comments", "shares"],
        Platform::Facebook => &["followers", "reach", "reactions", "comments", "shares"],
        Platform::Linkedin | Platform::Other => &[],
    }
}

/// Field holding the audience size for `platform`.
fn audience_field(platform: Platform) -> &'static str {
    match platform {
        Platform::Youtube => "subscribers",
        _ => "followers",
    }
}

/// Checks that a rate computed from these inputs is worth presenting.
///
/// Every field in [`required_fields`] must be supplied (per `is_supplied`)
/// and the audience must be non-zero. Callers show no tier on error.
pub fn validate_engagement_input<F>(
    platform: Platform,
    counts: &EngagementCounts,
    is_supplied: F,
) -> Result<(), EngagementInputError>
where
    F: Fn(&str) -> bool,
{
    let fields = required_fields(platform);
    if fields.is_empty() {
        return Err(EngagementInputError::UnsupportedPlatform(platform));
    }

    let missing: Vec<&'static str> = fields
        .iter()
        .copied()
        .filter(|field| !is_supplied(field))
        .collect();
    if !missing.is_empty() {
        return Err(EngagementInputError::MissingFields(missing));
    }

    if !counts.has_audience(platform) {
        return Err(EngagementInputError::EmptyAudience(audience_field(platform)));
    }
    Ok(())
}

/// Computes the engagement rate as interactions over audience, times 100.
///
/// A zero denominator, or a platform without a formula, yields a rate of 0.
#[must_use]
pub fn compute_engagement(platform: Platform, counts: &EngagementCounts) -> EngagementResult {
    let interactions = match platform {
        Platform::Youtube | Platform::Tiktok => counts.likes + counts.comments + counts.shares,
        Platform::Instagram => counts.likes + counts.comments + counts.saves + counts.shares,
        Platform::X => counts.engagements,
        Platform::Facebook => counts.reactions + counts.comments + counts.shares,
        Platform::Linkedin | Platform::Other => 0.0,
    };
    let audience = counts.audience(platform);

    let rate_percent = if audience > 0.0 {
        interactions / audience * 100.0
    } else {
        0.0
    };

    EngagementResult {
        rate_percent,
        tier: EngagementTier::from_rate(rate_percent),
    }
}

/// Five-week illustrative trend around `rate_percent`, for charting only.
///
/// Each value gets up to ±0.25 of jitter from `rng` and is floored at 0.
pub fn weekly_trend<R: Rng>(rate_percent: f64, rng: &mut R) -> Vec<TrendPoint> {
    let mut jittered =
        |base: f64| (base + rng.random_range(-TREND_JITTER..TREND_JITTER)).max(0.0);

    WEEKLY_TREND
        .iter()
        .map(|(name, user, industry)| TrendPoint {
            name: (*name).to_string(),
            user_value: user.map_or(rate_percent, |m| jittered(rate_percent * m)),
            industry_average: jittered(rate_percent * industry),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn youtube_worked_example_is_high() {
        let counts = EngagementCounts {
            subscribers: 10_000.0,
            likes: 400.0,
            comments: 50.0,
            shares: 50.0,
            ..EngagementCounts::default()
        };
        let result = compute_engagement(Platform::Youtube, &counts);
        assert!((result.rate_percent - 5.0).abs() < 1e-9);
        assert_eq!(result.tier, EngagementTier::High);
    }

    #[test]
    fn instagram_includes_saves() {
        let counts = EngagementCounts {
            followers: 1_000.0,
            likes: 10.0,
            comments: 5.0,
            saves: 3.0,
            shares: 2.0,
            ..EngagementCounts::default()
        };
        let result = compute_engagement(Platform::Instagram, &counts);
        assert!((result.rate_percent - 2.0).abs() < 1e-9);
        assert_eq!(result.tier, EngagementTier::Average);
    }

    #[test]
    fn x_uses_engagements_only() {
        let counts = EngagementCounts {
            followers: 2_000.0,
            engagements: 10.0,
            likes: 999.0,
            ..EngagementCounts::default()
        };
        let result = compute_engagement(Platform::X, &counts);
        assert!((result.rate_percent - 0.5).abs() < 1e-9);
        assert_eq!(result.tier, EngagementTier::Low);
    }

    #[test]
    fn tiktok_and_facebook_formulas() {
        let counts = EngagementCounts {
            followers: 100.0,
            likes: 2.0,
            comments: 1.0,
            shares: 1.0,
            reactions: 6.0,
            saves: 50.0,
            ..EngagementCounts::default()
        };
        let tiktok = compute_engagement(Platform::Tiktok, &counts);
        assert!((tiktok.rate_percent - 4.0).abs() < 1e-9);
        let facebook = compute_engagement(Platform::Facebook, &counts);
        assert!((facebook.rate_percent - 8.0).abs() < 1e-9);
    }

    #[test]
    fn zero_denominator_yields_zero_for_every_platform() {
        let counts = EngagementCounts {
            likes: 500.0,
            comments: 50.0,
            shares: 20.0,
            saves: 10.0,
            engagements: 40.0,
            reactions: 30.0,
            ..EngagementCounts::default()
        };
        for platform in Platform::ALL {
            let result = compute_engagement(platform, &counts);
            assert!(
                result.rate_percent.abs() < f64::EPSILON,
                "{platform} produced {}",
                result.rate_percent
            );
            assert!(result.rate_percent.is_finite());
        }
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(EngagementTier::from_rate(0.0), EngagementTier::Low);
        assert_eq!(EngagementTier::from_rate(1.0), EngagementTier::Low);
        assert_eq!(EngagementTier::from_rate(1.0001), EngagementTier::Average);
        assert_eq!(EngagementTier::from_rate(3.0), EngagementTier::Average);
        assert_eq!(EngagementTier::from_rate(3.01), EngagementTier::High);
    }

    #[test]
    fn from_fields_parses_or_zeroes() {
        let counts = EngagementCounts::from_fields([
            ("followers", "1,000"),
            ("likes", "25"),
            ("comments", ""),
            ("shares", "12k"),
            ("bogus", "7"),
        ]);
        assert!(counts.followers.abs() < f64::EPSILON);
        assert!(counts.shares.abs() < f64::EPSILON);
        assert!((counts.likes - 25.0).abs() < f64::EPSILON);
        assert!(counts.comments.abs() < f64::EPSILON);
    }

    #[test]
    fn formatted_audience_counts_as_empty() {
        let counts =
            EngagementCounts::from_fields([("followers", "1,000"), ("engagements", "25")]);
        let result = compute_engagement(Platform::X, &counts);
        assert!(result.rate_percent.abs() < f64::EPSILON);
        assert!(!counts.has_audience(Platform::X));
    }

    fn supplied(names: &'static [&'static str]) -> impl Fn(&str) -> bool {
        move |field| names.iter().any(|name| *name == field)
    }

    #[test]
    fn validation_rejects_missing_fields_and_empty_audience() {
        let counts = EngagementCounts {
            likes: 500.0,
            ..EngagementCounts::default()
        };
        assert_eq!(
            validate_engagement_input(Platform::Instagram, &counts, supplied(&["likes"])),
            Err(EngagementInputError::MissingFields(vec![
                "followers", "comments", "saves", "shares"
            ]))
        );

        let all = &["followers", "likes", "comments", "saves", "shares"];
        assert_eq!(
            validate_engagement_input(Platform::Instagram, &counts, supplied(all)),
            Err(EngagementInputError::EmptyAudience("followers"))
        );

        let counts = EngagementCounts {
            followers: 1000.0,
            ..counts
        };
        assert_eq!(
            validate_engagement_input(Platform::Instagram, &counts, supplied(all)),
            Ok(())
        );
        assert_eq!(
            validate_engagement_input(Platform::Linkedin, &counts, supplied(all)),
            Err(EngagementInputError::UnsupportedPlatform(Platform::Linkedin))
        );
    }

    #[test]
    fn required_fields_per_platform() {
        assert_eq!(required_fields(Platform::X), &["followers", "engagements"]);
        assert_eq!(required_fields(Platform::Youtube)[0], "subscribers");
        assert!(required_fields(Platform::Other).is_empty());
    }

    #[test]
    fn weekly_trend_is_five_weeks_and_non_negative() {
        let mut rng = StdRng::seed_from_u64(7);
        let trend = weekly_trend(0.1, &mut rng);
        assert_eq!(trend.len(), 5);
        assert_eq!(trend[0].name, "Week 1");
        assert!((trend[1].user_value - 0.1).abs() < f64::EPSILON);
        for point in &trend {
            assert!(point.user_value >= 0.0);
            assert!(point.industry_average >= 0.0);
        }
    }

    #[test]
    fn weekly_trend_jitter_is_bounded() {
        let mut rng = StdRng::seed_from_u64(42);
        let trend = weekly_trend(5.0, &mut rng);
        assert!((trend[0].user_value - 4.0).abs() <= TREND_JITTER);
        assert!((trend[2].industry_average - 5.0).abs() <= TREND_JITTER);
    }

    #[test]
    fn weekly_trend_is_reproducible_with_same_seed() {
        let a = weekly_trend(2.5, &mut StdRng::seed_from_u64(9));
        let b = weekly_trend(2.5, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }
}
