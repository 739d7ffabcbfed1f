//! Follower and earnings projection over a 3, 6, or 12 month horizon.

use serde::{Deserialize, Serialize};

use crate::numeric::{field_f64, field_rounded_u64, supplied, LenientField};
use crate::platform::Platform;

/// Monthly growth rate ceiling, in percent.
pub const MAX_MONTHLY_GROWTH_PERCENT: f64 = 15.0;

const ENGAGEMENT_WEIGHT: f64 = 0.5;
const POSTING_WEIGHT: f64 = 0.8;
const VIEW_RATIO_WEIGHT: f64 = 10.0;
const EARNINGS_ENGAGEMENT_FACTOR: f64 = 1.2;
const LINEAR_MONTHLY_GROWTH: f64 = 0.02;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetPeriod {
    ThreeMonths,
    SixMonths,
    OneYear,
}

impl TargetPeriod {
    /// Accepts `"3 months"`, `"6 months"`, `"1 year"`, or a bare month count.
    /// Anything unrecognized projects a full year.
    #[must_use]
    pub fn parse_lenient(raw: &str) -> TargetPeriod {
        match raw.trim().to_lowercase().as_str() {
            "3" | "3 months" | "three_months" => TargetPeriod::ThreeMonths,
            "6" | "6 months" | "six_months" => TargetPeriod::SixMonths,
            _ => TargetPeriod::OneYear,
        }
    }

    #[must_use]
    pub fn months(self) -> u32 {
        match self {
            TargetPeriod::ThreeMonths => 3,
            TargetPeriod::SixMonths => 6,
            TargetPeriod::OneYear => 12,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthInput {
    pub platform: Platform,
    pub current_followers: u64,
    pub engagement_rate_percent: f64,
    pub posts_per_week: f64,
    pub avg_views_per_post: f64,
    pub target: TargetPeriod,
}

/// Growth input exactly as a form or request body supplies it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthInputForm {
    pub platform: Option<LenientField>,
    #[serde(alias = "currentFollowers")]
    pub current_followers: Option<LenientField>,
    #[serde(alias = "engagementRate")]
    pub engagement_rate: Option<LenientField>,
    #[serde(alias = "postsPerWeek")]
    pub posts_per_week: Option<LenientField>,
    #[serde(alias = "avgViewsPerPost")]
    pub avg_views_per_post: Option<LenientField>,
    #[serde(alias = "targetPeriod")]
    pub target_period: Option<LenientField>,
}

impl GrowthInputForm {
    #[must_use]
    pub fn to_input(&self) -> GrowthInput {
        GrowthInput {
            platform: supplied(self.platform.as_ref())
                .map_or(Platform::Other, |p| Platform::parse_lenient(&p)),
            current_followers: field_rounded_u64(self.current_followers.as_ref()),
            engagement_rate_percent: field_f64(self.engagement_rate.as_ref()),
            posts_per_week: field_f64(self.posts_per_week.as_ref()),
            avg_views_per_post: field_f64(self.avg_views_per_post.as_ref()),
            target: supplied(self.target_period.as_ref())
                .map_or(TargetPeriod::OneYear, |t| TargetPeriod::parse_lenient(&t)),
        }
    }
}

/// One month of the chart series: linear baseline against compound projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthTrendPoint {
    pub label: String,
    pub current: f64,
    pub projected: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthResult {
    pub monthly_growth_rate_percent: f64,
    pub projected_followers: u64,
    pub current_earnings_estimate: f64,
    pub projected_earnings_estimate: f64,
    pub consistency_score_percent: f64,
    pub recommended_weekly_posts: u32,
    pub growth_increase: i64,
    pub earnings_increase: f64,
    pub target_months: u32,
    pub trend: Vec<GrowthTrendPoint>,
}

/// Monthly growth rate as a fraction, capped at 15%.
///
/// The views-per-follower term contributes nothing when followers is 0.
#[must_use]
pub fn base_growth_rate(input: &GrowthInput) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let followers = input.current_followers as f64;
    let view_ratio = if followers > 0.0 {
        input.avg_views_per_post / followers
    } else {
        0.0
    };

    let heuristic = input.engagement_rate_percent * ENGAGEMENT_WEIGHT
        + input.posts_per_week * POSTING_WEIGHT
        + view_ratio * VIEW_RATIO_WEIGHT;

    let capped = if heuristic.is_finite() {
        heuristic.clamp(0.0, MAX_MONTHLY_GROWTH_PERCENT)
    } else {
        0.0
    };
    capped / 100.0
}

/// Posts per week the platform rewards; the consistency score's denominator.
#[must_use]
pub fn recommended_weekly_posts(platform: Platform) -> u32 {
    match platform {
        Platform::Instagram => 4,
        Platform::Tiktok => 5,
        _ => 2,
    }
}

/// Estimated earnings per post for an audience size, rounded to whole units.
#[must_use]
pub fn estimate_earnings(platform: Platform, followers: f64, engagement_rate_percent: f64) -> f64 {
    let (small, mid, large) = match platform {
        Platform::Instagram => (0.01, 0.008, 0.005),
        Platform::Tiktok => (0.008, 0.006, 0.004),
        Platform::Youtube => (0.02, 0.015, 0.01),
        _ => (0.0, 0.0, 0.0),
    };

    let per_follower = if followers <= 10_000.0 {
        small
    } else if followers <= 100_000.0 {
        mid
    } else {
        large
    };

    (followers * per_follower * (engagement_rate_percent / 100.0) * EARNINGS_ENGAGEMENT_FACTOR)
        .round()
}

/// Projects followers and earnings forward by the input's target period.
#[must_use]
pub fn compute_growth(input: &GrowthInput) -> GrowthResult {
    let rate = base_growth_rate(input);
    let months = input.target.months();
    #[allow(clippy::cast_precision_loss)]
    let followers = input.current_followers as f64;

    let projected = compound(followers, rate, months);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let projected_followers = projected as u64;

    let current_earnings =
        estimate_earnings(input.platform, followers, input.engagement_rate_percent);
    #[allow(clippy::cast_precision_loss)]
    let projected_earnings = estimate_earnings(
        input.platform,
        projected_followers as f64,
        input.engagement_rate_percent,
    );

    let recommended = recommended_weekly_posts(input.platform);
    let consistency = (input.posts_per_week / f64::from(recommended) * 100.0).min(100.0);

    let trend = (0..=months)
        .map(|i| GrowthTrendPoint {
            label: if i == 0 {
                "Now".to_string()
            } else {
                format!("Month {i}")
            },
            current: followers + followers * LINEAR_MONTHLY_GROWTH * f64::from(i),
            projected: compound(followers, rate, i),
        })
        .collect();

    #[allow(clippy::cast_possible_wrap)]
    let growth_increase = projected_followers as i64 - input.current_followers as i64;

    tracing::debug!(
        platform = %input.platform,
        rate,
        months,
        projected_followers,
        "computed growth projection"
    );

    GrowthResult {
        monthly_growth_rate_percent: rate * 100.0,
        projected_followers,
        current_earnings_estimate: current_earnings,
        projected_earnings_estimate: projected_earnings,
        consistency_score_percent: consistency,
        recommended_weekly_posts: recommended,
        growth_increase,
        earnings_increase: projected_earnings - current_earnings,
        target_months: months,
        trend,
    }
}

/// `round(followers × (1 + rate)^months)`.
fn compound(followers: f64, rate: f64, months: u32) -> f64 {
    #[allow(clippy::cast_possible_wrap)]
    let exponent = months as i32;
    (followers * (1.0 + rate).powi(exponent)).round()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn worked_example() -> GrowthInput {
        GrowthInput {
            platform: Platform::Instagram,
            current_followers: 50_000,
            engagement_rate_percent: 3.0,
            posts_per_week: 4.0,
            avg_views_per_post: 25_000.0,
            target: TargetPeriod::SixMonths,
        }
    }

    #[test]
    fn worked_example_rate_and_projection() {
        let input = worked_example();
        let rate = base_growth_rate(&input);
        assert!((rate - 0.097).abs() < 1e-12);

        let result = compute_growth(&input);
        let expected = (50_000.0_f64 * 1.097_f64.powi(6)).round();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let expected = expected as u64;
        assert_eq!(result.projected_followers, expected);
        assert_eq!(result.projected_followers, 87_138);
        assert!((result.monthly_growth_rate_percent - 9.7).abs() < 1e-9);
        assert_eq!(result.target_months, 6);
    }

    #[test]
    fn growth_rate_is_capped_at_fifteen_percent() {
        let input = GrowthInput {
            engagement_rate_percent: 1_000.0,
            posts_per_week: 500.0,
            avg_views_per_post: 1e12,
            current_followers: 1,
            ..worked_example()
        };
        assert!(base_growth_rate(&input) <= 0.15);
        assert!((compute_growth(&input).monthly_growth_rate_percent - 15.0).abs() < 1e-9);
    }

    #[test]
    fn zero_followers_does_not_produce_nan() {
        let input = GrowthInput {
            current_followers: 0,
            ..worked_example()
        };
        let rate = base_growth_rate(&input);
        assert!(rate.is_finite());
        assert!((rate - 0.047).abs() < 1e-12);

        let result = compute_growth(&input);
        assert_eq!(result.projected_followers, 0);
        assert!(result.current_earnings_estimate.abs() < f64::EPSILON);
        assert!(result.trend.iter().all(|p| p.projected.is_finite()));
    }

    #[test]
    fn earnings_use_platform_tiers() {
        // 50k instagram followers at 3%: 50_000 × 0.008 × 0.03 × 1.2 = 14.4 → 14
        assert!((estimate_earnings(Platform::Instagram, 50_000.0, 3.0) - 14.0).abs() < 1e-9);
        // 5k youtube subscribers at 10%: 5_000 × 0.02 × 0.1 × 1.2 = 12
        assert!((estimate_earnings(Platform::Youtube, 5_000.0, 10.0) - 12.0).abs() < 1e-9);
        // 200k tiktok at 5%: 200_000 × 0.004 × 0.05 × 1.2 = 48
        assert!((estimate_earnings(Platform::Tiktok, 200_000.0, 5.0) - 48.0).abs() < 1e-9);
        assert!(estimate_earnings(Platform::Linkedin, 200_000.0, 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn consistency_score_is_capped() {
        let input = GrowthInput {
            posts_per_week: 10.0,
            ..worked_example()
        };
        assert!((compute_growth(&input).consistency_score_percent - 100.0).abs() < 1e-9);

        let input = GrowthInput {
            platform: Platform::Tiktok,
            posts_per_week: 2.0,
            ..worked_example()
        };
        assert!((compute_growth(&input).consistency_score_percent - 40.0).abs() < 1e-9);
    }

    #[test]
    fn recommended_posts_per_platform() {
        assert_eq!(recommended_weekly_posts(Platform::Instagram), 4);
        assert_eq!(recommended_weekly_posts(Platform::Tiktok), 5);
        assert_eq!(recommended_weekly_posts(Platform::Youtube), 2);
        assert_eq!(recommended_weekly_posts(Platform::Other), 2);
    }

    #[test]
    fn trend_spans_now_through_target_month() {
        let result = compute_growth(&worked_example());
        assert_eq!(result.trend.len(), 7);
        assert_eq!(result.trend[0].label, "Now");
        assert_eq!(result.trend[6].label, "Month 6");
        assert!((result.trend[0].current - 50_000.0).abs() < 1e-9);
        assert!((result.trend[0].projected - 50_000.0).abs() < 1e-9);
        assert!((result.trend[3].current - 53_000.0).abs() < 1e-9);
        #[allow(clippy::cast_precision_loss)]
        let last = result.projected_followers as f64;
        assert!((result.trend[6].projected - last).abs() < 1e-9);
    }

    #[test]
    fn increases_are_differences() {
        let result = compute_growth(&worked_example());
        assert_eq!(result.growth_increase, 87_138 - 50_000);
        assert!(
            (result.earnings_increase
                - (result.projected_earnings_estimate - result.current_earnings_estimate))
                .abs()
                < f64::EPSILON
        );
    }

    #[test]
    fn target_period_parsing() {
        assert_eq!(TargetPeriod::parse_lenient("3 months"), TargetPeriod::ThreeMonths);
        assert_eq!(TargetPeriod::parse_lenient("6"), TargetPeriod::SixMonths);
        assert_eq!(TargetPeriod::parse_lenient("1 year"), TargetPeriod::OneYear);
        assert_eq!(TargetPeriod::parse_lenient("forever"), TargetPeriod::OneYear);
    }

    #[test]
    fn form_defaults_blank_fields() {
        let form: GrowthInputForm = serde_json::from_str(
            r#"{"platform":"TikTok","currentFollowers":"12000","engagementRate":"","postsPerWeek":"x","targetPeriod":"3 months"}"#,
        )
        .expect("parse");
        let input = form.to_input();
        assert_eq!(input.platform, Platform::Tiktok);
        assert_eq!(input.current_followers, 12_000);
        assert!(input.engagement_rate_percent.abs() < f64::EPSILON);
        assert!(input.posts_per_week.abs() < f64::EPSILON);
        assert_eq!(input.target, TargetPeriod::ThreeMonths);
    }

    #[test]
    fn form_followers_accept_exponent_and_fraction() {
        let form: GrowthInputForm =
            serde_json::from_str(r#"{"platform":"x","currentFollowers":"1e5"}"#).expect("parse");
        assert_eq!(form.to_input().current_followers, 100_000);

        let form: GrowthInputForm =
            serde_json::from_str(r#"{"platform":"x","currentFollowers":49999.6}"#)
                .expect("parse");
        assert_eq!(form.to_input().current_followers, 50_000);
    }
}
