use super::*;
use crate::platform::Platform;

const EPS: f64 = 1e-9;

fn instagram_tech_profile() -> CreatorProfile {
    CreatorProfile {
        platform: Some(Platform::Instagram),
        follower_count: Some(75_000),
        engagement_rate_percent: Some(6.5),
        country: Some("usa".to_string()),
        niche: Some("tech".to_string()),
        content_type: Some("reel".to_string()),
        role: None,
    }
}

#[test]
fn worked_example_prices_at_585() {
    let result = compute_price(&instagram_tech_profile());

    assert!((result.breakdown.follower_scaling_factor - 1.875).abs() < EPS);
    assert!((result.breakdown.engagement_factor - 1.2).abs() < EPS);
    assert!((result.breakdown.content_multiplier - 1.0).abs() < EPS);
    assert!((result.breakdown.niche_multiplier - 1.3).abs() < EPS);
    assert!((result.breakdown.regional_multiplier - 2.0).abs() < EPS);
    assert!(
        (result.suggested_price - 585.0).abs() < EPS,
        "got {}",
        result.suggested_price
    );
}

#[test]
fn breakdown_base_rate_and_bonus() {
    let result = compute_price(&instagram_tech_profile());
    assert!((result.breakdown.base_rate - 187.5).abs() < EPS);
    assert!((result.breakdown.engagement_bonus - 37.5).abs() < 1e-6);
}

#[test]
fn low_engagement_bonus_is_negative() {
    let profile = CreatorProfile {
        engagement_rate_percent: Some(1.5),
        ..instagram_tech_profile()
    };
    let result = compute_price(&profile);
    assert!(result.breakdown.engagement_bonus < 0.0);
}

#[test]
fn price_is_monotonic_in_followers() {
    let mut previous = 0.0;
    for followers in [1_u64, 10, 1_000, 40_000, 75_000, 500_000, 10_000_000] {
        let profile = CreatorProfile {
            follower_count: Some(followers),
            ..instagram_tech_profile()
        };
        let price = compute_price(&profile).suggested_price;
        assert!(price >= previous, "{followers} followers priced below previous");
        previous = price;
    }
}

#[test]
fn empty_profile_degrades_to_zero_price() {
    let result = compute_price(&CreatorProfile::default());
    assert!(result.suggested_price.abs() < EPS);
    assert!((result.confidence_score - 70.0).abs() < EPS);
    assert!(!result.tips.is_empty());
}

#[test]
fn benchmark_bands_are_ordered_fractions() {
    let result = compute_price(&instagram_tech_profile());
    let similar = result.market_benchmarks.similar_creators;
    let niche = result.market_benchmarks.niche_average;

    assert!((similar.min - 585.0 * 0.8).abs() < 1e-6);
    assert!((similar.avg - 585.0).abs() < 1e-6);
    assert!((similar.max - 585.0 * 1.2).abs() < 1e-6);
    assert!((niche.min - 585.0 * 0.7).abs() < 1e-6);
    assert!((niche.avg - 585.0 * 0.9).abs() < 1e-6);
    assert!((niche.max - 585.0 * 1.1).abs() < 1e-6);
    assert!(similar.min <= similar.avg && similar.avg <= similar.max);
    assert!(niche.min <= niche.avg && niche.avg <= niche.max);
}

#[test]
fn benchmarks_serialize_with_display_names() {
    let result = compute_price(&instagram_tech_profile());
    let json = serde_json::to_value(&result).expect("serialize");
    assert!(json["market_benchmarks"]["similar creators"]["avg"].is_number());
    assert!(json["market_benchmarks"]["niche average"]["max"].is_number());
}

#[test]
fn confidence_complete_profile() {
    let result = compute_price(&instagram_tech_profile());
    assert!((result.confidence_score - 99.2).abs() < EPS);
}

#[test]
fn confidence_core_inputs_only() {
    let profile = CreatorProfile {
        platform: None,
        country: None,
        content_type: None,
        ..instagram_tech_profile()
    };
    assert!((compute_price(&profile).confidence_score - 85.0).abs() < EPS);
}

#[test]
fn confidence_capped_when_engagement_below_one() {
    let profile = CreatorProfile {
        engagement_rate_percent: Some(0.5),
        ..instagram_tech_profile()
    };
    assert!((compute_price(&profile).confidence_score - 75.0).abs() < EPS);
}

#[test]
fn confidence_stays_in_range() {
    for engagement in [0.0, 0.99, 1.0, 4.0, 50.0] {
        let profile = CreatorProfile {
            engagement_rate_percent: Some(engagement),
            ..instagram_tech_profile()
        };
        let score = compute_price(&profile).confidence_score;
        assert!((0.0..=100.0).contains(&score));
    }
}

#[test]
fn tips_flag_low_engagement_and_low_price() {
    let profile = CreatorProfile {
        follower_count: Some(1_000),
        engagement_rate_percent: Some(1.0),
        ..instagram_tech_profile()
    };
    let tips = compute_price(&profile).tips;
    assert_eq!(tips, vec![TIP_IMPROVE_ENGAGEMENT.to_string(), TIP_BUNDLE.to_string()]);
}

#[test]
fn premium_tips_depend_on_role() {
    let big = CreatorProfile {
        follower_count: Some(1_000_000),
        ..instagram_tech_profile()
    };

    let creator = compute_price(&CreatorProfile {
        role: Some(UserRole::Creator),
        ..big.clone()
    });
    assert_eq!(creator.tips, vec![TIP_CREATOR_PREMIUM.to_string()]);

    let brand = compute_price(&CreatorProfile {
        role: Some(UserRole::Brand),
        ..big.clone()
    });
    assert_eq!(brand.tips, vec![TIP_BRAND_PREMIUM.to_string()]);

    let agency = compute_price(&CreatorProfile {
        role: Some(UserRole::Agency),
        ..big
    });
    assert_eq!(agency.tips, vec![TIP_OPTIMAL.to_string()]);
}

#[test]
fn same_profile_prices_identically() {
    let a = compute_price(&instagram_tech_profile());
    let b = compute_price(&instagram_tech_profile());
    assert_eq!(a, b);
}

#[test]
fn insights_scores_and_rows() {
    let profile = instagram_tech_profile();
    let result = compute_price(&profile);
    let insights = insights(&profile, &result);

    assert!((insights.engagement_score - 3.25).abs() < EPS);
    assert_eq!(insights.growth_potential, GrowthPotential::Medium);
    assert_eq!(insights.content_comparison.len(), 4);
    assert_eq!(insights.content_comparison[3].name, "Bundle");
    assert!((insights.content_comparison[3].user_value - 1170.0).abs() < 1e-6);
    assert!((insights.radar.reach - 7.5).abs() < EPS);
    assert!((insights.radar.engagement - 65.0).abs() < EPS);
    assert!((insights.radar.niche_value - 65.0).abs() < EPS);
}

#[test]
fn insights_clamp_extremes() {
    let profile = CreatorProfile {
        follower_count: Some(5_000_000),
        engagement_rate_percent: Some(40.0),
        ..instagram_tech_profile()
    };
    let insights = insights(&profile, &compute_price(&profile));
    assert!((insights.engagement_score - 10.0).abs() < EPS);
    assert!((insights.radar.reach - 100.0).abs() < EPS);
    assert!((insights.radar.engagement - 100.0).abs() < EPS);
    assert_eq!(insights.growth_potential, GrowthPotential::VeryHigh);
}

#[test]
fn growth_potential_thresholds() {
    assert_eq!(GrowthPotential::from_followers(100_000), GrowthPotential::Medium);
    assert_eq!(GrowthPotential::from_followers(100_001), GrowthPotential::High);
    assert_eq!(GrowthPotential::from_followers(500_001), GrowthPotential::VeryHigh);
}

#[test]
fn currency_symbols_by_country() {
    assert_eq!(currency_symbol(Some("usa")), "$");
    assert_eq!(currency_symbol(Some("Canada")), "$");
    assert_eq!(currency_symbol(Some("uk")), "£");
    assert_eq!(currency_symbol(Some("india")), "₹");
    assert_eq!(currency_symbol(Some("germany")), "₹");
    assert_eq!(currency_symbol(None), "₹");
}

#[test]
fn report_carries_currency_and_country() {
    let report = build_report(&instagram_tech_profile());
    assert_eq!(report.currency_symbol, "$");
    assert_eq!(report.country.as_deref(), Some("usa"));
    assert!((report.result.suggested_price - 585.0).abs() < EPS);
}
