//! `price` and `price-batch` command handlers.

use std::path::Path;

use clap::Args;
use creatorcalc_core::pricing::{BenchmarkBand, PricingReport};
use creatorcalc_core::{build_report, load_profiles, CreatorProfileForm, LenientField, Platform};
use serde::Serialize;

/// Raw pricing inputs. Numeric flags are text so that bad values price as zero.
#[derive(Debug, Args)]
pub struct PriceArgs {
    /// Platform (instagram, youtube, linkedin, x, facebook, tiktok, other)
    #[arg(long)]
    pub platform: Option<String>,
    /// Follower count
    #[arg(long)]
    pub followers: Option<String>,
    /// Engagement rate in percent
    #[arg(long)]
    pub engagement: Option<String>,
    /// Lowercase country key (e.g. usa, uk, india)
    #[arg(long)]
    pub country: Option<String>,
    #[arg(long)]
    pub niche: Option<String>,
    /// Content type label (e.g. reel, story, long video)
    #[arg(long)]
    pub content_type: Option<String>,
    /// Requesting role: creator, brand, or agency
    #[arg(long)]
    pub role: Option<String>,
}

impl PriceArgs {
    pub(crate) fn to_form(&self) -> CreatorProfileForm {
        let text = |v: &Option<String>| v.as_deref().map(LenientField::from);
        CreatorProfileForm {
            user_type: text(&self.role),
            platform: text(&self.platform),
            followers: text(&self.followers),
            engagement: text(&self.engagement),
            country: text(&self.country),
            city: None,
            content_type: text(&self.content_type),
            niche: text(&self.niche),
        }
    }
}

#[derive(Debug, Serialize)]
struct BatchRow<'a> {
    name: &'a str,
    platform: Option<Platform>,
    followers: u64,
    missing_fields: Vec<&'static str>,
    report: PricingReport,
}

/// Price a single profile from command-line flags.
///
/// # Errors
///
/// Returns an error if a required input is missing or JSON serialization
/// fails.
pub(crate) fn run_price(args: &PriceArgs, json: bool) -> anyhow::Result<()> {
    let profile = args.to_form().to_profile();
    let missing = profile.missing_required_fields();
    if !missing.is_empty() {
        anyhow::bail!("missing required fields: {}", missing.join(", "));
    }

    let report = build_report(&profile);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&report);
    Ok(())
}

/// Price every saved profile in `path`.
///
/// # Errors
///
/// Returns an error if the profiles file cannot be loaded or JSON
/// serialization fails.
pub(crate) fn run_price_batch(path: &Path, json: bool) -> anyhow::Result<()> {
    let profiles_file = load_profiles(path)?;
    tracing::debug!(
        path = %path.display(),
        count = profiles_file.profiles.len(),
        "pricing saved profiles"
    );

    if profiles_file.profiles.is_empty() {
        println!("no profiles found in {}", path.display());
        return Ok(());
    }

    let rows: Vec<BatchRow<'_>> = profiles_file
        .profiles
        .iter()
        .map(|named| {
            let profile = named.to_profile();
            BatchRow {
                name: &named.name,
                platform: profile.platform,
                followers: profile.followers(),
                missing_fields: profile.missing_required_fields(),
                report: build_report(&profile),
            }
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!(
        "{:<28}{:<12}{:<12}{:>14}{:>12}",
        "PROFILE", "PLATFORM", "FOLLOWERS", "PRICE", "CONFIDENCE"
    );
    for row in &rows {
        let platform = row.platform.map_or("-", Platform::as_str);
        let price = format!(
            "{}{:.2}",
            row.report.currency_symbol, row.report.result.suggested_price
        );
        println!(
            "{:<28}{:<12}{:<12}{:>14}{:>11.1}%",
            truncate(row.name, 26),
            platform,
            row.followers,
            price,
            row.report.result.confidence_score
        );
    }

    Ok(())
}

fn print_report(report: &PricingReport) {
    let sym = &report.currency_symbol;
    let result = &report.result;
    let b = &result.breakdown;

    println!("Suggested price: {sym}{:.2}", result.suggested_price);
    println!("Confidence:      {:.1}%", result.confidence_score);
    println!();
    println!("Breakdown");
    println!("  base rate            {sym}{:.2}", b.base_rate);
    println!("  follower scaling     x{:.3}", b.follower_scaling_factor);
    println!("  engagement factor    x{:.2}", b.engagement_factor);
    println!("  content multiplier   x{:.2}", b.content_multiplier);
    println!("  niche multiplier     x{:.2}", b.niche_multiplier);
    println!("  regional multiplier  x{:.2}", b.regional_multiplier);
    println!();
    println!("Market benchmarks");
    print_band("similar creators", sym, &result.market_benchmarks.similar_creators);
    print_band("niche average", sym, &result.market_benchmarks.niche_average);
    println!();
    println!(
        "Engagement score {:.1}/10, growth potential {}",
        report.insights.engagement_score, report.insights.growth_potential
    );
    println!();
    println!("Tips");
    for tip in &result.tips {
        println!("  - {tip}");
    }
}

fn print_band(label: &str, sym: &str, band: &BenchmarkBand) {
    println!(
        "  {label:<18} {sym}{:.2} / {sym}{:.2} / {sym}{:.2}",
        band.min, band.avg, band.max
    );
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        format!("{}...", s.chars().take(max - 3).collect::<String>())
    } else {
        s.to_string()
    }
}
