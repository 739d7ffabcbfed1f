use clap::Args;
use creatorcalc_core::{
    compute_engagement, required_fields, validate_engagement_input, weekly_trend,
    EngagementCounts, EngagementResult, Platform, TrendPoint,
};
use serde::Serialize;

#[derive(Debug, Args)]
pub struct EngagementArgs {
    /// Platform whose engagement formula to apply
    #[arg(long)]
    pub platform: String,
    #[arg(long)]
    pub followers: Option<String>,
    #[arg(long)]
    pub subscribers: Option<String>,
    #[arg(long)]
    pub likes: Option<String>,
    #[arg(long)]
    pub comments: Option<String>,
    #[arg(long)]
    pub shares: Option<String>,
    #[arg(long)]
    pub saves: Option<String>,
    #[arg(long)]
    pub engagements: Option<String>,
    #[arg(long)]
    pub reactions: Option<String>,
    #[arg(long)]
    pub reach: Option<String>,
    #[arg(long)]
    pub views: Option<String>,
}

impl EngagementArgs {
    fn fields(&self) -> [(&'static str, Option<&str>); 10] {
        [
            ("followers", self.followers.as_deref()),
            ("subscribers", self.subscribers.as_deref()),
            ("likes", self.likes.as_deref()),
            ("comments", self.comments.as_deref()),
            ("shares", self.shares.as_deref()),
            ("saves", self.saves.as_deref()),
            ("engagements", self.engagements.as_deref()),
            ("reactions", self.reactions.as_deref()),
            ("reach", self.reach.as_deref()),
            ("views", self.views.as_deref()),
        ]
    }

    pub(crate) fn counts(&self) -> EngagementCounts {
        EngagementCounts::from_fields(
            self.fields()
                .into_iter()
                .filter_map(|(name, value)| value.map(|v| (name, v))),
        )
    }

    /// Whether `field` was passed with a non-blank value.
    pub(crate) fn supplied(&self, field: &str) -> bool {
        self.fields()
            .into_iter()
            .any(|(name, value)| name == field && value.is_some_and(|v| !v.trim().is_empty()))
    }
}

#[derive(Debug, Serialize)]
struct EngagementOutput {
    platform: Platform,
    result: EngagementResult,
    trend: Vec<TrendPoint>,
}

pub(crate) fn run_engagement(args: &EngagementArgs, json: bool) -> anyhow::Result<()> {
    let platform = Platform::parse_lenient(&args.platform);
    let counts = args.counts();
    validate_engagement_input(platform, &counts, |field| args.supplied(field))?;

    let result = compute_engagement(platform, &counts);
    let trend = weekly_trend(result.rate_percent, &mut rand::rng());

    if json {
        let output = EngagementOutput {
            platform,
            result,
            trend,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Platform:        {platform}");
    println!("Inputs:          {}", required_fields(platform).join(", "));
    println!("Engagement rate: {:.2}%", result.rate_percent);
    println!("Tier:            {}", result.tier);
    println!();
    println!("{:<10}{:>10}{:>12}", "WEEK", "YOU", "INDUSTRY");
    for point in &trend {
        println!(
            "{:<10}{:>9.2}%{:>11.2}%",
            point.name, point.user_value, point.industry_average
        );
    }

    Ok(())
}
