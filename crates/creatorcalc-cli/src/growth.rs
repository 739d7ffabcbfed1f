use clap::Args;
use creatorcalc_core::{compute_growth, GrowthInputForm, LenientField};

#[derive(Debug, Args)]
pub struct GrowthArgs {
    #[arg(long)]
    pub platform: Option<String>,
    /// Current follower count
    #[arg(long)]
    pub followers: Option<String>,
    /// Engagement rate in percent
    #[arg(long)]
    pub engagement: Option<String>,
    #[arg(long)]
    pub posts_per_week: Option<String>,
    /// Average views per post
    #[arg(long)]
    pub avg_views: Option<String>,
    /// Projection horizon: "3 months", "6 months", or "1 year"
    #[arg(long, default_value = "1 year")]
    pub period: String,
}

impl GrowthArgs {
    pub(crate) fn to_form(&self) -> GrowthInputForm {
        let text = |v: &Option<String>| v.as_deref().map(LenientField::from);
        GrowthInputForm {
            platform: text(&self.platform),
            current_followers: text(&self.followers),
            engagement_rate: text(&self.engagement),
            posts_per_week: text(&self.posts_per_week),
            avg_views_per_post: text(&self.avg_views),
            target_period: Some(LenientField::from(self.period.as_str())),
        }
    }
}

pub(crate) fn run_growth(args: &GrowthArgs, json: bool) -> anyhow::Result<()> {
    let input = args.to_form().to_input();
    let result = compute_growth(&input);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!(
        "Monthly growth:     {:.1}%",
        result.monthly_growth_rate_percent
    );
    println!(
        "Projected in {:>2} mo: {} followers (+{})",
        result.target_months, result.projected_followers, result.growth_increase
    );
    println!(
        "Earnings / post:    ${:.0} now, ${:.0} projected (+${:.0})",
        result.current_earnings_estimate,
        result.projected_earnings_estimate,
        result.earnings_increase
    );
    println!(
        "Consistency:        {:.0}% of the recommended {} posts/week",
        result.consistency_score_percent, result.recommended_weekly_posts
    );
    println!();
    println!("{:<10}{:>14}{:>14}", "MONTH", "LINEAR", "PROJECTED");
    for point in &result.trend {
        println!(
            "{:<10}{:>14.0}{:>14.0}",
            point.label, point.current, point.projected
        );
    }

    Ok(())
}
