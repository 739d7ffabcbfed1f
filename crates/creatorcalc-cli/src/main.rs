mod catalog;
mod engagement;
mod growth;
mod price;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

pub(crate) use engagement::EngagementArgs;
pub(crate) use growth::GrowthArgs;
pub(crate) use price::PriceArgs;

#[derive(Debug, Parser)]
#[command(name = "creatorcalc")]
#[command(about = "Creator sponsorship pricing, engagement, and growth calculators")]
struct Cli {
    /// Print machine-readable JSON instead of a human summary
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Suggest a sponsored-post price for one creator profile
    Price(PriceArgs),
    /// Price every profile in a YAML profiles file
    PriceBatch {
        /// Profiles file (defaults to `CREATORCALC_PROFILES_PATH`)
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Compute an engagement rate from per-post interaction counts
    Engagement(EngagementArgs),
    /// Project follower and earnings growth
    Growth(GrowthArgs),
    /// List platforms, content types, and niches
    Catalog,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Price(args)) => price::run_price(&args, cli.json)?,
        Some(Commands::PriceBatch { file }) => {
            let path = match file {
                Some(path) => path,
                None => creatorcalc_core::load_app_config_from_env()?.profiles_path,
            };
            price::run_price_batch(&path, cli.json)?;
        }
        Some(Commands::Engagement(args)) => engagement::run_engagement(&args, cli.json)?,
        Some(Commands::Growth(args)) => growth::run_growth(&args, cli.json)?,
        Some(Commands::Catalog) => catalog::run_catalog(cli.json)?,
        None => println!("creatorcalc: run with --help to list commands"),
    }

    Ok(())
}
