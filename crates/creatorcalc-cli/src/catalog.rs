use creatorcalc_core::pricing::{content_types, niches};
use creatorcalc_core::Platform;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub(crate) struct PlatformEntry {
    pub platform: Platform,
    pub content_types: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub(crate) struct Catalog {
    pub platforms: Vec<PlatformEntry>,
    pub niches: Vec<&'static str>,
}

pub(crate) fn catalog() -> Catalog {
    Catalog {
        platforms: Platform::ALL
            .iter()
            .map(|&platform| PlatformEntry {
                platform,
                content_types: content_types(platform),
            })
            .collect(),
        niches: niches(),
    }
}

pub(crate) fn run_catalog(json: bool) -> anyhow::Result<()> {
    let catalog = catalog();
    if json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    println!("{:<12}CONTENT TYPES", "PLATFORM");
    for entry in &catalog.platforms {
        println!("{:<12}{}", entry.platform, entry.content_types.join(", "));
    }
    println!();
    println!("NICHES");
    println!("{}", catalog.niches.join(", "));
    Ok(())
}
