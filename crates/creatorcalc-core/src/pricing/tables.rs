//! Fixed lookup tables and step functions behind the pricing formula.
//!
//! Every multiplier here is a product-chosen constant. Unknown keys resolve
//! to the documented default instead of failing.

use serde::Serialize;

use crate::platform::Platform;

/// Price in USD for a baseline creator (40k followers, reel, neutral niche/region).
pub const BASELINE_PRICE: f64 = 100.0;

/// Audience size at which the follower scaling factor equals 1.
pub const BASELINE_FOLLOWERS: f64 = 40_000.0;

pub const REEL_MULTIPLIER: f64 = 1.0;
pub const POST_MULTIPLIER: f64 = 0.7;
pub const STORY_MULTIPLIER: f64 = 0.4;
pub const BUNDLE_MULTIPLIER: f64 = 2.0;

const NICHE_MULTIPLIERS: [(&str, f64); 19] = [
    ("fashion", 1.2),
    ("beauty", 1.1),
    ("fitness", 1.1),
    ("tech", 1.3),
    ("travel", 1.1),
    ("food", 1.0),
    ("lifestyle", 0.9),
    ("gaming", 1.0),
    ("finance", 1.5),
    ("health", 1.05),
    ("motivation", 0.95),
    ("education", 1.2),
    ("comedy", 0.8),
    ("parenting", 1.0),
    ("business", 1.3),
    ("photography", 0.9),
    ("cars", 1.1),
    ("books", 0.85),
    ("art", 0.9),
];

const TIER_1_COUNTRIES: [&str; 20] = [
    "usa",
    "canada",
    "uk",
    "germany",
    "france",
    "italy",
    "spain",
    "netherlands",
    "sweden",
    "switzerland",
    "austria",
    "norway",
    "denmark",
    "finland",
    "ireland",
    "australia",
    "japan",
    "southkorea",
    "singapore",
    "uae",
];

const TIER_1_5_COUNTRIES: [&str; 20] = [
    "china",
    "brazil",
    "mexico",
    "argentina",
    "turkey",
    "israel",
    "chile",
    "malaysia",
    "southafrica",
    "poland",
    "czech",
    "hungary",
    "romania",
    "bulgaria",
    "croatia",
    "slovakia",
    "slovenia",
    "estonia",
    "latvia",
    "lithuania",
];

const TIER_2_COUNTRIES: [&str; 13] = [
    "india",
    "pakistan",
    "indonesia",
    "vietnam",
    "philippines",
    "thailand",
    "egypt",
    "morocco",
    "nigeria",
    "kenya",
    "bangladesh",
    "srilanka",
    "cambodia",
];

const INSTAGRAM_CONTENT: [&str; 4] = ["post", "story", "reel", "bundle"];
const YOUTUBE_CONTENT: [&str; 4] = ["short", "long video", "live", "community post"];
const LINKEDIN_CONTENT: [&str; 3] = ["post", "article", "sponsored post"];
const X_CONTENT: [&str; 3] = ["tweet", "thread", "space"];
const FACEBOOK_CONTENT: [&str; 3] = ["post", "story", "live"];
const OTHER_CONTENT: [&str; 3] = ["generic post", "story", "video"];

/// Economic tier a country is classified into for regional pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionalTier {
    Tier1,
    Tier1Point5,
    Tier2,
    Tier3,
}

impl RegionalTier {
    /// Classifies a lowercase country key. Unlisted or absent countries are Tier-3.
    #[must_use]
    pub fn classify(country: Option<&str>) -> RegionalTier {
        let Some(key) = country.map(|c| c.trim().to_lowercase()) else {
            return RegionalTier::Tier3;
        };
        let key = key.as_str();

        if TIER_1_COUNTRIES.contains(&key) {
            RegionalTier::Tier1
        } else if TIER_1_5_COUNTRIES.contains(&key) {
            RegionalTier::Tier1Point5
        } else if TIER_2_COUNTRIES.contains(&key) {
            RegionalTier::Tier2
        } else {
            RegionalTier::Tier3
        }
    }

    #[must_use]
    pub fn multiplier(self) -> f64 {
        match self {
            RegionalTier::Tier1 => 2.0,
            RegionalTier::Tier1Point5 => 1.5,
            RegionalTier::Tier2 => 1.2,
            RegionalTier::Tier3 => 1.0,
        }
    }
}

/// Three-step engagement adjustment: below 2% discounts, above 5% boosts.
#[must_use]
pub fn engagement_factor(engagement_rate_percent: f64) -> f64 {
    if engagement_rate_percent < 2.0 {
        0.7
    } else if engagement_rate_percent > 5.0 {
        1.2
    } else {
        1.0
    }
}

/// Resolves a content-type label to a multiplier by substring match.
///
/// Checked in order: reel/short, post/tweet/article, story, bundle. Anything
/// else (including an absent label) prices as a reel.
#[must_use]
pub fn content_multiplier(content_type: Option<&str>) -> f64 {
    let Some(label) = content_type.map(str::to_lowercase) else {
        return REEL_MULTIPLIER;
    };

    if label.contains("reel") || label.contains("short") {
        REEL_MULTIPLIER
    } else if label.contains("post") || label.contains("tweet") || label.contains("article") {
        POST_MULTIPLIER
    } else if label.contains("story") {
        STORY_MULTIPLIER
    } else if label.contains("bundle") {
        BUNDLE_MULTIPLIER
    } else {
        REEL_MULTIPLIER
    }
}

/// Niche demand multiplier; unrecognized niches are neutral (1.0).
#[must_use]
pub fn niche_multiplier(niche: Option<&str>) -> f64 {
    let Some(key) = niche.map(|n| n.trim().to_lowercase()) else {
        return 1.0;
    };
    NICHE_MULTIPLIERS
        .iter()
        .find(|(name, _)| *name == key)
        .map_or(1.0, |(_, m)| *m)
}

/// Niche keys with a non-default multiplier entry, in table order.
#[must_use]
pub fn niches() -> Vec<&'static str> {
    NICHE_MULTIPLIERS.iter().map(|(name, _)| *name).collect()
}

/// Content types offered for a platform.
#[must_use]
pub fn content_types(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::Instagram => &INSTAGRAM_CONTENT,
        Platform::Youtube => &YOUTUBE_CONTENT,
        Platform::Linkedin => &LINKEDIN_CONTENT,
        Platform::X => &X_CONTENT,
        Platform::Facebook => &FACEBOOK_CONTENT,
        Platform::Tiktok | Platform::Other => &OTHER_CONTENT,
    }
}
