use serde::{Deserialize, Serialize};

use crate::numeric::{parse_f64_or_zero, parse_u64_or_zero, supplied, LenientField};
use crate::platform::Platform;
use crate::user::UserRole;

/// Pricing input exactly as a form or request body supplies it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatorProfileForm {
    #[serde(default, alias = "userType", alias = "role")]
    pub user_type: Option<LenientField>,
    #[serde(default)]
    pub platform: Option<LenientField>,
    #[serde(default)]
    pub followers: Option<LenientField>,
    #[serde(default)]
    pub engagement: Option<LenientField>,
    #[serde(default)]
    pub country: Option<LenientField>,
    /// Collected by the form but not used in pricing.
    #[serde(default)]
    pub city: Option<LenientField>,
    #[serde(default, alias = "contentType")]
    pub content_type: Option<LenientField>,
    #[serde(default)]
    pub niche: Option<LenientField>,
}

impl CreatorProfileForm {
    /// Converts raw form fields into a typed profile.
    ///
    /// A blank field stays `None`. A supplied numeric field that does not
    /// parse becomes `Some(0)`, so it still counts as supplied.
    #[must_use]
    pub fn to_profile(&self) -> CreatorProfile {
        CreatorProfile {
            platform: supplied(self.platform.as_ref()).map(|p| Platform::parse_lenient(&p)),
            follower_count: supplied(self.followers.as_ref()).map(|f| parse_u64_or_zero(&f)),
            engagement_rate_percent: supplied(self.engagement.as_ref())
                .map(|e| parse_f64_or_zero(&e)),
            country: supplied(self.country.as_ref()).map(|c| c.trim().to_lowercase()),
            niche: supplied(self.niche.as_ref()).map(|n| n.trim().to_lowercase()),
            content_type: supplied(self.content_type.as_ref()).map(|c| c.trim().to_string()),
            role: supplied(self.user_type.as_ref()).and_then(|r| UserRole::parse(&r)),
        }
    }
}

/// Typed creator profile consumed by [`super::compute_price`].
///
/// `Some` means the field was supplied; it feeds the confidence heuristic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatorProfile {
    pub platform: Option<Platform>,
    pub follower_count: Option<u64>,
    pub engagement_rate_percent: Option<f64>,
    pub country: Option<String>,
    pub niche: Option<String>,
    pub content_type: Option<String>,
    pub role: Option<UserRole>,
}

impl CreatorProfile {
    #[must_use]
    pub fn followers(&self) -> u64 {
        self.follower_count.unwrap_or(0)
    }

    #[must_use]
    pub fn engagement(&self) -> f64 {
        self.engagement_rate_percent.unwrap_or(0.0)
    }

    /// All six pricing inputs were supplied.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.has_core_inputs()
            && self.country.is_some()
            && self.platform.is_some()
            && self.content_type.is_some()
    }

    /// Followers, engagement, and niche were supplied.
    #[must_use]
    pub fn has_core_inputs(&self) -> bool {
        self.follower_count.is_some()
            && self.engagement_rate_percent.is_some()
            && self.niche.is_some()
    }

    /// Names the fields a caller must collect before requesting a price.
    #[must_use]
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.platform.is_none() {
            missing.push("platform");
        }
        if self.follower_count.is_none() {
            missing.push("followers");
        }
        if self.content_type.is_none() {
            missing.push("content_type");
        }
        if self.country.is_none() {
            missing.push("country");
        }
        if self.niche.is_none() {
            missing.push("niche");
        }
        missing
    }
}
