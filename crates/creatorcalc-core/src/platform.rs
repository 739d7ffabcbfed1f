use serde::{Deserialize, Serialize};

/// Social platform a creator publishes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Youtube,
    Linkedin,
    X,
    Facebook,
    Tiktok,
    Other,
}

impl Platform {
    pub const ALL: [Platform; 7] = [
        Platform::Instagram,
        Platform::Youtube,
        Platform::Linkedin,
        Platform::X,
        Platform::Facebook,
        Platform::Tiktok,
        Platform::Other,
    ];

    /// Resolves a free-form platform label, case-insensitively.
    ///
    /// `"twitter"` maps to [`Platform::X`]. Unrecognized labels resolve to
    /// [`Platform::Other`] rather than failing.
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Platform {
        match raw.trim().to_lowercase().as_str() {
            "instagram" => Platform::Instagram,
            "youtube" => Platform::Youtube,
            "linkedin" => Platform::Linkedin,
            "x" | "twitter" => Platform::X,
            "facebook" => Platform::Facebook,
            "tiktok" => Platform::Tiktok,
            _ => Platform::Other,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Youtube => "youtube",
            Platform::Linkedin => "linkedin",
            Platform::X => "x",
            Platform::Facebook => "facebook",
            Platform::Tiktok => "tiktok",
            Platform::Other => "other",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
