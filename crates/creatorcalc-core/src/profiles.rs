use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::pricing::{CreatorProfile, CreatorProfileForm};
use crate::ConfigError;

/// A saved creator profile, keyed by a display name.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedProfile {
    pub name: String,
    #[serde(flatten)]
    pub form: CreatorProfileForm,
}

impl NamedProfile {
    #[must_use]
    pub fn to_profile(&self) -> CreatorProfile {
        self.form.to_profile()
    }
}

#[derive(Debug, Deserialize)]
pub struct ProfilesFile {
    pub profiles: Vec<NamedProfile>,
}

/// Load and validate saved creator profiles from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_profiles(path: &Path) -> Result<ProfilesFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ProfilesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let profiles_file = parse_profiles(&content)?;
    tracing::debug!(
        path = %path.display(),
        count = profiles_file.profiles.len(),
        "loaded creator profiles"
    );
    Ok(profiles_file)
}

fn parse_profiles(content: &str) -> Result<ProfilesFile, ConfigError> {
    let profiles_file: ProfilesFile =
        serde_yaml::from_str(content).map_err(ConfigError::ProfilesFileParse)?;
    validate_profiles(&profiles_file)?;
    Ok(profiles_file)
}

fn validate_profiles(profiles_file: &ProfilesFile) -> Result<(), ConfigError> {
    let mut seen_names = HashSet::new();

    for profile in &profiles_file.profiles {
        if profile.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "profile name must be non-empty".to_string(),
            ));
        }

        if !seen_names.insert(profile.name.trim().to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate profile name: '{}'",
                profile.name
            )));
        }
    }

    Ok(())
}
