use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::briefs::Brief;
use crate::profiles::Profile;
use crate::ConfigError;

/// Seed directory shipped in `config/directory.yaml`.
#[derive(Debug, Deserialize)]
pub struct DirectoryFile {
    pub profiles: Vec<Profile>,
    /// Briefs pinned to the board of a fresh in-memory backend.
    #[serde(default)]
    pub briefs: Vec<Brief>,
}

/// Load and validate the seed directory from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_directory(path: &Path) -> Result<DirectoryFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::DirectoryFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let directory: DirectoryFile =
        serde_yaml::from_str(&content).map_err(ConfigError::DirectoryFileParse)?;

    validate_directory(&directory)?;

    Ok(directory)
}

fn validate_directory(directory: &DirectoryFile) -> Result<(), ConfigError> {
    let mut seen_ids = HashSet::new();

    for profile in &directory.profiles {
        if profile.id().trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "profile '{}' has an empty id",
                profile.display_title()
            )));
        }

        if profile.display_title().trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "profile '{}' must have a non-empty name",
                profile.id()
            )));
        }

        if !seen_ids.insert(profile.id()) {
            return Err(ConfigError::Validation(format!(
                "duplicate profile id: '{}'",
                profile.id()
            )));
        }

        for (name, range) in profile.ranges() {
            if !range.is_ordered() {
                return Err(ConfigError::Validation(format!(
                    "profile '{}' has {name} minimum above maximum",
                    profile.id()
                )));
            }
        }
    }

    validate_briefs(&directory.briefs)
}

fn validate_briefs(briefs: &[Brief]) -> Result<(), ConfigError> {
    let mut seen_ids = HashSet::new();

    for brief in briefs {
        if brief.id.trim().is_empty() || brief.title.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "brief '{}' must have a non-empty id and title",
                brief.id
            )));
        }

        if !seen_ids.insert(brief.id.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate brief id: '{}'",
                brief.id
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "seed_test.rs"]
mod tests;
