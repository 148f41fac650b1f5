//! Profile fixtures for the demo host.
//!
//! A fixture bundles everything the profile page feeds into the widgets.
//! Fixtures are only ever read; preference toggles stay in memory.

use crate::achievements::UserStatsSnapshot;
use crate::constants::{APP_DIR_NAME, PROFILE_FILE_NAME};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("could not read profile {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid profile JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileFixture {
    pub display_name: Option<String>,
    pub preferences: Vec<String>,
    pub streak: i64,
    pub stats: UserStatsSnapshot,
}

impl ProfileFixture {
    /// Built-in profile used when no fixture file exists.
    pub fn sample() -> Self {
        Self {
            display_name: Some("Player One".to_string()),
            preferences: vec!["dota2".to_string(), "lol".to_string(), "minecraft".to_string()],
            streak: 6,
            stats: UserStatsSnapshot {
                posts_count: Some(142),
                likes_received: Some(870),
                comments_count: Some(64),
                friends_count: Some(31),
                member_since: Some("2023-03-14".to_string()),
                level: None,
            },
        }
    }

    pub fn name(&self) -> &str {
        self.display_name.as_deref().unwrap_or("Player")
    }

    /// Preference ids as a set. Duplicates collapse.
    pub fn preference_set(&self) -> HashSet<String> {
        self.preferences.iter().cloned().collect()
    }
}

/// Get the default fixture path (~/.profile-badges/profile.json).
pub fn default_profile_path() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    Ok(home_dir.join(APP_DIR_NAME).join(PROFILE_FILE_NAME))
}

pub fn parse_profile(json: &str, path: &Path) -> Result<ProfileFixture, ProfileError> {
    serde_json::from_str(json).map_err(|source| ProfileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_profile(path: &Path) -> Result<ProfileFixture, ProfileError> {
    let json = fs::read_to_string(path).map_err(|source| ProfileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let profile = parse_profile(&json, path)?;
    info!(path = %path.display(), "loaded profile fixture");
    Ok(profile)
}

/// Load the fixture at the default path, or the sample if there is none.
/// A file that exists but cannot be parsed is still an error.
pub fn load_default_profile() -> Result<ProfileFixture, ProfileError> {
    match default_profile_path() {
        Ok(path) if path.exists() => load_profile(&path),
        _ => {
            info!("no profile fixture found, using sample profile");
            Ok(ProfileFixture::sample())
        }
    }
}
