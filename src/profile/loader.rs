//! Load household profiles from JSON

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::info;
use serde::Deserialize;

use super::HouseholdProfile;
use crate::error::LoadError;

/// A file holds either one profile or an array of them
#[derive(Deserialize)]
#[serde(untagged)]
enum ProfileDocument {
    Many(Vec<HouseholdProfile>),
    One(Box<HouseholdProfile>),
}

fn open(path: &Path) -> Result<BufReader<File>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Load a single profile from a JSON file
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<HouseholdProfile, LoadError> {
    let reader = open(path.as_ref())?;
    Ok(serde_json::from_reader(reader)?)
}

/// Load every profile in a JSON file (object or array)
pub fn load_profiles<P: AsRef<Path>>(path: P) -> Result<Vec<HouseholdProfile>, LoadError> {
    let reader = open(path.as_ref())?;
    let profiles = load_profiles_from_reader(reader)?;
    info!("Loaded {} profile(s) from {}", profiles.len(), path.as_ref().display());
    Ok(profiles)
}

/// Load profiles from any reader (e.g., string buffer, stdin)
pub fn load_profiles_from_reader<R: Read>(reader: R) -> Result<Vec<HouseholdProfile>, LoadError> {
    let document: ProfileDocument = serde_json::from_reader(reader)?;
    Ok(match document {
        ProfileDocument::Many(profiles) => profiles,
        ProfileDocument::One(profile) => vec![*profile],
    })
}
