use log::info;
use std::path::Path;

use crate::dispatch::{parse_packages_json, Package};
use crate::error::WorkoutError;

/// Leser inn treningspakker fra disk (JSON-liste).
pub fn load_packages(path: impl AsRef<Path>) -> Result<Vec<Package>, WorkoutError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| WorkoutError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let packages = parse_packages_json(&contents)?;
    info!("loaded {} packages from {}", packages.len(), path.display());
    Ok(packages)
}
