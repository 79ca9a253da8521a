//! Document loaders for the synced game data collections.
//!
//! Each collection lives in its own JSON file holding a top-level array of
//! records. The sync process that writes these files is not part of this crate;
//! the loaders only read and decode them.

use crate::data::errors::DataError;
use crate::data::types::{HideoutModule, Item, Project, Quest};
use log::debug;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Decode an array document already held in memory.
pub fn parse_collection<T: DeserializeOwned>(contents: &str) -> Result<Vec<T>, DataError> {
    Ok(serde_json::from_str(contents)?)
}

/// Read and decode one collection document.
pub fn load_collection<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<Vec<T>, DataError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records: Vec<T> = serde_json::from_str(&contents).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("decoded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Load items from items.json
pub fn load_items_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Item>, DataError> {
    load_collection(path)
}

/// Load quests from quests.json
pub fn load_quests_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Quest>, DataError> {
    load_collection(path)
}

/// Load projects from projects.json
pub fn load_projects_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Project>, DataError> {
    load_collection(path)
}

/// Load hideout modules from hideoutModules.json
pub fn load_hideout_modules_from_json<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<HideoutModule>, DataError> {
    load_collection(path)
}
