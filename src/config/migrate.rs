//! Config file upgrades: fields introduced after a file was written are
//! added with their default values, leaving existing values untouched.

use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

use super::Config;
use crate::errors::{AppError, AppResult};

fn defaults_mapping() -> AppResult<Mapping> {
    let value = serde_yaml::to_value(Config::default()).map_err(|e| AppError::Config(e.to_string()))?;
    match value {
        Value::Mapping(m) => Ok(m),
        _ => Err(AppError::Config("defaults are not a mapping".into())),
    }
}

fn parse_mapping(content: &str) -> AppResult<Mapping> {
    if content.trim().is_empty() {
        return Ok(Mapping::new());
    }
    match serde_yaml::from_str::<Value>(content).map_err(|e| AppError::Config(e.to_string()))? {
        Value::Mapping(m) => Ok(m),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config("config root must be a mapping".into())),
    }
}

/// Field names known to this version but absent from `content`.
pub fn missing_fields(content: &str) -> AppResult<Vec<String>> {
    let current = parse_mapping(content)?;

    Ok(defaults_mapping()?
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add missing fields to `content`, returning the new YAML and the names
/// of the added fields.
pub fn migrate_content(content: &str) -> AppResult<(String, Vec<String>)> {
    let mut current = parse_mapping(content)?;
    let mut added = Vec::new();

    for (k, v) in defaults_mapping()? {
        if !current.contains_key(&k) {
            if let Some(name) = k.as_str() {
                added.push(name.to_string());
            }
            current.insert(k, v);
        }
    }

    let yaml = serde_yaml::to_string(&Value::Mapping(current)).map_err(|_| AppError::ConfigSave)?;
    Ok((yaml, added))
}

/// Rewrite the file at `path` with missing fields filled in. The file is
/// only touched when something was added.
pub fn migrate_file(path: &Path) -> AppResult<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let (yaml, added) = migrate_content(&content)?;

    if !added.is_empty() {
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)?;
    }

    Ok(added)
}
