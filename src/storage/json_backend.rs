use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::debug;

use super::AssetSource;
use crate::{
    domain::asset::AssetRecord,
    errors::{DepreciationError, Result},
};

/// Reads asset records from a JSON document, either a bare array of records or
/// an object with an `assets` array.
#[derive(Debug, Clone)]
pub struct JsonAssetFile {
    path: PathBuf,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AssetDocument {
    List(Vec<AssetRecord>),
    Wrapped { assets: Vec<AssetRecord> },
}

impl JsonAssetFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AssetSource for JsonAssetFile {
    fn load_assets(&self) -> Result<Vec<AssetRecord>> {
        if !self.path.exists() {
            return Err(DepreciationError::InvalidInput(format!(
                "asset file `{}` not found",
                self.path.display()
            )));
        }
        let data = fs::read_to_string(&self.path)?;
        let records = parse_records(&data)?;
        debug!(path = %self.path.display(), count = records.len(), "loaded asset records");
        Ok(records)
    }
}

/// Parses a JSON asset document and rejects duplicate identifiers.
pub fn parse_records(data: &str) -> Result<Vec<AssetRecord>> {
    let records = match serde_json::from_str::<AssetDocument>(data)? {
        AssetDocument::List(records) => records,
        AssetDocument::Wrapped { assets } => assets,
    };
    let mut seen = HashSet::new();
    for record in &records {
        if !seen.insert(record.id.as_str()) {
            return Err(DepreciationError::InvalidInput(format!(
                "duplicate asset id `{}`",
                record.id
            )));
        }
    }
    Ok(records)
}
