pub mod json_backend;

use crate::{domain::asset::AssetRecord, errors::Result};

/// Supplier of asset records. Retrieval happens before a schedule run; the
/// engine itself never performs I/O.
pub trait AssetSource {
    fn load_assets(&self) -> Result<Vec<AssetRecord>>;
}

impl AssetSource for Vec<AssetRecord> {
    fn load_assets(&self) -> Result<Vec<AssetRecord>> {
        Ok(self.clone())
    }
}

pub use json_backend::JsonAssetFile;
