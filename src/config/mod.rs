use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    domain::{asset::InvalidDatePolicy, period::Granularity},
    errors::{DepreciationError, Result},
    utils::paths::{app_data_dir, config_file_in, ensure_dir},
};

const TMP_SUFFIX: &str = "tmp";
const MAX_PRECISION: u8 = 6;

/// User defaults applied when a run does not specify them explicitly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub default_granularity: Granularity,
    pub date_policy: InvalidDatePolicy,
    /// Decimals used when amounts are rendered as text.
    pub amount_precision: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_granularity: Granularity::Annual,
            date_policy: InvalidDatePolicy::DefaultToToday,
            amount_precision: 2,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.amount_precision > MAX_PRECISION {
            return Err(DepreciationError::ConfigError(format!(
                "amount_precision {} exceeds the maximum of {}",
                self.amount_precision, MAX_PRECISION
            )));
        }
        Ok(())
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        ensure_dir(&base)?;
        Ok(Self {
            path: config_file_in(&base),
        })
    }

    /// Reads the stored configuration, falling back to defaults when none exists.
    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: Config = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        config.validate()?;
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().expect("temp dir");
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
        assert_eq!(manager.load().expect("load"), Config::default());
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = TempDir::new().expect("temp dir");
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
        let config = Config {
            default_granularity: Granularity::Quarterly,
            date_policy: InvalidDatePolicy::Exclude,
            amount_precision: 4,
        };
        manager.save(&config).expect("save");
        assert!(!tmp_path(manager.path()).exists());
        assert_eq!(manager.load().expect("load"), config);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = TempDir::new().expect("temp dir");
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
        fs::write(manager.path(), r#"{ "date_policy": "exclude" }"#).expect("write");
        let config = manager.load().expect("load");
        assert_eq!(config.date_policy, InvalidDatePolicy::Exclude);
        assert_eq!(config.default_granularity, Granularity::Annual);
    }

    #[test]
    fn excessive_precision_is_rejected() {
        let config = Config {
            amount_precision: 12,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(DepreciationError::ConfigError(_))
        ));
    }
}
