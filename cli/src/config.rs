use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use figment::{
    providers::{Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tagscanlib::ReadOptions;

pub const FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)] // allow missing fields and fill them with the `..Self::default()` in this struct
pub struct Settings {
    pub read: ReadOptions,
    pub check: CheckSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)] // allow missing fields and fill them with the `..Self::default()` in this struct
pub struct CheckSettings {
    /// Follow symbolic links while walking a directory
    pub follow_links: bool,
    /// Max depth of folders below the checked directory
    pub max_depth: usize,
    /// Skip files and folders starting with a `.`
    pub skip_hidden: bool,
}

impl Default for CheckSettings {
    fn default() -> Self {
        Self {
            follow_links: false,
            max_depth: 16,
            skip_hidden: true,
        }
    }
}

impl Settings {
    /// Read a config file, needs to be toml formatted.
    ///
    /// A missing file is created with the default settings.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            let config = Self::default();
            config
                .save_file(path)
                .with_context(|| format!("writing default config to {}", path.display()))?;
            return Ok(config);
        }

        let data: Self = Figment::new()
            .merge(Toml::file(path))
            .extract()
            .with_context(|| format!("parsing {}", path.display()))?;

        Ok(data)
    }

    /// Read the config file from the default app path
    pub fn from_config_path() -> Result<Self> {
        Self::from_file(get_app_config_path()?.join(FILE_NAME))
    }

    pub fn save_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, toml::to_string(self)?)?;

        Ok(())
    }
}

pub fn get_app_config_path() -> Result<PathBuf> {
    let mut path = dirs::config_dir().ok_or_else(|| anyhow!("failed to find os config dir."))?;
    path.push("tagscan");

    if !path.exists() {
        std::fs::create_dir_all(&path)?;
    }
    Ok(path)
}
