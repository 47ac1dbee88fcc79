//! Generator settings (fish-textures.toml)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::FishTextureError;
use crate::render::SparkleSeed;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Catalog document listing the fish to render
    #[serde(default = "default_catalog")]
    pub catalog: PathBuf,
    /// Directory receiving one PNG per fish
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Fixed sparkle seed; omit for fresh randomness on every run
    #[serde(default = "default_seed", skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_catalog() -> PathBuf {
    PathBuf::from("fish.toml")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("generated/fish")
}

fn default_seed() -> Option<u64> {
    None
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            output_dir: default_output_dir(),
            seed: default_seed(),
        }
    }
}

impl GeneratorConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, FishTextureError> {
        Ok(toml::from_str(source)?)
    }

    /// Load a config file; relative paths in it resolve against its directory
    pub fn load(path: &Path) -> Result<Self, FishTextureError> {
        let source = std::fs::read_to_string(path).map_err(|source| FishTextureError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&source)?;
        if let Some(config_dir) = path.parent() {
            config.catalog = config_dir.join(&config.catalog);
            config.output_dir = config_dir.join(&config.output_dir);
        }
        Ok(config)
    }

    pub fn sparkle_seed(&self) -> SparkleSeed {
        SparkleSeed::from(self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        assert_eq!(GeneratorConfig::from_toml_str("").unwrap(), GeneratorConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config = GeneratorConfig::from_toml_str("seed = 42\noutput_dir = \"out\"").unwrap();
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.catalog, PathBuf::from("fish.toml"));
        assert_eq!(config.sparkle_seed(), SparkleSeed::Fixed(42));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fish-textures.toml");
        std::fs::write(&path, "catalog = \"data/fish.json\"").unwrap();

        let config = GeneratorConfig::load(&path).unwrap();
        assert_eq!(config.catalog, dir.path().join("data/fish.json"));
        assert_eq!(config.output_dir, dir.path().join("generated/fish"));
        assert_eq!(config.sparkle_seed(), SparkleSeed::Entropy);
    }

    #[test]
    fn test_load_resolves_catalog_next_to_config() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("fish-textures.toml");
        std::fs::write(&config_path, "catalog = \"fish.toml\"\noutput_dir = \"out\"").unwrap();
        std::fs::write(dir.path().join("fish.toml"), "[[fish]]\nname = \"Ikan Koi\"").unwrap();

        let config = GeneratorConfig::load(&config_path).unwrap();
        assert_eq!(config.output_dir, dir.path().join("out"));
        let catalog = crate::FishCatalog::load(&config.catalog).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_load_keeps_absolute_paths() {
        let dir = tempfile::tempdir().unwrap();
        let elsewhere = tempfile::tempdir().unwrap();
        let catalog = elsewhere.path().join("fish.json");
        let config_path = dir.path().join("fish-textures.toml");
        std::fs::write(&config_path, format!("catalog = {:?}", catalog.display().to_string())).unwrap();

        let config = GeneratorConfig::load(&config_path).unwrap();
        assert_eq!(config.catalog, catalog);
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            GeneratorConfig::from_toml_str("seed = \"abc\""),
            Err(FishTextureError::Toml(_))
        ));
    }
}
