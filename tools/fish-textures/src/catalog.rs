//! The caller-supplied list of known fish types
//!
//! Catalogs load from TOML (`[[fish]]` tables) or JSON (a top-level array).
//! Fields the descriptor doesn't know about, such as rarity or price, are
//! ignored.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::FishTextureError;
use crate::fish::FishDescriptor;

/// Ordered list of fish descriptors, queried by exact name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FishCatalog {
    #[serde(default)]
    fish: Vec<FishDescriptor>,
}

impl FishCatalog {
    pub fn new(fish: Vec<FishDescriptor>) -> Self {
        Self { fish }
    }

    /// Parse a TOML document of `[[fish]]` tables
    pub fn from_toml_str(source: &str) -> Result<Self, FishTextureError> {
        Ok(toml::from_str(source)?)
    }

    /// Parse a JSON array of descriptors
    pub fn from_json_str(source: &str) -> Result<Self, FishTextureError> {
        let fish: Vec<FishDescriptor> = serde_json::from_str(source)?;
        Ok(Self { fish })
    }

    /// Load a catalog file, choosing the format from its extension
    pub fn load(path: &Path) -> Result<Self, FishTextureError> {
        let source = std::fs::read_to_string(path).map_err(|source| FishTextureError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::from_toml_str(&source)?,
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::from_json_str(&source)?,
            _ => {
                return Err(FishTextureError::UnsupportedFormat {
                    path: path.to_path_buf(),
                });
            }
        };

        tracing::debug!(path = %path.display(), count = catalog.len(), "Loaded fish catalog");
        Ok(catalog)
    }

    /// First descriptor whose name matches exactly
    pub fn find(&self, name: &str) -> Option<&FishDescriptor> {
        self.fish.iter().find(|fish| fish.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fish.iter().map(|fish| fish.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fish.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fish.is_empty()
    }
}

impl From<Vec<FishDescriptor>> for FishCatalog {
    fn from(fish: Vec<FishDescriptor>) -> Self {
        Self::new(fish)
    }
}

impl<'a> IntoIterator for &'a FishCatalog {
    type Item = &'a FishDescriptor;
    type IntoIter = std::slice::Iter<'a, FishDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.fish.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOML_CATALOG: &str = r##"
[[fish]]
name = "Ikan Tuna"
color = "#2e6ea6"
emoji = "🐟"
rarity = "common"

[[fish]]
name = "Old Boot"
"##;

    #[test]
    fn test_from_toml_str() {
        let catalog = FishCatalog::from_toml_str(TOML_CATALOG).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.names().collect::<Vec<_>>(), ["Ikan Tuna", "Old Boot"]);

        let tuna = catalog.find("Ikan Tuna").unwrap();
        assert_eq!(tuna.color.as_deref(), Some("#2e6ea6"));
        assert_eq!(catalog.find("Old Boot").unwrap().color, None);
    }

    #[test]
    fn test_from_json_str() {
        let catalog = FishCatalog::from_json_str(
            r##"[{"name": "Ikan Koi", "color": "#ff6b35", "price": 40}, {"name": "Ikan Pari"}]"##,
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.find("Ikan Pari").is_some());
    }

    #[test]
    fn test_find_is_exact() {
        let catalog = FishCatalog::from(vec![FishDescriptor::new("Ikan Koi")]);
        assert!(catalog.find("Ikan Koi").is_some());
        assert!(catalog.find("ikan koi").is_none());
        assert!(catalog.find("Ikan Koi ").is_none());
    }

    #[test]
    fn test_empty_toml_is_empty_catalog() {
        let catalog = FishCatalog::from_toml_str("").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_invalid_documents() {
        assert!(matches!(
            FishCatalog::from_toml_str("[[fish]]\ncolor = 3"),
            Err(FishTextureError::Toml(_))
        ));
        assert!(matches!(
            FishCatalog::from_json_str("{\"name\": \"x\"}"),
            Err(FishTextureError::Json(_))
        ));
    }

    #[test]
    fn test_load_dispatches_on_extension() {
        let dir = tempfile::tempdir().unwrap();

        let toml_path = dir.path().join("fish.toml");
        std::fs::write(&toml_path, TOML_CATALOG).unwrap();
        assert_eq!(FishCatalog::load(&toml_path).unwrap().len(), 2);

        let json_path = dir.path().join("fish.JSON");
        std::fs::write(&json_path, r#"[{"name": "Ikan Lele"}]"#).unwrap();
        assert_eq!(FishCatalog::load(&json_path).unwrap().len(), 1);

        let yaml_path = dir.path().join("fish.yaml");
        std::fs::write(&yaml_path, "- name: x").unwrap();
        assert!(matches!(
            FishCatalog::load(&yaml_path),
            Err(FishTextureError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            FishCatalog::load(&dir.path().join("nope.toml")),
            Err(FishTextureError::Io { .. })
        ));
    }
}
