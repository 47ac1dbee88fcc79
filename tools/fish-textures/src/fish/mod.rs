//! Fish descriptors and the closed set of drawing routines
//!
//! Each catch type maps to one [`FishKind`]. Names that match no routine fall
//! back to [`FishKind::Default`], a generic silhouette tinted by the
//! descriptor colour.

mod helpers;
mod routines;

use serde::{Deserialize, Serialize};

pub use helpers::GradientAxis;

/// Fallback tint for fish without a usable colour
pub const DEFAULT_COLOR: &str = "#5dade2";
/// Fallback emoji for synthesized descriptors
pub const DEFAULT_EMOJI: &str = "🐟";

/// Caller-supplied description of one fish type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FishDescriptor {
    /// Display name; selects the drawing routine
    pub name: String,
    /// CSS colour string, only read by the default routine
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
}

impl FishDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: None,
            emoji: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = Some(emoji.into());
        self
    }

    /// Descriptor used for names missing from the catalog
    pub fn fallback(name: impl Into<String>) -> Self {
        Self::new(name)
            .with_color(DEFAULT_COLOR)
            .with_emoji(DEFAULT_EMOJI)
    }

    pub fn kind(&self) -> FishKind {
        FishKind::from_name(&self.name)
    }
}

/// One variant per drawing routine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FishKind {
    IkanKecil,
    IkanTuna,
    IkanSalmon,
    IkanLele,
    IkanKoi,
    IkanHiu,
    GoldenFish,
    MythicKoi,
    DragonFish,
    CrystalFish,
    OldBoot,
    TreasureChest,
    IkanPari,
    RainbowFish,
    /// Generic silhouette for unrecognised names
    Default,
}

impl FishKind {
    /// Every routine with a dedicated recipe (excludes `Default`)
    pub const NAMED: [FishKind; 14] = [
        FishKind::IkanKecil,
        FishKind::IkanTuna,
        FishKind::IkanSalmon,
        FishKind::IkanLele,
        FishKind::IkanKoi,
        FishKind::IkanHiu,
        FishKind::GoldenFish,
        FishKind::MythicKoi,
        FishKind::DragonFish,
        FishKind::CrystalFish,
        FishKind::OldBoot,
        FishKind::TreasureChest,
        FishKind::IkanPari,
        FishKind::RainbowFish,
    ];

    /// Routine for a fish name (exact match), falling back to `Default`
    pub fn from_name(name: &str) -> Self {
        Self::NAMED
            .into_iter()
            .find(|kind| kind.name() == name)
            .unwrap_or(FishKind::Default)
    }

    /// Name the routine is registered under
    pub fn name(self) -> &'static str {
        match self {
            FishKind::IkanKecil => "Ikan Kecil",
            FishKind::IkanTuna => "Ikan Tuna",
            FishKind::IkanSalmon => "Ikan Salmon",
            FishKind::IkanLele => "Ikan Lele",
            FishKind::IkanKoi => "Ikan Koi",
            FishKind::IkanHiu => "Ikan Hiu",
            FishKind::GoldenFish => "Golden Fish",
            FishKind::MythicKoi => "Mythic Koi",
            FishKind::DragonFish => "Dragon Fish",
            FishKind::CrystalFish => "Crystal Fish",
            FishKind::OldBoot => "Old Boot",
            FishKind::TreasureChest => "Treasure Chest",
            FishKind::IkanPari => "Ikan Pari",
            FishKind::RainbowFish => "Rainbow Fish",
            FishKind::Default => "default",
        }
    }

    /// True for routines that scatter random sparkles or facets
    pub fn uses_randomness(self) -> bool {
        matches!(
            self,
            FishKind::GoldenFish
                | FishKind::MythicKoi
                | FishKind::DragonFish
                | FishKind::CrystalFish
                | FishKind::TreasureChest
                | FishKind::IkanPari
                | FishKind::RainbowFish
        )
    }
}

impl std::fmt::Display for FishKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

pub(crate) use routines::draw;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_named_kind_round_trips_by_name() {
        for kind in FishKind::NAMED {
            assert_eq!(FishKind::from_name(kind.name()), kind);
        }
    }

    #[test]
    fn test_unknown_and_case_mismatch_fall_back() {
        assert_eq!(FishKind::from_name("Zzz-Unicorn"), FishKind::Default);
        assert_eq!(FishKind::from_name("ikan tuna"), FishKind::Default);
        assert_eq!(FishKind::from_name(""), FishKind::Default);
    }

    #[test]
    fn test_default_name_is_not_a_named_routine() {
        assert!(!FishKind::NAMED.contains(&FishKind::Default));
        assert_eq!(FishKind::from_name("default"), FishKind::Default);
    }

    #[test]
    fn test_default_color_parses() {
        let tint = crate::texture::parse_css_color(DEFAULT_COLOR).unwrap();
        assert_eq!(tint, crate::texture::hex(0x5dade2));
    }

    #[test]
    fn test_fallback_descriptor() {
        let fish = FishDescriptor::fallback("Zzz-Unicorn");
        assert_eq!(fish.name, "Zzz-Unicorn");
        assert_eq!(fish.color.as_deref(), Some(DEFAULT_COLOR));
        assert_eq!(fish.emoji.as_deref(), Some(DEFAULT_EMOJI));
        assert_eq!(fish.kind(), FishKind::Default);
    }

    #[test]
    fn test_descriptor_deserializes_without_optional_fields() {
        let fish: FishDescriptor = serde_json::from_str(r#"{"name": "Ikan Koi"}"#).unwrap();
        assert_eq!(fish, FishDescriptor::new("Ikan Koi"));
        assert_eq!(fish.kind(), FishKind::IkanKoi);
    }
}
