//! Fish texture rendering
//!
//! [`FishRenderer`] turns a [`FishDescriptor`] into a finished [`FishTexture`]
//! by running the matching drawing routine on a fresh 256x128 canvas.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use xxhash_rust::xxh3::xxh3_64;

use crate::error::FishTextureError;
use crate::fish::{self, FishDescriptor, FishKind};
use crate::texture::{write_png, Canvas, TextureBuffer};

/// Width of every fish texture in pixels
pub const TEXTURE_WIDTH: u32 = 256;
/// Height of every fish texture in pixels
pub const TEXTURE_HEIGHT: u32 = 128;

/// A rendered fish image ready for upload as a material texture
#[derive(Debug)]
pub struct FishTexture {
    name: String,
    kind: FishKind,
    buffer: TextureBuffer,
    needs_update: AtomicBool,
}

impl FishTexture {
    pub fn new(name: impl Into<String>, kind: FishKind, buffer: TextureBuffer) -> Self {
        Self {
            name: name.into(),
            kind,
            buffer,
            needs_update: AtomicBool::new(true),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Routine that painted this texture
    pub fn kind(&self) -> FishKind {
        self.kind
    }

    pub fn buffer(&self) -> &TextureBuffer {
        &self.buffer
    }

    /// Raw RGBA8 pixels, row-major, straight alpha
    pub fn pixels(&self) -> &[u8] {
        &self.buffer.pixels
    }

    pub fn width(&self) -> u32 {
        self.buffer.width
    }

    pub fn height(&self) -> u32 {
        self.buffer.height
    }

    /// True until the consumer reports the pixels as uploaded
    pub fn needs_update(&self) -> bool {
        self.needs_update.load(Ordering::Acquire)
    }

    /// Clear the `needs_update` flag after the pixels reach the GPU
    pub fn mark_uploaded(&self) {
        self.needs_update.store(false, Ordering::Release);
    }

    /// PNG file name derived from the fish name
    pub fn file_name(&self) -> String {
        format!("{}.png", slug(&self.name))
    }

    /// Collision-free variant of [`file_name`](Self::file_name), `<slug>_<xxh3>.png`
    pub fn hashed_file_name(&self) -> String {
        format!("{}_{:08x}.png", slug(&self.name), xxh3_64(self.name.as_bytes()) as u32)
    }

    /// Write the texture into `dir` as `<slug>.png`, returning the file path
    pub fn write_png(&self, dir: &Path) -> Result<PathBuf, FishTextureError> {
        let path = dir.join(self.file_name());
        write_png(&self.buffer, &path)?;
        Ok(path)
    }
}

/// Lowercase `name` with every character outside `[A-Za-z0-9]` replaced by `_`
pub fn slug(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect()
}

/// Seeding policy for sparkles and other random decoration
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SparkleSeed {
    /// Fresh randomness for every render
    #[default]
    Entropy,
    /// Reproducible output; mixed with the fish name so each fish differs
    Fixed(u64),
}

impl SparkleSeed {
    /// Random stream for rendering `name`
    pub fn rng_for(self, name: &str) -> Pcg32 {
        match self {
            SparkleSeed::Entropy => Pcg32::seed_from_u64(rand::random()),
            SparkleSeed::Fixed(seed) => Pcg32::seed_from_u64(seed ^ xxh3_64(name.as_bytes())),
        }
    }
}

impl From<Option<u64>> for SparkleSeed {
    fn from(seed: Option<u64>) -> Self {
        seed.map_or(SparkleSeed::Entropy, SparkleSeed::Fixed)
    }
}

/// Produces textures from descriptors
///
/// The cache is generic over this trait so callers can substitute their own
/// renderer (tests use a counting one).
pub trait TextureRenderer: Send + Sync {
    fn render(&self, fish: &FishDescriptor) -> FishTexture;
}

/// The built-in renderer backed by the fish drawing routines
#[derive(Clone, Copy, Debug, Default)]
pub struct FishRenderer {
    seed: SparkleSeed,
}

impl FishRenderer {
    pub fn new(seed: SparkleSeed) -> Self {
        Self { seed }
    }

    /// Renderer with reproducible sparkles
    pub fn with_seed(seed: u64) -> Self {
        Self::new(SparkleSeed::Fixed(seed))
    }

    pub fn seed(&self) -> SparkleSeed {
        self.seed
    }
}

impl TextureRenderer for FishRenderer {
    fn render(&self, fish: &FishDescriptor) -> FishTexture {
        let kind = fish.kind();
        if kind == FishKind::Default {
            tracing::debug!(fish = %fish.name, "No dedicated routine, using default");
        }

        let mut canvas = Canvas::new(TEXTURE_WIDTH, TEXTURE_HEIGHT);
        let mut rng = self.seed.rng_for(&fish.name);
        fish::draw(kind, &mut canvas, fish, &mut rng);

        tracing::trace!(fish = %fish.name, %kind, "Rendered fish texture");
        FishTexture::new(fish.name.clone(), kind, canvas.into_buffer())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_texture_dimensions() {
        let renderer = FishRenderer::with_seed(1);
        for name in ["Ikan Tuna", "Golden Fish", "Zzz-Unicorn"] {
            let tex = renderer.render(&FishDescriptor::new(name));
            assert_eq!((tex.width(), tex.height()), (TEXTURE_WIDTH, TEXTURE_HEIGHT));
            assert_eq!(tex.pixels().len(), (256 * 128 * 4) as usize);
            assert_eq!(tex.name(), name);
        }
    }

    #[test]
    fn test_kind_resolution() {
        let renderer = FishRenderer::default();
        assert_eq!(renderer.render(&FishDescriptor::new("Ikan Hiu")).kind(), FishKind::IkanHiu);
        assert_eq!(renderer.render(&FishDescriptor::new("Zzz-Unicorn")).kind(), FishKind::Default);
    }

    #[test]
    fn test_fixed_seed_is_reproducible() {
        let fish = FishDescriptor::new("Mythic Koi");
        let a = FishRenderer::with_seed(42).render(&fish);
        let b = FishRenderer::with_seed(42).render(&fish);
        let c = FishRenderer::with_seed(43).render(&fish);
        assert_eq!(a.buffer(), b.buffer());
        assert_ne!(a.buffer(), c.buffer());
    }

    #[test]
    fn test_fixed_seed_differs_per_name() {
        let seed = SparkleSeed::Fixed(7);
        let mut a = seed.rng_for("Golden Fish");
        let mut b = seed.rng_for("Rainbow Fish");
        assert_ne!(a.random::<u64>(), b.random::<u64>());
    }

    #[test]
    fn test_seed_from_option() {
        assert_eq!(SparkleSeed::from(None), SparkleSeed::Entropy);
        assert_eq!(SparkleSeed::from(Some(9)), SparkleSeed::Fixed(9));
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("Ikan Tuna"), "ikan_tuna");
        assert_eq!(slug("Zzz-Unicorn"), "zzz_unicorn");
        assert_eq!(slug("Golden Fish!"), "golden_fish_");
    }

    #[test]
    fn test_write_png_uses_slug() {
        let dir = tempfile::tempdir().unwrap();
        let tex = FishRenderer::with_seed(0).render(&FishDescriptor::new("Old Boot"));
        let path = tex.write_png(dir.path()).unwrap();
        assert_eq!(path, dir.path().join("old_boot.png"));
        assert!(path.exists());
    }

    #[test]
    fn test_hashed_file_name_separates_equal_slugs() {
        let renderer = FishRenderer::with_seed(0);
        let spaced = renderer.render(&FishDescriptor::new("Ikan Tuna"));
        let dashed = renderer.render(&FishDescriptor::new("Ikan-Tuna"));
        assert_eq!(spaced.file_name(), dashed.file_name());
        assert_ne!(spaced.hashed_file_name(), dashed.hashed_file_name());
        assert!(spaced.hashed_file_name().starts_with("ikan_tuna_"));
        assert!(spaced.hashed_file_name().ends_with(".png"));
    }

    #[test]
    fn test_needs_update_flag() {
        let tex = FishRenderer::default().render(&FishDescriptor::new("Ikan Koi"));
        assert!(tex.needs_update());
        tex.mark_uploaded();
        assert!(!tex.needs_update());
    }
}
