//! Name-keyed texture cache
//!
//! Each fish name is rendered at most once per cache. Later lookups return
//! the same `Arc`, so callers can compare handles with [`Arc::ptr_eq`].

use hashbrown::{HashMap, HashSet};
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use crate::catalog::FishCatalog;
use crate::error::FishTextureError;
use crate::fish::FishDescriptor;
use crate::render::{FishRenderer, FishTexture, TextureRenderer};
use crate::texture::write_png;

type Slot = Arc<OnceLock<Arc<FishTexture>>>;

/// Lazily rendered textures for a fish catalog
///
/// The name map lock is only held to fetch or insert a slot; rendering runs
/// inside the slot's `OnceLock`, so distinct names render in parallel while
/// concurrent first lookups of one name wait for a single render.
pub struct TextureCache<R = FishRenderer> {
    catalog: FishCatalog,
    renderer: R,
    slots: Mutex<HashMap<String, Slot>>,
}

impl TextureCache<FishRenderer> {
    pub fn new(catalog: FishCatalog) -> Self {
        Self::with_renderer(catalog, FishRenderer::default())
    }
}

impl<R: TextureRenderer> TextureCache<R> {
    pub fn with_renderer(catalog: FishCatalog, renderer: R) -> Self {
        Self {
            catalog,
            renderer,
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Texture for `name`, rendering it on first request
    ///
    /// Names missing from the catalog get a synthesized descriptor and the
    /// default routine.
    pub fn get(&self, name: &str) -> Arc<FishTexture> {
        let slot = {
            let mut slots = self.slots.lock();
            match slots.get(name) {
                Some(slot) => Arc::clone(slot),
                None => {
                    let slot = Slot::default();
                    slots.insert(name.to_owned(), Arc::clone(&slot));
                    slot
                }
            }
        };

        Arc::clone(slot.get_or_init(|| {
            let texture = match self.catalog.find(name) {
                Some(fish) => self.renderer.render(fish),
                None => {
                    tracing::debug!(fish = name, "Fish not in catalog, synthesizing descriptor");
                    self.renderer.render(&FishDescriptor::fallback(name))
                }
            };
            Arc::new(texture)
        }))
    }

    /// Render every catalog entry, returning the resulting cache size
    pub fn preload_all(&self) -> usize {
        for fish in &self.catalog {
            self.get(&fish.name);
        }
        let count = self.len();
        tracing::info!(count, "Fish textures generated");
        count
    }

    /// Number of finished textures
    ///
    /// Names whose render is still running, or whose render panicked, are
    /// not counted.
    pub fn len(&self) -> usize {
        self.slots.lock().values().filter(|slot| slot.get().is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True once a texture for `name` has finished rendering
    pub fn contains(&self, name: &str) -> bool {
        self.slots.lock().get(name).is_some_and(|slot| slot.get().is_some())
    }

    pub fn catalog(&self) -> &FishCatalog {
        &self.catalog
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Snapshot of finished textures, sorted by name
    pub fn textures(&self) -> Vec<(String, Arc<FishTexture>)> {
        let slots = self.slots.lock();
        let mut textures: Vec<_> = slots
            .iter()
            .filter_map(|(name, slot)| slot.get().map(|tex| (name.clone(), Arc::clone(tex))))
            .collect();
        drop(slots);
        textures.sort_by(|a, b| a.0.cmp(&b.0));
        textures
    }

    /// Write every finished texture into `dir` as PNG, in name order
    ///
    /// A texture whose slug file name was already written gets the
    /// xxh3-suffixed name instead. Returns each texture with its file path.
    pub fn write_all(
        &self,
        dir: &Path,
    ) -> Result<Vec<(Arc<FishTexture>, PathBuf)>, FishTextureError> {
        let mut taken = HashSet::new();
        let mut written = Vec::new();
        for (name, texture) in self.textures() {
            let mut file_name = texture.file_name();
            if taken.contains(&file_name) {
                let hashed = texture.hashed_file_name();
                tracing::warn!(
                    fish = %name,
                    %file_name,
                    renamed = %hashed,
                    "Texture file name already used"
                );
                file_name = hashed;
            }
            if !taken.insert(file_name.clone()) {
                return Err(FishTextureError::FileNameCollision { name, file_name });
            }

            let path = dir.join(&file_name);
            write_png(texture.buffer(), &path)?;
            written.push((texture, path));
        }
        Ok(written)
    }
}
