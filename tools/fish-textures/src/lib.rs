//! Procedural fish sprite textures
//!
//! Every fish type in a fishing game gets a 256x128 RGBA texture painted by a
//! fixed drawing routine selected by the fish name. Unknown names fall back to
//! a generic silhouette tinted by the descriptor colour. A [`TextureCache`]
//! renders each name at most once and hands out shared handles.
//!
//! # Example
//! ```no_run
//! use fish_textures::{FishCatalog, TextureCache, FishRenderer};
//! use std::sync::Arc;
//!
//! let catalog = FishCatalog::load("fish.toml".as_ref())?;
//! let cache = TextureCache::with_renderer(catalog, FishRenderer::with_seed(7));
//!
//! let tuna = cache.get("Ikan Tuna");
//! assert!(Arc::ptr_eq(&tuna, &cache.get("Ikan Tuna")));
//! assert_eq!((tuna.width(), tuna.height()), (256, 128));
//!
//! let generated = cache.preload_all();
//! println!("{generated} textures ready");
//! # Ok::<(), fish_textures::FishTextureError>(())
//! ```

pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod fish;
pub mod render;
pub mod texture;

pub use cache::TextureCache;
pub use catalog::FishCatalog;
pub use config::GeneratorConfig;
pub use error::FishTextureError;
pub use fish::{FishDescriptor, FishKind};
pub use render::{FishRenderer, FishTexture, SparkleSeed, TextureRenderer, TEXTURE_HEIGHT, TEXTURE_WIDTH};
