//! Fish texture generator
//!
//! Renders every fish in a catalog to `<output>/<slug>.png`, where the slug is
//! the lowercase fish name with non-alphanumerics replaced by `_`.
//!
//! ```text
//! gen-fish-textures all --catalog fish.toml --output generated/fish --seed 7
//! gen-fish-textures render "Ikan Tuna" --output /tmp
//! gen-fish-textures list
//! ```

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use fish_textures::{FishCatalog, FishRenderer, GeneratorConfig, TextureCache};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "gen-fish-textures")]
#[command(about = "Render procedural fish sprite textures to PNG")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Overrides shared by the rendering subcommands
#[derive(Args)]
struct RenderArgs {
    /// Generator config (TOML); flags below take precedence
    #[arg(long)]
    config: Option<PathBuf>,
    /// Fish catalog (TOML or JSON)
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Output directory for PNG files
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Fixed sparkle seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

impl RenderArgs {
    fn resolve(self) -> Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => GeneratorConfig::default(),
        };
        if let Some(catalog) = self.catalog {
            config.catalog = catalog;
        }
        if let Some(output) = self.output {
            config.output_dir = output;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render every fish in the catalog
    All {
        #[command(flatten)]
        args: RenderArgs,
    },
    /// Render a single fish by name (names missing from the catalog are allowed)
    Render {
        /// Fish name, matched exactly
        name: String,
        #[command(flatten)]
        args: RenderArgs,
    },
    /// Print catalog names and the routine each one uses
    List {
        /// Fish catalog (TOML or JSON)
        #[arg(long, default_value = "fish.toml")]
        catalog: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::All { args } => {
            let config = args.resolve()?;
            let catalog = load_catalog(&config.catalog)?;
            let cache = build_cache(catalog, &config);

            let count = cache.preload_all();
            prepare_output(&config.output_dir)?;
            let written = cache.write_all(&config.output_dir).with_context(|| {
                format!("Failed to write textures to {}", config.output_dir.display())
            })?;
            for (texture, path) in &written {
                println!("  {} -> {}", texture.name(), path.display());
            }
            println!("{count} fish textures written to {}", config.output_dir.display());
        }
        Commands::Render { name, args } => {
            let explicit_catalog = args.catalog.is_some();
            let config = args.resolve()?;
            let catalog = if explicit_catalog || config.catalog.exists() {
                load_catalog(&config.catalog)?
            } else {
                tracing::warn!(
                    catalog = %config.catalog.display(),
                    "Catalog not found, rendering without one"
                );
                FishCatalog::default()
            };
            let cache = build_cache(catalog, &config);

            let texture = cache.get(&name);
            prepare_output(&config.output_dir)?;
            let path = texture
                .write_png(&config.output_dir)
                .with_context(|| format!("Failed to write texture for {name}"))?;
            println!("{} ({}) -> {}", texture.name(), texture.kind(), path.display());
        }
        Commands::List { catalog } => {
            let catalog = load_catalog(&catalog)?;
            for fish in &catalog {
                let emoji = fish.emoji.as_deref().unwrap_or(" ");
                println!("{emoji} {:<20} {}", fish.name, fish.kind());
            }
            println!("{} fish", catalog.len());
        }
    }

    Ok(())
}

fn load_catalog(path: &Path) -> Result<FishCatalog> {
    FishCatalog::load(path).with_context(|| format!("Failed to load catalog {}", path.display()))
}

fn build_cache(catalog: FishCatalog, config: &GeneratorConfig) -> TextureCache {
    TextureCache::with_renderer(catalog, FishRenderer::new(config.sparkle_seed()))
}

fn prepare_output(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))
}
