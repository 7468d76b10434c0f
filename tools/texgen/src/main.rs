//! texgen - procedural texture synthesis tool
//!
//! Validates texture recipes and renders them to RGBA8 buffers, reporting
//! channel statistics or dumping pixels as hex.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use texgen::texture::{synthesize, synthesize_parallel, PreviewPanel, RandomNoise, TextureBuffer};
use texgen::Recipe;

#[derive(Parser)]
#[command(name = "texgen")]
#[command(about = "Procedural texture synthesis tool")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a recipe without rendering
    Check {
        /// Path to recipe TOML
        recipe: PathBuf,
    },

    /// Show export and preview sizes for a recipe
    Info {
        /// Path to recipe TOML
        recipe: PathBuf,

        /// Longest preview edge
        #[arg(long, default_value_t = texgen::texture::DEFAULT_PREVIEW_EDGE)]
        preview_edge: u32,
    },

    /// Render a recipe and report channel statistics
    Render {
        /// Path to recipe TOML
        recipe: PathBuf,

        /// White noise seed (overrides the recipe)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Render rows in parallel
        #[arg(short, long)]
        parallel: bool,

        /// Print every pixel as RRGGBBAA, one line per row
        #[arg(long)]
        hex: bool,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only pixel output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { recipe } => {
            tracing::info!("Checking recipe {:?}", recipe);
            let loaded = Recipe::load(&recipe)?;
            loaded.validate()?;
            tracing::info!("Recipe is valid ({})", loaded.texture.kind.label());
        }

        Commands::Info {
            recipe,
            preview_edge,
        } => {
            let loaded = Recipe::load(&recipe)?;
            loaded.validate()?;
            let dims = loaded.dimensions()?;
            let panel = PreviewPanel::new(TextureBuffer::new).with_max_edge(preview_edge);
            let preview = panel.preview_dimensions(dims);
            tracing::info!("Texture: {}", loaded.texture.kind.label());
            tracing::info!("Export size: {}x{}", dims.width(), dims.height());
            tracing::info!("Preview size: {}x{}", preview.width(), preview.height());
            if loaded.texture.kind.is_random() && loaded.texture.seed.is_none() {
                tracing::info!("Unseeded noise: every render differs");
            }
        }

        Commands::Render {
            recipe,
            seed,
            parallel,
            hex,
        } => {
            let loaded = Recipe::load(&recipe)?;
            loaded.validate()?;
            let dims = loaded.dimensions()?;
            let kind = &loaded.texture.kind;

            let texture = if parallel {
                // Row-to-worker assignment varies between runs
                if kind.is_random() && seed.or(loaded.texture.seed).is_some() {
                    tracing::warn!("Seed ignored for parallel render; noise will differ per run");
                }
                synthesize_parallel(dims, kind, RandomNoise::from_entropy)
            } else {
                synthesize(dims, kind, loaded.noise(seed).as_mut())
            };

            report_stats(&texture);
            if hex {
                print_hex(&texture);
            }
        }
    }

    Ok(())
}

fn report_stats(texture: &TextureBuffer) {
    const CHANNELS: [&str; 4] = ["R", "G", "B", "A"];
    let count = (texture.width as u64 * texture.height as u64).max(1);

    for (i, name) in CHANNELS.iter().enumerate() {
        let values = texture.pixels.iter().skip(i).step_by(4).copied();
        let (min, max, sum) = values.fold((u8::MAX, u8::MIN, 0u64), |(lo, hi, sum), v| {
            (lo.min(v), hi.max(v), sum + v as u64)
        });
        tracing::info!(
            "{}: min={} max={} mean={:.2}",
            name,
            min,
            max,
            sum as f64 / count as f64
        );
    }
}

fn print_hex(texture: &TextureBuffer) {
    for row in texture.rows() {
        let line: Vec<String> = row
            .chunks_exact(4)
            .map(|px| format!("{:02x}{:02x}{:02x}{:02x}", px[0], px[1], px[2], px[3]))
            .collect();
        println!("{}", line.join(" "));
    }
}
