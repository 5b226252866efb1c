//! moodlight CLI - inspect mood-to-color profiles

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use moodlight_colormap::{sample_grid_with, ProcessingMode, SampleGridParams};
use moodlight_core::{build_profile, BuiltinProfile, Color, ColorProfile, Point, ProfileConfig};

// ─── CLI structure ──────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "moodlight")]
#[command(author, version, about = "Map musical mood to light colors", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Color for a single (valence, energy) point
    Color {
        /// Musical positivity in [0, 1]
        #[arg(short = 'x', long)]
        valence: f64,
        /// Musical intensity in [0, 1]
        #[arg(short = 'y', long)]
        energy: f64,
        /// Profile configuration (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// List built-in profiles
    Profiles,
    /// Sample a profile over a square grid and print it as hex colors
    Sample {
        /// Grid size in pixels per side
        #[arg(short, long, default_value = "16")]
        size: usize,
        /// Profile configuration (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Worker threads (0 = all cores, 1 = sequential)
        #[arg(short, long, default_value = "0")]
        threads: usize,
    },
}

// ─── Helpers ────────────────────────────────────────────────────────────

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set up logging")
}

fn read_config(path: &Path) -> Result<ProfileConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse config {}", path.display()))
}

fn load_profile(config: Option<&Path>) -> Result<ColorProfile> {
    let config = match config {
        Some(path) => read_config(path)?,
        None => ProfileConfig::default(),
    };
    // Fallback warnings are logged by build_profile
    let built = build_profile(&config);
    info!("Profile: {}", built.profile.describe());
    Ok(built.profile)
}

fn processing_mode(threads: usize) -> ProcessingMode {
    match threads {
        0 => ProcessingMode::Parallel,
        1 => ProcessingMode::Sequential,
        n => ProcessingMode::ParallelWith(n),
    }
}

fn print_color(color: Color) {
    let rgb = color.to_rgb();
    match color {
        Color::Hs(hs) => println!("{} {} {}", rgb.to_hex(), rgb, hs),
        Color::Rgb(_) => println!("{} {}", rgb.to_hex(), rgb),
    }
}

// ─── Main ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;

    match cli.command {
        Commands::Color {
            valence,
            energy,
            config,
        } => {
            let profile = load_profile(config.as_deref())?;
            let color = profile
                .color_for_point(&Point::new(valence, energy))
                .context("Failed to compute color")?;
            print_color(color);
        }

        Commands::Profiles => {
            for p in BuiltinProfile::ALL {
                println!("{:<12} {}", p.name(), p.description());
            }
        }

        Commands::Sample {
            size,
            config,
            threads,
        } => {
            let profile = load_profile(config.as_deref())?;
            let params = SampleGridParams::new(size, size).with_mode(processing_mode(threads));

            let start = Instant::now();
            let colors = sample_grid_with(&profile, &params).context("Failed to sample profile")?;
            info!("Sampled {}x{} in {:.2?}", size, size, start.elapsed());

            for row in colors.chunks(size) {
                let line: Vec<String> = row.iter().map(|c| c.to_rgb().to_hex()).collect();
                println!("{}", line.join(" "));
            }
        }
    }

    Ok(())
}
