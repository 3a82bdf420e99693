//! raster-demo - render a scene to a plain-text PPM file.
//!
//! Without `--scene` the built-in demonstration scene is drawn.
//!
//! Run: `raster-demo --output demo.ppm`

use anyhow::{Context, Result};
use clap::Parser;
use raster_canvas::scene::Scene;
use std::path::PathBuf;
use std::process;
use tracing::{error, info};

/// raster-demo: minimal software rasterizer driver
#[derive(Parser, Debug)]
#[command(name = "raster-demo")]
#[command(version)]
#[command(about = "Draw lines, circles and curves, transform the canvas, export PPM", long_about = None)]
struct Cli {
    /// YAML scene file (defaults to the built-in demo scene)
    #[arg(short, long)]
    scene: Option<PathBuf>,

    /// Output file, overrides the scene's `output`
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the scene as YAML and exit
    #[arg(long)]
    dump_scene: bool,

    /// Informational logging
    #[arg(short, long)]
    verbose: bool,

    /// Debug logging
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.debug {
        tracing::Level::DEBUG
    } else if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut scene = match &cli.scene {
        Some(path) => Scene::load(path)
            .with_context(|| format!("failed to load scene {}", path.display()))?,
        None => Scene::demo(),
    };
    if let Some(output) = cli.output {
        scene.output = output;
    }

    if cli.dump_scene {
        print!("{}", scene.to_yaml()?);
        return Ok(());
    }

    info!(
        width = scene.width,
        height = scene.height,
        operations = scene.operations.len(),
        "rendering scene"
    );
    let canvas = scene.render().context("failed to render scene")?;

    // Export failures are reported, not propagated as a panic
    if let Err(e) = canvas.save_as_text(&scene.output) {
        error!("Error saving file: {e}");
        process::exit(1);
    }

    info!(path = %scene.output.display(), "saved");
    Ok(())
}
