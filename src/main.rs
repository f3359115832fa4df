use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use std::path::PathBuf;
use tracing::{debug, info};

mod color;
mod config;
mod error;
mod export;
mod mesh;
mod preview;

use color::ColorScheme;
use config::Config;
use mesh::RadialMesh;

#[derive(Parser, Debug)]
#[command(name = "radial-mesh")]
#[command(author, version, about = "Generate a radial triangle mesh as embedded JSON")]
pub struct Args {
    /// Number of radial sample rings [default: 10]
    #[arg(short, long)]
    radial_count: Option<usize>,

    /// Number of angular sample rays [default: 4]
    #[arg(short, long)]
    angular_count: Option<usize>,

    /// Field of view in degrees, centred on the +x axis [default: 45]
    #[arg(short, long)]
    fov: Option<f64>,

    /// Innermost ring distance [default: 0.01]
    #[arg(long)]
    min_distance: Option<f64>,

    /// Outermost ring distance [default: 200]
    #[arg(long)]
    max_distance: Option<f64>,

    /// Output file [default: radial_mesh.js]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write a commented config template to the default config path and exit
    #[arg(long)]
    init_config: bool,

    /// Skip the terminal wireframe preview
    #[arg(long)]
    no_preview: bool,

    /// Preview color scheme: spectrum, rainbow, fire, ocean, forest, purple, mono
    #[arg(long)]
    colors: Option<ColorScheme>,

    /// Do not draw vertex markers in the preview
    #[arg(long)]
    hide_vertices: bool,

    /// Re-read the written file and check it against the generated mesh
    #[arg(long)]
    verify: bool,

    /// Print shell completions and exit
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("radial_mesh=info".parse()?),
        )
        .init();

    let args = Args::parse();

    if let Some(shell) = args.completions {
        clap_complete::generate(shell, &mut Args::command(), "radial-mesh", &mut std::io::stdout());
        return Ok(());
    }

    if args.init_config {
        let path = Config::init_default_config()?;
        info!("Wrote config template to {}", path.display());
        return Ok(());
    }

    // Load config: explicit path, then the XDG default, then built-ins
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_from_default_path().unwrap_or_default(),
    };
    config.merge_args(&args);
    debug!("Resolved config: {:?}", config);

    let mesh = RadialMesh::generate(&config.mesh).context("Invalid mesh parameters")?;
    info!(
        "Generated radial mesh: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    export::write_mesh(&config.export.path, &mesh)?;
    info!("Wrote {}", config.export.path.display());

    if config.export.verify {
        verify_export(&config.export.path, &mesh)?;
    }

    if preview::is_available(&config.preview) {
        preview::run(&mesh, &config.preview)?;
    }

    Ok(())
}

fn verify_export(path: &std::path::Path, mesh: &RadialMesh) -> Result<()> {
    let loaded = export::read_mesh(path)?;
    if &loaded != mesh {
        bail!(
            "{} does not match the generated mesh ({} vertices, {} triangles read back)",
            path.display(),
            loaded.vertex_count(),
            loaded.triangle_count()
        );
    }
    info!("Verified {}", path.display());
    Ok(())
}
