//! mesh-export - spindle mesh generation tool
//!
//! Generates the demo shapes (sphere, cube, pyramid) and writes them as
//! GPU-ready `.spmesh` files.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use spindle_mesh::{
    FORMAT_COLOR, FORMAT_NORMAL, FORMAT_UV, generate_cube, generate_pyramid, generate_sphere,
    pack_color_mesh, pack_textured_mesh, write_mesh,
};

#[derive(Parser)]
#[command(name = "mesh-export")]
#[command(about = "spindle mesh generation tool")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the textured unit sphere
    Sphere {
        /// Subdivisions along latitude and longitude (min 3)
        #[arg(short, long, default_value_t = 20)]
        resolution: u32,

        /// Output .spmesh file
        #[arg(short, long, default_value = "sphere.spmesh")]
        output: PathBuf,
    },

    /// Generate the colored cube
    Cube {
        /// Output .spmesh file
        #[arg(short, long, default_value = "cube.spmesh")]
        output: PathBuf,
    },

    /// Generate the colored pyramid
    Pyramid {
        /// Output .spmesh file
        #[arg(short, long, default_value = "pyramid.spmesh")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Sphere { resolution, output } => {
            let mesh = generate_sphere(resolution)?;
            let vertex_data = pack_textured_mesh(&mesh);
            export(
                &output,
                FORMAT_UV | FORMAT_NORMAL,
                mesh.vertex_count(),
                &vertex_data,
                &mesh.indices,
            )?;
            tracing::info!(
                "sphere: wrote {:?} (resolution={}, {} verts, {} indices)",
                output,
                resolution,
                mesh.vertex_count(),
                mesh.index_count()
            );
        }

        Commands::Cube { output } => {
            let mesh = generate_cube();
            let vertex_data = pack_color_mesh(&mesh);
            export(
                &output,
                FORMAT_COLOR | FORMAT_NORMAL,
                mesh.vertex_count(),
                &vertex_data,
                &mesh.indices,
            )?;
            tracing::info!(
                "cube: wrote {:?} ({} verts, {} indices)",
                output,
                mesh.vertex_count(),
                mesh.index_count()
            );
        }

        Commands::Pyramid { output } => {
            let mesh = generate_pyramid();
            let vertex_data = pack_color_mesh(&mesh);
            export(
                &output,
                FORMAT_COLOR | FORMAT_NORMAL,
                mesh.vertex_count(),
                &vertex_data,
                &mesh.indices,
            )?;
            tracing::info!(
                "pyramid: wrote {:?} ({} verts, {} indices)",
                output,
                mesh.vertex_count(),
                mesh.index_count()
            );
        }
    }

    Ok(())
}

fn export(
    output: &Path,
    format: u8,
    vertex_count: usize,
    vertex_data: &[u8],
    indices: &[u32],
) -> Result<()> {
    let file =
        File::create(output).with_context(|| format!("Failed to create {:?}", output))?;
    let mut writer = BufWriter::new(file);
    write_mesh(
        &mut writer,
        format,
        vertex_count as u32,
        vertex_data,
        indices,
    )
    .with_context(|| format!("Failed to write {:?}", output))?;
    Ok(())
}
