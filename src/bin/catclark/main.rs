//! catclark CLI - refine the unit cube and write it out.
//!
//! Usage: catclark <COMMAND> [OPTIONS]
//!
//! Run `catclark --help` for available commands.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

use clap::{Parser, Subcommand};

use catclark::algo::{subdivide, Progress};
use catclark::io;
use catclark::mesh::{mesh_stats, unit_cube, QuadMesh};

#[derive(Parser)]
#[command(name = "catclark")]
#[command(author, version, about = "Exact Catmull-Clark subdivision CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Subdivide the unit cube and save it as OBJ
    Subdivide {
        /// Output mesh file
        #[arg(default_value = "cube.obj")]
        output: PathBuf,

        /// Number of subdivision iterations
        #[arg(short, long, default_value = "3")]
        iterations: usize,

        /// Log and skip broken connectivity instead of failing
        #[arg(long)]
        lenient: bool,

        /// Maximum number of faces a pass may produce
        #[arg(long, default_value = "10000000")]
        max_faces: usize,

        /// Use single-threaded execution (for benchmarking)
        #[arg(long)]
        sequential: bool,
    },

    /// Display element counts of the subdivided unit cube
    Info {
        /// Number of subdivision iterations
        #[arg(short, long, default_value = "0")]
        iterations: usize,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Subdivide {
            output,
            iterations,
            lenient,
            max_faces,
            sequential,
        } => {
            let mut options = subdivide::SubdivideOptions::new(iterations)
                .with_parallel(!sequential)
                .with_max_faces(max_faces);
            if lenient {
                options = options.lenient();
            }
            cmd_subdivide(&output, &options)?;
        }

        Commands::Info { iterations } => {
            cmd_info(iterations)?;
        }
    }

    Ok(())
}

/// Create a progress reporter that displays a progress bar on the terminal.
fn create_progress() -> Progress {
    let max_percent = Arc::new(AtomicUsize::new(0)); // Track highest percent seen (monotonic)

    Progress::new(move |current, total, message| {
        if total == 0 {
            return;
        }

        let raw_percent = if current >= total {
            100
        } else {
            ((current * 100) + (total / 2)) / total
        };

        // Only ever move forward
        let previous = max_percent.fetch_max(raw_percent, Ordering::Relaxed);
        if raw_percent <= previous && raw_percent != 100 {
            return;
        }

        let bar_width = 30;
        let filled = (raw_percent * bar_width) / 100;
        let bar = "=".repeat(filled);
        let space = " ".repeat(bar_width - filled);

        // Use carriage return to overwrite the line
        eprint!("\r[{}{}] {:3}% {}", bar, space, raw_percent, message);
        let _ = std::io::stderr().flush();

        if current >= total {
            eprintln!();
        }
    })
}

fn cmd_subdivide(
    output: &Path,
    options: &subdivide::SubdivideOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let mesh = unit_cube();
    log::info!("Input: {} vertices, {} faces", mesh.num_vertices(), mesh.num_faces());

    let mode = if options.parallel { "parallel" } else { "sequential" };
    log::info!(
        "Applying Catmull-Clark subdivision ({} iterations, {:?}, {})...",
        options.iterations,
        options.policy,
        mode
    );

    let progress = create_progress();
    let start = Instant::now();
    let mesh = subdivide::catmull_clark_subdivide_with_progress(&mesh, options, &progress)?;
    let elapsed = start.elapsed();

    log::info!("Result: {} vertices, {} faces", mesh.num_vertices(), mesh.num_faces());
    io::save(&mesh, output)?;
    log::info!("Saved: {} ({:.2?})", output.display(), elapsed);

    Ok(())
}

fn cmd_info(iterations: usize) -> Result<(), Box<dyn std::error::Error>> {
    let mesh: QuadMesh =
        subdivide::catmull_clark_subdivide(&unit_cube(), &subdivide::SubdivideOptions::new(iterations))?;
    let stats = mesh_stats(&mesh)?;

    println!("Iterations: {}", iterations);
    println!("Vertices: {}", stats.vertices);
    println!("Edges: {}", stats.edges);
    println!("Faces: {}", stats.faces);
    println!("Euler characteristic: {}", stats.euler_characteristic());

    if let Some((min, max)) = mesh.bounding_box() {
        println!(
            "Bounding box: ({:.6}, {:.6}, {:.6}) to ({:.6}, {:.6}, {:.6})",
            min.x, min.y, min.z, max.x, max.y, max.z
        );
    }

    Ok(())
}
