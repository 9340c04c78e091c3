//! Headless photocloud runner.
//!
//! Replays a navigation script against an in-memory viewport and prints
//! where the camera and scene group ended up.

#![allow(clippy::print_stdout)]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use photocloud::options::Options;
use photocloud::session::{SessionReport, SessionScript};

/// Photocloud navigation core, driven from the command line
#[derive(Parser)]
#[command(name = "photocloud")]
#[command(about = "Replay camera and layout navigation scripts headlessly")]
struct Cli {
    /// Options TOML file (defaults are used when absent)
    #[arg(short, long, global = true)]
    options: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a session script (.json or .toml)
    Run {
        /// Script to replay
        script: PathBuf,

        /// Override the script's frame rate
        #[arg(long)]
        fps: Option<f32>,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the JSON schema of the options file
    Schema,

    /// Write the default options to a TOML file
    InitOptions {
        /// Destination path
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { script, fps, json } => {
            let options = load_options(cli.options)?;
            run(&script, &options, fps, json)
        }
        Commands::Schema => {
            let schema = serde_json::to_string_pretty(&Options::json_schema())?;
            println!("{schema}");
            Ok(())
        }
        Commands::InitOptions { path } => {
            Options::default()
                .save(&path)
                .with_context(|| format!("writing {}", path.display()))?;
            log::info!("Wrote default options to {}", path.display());
            Ok(())
        }
    }
}

fn load_options(path: Option<PathBuf>) -> Result<Options> {
    let Some(path) = path else {
        return Ok(Options::default());
    };
    Options::load(&path)
        .with_context(|| format!("loading options from {}", path.display()))
}

fn run(
    script_path: &Path,
    options: &Options,
    fps: Option<f32>,
    json: bool,
) -> Result<()> {
    let mut script = SessionScript::load(script_path)
        .with_context(|| format!("loading script {}", script_path.display()))?;
    if let Some(fps) = fps {
        anyhow::ensure!(fps.is_finite() && fps > 0.0, "--fps must be positive");
        script.frame_rate = fps;
    }

    log::info!(
        "Replaying {} steps over {} nodes at {} fps",
        script.steps.len(),
        script.nodes.len(),
        script.frame_rate
    );
    let report = script.run(options);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report);
    }
    Ok(())
}

fn print_summary(report: &SessionReport) {
    println!(
        "{} frames ({:.2}s simulated)",
        report.frames, report.elapsed_secs
    );
    match report.camera {
        Some(camera) => println!(
            "camera   position {}  target {}",
            camera.position, camera.target
        ),
        None => println!("camera   detached"),
    }
    match report.group {
        Some(group) => println!(
            "group    position {}  rotation {}",
            group.position, group.rotation
        ),
        None => println!("group    detached"),
    }
    println!("layout   {}", report.layout);
    println!("rotation {:?}", report.phase);
    println!("history  {} saved pose(s)", report.history_depth);
    println!("notices  {}", report.notices.len());
    for record in &report.notices {
        println!("  [{:>5}] {:?}", record.frame, record.notice);
    }
}
