use anyhow::Context;
use clap::{Parser, Subcommand};
use sketchpad::{Config, PadConfig, SketchPad, script, util};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "sketchpad")]
#[command(version, about = "Freehand sketch pad with unified mouse and touch input")]
struct Cli {
    /// Config file to use instead of ~/.config/sketchpad/config.toml
    #[arg(long, short = 'c', value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay an input script against a fresh pad and report what was drawn
    Replay {
        /// Script file with one input event per line
        script: PathBuf,

        /// Print an ASCII rendering of the surface afterwards
        #[arg(long, short = 'p')]
        preview: bool,

        /// Pixels per preview character (square blocks)
        #[arg(long, default_value_t = 10, value_name = "PIXELS")]
        cell: i32,
    },

    /// Write the documented example config to ~/.config/sketchpad/config.toml
    InitConfig,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Replay {
            script,
            preview,
            cell,
        }) => {
            let config = load_config(cli.config.as_deref())?;
            run_replay(&config, &script, preview, cell)?;
        }
        Some(Command::InitConfig) => {
            let path = Config::create_default_file()?;
            println!("Wrote example config to {}", path.display());
        }
        None => {
            println!("sketchpad: Freehand sketch pad with unified mouse and touch input");
            println!();
            println!("Usage:");
            println!("  sketchpad replay <SCRIPT> [--preview]   Replay input events and summarize");
            println!("  sketchpad init-config                   Write the example config file");
            println!("  sketchpad --help                        Show help");
            println!();
            println!("Script events (one per line, '#' starts a comment):");
            println!("  mouse-down X Y [button]   mouse-move X Y   mouse-up X Y [button]");
            println!("  mouse-leave               offset LEFT TOP  clear");
            println!("  touch-start X Y [X Y...]  touch-move X Y [X Y...]");
            println!("  touch-end                 touch-cancel");
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn run_replay(config: &Config, script_path: &Path, preview: bool, cell: i32) -> anyhow::Result<()> {
    let source = fs::read_to_string(script_path)
        .with_context(|| format!("Failed to read script {}", script_path.display()))?;
    let events = script::parse(&source)
        .with_context(|| format!("Invalid script {}", script_path.display()))?;
    log::info!(
        "Replaying {} event(s) from {}",
        events.len(),
        script_path.display()
    );

    let mut pad = SketchPad::new(PadConfig::from(config));
    pad.mount().context("Failed to create drawing surface")?;

    let summary = script::replay(&mut pad, &events);
    let snapshot = pad.snapshot().context("Failed to read drawing surface")?;

    println!(
        "Replayed {} event(s): {} stroke(s), {} segment(s), {} ignored, {} clear(s)",
        summary.events, summary.strokes, summary.segments, summary.ignored, summary.clears
    );
    println!(
        "Surface {}x{} ({:?} background, {:.1}px {} pen): {} inked pixel(s)",
        snapshot.width(),
        snapshot.height(),
        pad.config().background,
        pad.config().style.width,
        util::color_to_name(&pad.config().style.color),
        snapshot.inked_pixels()
    );
    if pad.is_drawing() {
        println!("Stroke still in progress at end of script");
    }
    if preview {
        print!("{}", snapshot.to_ascii(cell));
    }

    Ok(())
}
