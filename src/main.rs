//! `keyoverlay` command line tool.
//!
//! ```bash
//! keyoverlay inspect layout.toml
//! keyoverlay borders layout.toml 3 4
//! keyoverlay merge layout.toml 3 4 5 -o merged.toml
//! keyoverlay move layout.toml 3 -- -10 0
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use keyoverlay::{KeyId, Layout};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "keyoverlay")]
#[command(about = "Inspect and edit input overlay layouts")]
#[command(version)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List keys with their bounding box and label anchor
    Inspect { layout: PathBuf },

    /// Report whether two keys share an edge or overlap
    Borders { layout: PathBuf, a: KeyId, b: KeyId },

    /// Merge keys into a primary key
    Merge {
        layout: PathBuf,
        primary: KeyId,
        #[arg(required = true)]
        others: Vec<KeyId>,
        /// Where to write the result (defaults to the input file)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Move a key
    Move {
        layout: PathBuf,
        id: KeyId,
        #[arg(allow_hyphen_values = true)]
        dx: i32,
        #[arg(allow_hyphen_values = true)]
        dy: i32,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn load(path: &Path) -> Result<Layout> {
    Layout::load(path).with_context(|| format!("loading layout {}", path.display()))
}

fn save(layout: &Layout, input: &Path, output: Option<PathBuf>) -> Result<()> {
    let path = output.unwrap_or_else(|| input.to_path_buf());
    layout
        .save(&path)
        .with_context(|| format!("writing layout {}", path.display()))?;
    tracing::info!("wrote {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match args.command {
        Command::Inspect { layout: path } => {
            let layout = load(&path)?;
            println!("{} ({}x{})", layout.name, layout.width, layout.height);
            for key in layout.keys() {
                let r = key.bounding_box();
                println!(
                    "{:>4}  {:<12} {:?}  box ({}, {})-({}, {})  anchor {}",
                    key.id,
                    key.text,
                    key.input_code(),
                    r.left,
                    r.top,
                    r.right,
                    r.bottom,
                    key.text_position(),
                );
            }
        }
        Command::Borders { layout: path, a, b } => {
            let layout = load(&path)?;
            let borders = layout.borders(a, b)?;
            println!("{a} and {b} {}", if borders { "border" } else { "do not border" });
        }
        Command::Merge {
            layout: path,
            primary,
            others,
            output,
        } => {
            let mut layout = load(&path)?;
            let merged = layout.merge(primary, &others)?;
            println!("{} now has {} vertices", merged.id, merged.boundary.len());
            save(&layout, &path, output)?;
        }
        Command::Move {
            layout: path,
            id,
            dx,
            dy,
            output,
        } => {
            let mut layout = load(&path)?;
            layout.move_key(id, dx, dy)?;
            save(&layout, &path, output)?;
        }
    }
    Ok(())
}
