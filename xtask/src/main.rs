mod cmd;
mod repo;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Repository maintenance tasks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the local quality gate (fetch/check/test/fmt/clippy/release build).
    Preflight {
        /// Skip the release build step.
        #[arg(long, default_value_t = false)]
        skip_release: bool,
    },
    /// List strategy configs under configs/ and verify the default one exists.
    Strategies {
        /// Directory holding configs/ (defaults to repository root)
        #[arg(value_name = "DIR")]
        dir: Option<std::path::PathBuf>,
    },
}

fn main() {
    if let Err(err) = real_main() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Preflight { skip_release } => cmd::preflight::run(skip_release)?,
        Command::Strategies { dir } => {
            for line in cmd::strategies::run(dir)? {
                println!("{line}");
            }
        }
    }
    Ok(())
}
