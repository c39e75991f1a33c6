mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(version, about = "Developer-machine setup — bulk-install packages and editor extensions")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Verify required tools, then install both lists
    Run {
        /// Package list, one brew formula per line
        #[arg(long, default_value = "apps.txt")]
        apps_file: PathBuf,
        /// Extension list, one VS Code extension ID per line
        #[arg(long, default_value = "vs-code-extensions.txt")]
        extensions_file: PathBuf,
        /// Exit nonzero if any item fails to install
        #[arg(long)]
        strict: bool,
    },
    /// Install brew packages only
    Apps {
        /// Package list, one brew formula per line
        #[arg(long, default_value = "apps.txt")]
        file: PathBuf,
    },
    /// Install VS Code extensions only
    Extensions {
        /// Extension list, one VS Code extension ID per line
        #[arg(long, default_value = "vs-code-extensions.txt")]
        file: PathBuf,
    },
    /// Check that required external tools are on PATH
    Doctor,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Run { apps_file, extensions_file, strict } => {
            commands::run::run(&apps_file, &extensions_file, strict)
        }
        Command::Apps { file } => commands::apps::run(&file),
        Command::Extensions { file } => commands::extensions::run(&file),
        Command::Doctor => commands::doctor::run(),
    }
}
