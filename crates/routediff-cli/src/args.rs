use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "routediff",
    version,
    about = "Scope visual-regression runs to the pages a build actually changed"
)]
pub struct Cli {
    /// Emit JSON output on stdout.
    #[arg(long, global = true)]
    pub json: bool,

    /// Log at debug level instead of info.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Extract a build snapshot from a nuxt2 build directory.
    Extract {
        /// Build output directory (must contain client.manifest.json and
        /// server/pages).
        build_dir: PathBuf,

        /// Write the snapshot JSON here instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Compare a build directory against a baseline snapshot.
    Compare {
        /// Build output directory of the current build.
        build_dir: PathBuf,

        /// Baseline snapshot JSON from a previous extract. Missing file or
        /// omitted flag means "no prior build": everything is new and all
        /// routes get tested.
        #[arg(long)]
        baseline: Option<PathBuf>,

        /// Write the change report JSON here.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}
