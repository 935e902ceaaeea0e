use anyhow::Result;

use crate::args::{Cli, Command};

mod compare;
mod extract;

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Extract { build_dir, out } => extract::run(&build_dir, out.as_deref()),
        Command::Compare {
            build_dir,
            baseline,
            out,
        } => compare::run(&build_dir, baseline.as_deref(), out.as_deref()),
    }
}
