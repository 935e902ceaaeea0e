use anyhow::Result;
use clap::Parser;
use tracing_subscriber::FmtSubscriber;

mod args;
mod cmd;
mod observe;
mod output;
mod store;

fn main() -> Result<()> {
    let cli = args::Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    output::init(cli.json);

    cmd::dispatch(cli)
}
