use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use tropomi_mapper::cli::{run, Cli};
use tropomi_mapper::error::{PlotError, Result};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| PlotError::Config(e.to_string()))?;

    run(cli)
}
