use clap::Parser;
use zonekit::cli::{run, Cli};
use zonekit::init_logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.log_format())?;

    run(cli)
}
