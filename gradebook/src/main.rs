use anyhow::Result;
use clap::Parser;
use tracing::info;

use common::config;
use common::logger::init_logging;
use gradebook::{Cli, run};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(
        &config::log_file(),
        &config::log_level(),
        config::log_to_stdout(),
    );

    info!(
        project = %config::project_name(),
        dataset = %cli.dataset.display(),
        "running {:?}",
        cli.command
    );

    let output = run(&cli, config::scoring_config())?;
    println!("{output}");
    Ok(())
}
