/*
[INPUT]:  CLI arguments, YAML configuration file, environment
[OUTPUT]: Executed webhook (or printed payload on dry run)
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

use courier_cli::{Cli, Command, CourierConfig, send};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let config = match &cli.config_path {
        Some(path) => load_config(path)?,
        None => CourierConfig::default(),
    };
    info!(
        config_path = cli.config_path.as_ref().map(|path| path.display().to_string()),
        dry_run = cli.dry_run,
        "starting courier"
    );

    match &cli.command {
        Command::Send(args) => {
            if let Some(output) = send(args, &config, cli.dry_run).await? {
                println!("{output}");
            }
        }
    }

    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(path: &Path) -> Result<CourierConfig> {
    CourierConfig::from_file(path).context("load config")
}
