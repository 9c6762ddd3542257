use anyhow::Context;
use clap::Parser;
use log::info;

use gridwire::api::GridApi;
use gridwire::conf::Config;
use gridwire::core::{CliArgs, setup_logging};
use gridwire::service::GridService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_logging();
    let args = CliArgs::parse();
    info!(args; "gridwire starting");

    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    let service = GridService::load(&config.dataset).context("loading dataset")?;
    let addr = config.server.bind_addr();
    info!("listening on {addr}");
    GridApi::new(service).serve(&addr).await?;
    Ok(())
}
