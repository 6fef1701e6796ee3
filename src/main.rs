use anyhow::Context;
use planorama::{demo, init_logging, Config};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = Config::load_or_default(path.as_deref()).context("loading configuration")?;
    tracing::info!("Planorama {} headless session", planorama::VERSION);

    let records = demo::run_session(config)?;
    println!("{}", serde_json::to_string_pretty(&records)?);

    Ok(())
}
