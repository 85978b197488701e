use std::time::Duration;

use anyhow::{Result, anyhow};
use clap::Parser;
use pacer_fact::{ClientSetting, FACT_URL, fetch_with};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Debug, Parser)]
#[command(name = "random-fact", version = env!("CARGO_PKG_VERSION"), about = "Print one random fact", long_about = None)]
struct Args {
    /// Endpoint returning a JSON object with a `text` field
    #[arg(long, default_value = FACT_URL)]
    url: String,

    /// Give up on the request after this many seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,
}

fn init_logging() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!(e))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging()?;

    let setting = ClientSetting {
        timeout: args.timeout.map(Duration::from_secs),
        ..ClientSetting::default()
    };

    println!("🎲 Random Fact Generator");
    println!("{}", "-".repeat(50));
    let fact = fetch_with(setting, &args.url);
    println!("\n{fact}\n");
    Ok(())
}
