use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use parktrip_cli::{run_stdio, Cli};

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    run_stdio(&cli)
}

fn init_tracing() {
    // stdout carries the command transcript, so logs go to stderr
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
