use clap::Parser;
use focus_forest::{app, cli::Cli};
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let clean = app::run(cli).await?;

    Ok(if clean { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
