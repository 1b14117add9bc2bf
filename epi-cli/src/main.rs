//! Epidemic dashboard CLI - headless fetch-and-render against the dashboard API.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "epi-cli",
    version,
    about = "Hong Kong epidemic dashboard toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: epi_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    epi_cmd::run(cli.command).await
}
