//! Command implementations for the epidemic dashboard CLI.
//!
//! Runs the same fetch-and-render cycle as the browser dashboard, with chart
//! options written to JSON files instead of drawn.

use clap::Subcommand;
use std::path::PathBuf;

pub mod json_backend;
pub mod regions;
pub mod snapshot;

#[derive(Subcommand)]
pub enum Command {
    /// Run one fetch-and-render cycle and write every chart option to disk
    Fetch {
        /// Scheme and host of the dashboard API (e.g. http://localhost:5000)
        #[arg(short = 'b', long)]
        base_url: String,

        /// Directory receiving `<chart id>.json` files
        #[arg(short = 'o', long, default_value = "charts")]
        out_dir: PathBuf,
    },

    /// Repeat the cycle on an interval, starting each one on schedule
    Watch {
        /// Scheme and host of the dashboard API
        #[arg(short = 'b', long)]
        base_url: String,

        /// Directory receiving `<chart id>.json` files
        #[arg(short = 'o', long, default_value = "charts")]
        out_dir: PathBuf,

        /// Seconds between cycle starts
        #[arg(short = 'i', long, default_value_t = 30)]
        interval_secs: u64,
    },

    /// Print each region with its English name, case count and risk tier
    Regions {
        /// Scheme and host of the dashboard API
        #[arg(short = 'b', long)]
        base_url: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Fetch { base_url, out_dir } => snapshot::run_fetch(&base_url, &out_dir).await,
        Command::Watch {
            base_url,
            out_dir,
            interval_secs,
        } => snapshot::run_watch(&base_url, &out_dir, interval_secs).await,
        Command::Regions { base_url } => regions::run_regions(&base_url).await,
    }
}
