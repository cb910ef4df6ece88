use clap::Parser;
use station_stats::cli::{run, Cli};
use station_stats::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli).await
}
