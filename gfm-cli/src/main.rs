//! GFM CLI - inspect the Global Fruits Market datasets and chart output.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "gfm-cli",
    version,
    about = "Global Fruits Market dashboard toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: gfm_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("Starting gfm-cli");
    gfm_cmd::run(cli.command).await
}
