//! EVC CLI - Command line tool for preparing and inspecting charging station data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "evc-cli",
    version,
    about = "EV charging stations in Germany data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: evc_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("evc-cli starting");
    evc_cmd::run(cli.command).await
}
