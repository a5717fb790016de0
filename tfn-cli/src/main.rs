//! TFN CLI - Trout fishing navigator over the NY DEC datasets.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "tfn-cli",
    version,
    about = "Find the nearest trout-stocked waterbody for a NY zipcode"
)]
struct Cli {
    #[command(subcommand)]
    command: tfn_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    tfn_cmd::run(cli.command)
}
