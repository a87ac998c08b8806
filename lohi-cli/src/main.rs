// lohi-cli/src/main.rs

use clap::Parser;
use lohi_cli::{cmd, init_tracing, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    println!("{}", cmd::run(&cli.cmd, cli.pretty)?);
    Ok(())
}
