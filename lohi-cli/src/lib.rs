//! # lohi CLI
//!
//! Command-line calculator over [`lohi_core::Int64`].

pub mod cmd;
pub mod operand;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "lohi")]
#[command(about = "64-bit integer calculator over 32-bit halves", long_about = None)]
pub struct Cli {
    /// Group hex output as 0xHHHH_HHHH_LLLL_LLLL
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Log operand coercions and command dispatch to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: cmd::Command,
}

/// Install the stderr subscriber. `RUST_LOG` wins over `--verbose`.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let cli = Cli::try_parse_from(["lohi", "--pretty", "add", "-1", "0x10"]).unwrap();
        assert!(cli.pretty);
        assert_eq!(cmd::run(&cli.cmd, cli.pretty).unwrap(), "0x0000_0000_0000_000f");

        let cli = Cli::try_parse_from(["lohi", "-v", "new", "-1", "-0x80000000"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cmd::run(&cli.cmd, false).unwrap(), "0x80000000ffffffff");
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
