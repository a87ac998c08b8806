// lohi-cli/src/cmd.rs

use anyhow::Result;
use clap::{Args, Subcommand};
use lohi_core::{layout, Int64};
use tracing::debug;

use crate::operand::parse_operand;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a value from explicit halves (rejects out-of-range halves)
    New(PairArgs),

    /// Build a value from one loose operand (never fails)
    Loose(UnaryArgs),

    /// Two's-complement negation
    Neg(UnaryArgs),

    /// Wrapping addition
    Add(BinaryArgs),

    /// Wrapping subtraction
    Sub(BinaryArgs),

    /// Compare both halves
    Eq(BinaryArgs),

    /// Show unsigned and signed views of each half
    View(UnaryArgs),

    /// List the layout constants
    Consts,
}

#[derive(Args, Debug)]
pub struct PairArgs {
    #[arg(allow_hyphen_values = true)]
    pub low: String,
    #[arg(allow_hyphen_values = true)]
    pub high: String,
}

#[derive(Args, Debug)]
pub struct UnaryArgs {
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

#[derive(Args, Debug)]
pub struct BinaryArgs {
    #[arg(allow_hyphen_values = true)]
    pub a: String,
    #[arg(allow_hyphen_values = true)]
    pub b: String,
}

fn value_of(s: &str) -> Result<Int64> {
    Ok(Int64::from_loose(parse_operand(s)?))
}

/// Execute one command and return its output.
pub fn run(cmd: &Command, pretty: bool) -> Result<String> {
    debug!(?cmd, pretty, "running command");
    let out = match cmd {
        Command::New(args) => {
            let v = Int64::new(parse_operand(&args.low)?, parse_operand(&args.high)?)?;
            v.to_hex_string(pretty)
        }
        Command::Loose(args) => value_of(&args.value)?.to_hex_string(pretty),
        Command::Neg(args) => value_of(&args.value)?.wrapping_neg().to_hex_string(pretty),
        Command::Add(args) => value_of(&args.a)?
            .wrapping_add(parse_operand(&args.b)?)
            .to_hex_string(pretty),
        Command::Sub(args) => value_of(&args.a)?
            .wrapping_sub(parse_operand(&args.b)?)
            .to_hex_string(pretty),
        Command::Eq(args) => value_of(&args.a)?
            .equals(parse_operand(&args.b)?)
            .to_string(),
        Command::View(args) => {
            let v = value_of(&args.value)?;
            format!(
                "value       {}\nlow         {:#010x}\nhigh        {:#010x}\nsigned_low  {}\nsigned_high {}",
                v.to_hex_string(pretty),
                v.low(),
                v.high(),
                v.signed_low(),
                v.signed_high()
            )
        }
        Command::Consts => layout::ALL
            .iter()
            .map(|(name, v)| format!("{name:<20}{v:#x}"))
            .collect::<Vec<_>>()
            .join("\n"),
    };
    Ok(out)
}
