// lohi-cli/src/operand.rs

use anyhow::{anyhow, bail, Context, Result};
use lohi_core::{layout, Int64, Operand};

/// Parse a command-line operand.
///
/// Accepted forms:
/// - `123`, `-5`, `0x1c`, `-0x10` integers of any width
/// - `1.5` floats
/// - `page_size` or any other name from [`layout::ALL`]
/// - `lo:hi` an exact pair, validated like [`Int64::new`]; each half may
///   itself be a number or a constant name
///
/// Integers outside the 32-bit range are passed through unchanged; the core
/// decides what they become.
pub fn parse_operand(s: &str) -> Result<Operand> {
    let s = s.trim();
    if s.is_empty() {
        bail!("empty operand");
    }

    if let Some((lo, hi)) = s.split_once(':') {
        let low = parse_scalar(lo).with_context(|| format!("low half of `{s}`"))?;
        let high = parse_scalar(hi).with_context(|| format!("high half of `{s}`"))?;
        return Ok(Operand::Int64(Int64::new(low, high)?));
    }

    parse_scalar(s)
}

/// A constant name or a plain number.
fn parse_scalar(s: &str) -> Result<Operand> {
    match layout::lookup(s.trim()) {
        Some(v) => Ok(Operand::from(v)),
        None => parse_number(s),
    }
}

/// Parse a plain number: decimal or `0x` integer, or a float.
///
/// At most one leading `-` is accepted and the body must start with a digit,
/// so `--5`, `+5` and `0x-5` are rejected.
pub fn parse_number(s: &str) -> Result<Operand> {
    let s = s.trim();
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    if !starts_with_digit(digits) {
        bail!("`{s}` is not a number, pair, or constant name");
    }

    if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        let hex = hex.replace('_', "");
        if !hex.bytes().next().is_some_and(|c| c.is_ascii_hexdigit()) {
            bail!("`{s}` is not a hex number");
        }
        let m = i128::from_str_radix(&hex, 16)
            .with_context(|| format!("`{s}` is not a hex number"))?;
        return signed(m, negative, s);
    }

    if let Ok(m) = digits.replace('_', "").parse::<i128>() {
        return signed(m, negative, s);
    }

    s.parse::<f64>()
        .map(Operand::Float)
        .map_err(|_| anyhow!("`{s}` is not a number, pair, or constant name"))
}

fn starts_with_digit(s: &str) -> bool {
    s.bytes().next().is_some_and(|c| c.is_ascii_digit())
}

fn signed(magnitude: i128, negative: bool, s: &str) -> Result<Operand> {
    let n = if negative {
        magnitude
            .checked_neg()
            .with_context(|| format!("`{s}` overflows"))?
    } else {
        magnitude
    };
    Ok(Operand::Integer(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        assert_eq!(parse_operand("42").unwrap(), Operand::Integer(42));
        assert_eq!(parse_operand("-5").unwrap(), Operand::Integer(-5));
        assert_eq!(parse_operand("0x1c").unwrap(), Operand::Integer(0x1c));
        assert_eq!(parse_operand("-0x10").unwrap(), Operand::Integer(-16));
        assert_eq!(
            parse_operand("0x1_0000_0000").unwrap(),
            Operand::Integer(0x1_0000_0000)
        );
    }

    #[test]
    fn test_floats() {
        assert_eq!(parse_operand("1.5").unwrap(), Operand::Float(1.5));
        assert_eq!(parse_operand("-2.0").unwrap(), Operand::Float(-2.0));
    }

    #[test]
    fn test_constants() {
        assert_eq!(
            parse_operand("page_size").unwrap(),
            Operand::Integer(layout::PAGE_SIZE as i128)
        );
        assert_eq!(parse_operand("KB").unwrap(), Operand::Integer(1024));
    }

    #[test]
    fn test_pairs() {
        assert_eq!(
            parse_operand("0x1234:0xabcd").unwrap(),
            Operand::Int64(Int64::from_halves(0x1234, 0xABCD))
        );
        assert_eq!(
            parse_operand("-1:0").unwrap(),
            Operand::Int64(Int64::from_halves(u32::MAX, 0))
        );
        assert_eq!(
            parse_operand("0:page_size").unwrap(),
            Operand::Int64(Int64::from_halves(0, layout::PAGE_SIZE))
        );
        assert_eq!(
            parse_operand("js_butterfly:-1").unwrap(),
            Operand::Int64(Int64::from_halves(layout::JS_BUTTERFLY, u32::MAX))
        );
        let err = parse_operand("0x100000000:0").unwrap_err();
        assert!(err.to_string().contains("low not a 32-bit integer"));
    }

    #[test]
    fn test_garbage() {
        assert!(parse_operand("").is_err());
        assert!(parse_operand("hello").is_err());
        assert!(parse_operand("1:zz").is_err());
        assert!(parse_operand("-").is_err());
        assert!(parse_operand("0x").is_err());
    }

    #[test]
    fn test_doubled_signs_rejected() {
        assert!(parse_operand("--5").is_err());
        assert!(parse_operand("+5").is_err());
        assert!(parse_operand("-0x-5").is_err());
        assert!(parse_operand("0x+5").is_err());
        assert!(parse_operand("--1.5").is_err());
        // Used to overflow on negation
        assert!(parse_operand("--170141183460469231731687303715884105728").is_err());
        assert!(parse_operand("-0x-80000000000000000000000000000000").is_err());
    }

    #[test]
    fn test_wide_literals() {
        assert_eq!(
            parse_operand("-170141183460469231731687303715884105727").unwrap(),
            Operand::Integer(-i128::MAX)
        );
        // Past i128 the decimal reading degrades to a float
        assert!(matches!(
            parse_operand("-170141183460469231731687303715884105728").unwrap(),
            Operand::Float(x) if x < 0.0
        ));
        assert!(parse_operand("0x1_0000_0000_0000_0000_0000_0000_0000_0000").is_err());
    }
}
