use log::debug;
use toolshed_binary64::{decode, encode};
use toolshed_util::fmt::PrintfG;
use toolshed_util::scan::parse_long;
use toolshed_util::status::Status;

use super::Command;
use crate::cli;
use crate::config::Toolshed;
use crate::{FailureExt, ToolshedError};

const USAGE: &str = "\
Usage: toolshed ieee754 [-e] <REAL>
   or: toolshed ieee754 [-e] <MANTISSA> <EXPONENT>
The equation is: real = mantissa * 2 ^ exponent";

/// Significant digits when printing a double
const PRECISION: usize = 15;

impl Command for cli::Ieee754 {
    fn run(self, _: &Toolshed) -> Result<Status, ToolshedError> {
        match self.numbers.as_slice() {
            [real] => {
                let value: f64 = real
                    .parse()
                    .map_err(|_| ToolshedError::usage(format!("not a number: {real}"), USAGE))?;
                let split = decode(value);
                debug!("{value:e} has the bit pattern {:#018x}", value.to_bits());

                match self.equation {
                    true => println!(
                        "{} = {} * 2 ^ {}",
                        PrintfG(value, PRECISION),
                        split.mantissa,
                        split.exponent
                    ),
                    false => println!("{split}"),
                }
            }
            [mantissa, exponent] => {
                let m = parse_integer(mantissa)?;
                // Exponents beyond the i32 range saturate like any other huge one
                let e = parse_integer(exponent)?;
                let e = i32::try_from(e).unwrap_or(if e < 0 { i32::MIN } else { i32::MAX });

                let value = encode(m, e).or_soft()?;
                debug!("{m} * 2 ^ {e} has the bit pattern {:#018x}", value.to_bits());

                match self.equation {
                    true => println!("{} = {m} * 2 ^ {e}", PrintfG(value, PRECISION)),
                    false => println!("{}", PrintfG(value, PRECISION)),
                }
            }
            _ => return Err(ToolshedError::usage("expected one or two numbers", USAGE)),
        }

        Ok(Status::Success)
    }
}

fn parse_integer(s: &str) -> Result<i64, ToolshedError> {
    parse_long(s).ok_or_else(|| ToolshedError::usage(format!("not an integer: {s}"), USAGE))
}
