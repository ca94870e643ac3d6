//! `toolshed errno` and `toolshed signo`

use toolshed_util::scan::parse_long;
use toolshed_util::status::Status;

use super::Command;
use crate::cli;
use crate::config::Toolshed;
use crate::describe::{describe_errno, describe_signal};
use crate::ToolshedError;

fn parse_number(s: &str, usage: &'static str) -> Result<i32, ToolshedError> {
    parse_long(s)
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| ToolshedError::usage(format!("not a number: {s}"), usage))
}

impl Command for cli::Errno {
    fn run(self, _: &Toolshed) -> Result<Status, ToolshedError> {
        let code = parse_number(&self.code, "Usage: toolshed errno <CODE>")?;
        println!("{}", describe_errno(code));
        Ok(Status::Success)
    }
}

impl Command for cli::Signo {
    fn run(self, _: &Toolshed) -> Result<Status, ToolshedError> {
        let signo = parse_number(&self.number, "Usage: toolshed signo <NUMBER>")?;
        println!("{}", describe_signal(signo));
        Ok(Status::Success)
    }
}
