use anyhow::anyhow;
use toolshed_util::scan::parse_long;
use toolshed_util::status::Status;

use super::Command;
use crate::cli;
use crate::config::Toolshed;
use crate::uxtime::{describe, now};
use crate::ToolshedError;

const USAGE: &str = "Usage: toolshed uxtime [UNIXTIME]";

impl Command for cli::Uxtime {
    fn run(self, _: &Toolshed) -> Result<Status, ToolshedError> {
        let time = match &self.time {
            Some(s) => parse_long(s)
                .ok_or_else(|| ToolshedError::usage(format!("not a Unix time: {s}"), USAGE))?,
            None => now(),
        };

        let msg = describe(time)
            .ok_or_else(|| ToolshedError::Soft(anyhow!("cannot convert Unix time {time}")))?;
        println!("{msg}");
        Ok(Status::Success)
    }
}
