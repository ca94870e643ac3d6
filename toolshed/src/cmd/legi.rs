use toolshed_util::status::Status;

use super::Command;
use crate::cli;
use crate::config::Toolshed;
use crate::legi::Legi;
use crate::ToolshedError;

const USAGE: &str = "Usage: toolshed legi <NN-NNN-NNN>";

impl Command for cli::Legi {
    fn run(self, _: &Toolshed) -> Result<Status, ToolshedError> {
        let legi = Legi::scan(&self.number).ok_or_else(|| {
            ToolshedError::usage(format!("malformed number: {}", self.number), USAGE)
        })?;

        match legi.is_valid() {
            None => {
                println!("{} check", legi.completed());
                Ok(Status::Success)
            }
            Some(valid) => {
                println!("{} {}", legi.digits(), if valid { "ok" } else { "wrong" });
                Ok(Status::check(valid))
            }
        }
    }
}
