use log::debug;
use toolshed_util::status::Status;

use super::Command;
use crate::cli;
use crate::config::Toolshed;
use crate::ipinfo::IpInfo;
use crate::ToolshedError;

const USAGE: &str = "Usage: toolshed ipinfo <ADDRESS[/PREFIX]> [MASK]";

impl Command for cli::Ipinfo {
    fn run(self, _: &Toolshed) -> Result<Status, ToolshedError> {
        let info = IpInfo::parse(&self.address, self.mask.as_deref())
            .map_err(|e| ToolshedError::usage(e.to_string(), USAGE))?;
        debug!("{info:?}");
        print!("{info}");
        Ok(Status::Success)
    }
}
