use std::io::{ErrorKind, Write};

use anyhow::anyhow;
use log::{debug, warn};
use toolshed_util::file::{fopen_new, Visibility};
use toolshed_util::status::Status;

use super::Command;
use crate::cli;
use crate::config::Toolshed;
use crate::ToolshedError;

impl Command for cli::Mklock {
    fn run(self, _: &Toolshed) -> Result<Status, ToolshedError> {
        let path = &self.lockfile;
        let mut file = match fopen_new(path, Visibility::Private) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists && self.quiet => {
                return Err(ToolshedError::Silent(Status::FailSoft))
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(ToolshedError::Soft(anyhow!(
                    "cannot acquire lock {}: already locked",
                    path.display()
                )))
            }
            Err(e) => {
                return Err(ToolshedError::Hard(anyhow!(
                    "cannot create {}: {e}",
                    path.display()
                )))
            }
        };
        debug!("acquired lock {}", path.display());

        // The lock is held now, whatever happens to its contents
        if !self.stuff.is_empty() {
            let contents = format!("{}\n", self.stuff.join(" "));
            if let Err(e) = file.write_all(contents.as_bytes()) {
                warn!("cannot write to lock {}: {e}", path.display());
            }
        }

        Ok(Status::Success)
    }
}
